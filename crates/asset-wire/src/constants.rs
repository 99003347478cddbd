//! Length caps and update-mask bits for asset payloads.

/// Cap on key id and contract address byte strings.
pub const MAX_GUID_LENGTH: usize = 20;
/// Cap on public data and notary endpoint byte strings.
pub const MAX_VALUE_LENGTH: usize = 512;
/// Cap on the base64-wrapped symbol; up to 9 bytes decoded.
pub const MAX_SYMBOL_SIZE: usize = 12;
/// Cap on a notary signature.
pub const MAX_SIG_SIZE: usize = 65;
/// Cap on each bridge proof blob.
pub const MAX_RLP_SIZE: usize = 4096;

/// Public data fields may change.
pub const ASSET_UPDATE_DATA: u8 = 1;
/// The bound smart contract may change.
pub const ASSET_UPDATE_CONTRACT: u8 = 2;
/// Balance and supply figures may change.
pub const ASSET_UPDATE_SUPPLY: u8 = 4;
/// The notary key may change.
pub const ASSET_UPDATE_NOTARY_KEY: u8 = 8;
/// The notary service details may change.
pub const ASSET_UPDATE_NOTARY_DETAILS: u8 = 16;
/// The aux fee key may change.
pub const ASSET_UPDATE_AUXFEE_KEY: u8 = 32;
/// The aux fee schedule may change.
pub const ASSET_UPDATE_AUXFEE_DETAILS: u8 = 64;
/// The capability mask itself may change.
pub const ASSET_UPDATE_CAPABILITYFLAGS: u8 = 128;
/// Every update bit set.
pub const ASSET_UPDATE_ALL: u8 = 255;
