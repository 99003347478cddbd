//! Record types carried in asset transaction payloads.

mod allocation;
mod asset;
mod burn;
mod mint;

pub use allocation::{AssetAllocation, AssetOut, AssetOutValue};
pub use asset::{Asset, AuxFee, AuxFeeDetails, NotaryDetails};
pub use burn::BurnToEthereum;
pub use mint::MintSyscoin;
