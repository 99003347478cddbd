#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
//! Wire types for Syscoin asset transaction payloads.
//!
//! Four top-level records travel inside transactions: [`Asset`] defines
//! or updates an asset, [`AssetAllocation`] moves asset outputs,
//! [`MintSyscoin`] proves a bridged mint from a foreign chain, and
//! [`BurnToEthereum`] burns value destined for one. Each record has a
//! symmetric [`Encodable`]/[`Decodable`] pair over the primitives in
//! [`syscoin_codecs`]; the byte layout is consensus critical, so every
//! field's position and integer form is fixed.
//!
//! The codec carries no validation beyond structure: caps on byte
//! string lengths, integer widths and base64 framing. Whether a supply
//! change is legal or a notary signature verifies is the caller's
//! business.

pub mod constants;
mod types;

pub use syscoin_codecs::{Decodable, DecodeError, Encodable};
pub use types::*;
