//! Asset allocation records: which transaction outputs carry how much
//! of which asset.

use crate::constants::MAX_SIG_SIZE;
use bytes::{BufMut, Bytes};
use syscoin_codecs::{
    compact_size_len, compress_amount, decompress_amount, read_compact_size, read_u32_le,
    read_var_bytes, read_varuint, varuint_len, write_compact_size, write_var_bytes, write_varuint,
    Decodable, DecodeError, Encodable,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One output slot of an asset: the transaction output index and the
/// amount it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssetOutValue {
    /// Transaction output index.
    pub n: u32,
    /// Amount in base units.
    pub value_sat: i64,
}

impl Encodable for AssetOutValue {
    fn encode(&self, out: &mut dyn BufMut) {
        write_compact_size(out, self.n as u64);
        write_varuint(out, compress_amount(self.value_sat as u64));
    }

    fn length(&self) -> usize {
        compact_size_len(self.n as u64) + varuint_len(compress_amount(self.value_sat as u64))
    }
}

impl Decodable for AssetOutValue {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let n = read_compact_size(buf, "n")?;
        let n = u32::try_from(n).map_err(|_| DecodeError::Overflow { field: "n" })?;
        let value_sat = decompress_amount(read_varuint(buf, "value_sat")?) as i64;
        Ok(Self { n, value_sat })
    }
}

/// Per-asset group of output values, with an optional notary signature
/// over the group.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssetOut {
    /// Identifier of the asset definition these outputs move.
    pub asset_guid: u32,
    /// Output slots in wire order.
    pub values: Vec<AssetOutValue>,
    /// Notary signature bytes, empty when the asset has no notary.
    pub notary_sig: Bytes,
}

impl Encodable for AssetOut {
    fn encode(&self, out: &mut dyn BufMut) {
        out.put_u32_le(self.asset_guid);
        write_compact_size(out, self.values.len() as u64);
        for value in &self.values {
            value.encode(out);
        }
        write_var_bytes(out, &self.notary_sig);
    }

    fn length(&self) -> usize {
        4 + compact_size_len(self.values.len() as u64)
            + self.values.iter().map(Encodable::length).sum::<usize>()
            + compact_size_len(self.notary_sig.len() as u64)
            + self.notary_sig.len()
    }
}

impl Decodable for AssetOut {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let asset_guid = read_u32_le(buf, "asset_guid")?;
        let count = read_compact_size(buf, "values")?;
        // Grown per element rather than preallocated: a forged count can
        // claim more elements than the input could possibly hold.
        let mut values = Vec::new();
        for _ in 0..count {
            values.push(AssetOutValue::decode(buf)?);
        }
        let notary_sig = read_var_bytes(buf, MAX_SIG_SIZE, "notary_sig")?;
        Ok(Self { asset_guid, values, notary_sig })
    }
}

/// The allocation carried by an asset transaction: a flat ordered list
/// of per-asset output groups.
///
/// Order is significant. Re-encoding preserves the sequence exactly as
/// decoded, so canonical bytes survive a decode/encode cycle untouched.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssetAllocation {
    /// Per-asset output groups in wire order.
    pub vout_assets: Vec<AssetOut>,
}

impl Encodable for AssetAllocation {
    fn encode(&self, out: &mut dyn BufMut) {
        write_compact_size(out, self.vout_assets.len() as u64);
        for vout in &self.vout_assets {
            vout.encode(out);
        }
    }

    fn length(&self) -> usize {
        compact_size_len(self.vout_assets.len() as u64)
            + self.vout_assets.iter().map(Encodable::length).sum::<usize>()
    }
}

impl Decodable for AssetAllocation {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let count = read_compact_size(buf, "vout_assets")?;
        let mut vout_assets = Vec::new();
        for _ in 0..count {
            vout_assets.push(AssetOut::decode(buf)?);
        }
        Ok(Self { vout_assets })
    }
}
