//! The asset definition record and its flag-gated field groups.

use crate::{
    constants::{
        ASSET_UPDATE_AUXFEE_DETAILS, ASSET_UPDATE_AUXFEE_KEY, ASSET_UPDATE_CAPABILITYFLAGS,
        ASSET_UPDATE_CONTRACT, ASSET_UPDATE_DATA, ASSET_UPDATE_NOTARY_DETAILS,
        ASSET_UPDATE_NOTARY_KEY, ASSET_UPDATE_SUPPLY, MAX_GUID_LENGTH, MAX_SYMBOL_SIZE,
        MAX_VALUE_LENGTH,
    },
    AssetAllocation,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::{BufMut, Bytes};
use syscoin_codecs::{
    compress_amount, decompress_amount, read_compact_size, read_u16_le, read_u8, read_var_bytes,
    read_varuint, write_compact_size, write_var_bytes, write_varuint, Decodable, DecodeError,
    Encodable,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Connection details for a notary service.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NotaryDetails {
    /// Endpoint the notary listens on.
    pub endpoint: Bytes,
    /// Nonzero when the notary accepts instant transfers.
    pub instant_transfers: u8,
    /// Nonzero when the notary requires HD address proofs.
    pub hd_required: u8,
}

impl Encodable for NotaryDetails {
    fn encode(&self, out: &mut dyn BufMut) {
        write_var_bytes(out, &self.endpoint);
        out.put_u8(self.instant_transfers);
        out.put_u8(self.hd_required);
    }
}

impl Decodable for NotaryDetails {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let endpoint = read_var_bytes(buf, MAX_VALUE_LENGTH, "endpoint")?;
        let instant_transfers = read_u8(buf, "instant_transfers")?;
        let hd_required = read_u8(buf, "hd_required")?;
        Ok(Self { endpoint, instant_transfers, hd_required })
    }
}

/// One tier of a piecewise auxiliary fee schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuxFee {
    /// Amount bound at which this tier starts, in base units.
    pub bound: i64,
    /// Fee in basis points applied within the tier.
    pub percent: u16,
}

impl Encodable for AuxFee {
    fn encode(&self, out: &mut dyn BufMut) {
        write_varuint(out, compress_amount(self.bound as u64));
        out.put_u16_le(self.percent);
    }
}

impl Decodable for AuxFee {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let bound = decompress_amount(read_varuint(buf, "bound")?) as i64;
        let percent = read_u16_le(buf, "percent")?;
        Ok(Self { bound, percent })
    }
}

/// A full auxiliary fee schedule.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuxFeeDetails {
    /// Fee tiers in wire order.
    pub aux_fees: Vec<AuxFee>,
}

impl Encodable for AuxFeeDetails {
    fn encode(&self, out: &mut dyn BufMut) {
        write_compact_size(out, self.aux_fees.len() as u64);
        for fee in &self.aux_fees {
            fee.encode(out);
        }
    }
}

impl Decodable for AuxFeeDetails {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let count = read_compact_size(buf, "aux_fees")?;
        let mut aux_fees = Vec::new();
        for _ in 0..count {
            aux_fees.push(AuxFee::decode(buf)?);
        }
        Ok(Self { aux_fees })
    }
}

/// An asset definition or update.
///
/// The header (allocation, precision, symbol, update mask) is always
/// present. Everything after it is gated: each bit of [`update_flags`]
/// pulls one group of fields onto the wire, walked in ascending bit
/// order. A clear bit contributes zero bytes and leaves the fields of
/// its group at their defaults.
///
/// [`update_flags`]: Asset::update_flags
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Asset {
    /// Outputs assigned at definition or update time.
    pub allocation: AssetAllocation,
    /// Number of decimal places, 0 through 8.
    pub precision: u8,
    /// Ticker symbol; travels base64-wrapped on the wire.
    pub symbol: String,
    /// Bitmask selecting which field groups follow.
    pub update_flags: u8,
    /// Public data blob.
    pub pub_data: Bytes,
    /// Public data blob being replaced.
    pub prev_pub_data: Bytes,
    /// Bound smart contract address.
    pub contract: Bytes,
    /// Contract address being replaced.
    pub prev_contract: Bytes,
    /// Amount newly issued to the allocation.
    pub balance: i64,
    /// Circulating supply after this update.
    pub total_supply: i64,
    /// Hard cap on supply.
    pub max_supply: i64,
    /// Notary key id.
    pub notary_key_id: Bytes,
    /// Notary key id being replaced.
    pub prev_notary_key_id: Bytes,
    /// Notary service details.
    pub notary_details: NotaryDetails,
    /// Notary service details being replaced.
    pub prev_notary_details: NotaryDetails,
    /// Aux fee key id.
    pub aux_fee_key_id: Bytes,
    /// Aux fee key id being replaced.
    pub prev_aux_fee_key_id: Bytes,
    /// Aux fee schedule.
    pub aux_fee_details: AuxFeeDetails,
    /// Aux fee schedule being replaced.
    pub prev_aux_fee_details: AuxFeeDetails,
    /// Capability mask after this update.
    pub update_capability_flags: u8,
    /// Capability mask being replaced.
    pub prev_update_capability_flags: u8,
}

impl Encodable for Asset {
    fn encode(&self, out: &mut dyn BufMut) {
        self.allocation.encode(out);
        out.put_u8(self.precision);
        write_var_bytes(out, STANDARD.encode(self.symbol.as_bytes()).as_bytes());
        out.put_u8(self.update_flags);
        if self.update_flags & ASSET_UPDATE_DATA != 0 {
            write_var_bytes(out, &self.pub_data);
            write_var_bytes(out, &self.prev_pub_data);
        }
        if self.update_flags & ASSET_UPDATE_CONTRACT != 0 {
            write_var_bytes(out, &self.contract);
            write_var_bytes(out, &self.prev_contract);
        }
        if self.update_flags & ASSET_UPDATE_SUPPLY != 0 {
            write_varuint(out, compress_amount(self.balance as u64));
            write_varuint(out, compress_amount(self.total_supply as u64));
            write_varuint(out, compress_amount(self.max_supply as u64));
        }
        if self.update_flags & ASSET_UPDATE_NOTARY_KEY != 0 {
            write_var_bytes(out, &self.notary_key_id);
            write_var_bytes(out, &self.prev_notary_key_id);
        }
        if self.update_flags & ASSET_UPDATE_NOTARY_DETAILS != 0 {
            self.notary_details.encode(out);
            self.prev_notary_details.encode(out);
        }
        if self.update_flags & ASSET_UPDATE_AUXFEE_KEY != 0 {
            write_var_bytes(out, &self.aux_fee_key_id);
            write_var_bytes(out, &self.prev_aux_fee_key_id);
        }
        if self.update_flags & ASSET_UPDATE_AUXFEE_DETAILS != 0 {
            self.aux_fee_details.encode(out);
            self.prev_aux_fee_details.encode(out);
        }
        if self.update_flags & ASSET_UPDATE_CAPABILITYFLAGS != 0 {
            out.put_u8(self.update_capability_flags);
            out.put_u8(self.prev_update_capability_flags);
        }
    }
}

impl Decodable for Asset {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        let mut asset = Asset {
            allocation: AssetAllocation::decode(buf)?,
            precision: read_u8(buf, "precision")?,
            symbol: decode_symbol(buf)?,
            update_flags: read_u8(buf, "update_flags")?,
            ..Default::default()
        };
        if asset.update_flags & ASSET_UPDATE_DATA != 0 {
            asset.pub_data = read_var_bytes(buf, MAX_VALUE_LENGTH, "pub_data")?;
            asset.prev_pub_data = read_var_bytes(buf, MAX_VALUE_LENGTH, "prev_pub_data")?;
        }
        if asset.update_flags & ASSET_UPDATE_CONTRACT != 0 {
            asset.contract = read_var_bytes(buf, MAX_GUID_LENGTH, "contract")?;
            asset.prev_contract = read_var_bytes(buf, MAX_GUID_LENGTH, "prev_contract")?;
        }
        if asset.update_flags & ASSET_UPDATE_SUPPLY != 0 {
            asset.balance = decompress_amount(read_varuint(buf, "balance")?) as i64;
            asset.total_supply = decompress_amount(read_varuint(buf, "total_supply")?) as i64;
            asset.max_supply = decompress_amount(read_varuint(buf, "max_supply")?) as i64;
        }
        if asset.update_flags & ASSET_UPDATE_NOTARY_KEY != 0 {
            asset.notary_key_id = read_var_bytes(buf, MAX_GUID_LENGTH, "notary_key_id")?;
            asset.prev_notary_key_id = read_var_bytes(buf, MAX_GUID_LENGTH, "prev_notary_key_id")?;
        }
        if asset.update_flags & ASSET_UPDATE_NOTARY_DETAILS != 0 {
            asset.notary_details = NotaryDetails::decode(buf)?;
            asset.prev_notary_details = NotaryDetails::decode(buf)?;
        }
        if asset.update_flags & ASSET_UPDATE_AUXFEE_KEY != 0 {
            asset.aux_fee_key_id = read_var_bytes(buf, MAX_GUID_LENGTH, "aux_fee_key_id")?;
            asset.prev_aux_fee_key_id =
                read_var_bytes(buf, MAX_GUID_LENGTH, "prev_aux_fee_key_id")?;
        }
        if asset.update_flags & ASSET_UPDATE_AUXFEE_DETAILS != 0 {
            asset.aux_fee_details = AuxFeeDetails::decode(buf)?;
            asset.prev_aux_fee_details = AuxFeeDetails::decode(buf)?;
        }
        if asset.update_flags & ASSET_UPDATE_CAPABILITYFLAGS != 0 {
            asset.update_capability_flags = read_u8(buf, "update_capability_flags")?;
            asset.prev_update_capability_flags = read_u8(buf, "prev_update_capability_flags")?;
        }
        Ok(asset)
    }
}

/// Reads the base64-wrapped symbol field.
///
/// Only canonically padded base64 is accepted; the symbol must decode
/// to valid UTF-8.
fn decode_symbol(buf: &mut &[u8]) -> Result<String, DecodeError> {
    let wrapped = read_var_bytes(buf, MAX_SYMBOL_SIZE, "symbol")?;
    let raw = STANDARD
        .decode(&wrapped)
        .map_err(|_| DecodeError::BadBase64 { field: "symbol" })?;
    String::from_utf8(raw).map_err(|_| DecodeError::Invalid { field: "symbol", detail: "not utf-8" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ASSET_UPDATE_ALL, MAX_SIG_SIZE};
    use crate::{AssetOut, AssetOutValue};
    use hex_literal::hex;

    fn encoded(asset: &Asset) -> Vec<u8> {
        let mut out = Vec::new();
        asset.encode(&mut out);
        out
    }

    #[test]
    fn header_only_vector() {
        let asset = Asset {
            precision: 8,
            symbol: "SYS".to_string(),
            ..Default::default()
        };
        // Empty allocation, precision, VarBytes(base64("SYS")) = "U1lT",
        // and a zero update mask.
        let bytes = encoded(&asset);
        assert_eq!(bytes, hex!("000804 55316c54 00"));
        assert_eq!(Asset::decode(&mut &bytes[..]).unwrap(), asset);
    }

    #[test]
    fn supply_only_gating() {
        let asset = Asset {
            precision: 8,
            symbol: "CAT".to_string(),
            update_flags: ASSET_UPDATE_SUPPLY,
            balance: 100_000_000,
            total_supply: 100_000_000,
            max_supply: 1_000_000_000,
            ..Default::default()
        };
        let bytes = encoded(&asset);
        // Header, mask 0x04, then exactly three compressed amounts.
        assert_eq!(bytes, hex!("000804 51304655 04 09090a"));
        assert_eq!(Asset::decode(&mut &bytes[..]).unwrap(), asset);
    }

    #[test]
    fn every_flag_set_roundtrips() {
        let asset = Asset {
            allocation: AssetAllocation {
                vout_assets: vec![AssetOut {
                    asset_guid: 0x1234,
                    values: vec![AssetOutValue { n: 1, value_sat: 500_000_000 }],
                    notary_sig: Bytes::from_static(&[7; MAX_SIG_SIZE]),
                }],
            },
            precision: 8,
            symbol: "BRIDGED".to_string(),
            update_flags: ASSET_UPDATE_ALL,
            pub_data: Bytes::from_static(b"{\"desc\":\"x\"}"),
            prev_pub_data: Bytes::from_static(b"{}"),
            contract: Bytes::from_static(&[0xaa; 20]),
            prev_contract: Bytes::from_static(&[0xbb; 20]),
            balance: 1_000_000,
            total_supply: 5_000_000,
            max_supply: 100_000_000_000,
            notary_key_id: Bytes::from_static(&[1; 20]),
            prev_notary_key_id: Bytes::from_static(&[2; 20]),
            notary_details: NotaryDetails {
                endpoint: Bytes::from_static(b"https://notary.example"),
                instant_transfers: 1,
                hd_required: 0,
            },
            prev_notary_details: NotaryDetails::default(),
            aux_fee_key_id: Bytes::from_static(&[3; 20]),
            prev_aux_fee_key_id: Bytes::from_static(&[4; 20]),
            aux_fee_details: AuxFeeDetails {
                aux_fees: vec![
                    AuxFee { bound: 0, percent: 100 },
                    AuxFee { bound: 1_000_000_000, percent: 50 },
                ],
            },
            prev_aux_fee_details: AuxFeeDetails::default(),
            update_capability_flags: ASSET_UPDATE_ALL,
            prev_update_capability_flags: 0,
        };
        let bytes = encoded(&asset);
        let mut buf = bytes.as_slice();
        assert_eq!(Asset::decode(&mut buf).unwrap(), asset);
        assert!(buf.is_empty());
    }

    #[test]
    fn gated_groups_walk_in_ascending_bit_order() {
        // Data (bit 1) and contract (bit 2) both set: the data pair is
        // on the wire first.
        let asset = Asset {
            symbol: "A".to_string(),
            update_flags: ASSET_UPDATE_DATA | ASSET_UPDATE_CONTRACT,
            pub_data: Bytes::from_static(b"data"),
            prev_pub_data: Bytes::new(),
            contract: Bytes::from_static(&[0xcc; 4]),
            prev_contract: Bytes::new(),
            ..Default::default()
        };
        let bytes = encoded(&asset);
        // header: empty allocation, precision 0, VarBytes("QQ==")
        assert_eq!(bytes, hex!("0000 04 51513d3d 03 0464617461 00 04cccccccc 00"));
        assert_eq!(Asset::decode(&mut &bytes[..]).unwrap(), asset);
    }

    #[test]
    fn symbol_cap_boundary() {
        // Nine raw bytes wrap to exactly twelve base64 bytes.
        let asset = Asset { symbol: "WRAPPEDXX".to_string(), ..Default::default() };
        let bytes = encoded(&asset);
        assert_eq!(Asset::decode(&mut &bytes[..]).unwrap().symbol, "WRAPPEDXX");

        // A thirteen-byte wrapped symbol is over the cap.
        let mut forged: Vec<u8> = Vec::new();
        AssetAllocation::default().encode(&mut forged);
        forged.push(0);
        write_var_bytes(&mut forged, b"U1lTU1lTU1lTX");
        forged.push(0);
        assert_eq!(
            Asset::decode(&mut &forged[..]),
            Err(DecodeError::Oversize { field: "symbol", limit: 12, actual: 13 })
        );
    }

    #[test]
    fn symbol_rejects_malformed_base64() {
        let mut forged: Vec<u8> = Vec::new();
        AssetAllocation::default().encode(&mut forged);
        forged.push(8);
        write_var_bytes(&mut forged, b"U1l@");
        forged.push(0);
        assert_eq!(
            Asset::decode(&mut &forged[..]),
            Err(DecodeError::BadBase64 { field: "symbol" })
        );
    }

    #[test]
    fn symbol_rejects_non_canonical_padding() {
        // "U1lT" is the canonical wrapping of "SYS"; strip the alignment
        // by dropping a character and leaving the padding short.
        let mut forged: Vec<u8> = Vec::new();
        AssetAllocation::default().encode(&mut forged);
        forged.push(8);
        write_var_bytes(&mut forged, b"U1l");
        forged.push(0);
        assert_eq!(
            Asset::decode(&mut &forged[..]),
            Err(DecodeError::BadBase64 { field: "symbol" })
        );
    }

    #[test]
    fn empty_symbol_roundtrips() {
        let asset = Asset::default();
        let bytes = encoded(&asset);
        assert_eq!(bytes, hex!("00000000"));
        assert_eq!(Asset::decode(&mut &bytes[..]).unwrap(), asset);
    }

    #[test]
    fn aux_fee_schedule_roundtrips() {
        let details = AuxFeeDetails {
            aux_fees: vec![
                AuxFee { bound: 0, percent: 0 },
                AuxFee { bound: 100_000_000, percent: 1000 },
                AuxFee { bound: 10_000_000_000, percent: 65535 },
            ],
        };
        let mut out = Vec::new();
        details.encode(&mut out);
        let mut buf = out.as_slice();
        assert_eq!(AuxFeeDetails::decode(&mut buf).unwrap(), details);
        assert!(buf.is_empty());
    }

    #[test]
    fn notary_details_endpoint_cap() {
        let details = NotaryDetails {
            endpoint: Bytes::from(vec![0x61; 513]),
            instant_transfers: 0,
            hd_required: 0,
        };
        let mut out = Vec::new();
        details.encode(&mut out);
        assert_eq!(
            NotaryDetails::decode(&mut &out[..]),
            Err(DecodeError::Oversize { field: "endpoint", limit: 512, actual: 513 })
        );
    }
}
