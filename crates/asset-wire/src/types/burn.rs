//! The burn record: value leaving for the bridged chain.

use crate::{constants::MAX_GUID_LENGTH, AssetAllocation};
use bytes::{BufMut, Bytes};
use syscoin_codecs::{read_var_bytes, write_var_bytes, Decodable, DecodeError, Encodable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A burn whose value is to be released on the bridged chain.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BurnToEthereum {
    /// Outputs being burned.
    pub allocation: AssetAllocation,
    /// Recipient address on the bridged chain.
    pub eth_address: Bytes,
}

impl Encodable for BurnToEthereum {
    fn encode(&self, out: &mut dyn BufMut) {
        self.allocation.encode(out);
        write_var_bytes(out, &self.eth_address);
    }
}

impl Decodable for BurnToEthereum {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            allocation: AssetAllocation::decode(buf)?,
            eth_address: read_var_bytes(buf, MAX_GUID_LENGTH, "eth_address")?,
        })
    }
}
