//! The bridged mint record: proof that value was locked on a foreign
//! chain.

use crate::{constants::MAX_RLP_SIZE, AssetAllocation};
use bytes::{BufMut, Bytes};
use syscoin_codecs::{read_u32_le, read_var_bytes, write_var_bytes, Decodable, DecodeError, Encodable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mint backed by a transaction on the bridged chain.
///
/// Carries the allocation being minted plus the Merkle proof material
/// for both the foreign transaction and its receipt. The proof blobs
/// are opaque here; verifying them against the bridge contract is the
/// caller's business.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MintSyscoin {
    /// Outputs the mint creates.
    pub allocation: AssetAllocation,
    /// Identifier of the bridge transfer being claimed.
    pub bridge_transfer_id: u32,
    /// Foreign block the proof is anchored in.
    pub block_number: u32,
    /// The foreign transaction body.
    pub tx_value: Bytes,
    /// Merkle branch nodes for the transaction proof.
    pub tx_parent_nodes: Bytes,
    /// Transaction trie root.
    pub tx_root: Bytes,
    /// Path of the transaction within its trie.
    pub tx_path: Bytes,
    /// The foreign receipt body.
    pub receipt_value: Bytes,
    /// Merkle branch nodes for the receipt proof.
    pub receipt_parent_nodes: Bytes,
    /// Receipt trie root.
    pub receipt_root: Bytes,
    /// Path of the receipt within its trie.
    pub receipt_path: Bytes,
}

impl Encodable for MintSyscoin {
    fn encode(&self, out: &mut dyn BufMut) {
        self.allocation.encode(out);
        out.put_u32_le(self.bridge_transfer_id);
        out.put_u32_le(self.block_number);
        write_var_bytes(out, &self.tx_value);
        write_var_bytes(out, &self.tx_parent_nodes);
        write_var_bytes(out, &self.tx_root);
        write_var_bytes(out, &self.tx_path);
        write_var_bytes(out, &self.receipt_value);
        write_var_bytes(out, &self.receipt_parent_nodes);
        write_var_bytes(out, &self.receipt_root);
        write_var_bytes(out, &self.receipt_path);
    }
}

impl Decodable for MintSyscoin {
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            allocation: AssetAllocation::decode(buf)?,
            bridge_transfer_id: read_u32_le(buf, "bridge_transfer_id")?,
            block_number: read_u32_le(buf, "block_number")?,
            tx_value: read_var_bytes(buf, MAX_RLP_SIZE, "tx_value")?,
            tx_parent_nodes: read_var_bytes(buf, MAX_RLP_SIZE, "tx_parent_nodes")?,
            tx_root: read_var_bytes(buf, MAX_RLP_SIZE, "tx_root")?,
            tx_path: read_var_bytes(buf, MAX_RLP_SIZE, "tx_path")?,
            receipt_value: read_var_bytes(buf, MAX_RLP_SIZE, "receipt_value")?,
            receipt_parent_nodes: read_var_bytes(buf, MAX_RLP_SIZE, "receipt_parent_nodes")?,
            receipt_root: read_var_bytes(buf, MAX_RLP_SIZE, "receipt_root")?,
            receipt_path: read_var_bytes(buf, MAX_RLP_SIZE, "receipt_path")?,
        })
    }
}
