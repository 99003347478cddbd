//! Decode failures for the asset payload wire format.

/// Errors produced while decoding wire-format bytes.
///
/// Encoding into a [`bytes::BufMut`] cannot fail, so there is no
/// encode-side counterpart. Decoders surface the first error they hit
/// and stop; partial records are never returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before the current field was fully read.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEof {
        /// Wire field that was being read.
        field: &'static str,
    },
    /// A length prefix exceeded the cap declared for the field.
    #[error("{field} length {actual} exceeds cap {limit}")]
    Oversize {
        /// Wire field whose prefix was rejected.
        field: &'static str,
        /// Maximum byte length the field accepts.
        limit: usize,
        /// Byte length the prefix declared.
        actual: usize,
    },
    /// A decoded integer did not fit its target width.
    #[error("{field} does not fit its target integer width")]
    Overflow {
        /// Wire field being narrowed.
        field: &'static str,
    },
    /// The base64 wrapping of a field failed to decode.
    #[error("{field} is not canonical base64")]
    BadBase64 {
        /// Wire field carrying the base64 payload.
        field: &'static str,
    },
    /// A structurally malformed field.
    #[error("invalid {field}: {detail}")]
    Invalid {
        /// Wire field that failed.
        field: &'static str,
        /// What was wrong with it.
        detail: &'static str,
    },
}
