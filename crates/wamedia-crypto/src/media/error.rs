//! Error types for media payload decryption.
//!
//! Strongly-typed errors for each failure point of the pipeline: input
//! decoding, media-type lookup, ciphertext validation, and the cipher
//! operation itself. Decryption is deterministic, so none of these are
//! transient: retrying with the same inputs cannot succeed.

use thiserror::Error;

/// Errors that can occur while decrypting a media payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaCryptoError {
    /// Ciphertext hex or media-key base64 could not be decoded
    #[error("malformed encoded input: {reason}")]
    Decode {
        /// What the decoder rejected
        reason: String,
    },

    /// Media type tag is not in the recognized set
    #[error("unknown media type: {tag:?}")]
    UnknownMediaType {
        /// The tag as supplied by the caller
        tag: String,
    },

    /// Input is not aligned to the 16-byte AES block size
    #[error("invalid ciphertext length: {length} is not a multiple of 16 bytes")]
    InvalidCiphertextLength {
        /// Length of the rejected buffer in bytes
        length: usize,
    },

    /// The cipher rejected the key/IV/ciphertext combination
    #[error("decryption failed: {reason}")]
    DecryptionFailed {
        /// Reason reported by the cipher layer
        reason: String,
    },
}

/// Convert `hex` decoding errors into the decode error kind.
impl From<hex::FromHexError> for MediaCryptoError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Decode { reason: err.to_string() }
    }
}

/// Convert `base64` decoding errors into the decode error kind.
impl From<base64::DecodeError> for MediaCryptoError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode { reason: err.to_string() }
    }
}
