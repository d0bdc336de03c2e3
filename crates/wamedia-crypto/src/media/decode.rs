//! Wire-format byte decoders for ciphertext and key inputs.
//!
//! Callers hand over the encrypted payload as a hex string and the media key
//! as standard base64. Both decoders reject malformed input outright rather
//! than passing invalid byte values downstream.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::error::MediaCryptoError;

/// Decode an even-length hex string into raw bytes.
///
/// # Errors
///
/// Returns [`MediaCryptoError::Decode`] on odd-length input or any character
/// outside `[0-9a-fA-F]`.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, MediaCryptoError> {
    Ok(hex::decode(input)?)
}

/// Decode a standard-alphabet base64 string into raw bytes.
///
/// The URL-safe alphabet is not accepted and padding must be canonical.
///
/// # Errors
///
/// Returns [`MediaCryptoError::Decode`] on malformed input.
pub fn decode_media_key(input: &str) -> Result<Vec<u8>, MediaCryptoError> {
    Ok(STANDARD.decode(input)?)
}
