//! The media decryption pipeline.

use super::cipher::decrypt_blocks;
use super::decode::{decode_hex, decode_media_key};
use super::derivation::ExpandedMediaKey;
use super::error::MediaCryptoError;
use super::media_type::MediaType;
use super::padding::fix_padding;

/// Decrypt an encrypted media payload back into plaintext file bytes.
///
/// `ciphertext_hex` is the raw encrypted payload transcoded to hex by the
/// caller, `media_key_base64` the per-message base key in standard base64,
/// and `media_type` a case-insensitive tag (`"image"`, `"video"`, `"audio"`,
/// `"ptt"`, `"document"`, `"sticker"`). When `expected_size` is present the
/// decrypted buffer is reconciled against the sender-declared plaintext
/// length; otherwise it is returned at its raw block-aligned size.
///
/// The call is pure and retains no key material; it is safe to invoke
/// concurrently from multiple threads.
///
/// # Errors
///
/// - [`MediaCryptoError::Decode`]: malformed hex or base64 input
/// - [`MediaCryptoError::UnknownMediaType`]: unrecognized tag
/// - [`MediaCryptoError::InvalidCiphertextLength`]: ciphertext not a
///   multiple of 16 bytes
/// - [`MediaCryptoError::DecryptionFailed`]: the cipher rejected the
///   key/IV/ciphertext combination
pub fn decrypt_media(
    ciphertext_hex: &str,
    media_key_base64: &str,
    media_type: &str,
    expected_size: Option<usize>,
) -> Result<Vec<u8>, MediaCryptoError> {
    let ciphertext = decode_hex(ciphertext_hex)?;
    let media_key = decode_media_key(media_key_base64)?;
    let media_type = MediaType::parse(media_type)?;

    let expanded = ExpandedMediaKey::derive(&media_key, media_type);
    let decrypted = decrypt_blocks(&ciphertext, expanded.cipher_key(), expanded.iv())?;

    Ok(match expected_size {
        Some(size) => fix_padding(decrypted, size),
        None => decrypted,
    })
}
