//! AES-256-CBC block transforms for media payloads.
//!
//! The wire scheme pads relative to the sender-declared plaintext size
//! rather than to a clean PKCS#7 boundary, so no automatic unpadding is
//! applied here; length reconciliation happens after decryption in
//! [`fix_padding`](super::padding::fix_padding).

use aes::Aes256;
use cbc::{Decryptor, Encryptor};
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::NoPadding};

use super::error::MediaCryptoError;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// AES block size in bytes.
pub const AES_BLOCK_LEN: usize = 16;

/// Decrypt a block-aligned ciphertext with AES-256-CBC.
///
/// No unpadding is applied; the caller reconciles trailing bytes against the
/// declared plaintext size. No key material is retained after the call.
///
/// # Errors
///
/// - [`MediaCryptoError::InvalidCiphertextLength`] if the ciphertext is not
///   a multiple of 16 bytes
/// - [`MediaCryptoError::DecryptionFailed`] if the key or IV has the wrong
///   size for AES-256-CBC
pub fn decrypt_blocks(
    ciphertext: &[u8],
    cipher_key: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>, MediaCryptoError> {
    if ciphertext.len() % AES_BLOCK_LEN != 0 {
        return Err(MediaCryptoError::InvalidCiphertextLength { length: ciphertext.len() });
    }

    let decryptor = Aes256CbcDec::new_from_slices(cipher_key, iv)
        .map_err(|err| MediaCryptoError::DecryptionFailed { reason: err.to_string() })?;

    let mut buffer = ciphertext.to_vec();
    let Ok(_) = decryptor.decrypt_padded_mut::<NoPadding>(&mut buffer) else {
        unreachable!("alignment is checked above and NoPadding accepts any aligned buffer");
    };

    Ok(buffer)
}

/// Encrypt a block-aligned plaintext with AES-256-CBC.
///
/// Inverse of [`decrypt_blocks`], exposed so the CBC round-trip law can be
/// exercised against real key material. The input must already be padded to
/// the block size.
///
/// # Errors
///
/// Same kinds as [`decrypt_blocks`]: misaligned input or a wrong-sized
/// key/IV.
pub fn encrypt_blocks(
    plaintext: &[u8],
    cipher_key: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>, MediaCryptoError> {
    if plaintext.len() % AES_BLOCK_LEN != 0 {
        return Err(MediaCryptoError::InvalidCiphertextLength { length: plaintext.len() });
    }

    let encryptor = Aes256CbcEnc::new_from_slices(cipher_key, iv)
        .map_err(|err| MediaCryptoError::DecryptionFailed { reason: err.to_string() })?;

    let mut buffer = plaintext.to_vec();
    let Ok(_) = encryptor.encrypt_padded_mut::<NoPadding>(&mut buffer, plaintext.len()) else {
        unreachable!("alignment is checked above and NoPadding accepts any aligned buffer");
    };

    Ok(buffer)
}
