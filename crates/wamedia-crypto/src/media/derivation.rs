//! Key expansion for media payloads using HKDF.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use super::media_type::MediaType;

/// Total length of the expanded key material block.
pub const EXPANDED_KEY_LEN: usize = 112;

/// Length of the CBC initialization vector slice.
pub const IV_LEN: usize = 16;

/// Length of the AES-256 cipher key slice.
pub const CIPHER_KEY_LEN: usize = 32;

/// Extract salt fixed by the wire scheme: 32 zero bytes.
const HKDF_SALT: [u8; 32] = [0u8; 32];

/// Expanded key material derived from a per-message media key.
///
/// Exactly 112 bytes. Bytes [0, 16) are the CBC IV and bytes [16, 48) the
/// AES-256 cipher key. The tail [48, 112) is reserved by the parent protocol
/// for a MAC key and reference tag and is unused on the decryption path, but
/// it is always derived in full so the IV and cipher-key offsets stay
/// bit-identical to the wire scheme.
///
/// The block is transient: it is produced and consumed within a single
/// decryption call and zeroized on drop.
pub struct ExpandedMediaKey {
    material: [u8; EXPANDED_KEY_LEN],
}

impl ExpandedMediaKey {
    /// Expand a base media key into the 112-byte block.
    ///
    /// HKDF-SHA256 extract-and-expand with the fixed all-zero salt and the
    /// info string `"WhatsApp <category> Keys"`. Deterministic: the same
    /// (key, media type) pair always yields the same block.
    pub fn derive(media_key: &[u8], media_type: MediaType) -> Self {
        let hkdf = Hkdf::<Sha256>::new(Some(HKDF_SALT.as_slice()), media_key);

        let mut material = [0u8; EXPANDED_KEY_LEN];
        let Ok(()) = hkdf.expand(media_type.hkdf_info().as_bytes(), &mut material) else {
            unreachable!("112 bytes is a valid HKDF-SHA256 output length");
        };

        Self { material }
    }

    /// CBC initialization vector, bytes [0, 16) of the block.
    pub fn iv(&self) -> &[u8] {
        &self.material[..IV_LEN]
    }

    /// AES-256 cipher key, bytes [16, 48) of the block.
    pub fn cipher_key(&self) -> &[u8] {
        &self.material[IV_LEN..IV_LEN + CIPHER_KEY_LEN]
    }
}

impl Drop for ExpandedMediaKey {
    fn drop(&mut self) {
        self.material.zeroize();
    }
}
