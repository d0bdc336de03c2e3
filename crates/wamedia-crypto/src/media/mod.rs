//! Media payload decryption for the legacy CBC wire scheme.
//!
//! The caller hands over the encrypted payload as a hex string, the
//! per-message base key as standard base64, a media-type tag, and optionally
//! the sender-declared plaintext size. [`decrypt_media`] composes the full
//! pipeline; the individual stages are public for callers that already hold
//! raw bytes.

pub mod cipher;
pub mod decode;
pub mod decrypt;
pub mod derivation;
pub mod error;
pub mod media_type;
pub mod padding;

pub use cipher::{AES_BLOCK_LEN, decrypt_blocks, encrypt_blocks};
pub use decode::{decode_hex, decode_media_key};
pub use decrypt::decrypt_media;
pub use derivation::{CIPHER_KEY_LEN, EXPANDED_KEY_LEN, ExpandedMediaKey, IV_LEN};
pub use error::MediaCryptoError;
pub use media_type::MediaType;
pub use padding::fix_padding;
