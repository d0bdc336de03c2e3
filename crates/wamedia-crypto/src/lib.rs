//! Wamedia Cryptographic Primitives
//!
//! Decryption of encrypted media payloads (images, video, audio, documents)
//! exchanged by WhatsApp Web transports. Pure functions with deterministic
//! outputs. No I/O and no global state.
//!
//! # Decryption Pipeline
//!
//! Each media message carries a per-message base key. The recipient expands
//! that key with HKDF into a fixed 112-byte block, takes the CBC IV and the
//! AES-256 key from its head, decrypts the buffered payload, and reconciles
//! the decrypted length against the sender-declared plaintext size.
//!
//! ```text
//! Base Media Key (base64)          Encrypted Payload (hex)
//!        │                                 │
//!        ▼                                 │
//! HKDF-SHA256 → 112-byte block             │
//!   [0,16)  IV                             │
//!   [16,48) AES-256 key                    │
//!   [48,112) reserved tail                 │
//!        │                                 │
//!        └────────► AES-256-CBC decrypt ◄──┘
//!                   (no unpadding)
//!                          │
//!                          ▼
//!                  Padding correction
//!                          │
//!                          ▼
//!                  Plaintext file bytes
//! ```
//!
//! # Security
//!
//! - The legacy wire scheme carries no authentication tag on this path, so
//!   decryption is unauthenticated; callers own integrity checks
//! - Derived key material lives only for the duration of a call and is
//!   zeroized on drop
//! - The reserved tail of the expansion is still derived in full so the IV
//!   and cipher-key offsets stay bit-identical to the wire scheme

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod media;

pub use media::{
    AES_BLOCK_LEN, CIPHER_KEY_LEN, EXPANDED_KEY_LEN, ExpandedMediaKey, IV_LEN, MediaCryptoError,
    MediaType, decode_hex, decode_media_key, decrypt_blocks, decrypt_media, encrypt_blocks,
    fix_padding,
};
