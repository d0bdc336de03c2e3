//! Fuzz target for the media decryption pipeline
//!
//! This fuzzer drives `decrypt_media` with:
//! - Malformed hex ciphertext and base64 key strings
//! - Recognized and unrecognized media-type tags
//! - Arbitrary declared plaintext sizes
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wamedia_crypto::decrypt_media;

fuzz_target!(|input: (&str, &str, Option<u16>)| {
    let (ciphertext_hex, media_key_base64, expected_size) = input;

    // Cover every recognized tag plus the unknown-tag path
    let tags = ["image", "VIDEO", "audio", "ptt", "DOCUMENT", "sticker", "voice", ""];

    for tag in tags {
        let _ = decrypt_media(
            ciphertext_hex,
            media_key_base64,
            tag,
            expected_size.map(usize::from),
        );
    }
});
