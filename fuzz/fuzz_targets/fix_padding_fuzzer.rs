//! Fuzz target for post-decryption length reconciliation
//!
//! `fix_padding` never fails: the only legal outcomes are a trim to the
//! declared size, a filler append up to the declared size, or the buffer
//! returned unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wamedia_crypto::fix_padding;

fuzz_target!(|input: (Vec<u8>, u16)| {
    let (data, expected_size) = input;
    let expected_size = usize::from(expected_size);
    let original_len = data.len();

    let fixed = fix_padding(data, expected_size);

    assert!(
        fixed.len() == original_len || fixed.len() == expected_size,
        "reconciled length must be the original or the declared size"
    );
});
