//! Post-decryption length reconciliation.
//!
//! CBC output is always a whole number of blocks, while the sender declares
//! the true plaintext size out of band. This module lines the two up by
//! trimming (or, in the vestigial case, appending) PKCS#7-style filler. It is
//! a best-effort reconciliation, not a validator: when neither length
//! relation holds the buffer is returned untouched and the caller decides
//! whether an uncorrected length is acceptable.

use super::cipher::AES_BLOCK_LEN;

/// Reconcile a decrypted buffer against the declared plaintext size.
///
/// With `padding = (16 - expected_size % 16) % 16`:
///
/// - `padding == 0`: the buffer is returned unchanged
/// - `expected_size + padding == len`: the trailing filler is trimmed off
/// - `len + padding == expected_size`: `padding` filler bytes (each of value
///   `padding`) are appended
/// - otherwise: the buffer is returned unchanged
///
/// This function never fails.
pub fn fix_padding(mut decrypted: Vec<u8>, expected_size: usize) -> Vec<u8> {
    let padding = (AES_BLOCK_LEN - expected_size % AES_BLOCK_LEN) % AES_BLOCK_LEN;
    if padding == 0 {
        return decrypted;
    }

    if expected_size.checked_add(padding) == Some(decrypted.len()) {
        decrypted.truncate(expected_size);
    } else if decrypted.len() + padding == expected_size {
        // Block-aligned CBC output never satisfies this relation; only a
        // sender that under-delivered ciphertext would land here.
        let filler = padding as u8;
        decrypted.resize(expected_size, filler);
    }

    decrypted
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn block_aligned_expected_size_is_identity() {
        let data: Vec<u8> = (0..32).collect();
        assert_eq!(fix_padding(data.clone(), 32), data);
        assert_eq!(fix_padding(data.clone(), 0), data);
        assert_eq!(fix_padding(data.clone(), 16), data);
    }

    #[test]
    fn trims_filler_down_to_expected_size() {
        let data: Vec<u8> = (0..16).collect();

        // padding = 6 and 10 + 6 == 16, so the last 6 bytes are filler
        let fixed = fix_padding(data, 10);
        assert_eq!(fixed, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn trims_across_multiple_blocks() {
        let data = vec![0xEE; 48];

        // padding = 3 and 45 + 3 == 48
        let fixed = fix_padding(data, 45);
        assert_eq!(fixed.len(), 45);
    }

    #[test]
    fn appends_filler_when_buffer_is_short() {
        // Vestigial branch: 4 + 6 == 10, so 6 bytes of value 6 are appended
        let fixed = fix_padding(vec![1, 2, 3, 4], 10);
        assert_eq!(fixed, vec![1, 2, 3, 4, 6, 6, 6, 6, 6, 6]);
    }

    #[test]
    fn mismatched_lengths_are_left_alone() {
        // padding = 6, but 10 + 6 != 32 and 32 + 6 != 10: the silent
        // no-correction fallback is intentional, not a bug
        let data = vec![0x11; 32];
        assert_eq!(fix_padding(data.clone(), 10), data);
    }

    #[test]
    fn empty_buffer_is_left_alone() {
        assert_eq!(fix_padding(Vec::new(), 5), Vec::<u8>::new());
    }

    proptest! {
        #[test]
        fn prop_identity_when_expected_is_block_aligned(
            data in prop::collection::vec(any::<u8>(), 0..128),
            blocks in 0usize..8,
        ) {
            let out = fix_padding(data.clone(), blocks * AES_BLOCK_LEN);
            prop_assert_eq!(out, data);
        }

        #[test]
        fn prop_trim_lands_exactly_on_expected_size(
            expected_size in 1usize..256,
        ) {
            let padding = (AES_BLOCK_LEN - expected_size % AES_BLOCK_LEN) % AES_BLOCK_LEN;
            prop_assume!(padding > 0);

            let data = vec![0xABu8; expected_size + padding];
            let out = fix_padding(data, expected_size);
            prop_assert_eq!(out.len(), expected_size);
        }

        #[test]
        fn prop_output_is_input_when_no_relation_holds(
            data in prop::collection::vec(any::<u8>(), 0..128),
            expected_size in 1usize..256,
        ) {
            let padding = (AES_BLOCK_LEN - expected_size % AES_BLOCK_LEN) % AES_BLOCK_LEN;
            prop_assume!(padding > 0);
            prop_assume!(expected_size + padding != data.len());
            prop_assume!(data.len() + padding != expected_size);

            let out = fix_padding(data.clone(), expected_size);
            prop_assert_eq!(out, data);
        }
    }
}
