//! Weak rolling checksum used to find candidate block matches in O(1) per
//! byte of window advance.
//!
//! The algorithm is a cyclic-shift hash over a fixed lookup table, in the
//! style of the buzhash family: folding a byte mixes in `table[byte]` and
//! rotates the accumulator left by one bit. Sliding the window by one byte
//! needs to undo the departing byte's contribution, which by now has been
//! rotated left by the window length — so [`RollingChecksum::slide`] rotates
//! `table[removed]` by the same amount before XOR-ing it back out.

use thiserror::Error;

/// Errors produced while computing a rolling checksum.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RollingError {
    /// [`RollingChecksum::compute`] was called with an empty window.
    #[error("rolling checksum window must be non-empty")]
    EmptyWindow,
}

include!("rolling/table.rs");

/// Rolling checksum over a fixed-length byte window.
///
/// State is local to each instance — there is no shared or global mutable
/// state, unlike some historic rolling-hash implementations that kept a
/// single process-wide accumulator and were therefore unsafe to use from more
/// than one thread at a time.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct RollingChecksum {
    state: u32,
    len: u32,
}

impl RollingChecksum {
    /// Computes the checksum of `window` from scratch.
    ///
    /// `window` must be non-empty; any positive length is otherwise
    /// accepted, matching [`FileSignature::block_size`](../signature/struct.FileSignature.html)'s
    /// only constraint of being greater than zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use checksums::RollingChecksum;
    ///
    /// let window = b"ABCDEFGH";
    /// let checksum = RollingChecksum::compute(window).unwrap();
    /// assert_eq!(checksum.value(), checksum.value());
    /// ```
    pub fn compute(window: &[u8]) -> Result<Self, RollingError> {
        if window.is_empty() {
            return Err(RollingError::EmptyWindow);
        }
        let mut state: u32 = 0;
        for &byte in window {
            state = state.rotate_left(1) ^ TABLE[byte as usize];
        }
        Ok(Self {
            state,
            len: window.len() as u32,
        })
    }

    /// Advances the window by one byte: `removed` drops off the trailing
    /// edge, `added` enters at the leading edge. The window length is
    /// carried over unchanged from `self`.
    ///
    /// For any two consecutive windows `w_i = bytes[i..i+L]` and
    /// `w_{i+1} = bytes[i+1..i+1+L]`,
    /// `RollingChecksum::compute(w_i).slide(bytes[i+L], bytes[i])` equals
    /// `RollingChecksum::compute(w_{i+1})`.
    #[must_use]
    pub fn slide(self, added: u8, removed: u8) -> Self {
        let departing = TABLE[removed as usize].rotate_left(self.len);
        let state = self.state.rotate_left(1) ^ departing ^ TABLE[added as usize];
        Self {
            state,
            len: self.len,
        }
    }

    /// Returns the current 32-bit checksum value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_window() {
        assert_eq!(RollingChecksum::compute(&[]), Err(RollingError::EmptyWindow));
    }

    #[test]
    fn identical_windows_produce_identical_checksums() {
        let a = RollingChecksum::compute(&[7u8; 32]).unwrap();
        let b = RollingChecksum::compute(&[7u8; 32]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn slide_matches_recompute_at_a_32_byte_window() {
        let mut bytes = Vec::with_capacity(64);
        for i in 0..64u32 {
            bytes.push((i * 37 + 11) as u8);
        }
        let len = 32;
        for i in 0..bytes.len() - len - 1 {
            let window = &bytes[i..i + len];
            let next = &bytes[i + 1..i + 1 + len];
            let checksum = RollingChecksum::compute(window).unwrap();
            let slid = checksum.slide(bytes[i + len], bytes[i]);
            let recomputed = RollingChecksum::compute(next).unwrap();
            assert_eq!(slid, recomputed, "mismatch at offset {i}");
        }
    }

    #[test]
    fn slide_matches_recompute_at_a_non_aligned_window() {
        // Window lengths need not be multiples of 32; only the specific
        // `table[removed]` rotation amount depends on the length.
        let bytes = *b"ABCDEFGHIJKLMNOP";
        let len = 4;
        for i in 0..bytes.len() - len - 1 {
            let window = &bytes[i..i + len];
            let next = &bytes[i + 1..i + 1 + len];
            let checksum = RollingChecksum::compute(window).unwrap();
            let slid = checksum.slide(bytes[i + len], bytes[i]);
            let recomputed = RollingChecksum::compute(next).unwrap();
            assert_eq!(slid, recomputed, "mismatch at offset {i}");
        }
    }

    proptest::proptest! {
        /// Property 4: slide(compute(w_i), bytes[i+L], bytes[i]) == compute(w_{i+1})
        /// for any window length and any byte content.
        #[test]
        fn slide_matches_recompute_for_arbitrary_bytes_and_lengths(
            bytes in proptest::collection::vec(proptest::prelude::any::<u8>(), 2..256),
            len in 1usize..64,
        ) {
            proptest::prop_assume!(bytes.len() > len);
            for i in 0..(bytes.len() - len) {
                let window = &bytes[i..i + len];
                let next = &bytes[i + 1..i + 1 + len];
                let checksum = RollingChecksum::compute(window).unwrap();
                let slid = checksum.slide(bytes[i + len], bytes[i]);
                let recomputed = RollingChecksum::compute(next).unwrap();
                proptest::prop_assert_eq!(slid, recomputed);
            }
        }
    }
}
