//! Strong (collision-resistant) digest used to confirm a rolling-checksum
//! match before trusting it.
//!
//! A match on both the rolling checksum and this digest is accepted as block
//! equality without ever re-reading the original bytes to compare them
//! directly.

use sha1::Digest as _;

/// Number of bytes in a [`StrongDigest`] output.
pub const DIGEST_LEN: usize = 20;

/// Streaming SHA-1-class digest.
///
/// # Examples
///
/// ```
/// use checksums::StrongDigest;
///
/// let mut hasher = StrongDigest::new();
/// hasher.update(b"hello");
/// let digest = hasher.finalize();
/// assert_eq!(digest.len(), checksums::DIGEST_LEN);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StrongDigest {
    inner: sha1::Sha1,
}

impl StrongDigest {
    /// Creates a hasher with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: sha1::Sha1::new(),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalizes the digest and returns the 20-byte output.
    #[must_use]
    pub fn finalize(self) -> [u8; DIGEST_LEN] {
        self.inner.finalize().into()
    }

    /// Computes the digest of `data` in one call.
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(StrongDigest::digest(b"block"), StrongDigest::digest(b"block"));
    }

    #[test]
    fn digest_distinguishes_inputs() {
        assert_ne!(StrongDigest::digest(b"a"), StrongDigest::digest(b"b"));
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = StrongDigest::new();
        hasher.update(b"hel");
        hasher.update(b"lo");
        assert_eq!(hasher.finalize(), StrongDigest::digest(b"hello"));
    }

    #[test]
    fn matches_known_sha1_vector() {
        // RFC 3174 test vector for "abc".
        let digest = StrongDigest::digest(b"abc");
        assert_eq!(
            digest,
            [
                0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78,
                0x50, 0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
            ]
        );
    }
}
