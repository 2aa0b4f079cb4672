/// Strong digest length in bytes, mirrored from [`checksums::DIGEST_LEN`]
/// so this crate's on-disk layout doesn't depend on the exact type the
/// checksums crate uses internally.
pub const DIGEST_LEN: usize = checksums::DIGEST_LEN;

/// One entry in a remote file's block index.
///
/// Every block has length exactly `blockSize` (see [`FileSignature`]) except
/// that the final block's `offset` may overlap the previous block so the
/// file's tail is always covered (see [`crate::Signer`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    /// Byte position in the remote file where this block begins.
    pub offset: i64,
    /// Rolling checksum of the block's bytes.
    pub chksum: u32,
    /// Strong digest of the block's bytes.
    pub digest: [u8; DIGEST_LEN],
}

/// The serializable index of a remote file's blocks.
///
/// `blocks` is sorted ascending by `chksum` (ties broken arbitrarily); this
/// is the order [`phf::PerfectHashTable::build`] expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSignature {
    /// Total size in bytes of the file this signature describes.
    pub file_size: i64,
    /// Block size used to cut the file, in bytes. Always greater than zero.
    pub block_size: i32,
    /// The block index, sorted ascending by `chksum`.
    pub blocks: Vec<BlockInfo>,
}

impl FileSignature {
    /// Number of blocks a file of `file_size` bytes cut at `block_size`
    /// would have: zero if the file is smaller than one block, otherwise
    /// `ceil(file_size / block_size)`.
    #[must_use]
    pub fn expected_block_count(file_size: i64, block_size: i32) -> u64 {
        if file_size < i64::from(block_size) {
            return 0;
        }
        let file_size = file_size as u64;
        let block_size = u64::from(block_size as u32);
        file_size.div_ceil(block_size)
    }
}
