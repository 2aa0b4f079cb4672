/// A contiguous copy operation that reconstructs one run of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentUse {
    /// Position in the source (local file or remote file) that bytes are
    /// taken from.
    pub src_offset: i64,
    /// Position in the output file this segment is placed at.
    pub dst_offset: i64,
    /// Length of the segment in bytes. Always greater than zero.
    pub size: i64,
    /// Whether the source is the remote file (`true`) or the local file
    /// (`false`).
    pub remote: bool,
}

/// An ordered plan for reconstructing a `fileSize`-byte output from local
/// bytes plus downloaded remote bytes.
///
/// `segments` covers `[0, file_size)` exactly once: sorted by `dst_offset`,
/// contiguous (no gaps or overlaps), starting at `dst_offset == 0` and
/// ending at `dst_offset + size == file_size` for the last segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Total size of the file this plan reconstructs.
    pub file_size: i64,
    /// The ordered segment list.
    pub segments: Vec<SegmentUse>,
    /// Sum of `size` over segments with `remote == false`.
    pub bytes_local: i64,
    /// Sum of `size` over segments with `remote == true`.
    pub bytes_remote: i64,
}

impl UpdatePlan {
    /// An empty plan for a zero-length file.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            file_size: 0,
            segments: Vec::new(),
            bytes_local: 0,
            bytes_remote: 0,
        }
    }
}
