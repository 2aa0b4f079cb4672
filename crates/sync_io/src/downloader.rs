//! The [`Downloader`] capability and the byte-range multipart response
//! grammar it is built on.
//!
//! Actually opening an HTTP connection is a caller responsibility — this
//! module only defines the contract and the pure parsing logic described in
//! the wire format, so the grammar can be unit-tested without a network
//! stack.

use thiserror::Error;

use crate::stream::{ByteStream, IoError};

/// One requested byte range, identical in shape to an HTTP `Range:
/// bytes=offset-(offset+len-1)` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRequest {
    /// Start offset of the range, in bytes.
    pub offset: i64,
    /// Length of the range, in bytes.
    pub len: i64,
}

/// Errors raised while fetching byte ranges from a remote source.
#[derive(Debug, Error)]
pub enum DownloaderError {
    /// The downloader wrote a different number of bytes than the sum of the
    /// requested ranges' lengths.
    #[error("downloader wrote {written} bytes but {requested} were requested")]
    RangeMismatch {
        /// Total bytes requested across all ranges.
        requested: u64,
        /// Total bytes actually written to the sink.
        written: u64,
    },
    /// The server did not advertise `Accept-Ranges: bytes`, returned a
    /// non-2xx status, or otherwise cannot serve partial content.
    #[error("server does not support byte-range requests: {reason}")]
    HttpUnsupported {
        /// Human-readable explanation.
        reason: String,
    },
    /// A multipart/byteranges response body did not match the grammar in
    /// its own `Content-Type` boundary declaration.
    #[error("malformed multipart/byteranges response: {reason}")]
    MalformedMultipart {
        /// Human-readable explanation.
        reason: String,
    },
    /// An underlying stream operation failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Fetches a set of byte ranges from a URL, writing the concatenated bytes
/// into `sink` in the order the ranges were requested.
///
/// Implementations should issue HTTP/1.1 Range requests: a single range as
/// a single-range response, multiple ranges as a `multipart/byteranges`
/// response (parsed with [`parse_multipart_byteranges`]). Success requires
/// both a 2xx HTTP status *and* a successful transport-layer completion —
/// never just one or the other.
pub trait Downloader {
    /// Fetches `ranges` from `url` and writes their concatenated bytes to
    /// `sink`, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`DownloaderError::RangeMismatch`] if the number of bytes
    /// written does not equal the sum of the requested lengths, and
    /// [`DownloaderError::HttpUnsupported`] if the server cannot serve
    /// partial content.
    fn fetch(
        &self,
        url: &str,
        ranges: &[RangeRequest],
        sink: &mut dyn ByteStream,
    ) -> Result<(), DownloaderError>;
}

/// Reference [`Downloader`] that serves ranges out of a local
/// [`ByteStream`] standing in for "the remote file".
///
/// Used by the CLI's `update --file` mode (where the "remote" is simply
/// another local file) and by the test suite, which has no real network
/// stack to exercise.
pub struct FileRangeDownloader<'a> {
    source: std::cell::RefCell<&'a mut dyn ByteStream>,
}

impl<'a> FileRangeDownloader<'a> {
    /// Serves ranges out of `source`.
    pub fn new(source: &'a mut dyn ByteStream) -> Self {
        Self {
            source: std::cell::RefCell::new(source),
        }
    }
}

impl Downloader for FileRangeDownloader<'_> {
    fn fetch(
        &self,
        _url: &str,
        ranges: &[RangeRequest],
        sink: &mut dyn ByteStream,
    ) -> Result<(), DownloaderError> {
        let mut source = self.source.borrow_mut();
        let mut written = 0u64;
        let requested: u64 = ranges.iter().map(|r| r.len as u64).sum();
        let mut buf = Vec::new();
        for range in ranges {
            source.seek(range.offset as u64)?;
            buf.resize(range.len as usize, 0);
            source.read(&mut buf)?;
            sink.write(&buf)?;
            written += range.len as u64;
        }
        if written != requested {
            return Err(DownloaderError::RangeMismatch { requested, written });
        }
        Ok(())
    }
}

/// Extracts the `boundary` parameter from a `Content-Type:
/// multipart/byteranges; boundary=...` header value.
///
/// # Errors
///
/// Returns [`DownloaderError::MalformedMultipart`] if no `boundary=`
/// parameter is present.
pub fn extract_boundary(content_type: &str) -> Result<&str, DownloaderError> {
    content_type
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("boundary="))
        .map(|token| token.trim_matches('"'))
        .ok_or_else(|| DownloaderError::MalformedMultipart {
            reason: "Content-Type is missing a boundary parameter".to_owned(),
        })
}

/// Splits a `multipart/byteranges` response body into its constituent part
/// bodies, in order.
///
/// The grammar (RFC 7233 framing, as produced by a compliant HTTP server):
/// each part starts with a `--<boundary>` delimiter line, followed by the
/// part's own headers, a blank line, and the part's raw bytes; the final
/// delimiter is suffixed with `--`.
///
/// # Errors
///
/// Returns [`DownloaderError::MalformedMultipart`] if the body does not
/// contain at least an opening and a closing boundary, if the closing
/// boundary is not actually terminal, or if a part is missing its
/// header/body separator.
pub fn parse_multipart_byteranges(
    content_type: &str,
    body: &[u8],
) -> Result<Vec<Vec<u8>>, DownloaderError> {
    let boundary = extract_boundary(content_type)?;
    let marker = format!("--{boundary}");
    let marker = marker.as_bytes();
    let finder = memchr::memmem::Finder::new(marker);

    let mut starts = Vec::new();
    let mut search_from = 0usize;
    while let Some(rel) = finder.find(&body[search_from..]) {
        let abs = search_from + rel;
        starts.push(abs);
        search_from = abs + marker.len();
    }
    if starts.len() < 2 {
        return Err(DownloaderError::MalformedMultipart {
            reason: "response does not contain opening and closing boundaries".to_owned(),
        });
    }

    let last_after = *starts.last().expect("checked len >= 2") + marker.len();
    if !body[last_after..].starts_with(b"--") {
        return Err(DownloaderError::MalformedMultipart {
            reason: "final boundary is not marked terminal".to_owned(),
        });
    }

    let mut parts = Vec::with_capacity(starts.len() - 1);
    for window in starts.windows(2) {
        let seg_start = window[0] + marker.len();
        let seg_end = window[1];
        let mut seg = &body[seg_start..seg_end];
        seg = seg.strip_prefix(b"\r\n").unwrap_or(seg);

        let header_end = memchr::memmem::find(seg, b"\r\n\r\n").ok_or_else(|| {
            DownloaderError::MalformedMultipart {
                reason: "part is missing a header/body separator".to_owned(),
            }
        })?;
        let mut data = &seg[header_end + 4..];
        data = data.strip_suffix(b"\r\n").unwrap_or(data);
        parts.push(data.to_vec());
    }
    Ok(parts)
}
