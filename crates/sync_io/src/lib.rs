#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `sync_io` supplies the two capabilities tdmsync's core subsystems are
//! written against instead of concrete file or network types: a blocking
//! [`ByteStream`] (read/write/seek/tell/size) and a [`Downloader`] that
//! fetches byte ranges from a URL. Neither capability is part of THE CORE
//! algorithm; they exist so the core can be exercised without pulling in a
//! real filesystem or HTTP stack.
//!
//! # Design
//!
//! [`FileStream`] and [`MemStream`] are the two [`ByteStream`]
//! implementations shipped here; most tests across the workspace use
//! [`MemStream`] so they do not touch the filesystem. [`downloader`]
//! provides the byte-range request/response contract plus a pure,
//! transport-agnostic parser for the `multipart/byteranges` response
//! grammar (RFC 7233), since that parsing logic has no I/O of its own and
//! is worth testing independently of any particular HTTP client.
//!
//! # Invariants
//!
//! - [`ByteStream::read`] either fills the caller's buffer completely or
//!   returns [`IoError::ShortRead`]; it never yields a partial buffer.
//! - [`Downloader::fetch`] writes ranges to its sink in the order they were
//!   requested and fails with [`DownloaderError::RangeMismatch`] if the
//!   written byte count does not match the requested total.
//!
//! # Errors
//!
//! [`IoError`] covers stream failures; [`DownloaderError`] covers
//! range-fetch and multipart-parsing failures.
//!
//! # See also
//!
//! - [`signature`](../signature/index.html) and [`planner`](../planner/index.html)
//!   are generic over [`ByteStream`] rather than over `std::fs::File`
//!   directly, so they can be driven by [`MemStream`] in tests.

mod downloader;
mod stream;

pub use downloader::{
    extract_boundary, parse_multipart_byteranges, Downloader, DownloaderError,
    FileRangeDownloader, RangeRequest,
};
pub use stream::{ByteStream, FileStream, IoError, MemStream};
