#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `signature` owns the remote file's block index: the [`BlockInfo`] /
//! [`FileSignature`] data model, the [`Signer`] that builds one by scanning
//! a file, and the [`SignatureCodec`] that serializes it to the wire format
//! [`planner`](../planner/index.html) and a remote peer exchange.
//!
//! # Design
//!
//! [`Signer::compute_from_stream`] cuts a file into fixed-size blocks
//! (anchoring the final block to cover the tail, never emitting a short
//! block) and hashes each with [`checksums::RollingChecksum`] and
//! [`checksums::StrongDigest`]. With the `parallel` feature, per-block
//! hashing runs across a `rayon` thread pool once the (inherently
//! sequential) reads are collected into owned buffers. [`SignatureCodec`]
//! then frames the result with a repeated magic string so a truncated or
//! corrupted transfer is caught at deserialization rather than silently
//! misread.
//!
//! # Invariants
//!
//! - `blocks` is sorted ascending by `chksum`; [`SignatureCodec::deserialize`]
//!   rejects a stream whose blocks are not, rather than silently re-sorting
//!   a possibly-tampered signature.
//! - `blocks.len() == FileSignature::expected_block_count(file_size,
//!   block_size)`; the codec cross-checks this against the stream's actual
//!   length rather than trusting the declared count alone.
//!
//! # Errors
//!
//! [`SignatureError`] covers malformed wire data, invariant violations, and
//! propagated [`sync_io::IoError`]s.
//!
//! # Examples
//!
//! ```
//! use signature::{Signer, SignatureCodec};
//! use sync_io::MemStream;
//!
//! let mut file = MemStream::from_bytes(b"ABCDEFGH".to_vec());
//! let sig = Signer::compute_from_stream(&mut file, 8, 4).unwrap();
//!
//! let mut wire = MemStream::new();
//! SignatureCodec::serialize(&sig, &mut wire).unwrap();
//! wire.seek(0).unwrap();
//! let decoded = SignatureCodec::deserialize(&mut wire).unwrap();
//! assert_eq!(decoded, sig);
//! ```
//!
//! # See also
//!
//! - [`planner`](../planner/index.html) consumes a decoded [`FileSignature`]
//!   and a [`phf::PerfectHashTable`](../phf/struct.PerfectHashTable.html)
//!   built over its checksums.

mod codec;
mod error;
mod signer;
mod types;

pub use codec::SignatureCodec;
pub use error::SignatureError;
pub use signer::Signer;
pub use types::{BlockInfo, FileSignature, DIGEST_LEN};
