#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `planner` is where the delta engine's core analysis happens: given a
//! remote file's [`signature::FileSignature`] and a local byte stream,
//! [`Planner::create_update_plan`] discovers which byte ranges of the local
//! file can be reused to reconstruct the remote file, and
//! [`PlanApplier::apply`] replays that plan against the local file plus the
//! downloaded remote ranges to produce the reconstructed output.
//!
//! # Design
//!
//! The scan slides a `blockSize`-byte window one byte at a time across the
//! local file, probing a [`phf::PerfectHashTable`] built over the
//! signature's sorted checksums. A checksum hit is confirmed with a strong
//! digest comparison before being accepted, since the weak checksum alone
//! permits false positives. Matched local runs are coalesced, the remaining
//! gaps become remote segments keyed by their destination offset (so a
//! downloader can address them directly), and the whole segment list is
//! sorted by `dstOffset` — deliberately not remote-first, which was an
//! earlier, incorrect ordering.
//!
//! # Invariants
//!
//! - The produced [`UpdatePlan`]'s segments are sorted by `dst_offset`,
//!   contiguous, and cover `[0, file_size)` exactly once.
//! - The first local match for any given remote block wins; later
//!   positions that also match are skipped once that block is claimed.
//!
//! # Errors
//!
//! [`PlanError`] aggregates perfect-hash build failures, signature errors,
//! I/O failures, and the planner's own invariant checks.
//!
//! # Examples
//!
//! ```
//! use planner::{Planner, PlanApplier};
//! use signature::Signer;
//! use sync_io::MemStream;
//!
//! let mut remote = MemStream::from_bytes(b"ABCDEFGH".to_vec());
//! let sig = Signer::compute_from_stream(&mut remote, 8, 4).unwrap();
//!
//! let mut local = MemStream::from_bytes(b"XYABCDEFGH".to_vec());
//! let plan = Planner::create_update_plan(&sig, &mut local).unwrap();
//! assert_eq!(plan.bytes_remote, 0);
//!
//! let mut extras = MemStream::new();
//! let mut output = MemStream::new();
//! PlanApplier::apply(&plan, &mut local, &mut extras, &mut output).unwrap();
//! assert_eq!(output.into_bytes(), b"ABCDEFGH");
//! ```
//!
//! # See also
//!
//! - [`signature`](../signature/index.html) supplies the block index this
//!   crate scans against.
//! - [`phf`](../phf/index.html) supplies the perfect hash the scan probes.

mod apply;
mod error;
mod scan;
mod types;

pub use apply::PlanApplier;
pub use error::PlanError;
pub use scan::Planner;
pub use types::{SegmentUse, UpdatePlan};
