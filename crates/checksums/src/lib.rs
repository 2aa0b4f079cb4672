#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` provides the two hash primitives the tdmsync delta engine
//! probes against: a weak, O(1)-slidable [`RollingChecksum`] used to find
//! candidate block matches, and a strong, collision-resistant
//! [`StrongDigest`] used to confirm them.
//!
//! # Design
//!
//! [`rolling`] implements a cyclic-shift checksum over a fixed 256-entry
//! lookup table. [`strong`] wraps a SHA-1-class digest behind a small
//! streaming API so the rest of the workspace never depends on the `sha1`
//! crate directly.
//!
//! # Invariants
//!
//! - Rolling checksum windows must be non-empty; any positive length is
//!   otherwise accepted, and [`RollingChecksum::slide`] carries the window
//!   length forward so a byte's contribution always cancels correctly
//!   regardless of alignment.
//! - All state lives in the [`RollingChecksum`] instance; there is no shared
//!   or process-global mutable state.
//!
//! # Errors
//!
//! [`RollingError`] reports an empty window passed to
//! [`RollingChecksum::compute`].
//!
//! # Examples
//!
//! ```
//! use checksums::RollingChecksum;
//!
//! let window = b"0123456789abcdef0123456789abcdef";
//! let checksum = RollingChecksum::compute(&window[..32]).unwrap();
//! let slid = checksum.slide(window[32], window[0]);
//! let recomputed = RollingChecksum::compute(&window[1..33]).unwrap();
//! assert_eq!(slid, recomputed);
//! ```
//!
//! # See also
//!
//! - [`signature`](../signature/index.html) uses both primitives to build a
//!   [`FileSignature`](../signature/struct.FileSignature.html).
//! - [`planner`](../planner/index.html) drives the sliding window over the
//!   local file during plan construction.

mod rolling;
mod strong;

pub use rolling::{RollingChecksum, RollingError};
pub use strong::{StrongDigest, DIGEST_LEN};
