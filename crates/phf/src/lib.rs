#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `phf` builds a minimal perfect hash function over a fixed set of `u32`
//! rolling-checksum values, so [`planner`](../planner/index.html) can
//! probe a sliding window's checksum against the block index in `O(1)`
//! instead of a hash-map lookup's amortized cost and collision chains.
//!
//! # Design
//!
//! The construction is CHM92 (Czech, Havas, Majewski 1992): two
//! independently-sampled universal hash functions place each key as an
//! edge in a random graph; if that graph happens to be acyclic, a
//! breadth-first walk over it assigns every vertex a value such that
//! XOR-ing a key's two vertex values reproduces that key's unique index.
//! Cyclic draws are discarded and resampled; see [`PerfectHashTable::build`].
//!
//! # Invariants
//!
//! - For the key set the table was built over, [`PerfectHashTable::evaluate`]
//!   is injective: distinct keys map to distinct outputs in
//!   `0..keys.len()` (after collapsing adjacent duplicates).
//! - [`PerfectHashTable::evaluate`] never panics, including for keys outside
//!   the build set; it simply returns an unconstrained value, since
//!   membership is confirmed separately by a strong digest comparison.
//!
//! # Errors
//!
//! [`PhfError::BuildExhausted`] if no acyclic graph was found within the
//! attempt budget; [`PhfError::InvariantViolated`] if an assignment that
//! passed the cycle check still failed the post-build verification pass
//! (a defect in the assignment code, not an unlucky draw).
//!
//! # Examples
//!
//! ```
//! use phf::PerfectHashTable;
//!
//! let keys = [3u32, 17, 200, 8080];
//! let table = PerfectHashTable::build_seeded(&keys, 0).unwrap();
//! assert_eq!(table.evaluate(keys[0]), 0);
//! ```
//!
//! # See also
//!
//! - [`signature`](../signature/index.html) sorts the block index's
//!   checksums ascending, the order this crate expects.
//! - [`planner`](../planner/index.html) is the sole consumer of
//!   [`PerfectHashTable::evaluate`].

mod error;
mod hash;
mod table;

pub use error::PhfError;
pub use table::PerfectHashTable;
