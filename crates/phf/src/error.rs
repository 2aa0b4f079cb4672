//! Errors produced while building a [`crate::PerfectHashTable`].

use thiserror::Error;

/// Failures from [`crate::PerfectHashTable::build`] and
/// [`crate::PerfectHashTable::build_seeded`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhfError {
    /// The build graph contained a cycle on every one of `attempts`
    /// independent coefficient draws. Vanishingly unlikely for the default
    /// `3n`-cell sizing; retrying with a larger key set or a different seed
    /// is the only recourse.
    #[error("perfect hash construction did not converge after {attempts} attempts")]
    BuildExhausted {
        /// Number of independent `(h0, h1)` draws attempted.
        attempts: u32,
    },

    /// Internal consistency check failed after an apparently acyclic graph
    /// assignment: two distinct keys were assigned the same output. This
    /// indicates a bug in the assignment pass rather than an unlucky draw,
    /// since the BFS cycle check should have ruled it out.
    #[error("perfect hash assignment produced a collision for key at sorted position {position}")]
    InvariantViolated {
        /// Index into the caller's (deduplicated, sorted) key slice.
        position: usize,
    },
}
