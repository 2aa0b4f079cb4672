//! Errors from update-plan construction and application.

use thiserror::Error;

/// Failures from [`crate::Planner::create_update_plan`] and
/// [`crate::PlanApplier::apply`].
#[derive(Debug, Error)]
pub enum PlanError {
    /// The extras stream's length did not match `plan.bytes_remote`, or a
    /// constructed plan failed its own disjoint-exact-cover invariant.
    #[error("plan invariant violated: {reason}")]
    InvariantViolated {
        /// Human-readable description of the violated invariant.
        reason: &'static str,
    },

    /// Perfect hash construction over the signature's checksums failed.
    #[error(transparent)]
    Phf(#[from] phf::PhfError),

    /// The signature was malformed or failed to (de)serialize.
    #[error(transparent)]
    Signature(#[from] signature::SignatureError),

    /// The underlying byte stream failed.
    #[error(transparent)]
    Io(#[from] sync_io::IoError),
}
