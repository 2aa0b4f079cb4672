//! Errors from signature generation and (de)serialization.

use thiserror::Error;

/// Failures from [`crate::Signer::compute_from_stream`] and
/// [`crate::SignatureCodec`].
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The wire stream's header or footer magic did not read back as
    /// `"tdmsync."`, its length did not match `blocksCount`, or its block
    /// checksums were not sorted ascending.
    #[error("malformed signature: {reason}")]
    MalformedSignature {
        /// Human-readable description of what failed to validate.
        reason: &'static str,
    },

    /// A structural invariant was violated by in-memory construction rather
    /// than by an untrusted wire read (e.g. `blockSize == 0` passed to the
    /// signer).
    #[error("signature invariant violated: {reason}")]
    InvariantViolated {
        /// Human-readable description of the violated invariant.
        reason: &'static str,
    },

    /// The underlying byte stream failed.
    #[error(transparent)]
    Io(#[from] sync_io::IoError),
}
