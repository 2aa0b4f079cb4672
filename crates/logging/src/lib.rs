#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` centralizes the verbosity levels used across the tdmsync
//! workspace and, behind the `tracing` feature, bridges them onto a
//! [`tracing`] subscriber so every crate shares one initialization point
//! instead of each reaching for its own `tracing_subscriber::fmt()` call.
//!
//! # Design
//!
//! [`Verbosity`] is a small ordered enum; [`init`] installs a global
//! `tracing` subscriber filtered to the requested level (or to the
//! `RUST_LOG` environment variable, if set, taking precedence). Without the
//! `tracing` feature the crate still exposes [`Verbosity`] so call sites do
//! not need to be feature-gated themselves, but [`init`] is a no-op.
//!
//! # Examples
//!
//! ```
//! use logging::Verbosity;
//!
//! logging::init(Verbosity::Info);
//! ```

use std::fmt;

/// Ordered verbosity levels, from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Errors and warnings.
    Warn,
    /// Warnings plus high-level progress (block counts, plan summaries).
    Info,
    /// Info plus per-block probe/match decisions.
    Debug,
    /// Everything, including per-byte buffer refills.
    Trace,
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Quiet => "quiet",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(s)
    }
}

/// Installs a global tracing subscriber at the given verbosity.
///
/// `RUST_LOG`, if set, overrides `level`. With the `tracing` feature
/// disabled this is a no-op, so callers can invoke it unconditionally.
pub fn init(level: Verbosity) {
    imp::init(level);
}

#[cfg(feature = "tracing")]
mod imp {
    use super::Verbosity;
    use tracing_subscriber::EnvFilter;

    pub(super) fn init(level: Verbosity) {
        let directive = match level {
            Verbosity::Quiet => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

#[cfg(not(feature = "tracing"))]
mod imp {
    use super::Verbosity;

    pub(super) fn init(_level: Verbosity) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_orders_quiet_below_trace() {
        assert!(Verbosity::Quiet < Verbosity::Trace);
    }

    #[test]
    fn display_matches_level() {
        assert_eq!(Verbosity::Debug.to_string(), "debug");
    }
}
