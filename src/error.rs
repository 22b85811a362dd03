//! Error types for bootstrap sampling and distribution comparison.

use std::fmt;

/// Errors surfaced by the sampler, the metrics, and the comparator.
///
/// Invalid inputs are always reported to the caller immediately; nothing is
/// silently truncated or corrected. Metric failures other than the
/// single-class case propagate through the sampler unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input vectors were empty or mismatched, or a configuration value was
    /// out of range (zero iterations, zero redraw cap, too-small comparator
    /// input).
    InvalidInput {
        /// Description of the rejected input.
        reason: String,
    },

    /// A discrimination metric was evaluated on data containing only one
    /// class, so the metric is undefined.
    ///
    /// Returned by the metric functions themselves. Inside the bootstrap
    /// loop this is intercepted and handled according to the configured
    /// [`DegeneratePolicy`](crate::DegeneratePolicy).
    SingleClass,

    /// A bootstrap round could not produce a valid resample.
    ///
    /// Under [`DegeneratePolicy::Propagate`](crate::DegeneratePolicy) this
    /// carries the first degenerate round. Under
    /// [`DegeneratePolicy::Redraw`](crate::DegeneratePolicy) it means the
    /// redraw cap was exhausted.
    DegenerateResample {
        /// Bootstrap round on which the failure occurred (0-based).
        round: usize,
        /// Number of draws made for this round before giving up.
        attempts: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { reason } => write!(f, "invalid input: {}", reason),
            Error::SingleClass => {
                write!(f, "metric undefined: input contains only one class")
            }
            Error::DegenerateResample { round, attempts } => write!(
                f,
                "degenerate resample in bootstrap round {} after {} draw(s)",
                round, attempts
            ),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Shorthand for an [`Error::InvalidInput`] with a formatted reason.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}
