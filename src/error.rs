//! Error types returned when deriving statistics from a histogram.

use std::fmt;

use crate::constants::MASS_FLOOR;

/// Errors arising when a histogram is turned into derived statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A PMF or gain was requested for a histogram with no
    /// observations. A split evaluator receiving this error should
    /// treat the candidate partition as unscorable and skip it.
    EmptyHistogram,
    /// A computed mass fell below [`MASS_FLOOR`].
    /// The label cardinality is too large for the sample size, so the
    /// epsilon-floor assumption no longer holds; this is not locally
    /// recoverable and should terminate the current training task.
    MassUnderflow {
        /// Number of observations in the offending bin.
        count: usize,
        /// Total number of observations in the histogram.
        total: usize,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHistogram => {
                write!(f, "cannot normalize a histogram with zero observations")
            },
            Self::MassUnderflow { count, total } => {
                write!(
                    f,
                    "mass {count}/{total} fell below the floor {MASS_FLOOR:e}"
                )
            },
        }
    }
}

impl std::error::Error for StatsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        let e = StatsError::EmptyHistogram;
        let msg = e.to_string();
        assert!(
            msg.contains("zero observations"),
            "unexpected message: {msg}"
        );
    }

    #[test]
    fn test_display_underflow() {
        let e = StatsError::MassUnderflow { count: 1, total: 2_000_000_000 };
        let msg = e.to_string();
        assert!(
            msg.contains("1/2000000000"),
            "unexpected message: {msg}"
        );
    }
}
