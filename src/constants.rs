//! Numeric guards and display limits shared across the crate.

/// Smallest mass a probability-mass-function bin may carry.
/// A computed mass below this floor means the label cardinality is
/// too large for the number of observations.
pub const MASS_FLOOR:            f64 = 1e-9;

/// Absolute tolerance within which the masses of a PMF sum to one.
pub const MASS_SUM_TOLERANCE:    f64 = 1e-6;

/// Number of entries shown when rendering a PMF for diagnostics.
pub const ELEMENT_DISPLAY_LIMIT: usize = 3;
