//! Defines [`ProbabilityMassFunction`], a normalized histogram snapshot.

use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use crate::Histogram;
use crate::error::StatsError;
use crate::constants::{
    MASS_FLOOR,
    ELEMENT_DISPLAY_LIMIT,
};

/// A probability mass function (PMF) over class labels,
/// built as a normalized version of a [`Histogram`] snapshot.
///
/// The PMF copies its mass table at construction time, so a histogram
/// that keeps accumulating afterwards does not invalidate it. Once
/// built it never mutates and can be shared freely across threads.
///
/// # Example
/// ```
/// use labelstats::{Histogram, ProbabilityMassFunction};
/// let mut histogram = Histogram::new();
/// histogram.add_count("wall", 3);
/// histogram.add_count("floor", 1);
///
/// let pmf = ProbabilityMassFunction::from_histogram(&histogram)
///     .unwrap();
/// assert_eq!(pmf.masses()["wall"], 0.75);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMassFunction<L: Ord> {
    masses: BTreeMap<L, f64>,
}

impl<L> ProbabilityMassFunction<L>
    where L: Ord + Clone,
{
    /// Builds a PMF by dividing each bin count of `histogram` by its
    /// total count. Bins holding a zero count carry no mass and are
    /// dropped.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyHistogram`] if `histogram` has no
    ///   observations. Such a histogram cannot be normalized;
    ///   the caller should skip the partition it came from.
    /// - [`StatsError::MassUnderflow`] if a computed mass falls below
    ///   [`MASS_FLOOR`](crate::constants::MASS_FLOOR), i.e. the label
    ///   cardinality is too large for the sample size.
    pub fn from_histogram(histogram: &Histogram<L>)
        -> Result<Self, StatsError>
    {
        let total = histogram.count();
        if total == 0 {
            return Err(StatsError::EmptyHistogram);
        }

        let mut masses = BTreeMap::new();
        for (label, &count) in histogram.bins() {
            if count == 0 { continue; }

            let mass = count as f64 / total as f64;
            if mass < MASS_FLOOR {
                return Err(StatsError::MassUnderflow { count, total });
            }
            masses.insert(label.clone(), mass);
        }

        Ok(Self { masses })
    }
}

impl<L: Ord> ProbabilityMassFunction<L> {
    /// Returns the masses for the various labels.
    /// The masses sum to one within
    /// [`MASS_SUM_TOLERANCE`](crate::constants::MASS_SUM_TOLERANCE).
    pub fn masses(&self) -> &BTreeMap<L, f64> {
        &self.masses
    }


    /// Calculates the entropy of the PMF in bits, using the definition
    /// `H(X) = - sum_i P(x_i) log2(P(x_i))`.
    ///
    /// When the labels are equally likely the entropy reaches
    /// `log2(k)` for `k` distinct labels; when a single label holds
    /// all the mass it is `0`. A mass of exactly zero contributes
    /// zero to the sum, following `lim_{p -> 0+} p log2(p) = 0`.
    #[inline]
    pub fn calculate_entropy(&self) -> f64 {
        let entropy = self.masses.values()
            .copied()
            .map(|mass| {
                if mass > 0f64 { mass * mass.log2() } else { 0f64 }
            })
            .sum::<f64>();
        -entropy
    }


    /// Returns the label holding the largest mass, with its mass.
    /// `None` only for a PMF without entries,
    /// which construction rules out.
    pub fn best_label(&self) -> Option<(&L, f64)> {
        self.masses.iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(label, &mass)| (label, mass))
    }
}

impl<L> fmt::Display for ProbabilityMassFunction<L>
    where L: Ord + fmt::Display,
{
    /// Bounded rendering for diagnostics: the first
    /// [`ELEMENT_DISPLAY_LIMIT`](crate::constants::ELEMENT_DISPLAY_LIMIT)
    /// masses followed by the number of remaining entries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.masses.iter()
            .take(ELEMENT_DISPLAY_LIMIT)
            .map(|(label, mass)| format!("{label}: {mass:.5}"))
            .collect::<Vec<_>>()
            .join(", ");

        let rest = self.masses.len().saturating_sub(ELEMENT_DISPLAY_LIMIT);
        if rest == 0 {
            write!(f, "{{ {shown} }}")
        } else {
            write!(f, "{{ {shown}, ... ({rest} more) }}")
        }
    }
}
