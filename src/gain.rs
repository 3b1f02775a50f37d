//! Split-quality scoring built on histogram entropy.

use crate::Histogram;
use crate::ProbabilityMassFunction;
use crate::error::StatsError;

/// Computes the information gain of partitioning `parent` into
/// `children`:
///
/// ```txt
/// gain = H(parent) - sum_i (|child_i| / |parent|) * H(child_i)
/// ```
///
/// A gain of zero means the partition leaves the label distribution
/// as impure as it was; larger gains indicate better candidate
/// splits. How ties or near-zero gains are broken is up to the
/// caller.
///
/// # Errors
///
/// [`StatsError::EmptyHistogram`] if `parent` has no observations;
/// such a candidate cannot be scored and should be skipped.
/// [`StatsError::MassUnderflow`] propagates from any histogram whose
/// label cardinality breaks the mass floor.
pub fn information_gain<L>(
    parent: &Histogram<L>,
    children: &[Histogram<L>],
) -> Result<f64, StatsError>
    where L: Ord + Clone,
{
    let before = ProbabilityMassFunction::from_histogram(parent)?
        .calculate_entropy();
    let after = weighted_entropy(children, parent.count())?;

    Ok(before - after)
}

/// Computes the entropy remaining after a split: each child's entropy
/// weighted by its share `|child| / total` of the observations.
/// Children with no observations carry zero weight and are skipped.
///
/// # Errors
///
/// [`StatsError::EmptyHistogram`] if `total` is zero.
pub fn weighted_entropy<L>(
    children: &[Histogram<L>],
    total: usize,
) -> Result<f64, StatsError>
    where L: Ord + Clone,
{
    if total == 0 {
        return Err(StatsError::EmptyHistogram);
    }
    let total = total as f64;

    let mut entropy = 0f64;
    for child in children {
        if child.is_empty() { continue; }

        let share = child.count() as f64 / total;
        let child_entropy = ProbabilityMassFunction::from_histogram(child)?
            .calculate_entropy();
        entropy += share * child_entropy;
    }
    Ok(entropy)
}
