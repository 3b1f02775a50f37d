//! Defines [`Histogram`], the per-label observation counter.

use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

/// Counts the class labels observed over a set of training examples.
///
/// The bin table maps each label to the number of times it was
/// observed; the total count equals the sum over all bins at all
/// times. Labels are introduced on first observation, so adding
/// never fails.
///
/// A histogram is owned by a single learner node while it
/// accumulates. Partial histograms built by independent workers over
/// disjoint example subsets are combined with [`Histogram::merge`].
///
/// # Example
/// ```
/// use labelstats::Histogram;
/// let mut histogram = Histogram::new();
/// histogram.add("wall");
/// histogram.add("floor");
/// histogram.add("wall");
///
/// assert_eq!(histogram.count(), 3);
/// assert_eq!(histogram.bins()["wall"], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram<L: Ord> {
    bins: BTreeMap<L, usize>,
    count: usize,
}

impl<L: Ord> Histogram<L> {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self { bins: BTreeMap::new(), count: 0 }
    }


    /// Records one observation of `label`.
    #[inline]
    pub fn add(&mut self, label: L) {
        *self.bins.entry(label).or_insert(0) += 1;
        self.count += 1;
    }


    /// Records `n` observations of `label` at once.
    /// Equivalent to `n` calls to [`Histogram::add`].
    #[inline]
    pub fn add_count(&mut self, label: L, n: usize) {
        if n == 0 { return; }
        *self.bins.entry(label).or_insert(0) += n;
        self.count += n;
    }


    /// Returns the label-keyed bin table.
    pub fn bins(&self) -> &BTreeMap<L, usize> {
        &self.bins
    }


    /// Returns the total number of observations recorded so far.
    pub fn count(&self) -> usize {
        self.count
    }


    /// `true` if no observation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }


    /// Returns the number of distinct labels with at least one
    /// observation. Bins holding a zero count are not counted.
    pub fn distinct(&self) -> usize {
        self.bins.values()
            .filter(|&&n| n > 0)
            .count()
    }


    /// Merges `other` into `self` by adding bin counts and totals.
    ///
    /// Count addition is associative and commutative, so partial
    /// histograms accumulated by independent workers combine in any
    /// order to the same result as sequential accumulation.
    pub fn merge(&mut self, other: Self) {
        for (label, n) in other.bins {
            *self.bins.entry(label).or_insert(0) += n;
        }
        self.count += other.count;
    }
}

impl<L> Histogram<L>
    where L: Ord + Clone + Send + Sync,
{
    /// Accumulates a histogram over `labels` in parallel.
    /// Each worker counts a chunk on its own; the partial histograms
    /// are then combined with [`Histogram::merge`]. The result equals
    /// sequential accumulation regardless of chunking.
    pub fn from_labels_par(labels: &[L]) -> Self {
        labels.par_iter()
            .fold(Self::new, |mut histogram, label| {
                histogram.add(label.clone());
                histogram
            })
            .reduce(Self::new, |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    }
}

impl<L: Ord> Default for Histogram<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Ord> FromIterator<L> for Histogram<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut histogram = Self::new();
        histogram.extend(iter);
        histogram
    }
}

impl<L: Ord> Extend<L> for Histogram<L> {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        for label in iter {
            self.add(label);
        }
    }
}
