#![warn(missing_docs)]

//!
//! A crate that provides label-distribution statistics
//! for decision-tree and random-forest learners.
//!
//! This crate is built around two composed components.
//!
//! - Histogram
//!     Counts the class labels observed over a set of training examples.
//!     Partial histograms accumulated by independent workers over
//!     disjoint subsets can be merged in any order to the same result
//!     as sequential counting.
//!
//!
//! - Probability mass function (PMF)
//!     A normalized, immutable snapshot of a histogram.
//!     Its Shannon entropy measures how pure the underlying example
//!     set is; a split evaluator compares this quantity across
//!     candidate partitions to choose tree splits.

pub mod constants;
pub mod error;
pub mod histogram;
pub mod pmf;
pub mod gain;
pub mod example;
pub mod report;


pub use error::StatsError;

pub use histogram::Histogram;
pub use pmf::ProbabilityMassFunction;

pub use gain::{
    information_gain,
    weighted_entropy,
};

pub use example::{
    Example,
    InstanceReader,
    read_instances,
};
