//! Defines [`Example`], a labelled training instance.

use serde::{Serialize, Deserialize};

/// A single training example:
/// an opaque feature descriptor paired with its class label.
///
/// The descriptor layout is owned by the feature-extraction pipeline;
/// this crate only carries it alongside the label it was annotated
/// with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example<L> {
    descriptor: Vec<f64>,
    label: L,
}

impl<L> Example<L> {
    /// Creates a new example from a descriptor and its label.
    pub fn new(descriptor: Vec<f64>, label: L) -> Self {
        Self { descriptor, label }
    }


    /// Returns the feature descriptor.
    pub fn descriptor(&self) -> &[f64] {
        &self.descriptor[..]
    }


    /// Returns the class label.
    pub fn label(&self) -> &L {
        &self.label
    }


    /// Consumes the example and returns its label.
    pub fn into_label(self) -> L {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Histogram;

    #[test]
    fn test_labels_feed_a_histogram() {
        let examples = vec![
            Example::new(vec![0.1, 0.2], 5u32),
            Example::new(vec![0.3, 0.4], 5u32),
            Example::new(vec![0.5, 0.6], 7u32),
        ];

        let histogram = examples.into_iter()
            .map(Example::into_label)
            .collect::<Histogram<_>>();

        assert_eq!(histogram.count(), 3);
        assert_eq!(histogram.bins()[&5], 2);
        assert_eq!(histogram.bins()[&7], 1);
    }
}
