use clusterkit::{DataSet, Float};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A single merge step of agglomerative clustering
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Merge<F> {
    /// Level produced by this merge, the first merge produces level `1`
    pub step: usize,
    /// Position of the first merged cluster in the previous level, and of the merged cluster
    /// in the new one
    pub left: usize,
    /// Position of the second merged cluster in the previous level
    pub right: usize,
    /// Proximity between the two merged clusters
    pub proximity: F,
}

/// Merge history of agglomerative clustering
///
/// Level `0` holds one singleton per instance and level `i` the partition after `i` merges.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Dendrogram<F: Float> {
    levels: Vec<Vec<DataSet<F>>>,
    merges: Vec<Merge<F>>,
}

impl<F: Float> Dendrogram<F> {
    pub(crate) fn new(singletons: Vec<DataSet<F>>) -> Self {
        Dendrogram {
            levels: vec![singletons],
            merges: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, merge: Merge<F>, level: Vec<DataSet<F>>) {
        self.merges.push(merge);
        self.levels.push(level);
    }

    /// All partitions, from the singletons to the final one
    pub fn levels(&self) -> &[Vec<DataSet<F>>] {
        &self.levels
    }

    /// Partition after `step` merges
    pub fn level(&self, step: usize) -> Option<&[DataSet<F>]> {
        self.levels.get(step).map(|level| level.as_slice())
    }

    /// Merges in the order they happened, `merges()[i]` produced level `i + 1`
    pub fn merges(&self) -> &[Merge<F>] {
        &self.merges
    }

    /// The last level, the partition `cluster` returns
    pub fn into_partition(mut self) -> Vec<DataSet<F>> {
        self.levels.pop().unwrap_or_default()
    }
}
