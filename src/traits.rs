//! Provide traits for the clustering algorithms
//!

use std::error::Error;

use crate::dataset::DataSet;
use crate::Float;

/// Partition a dataset into an ordered list of clusters
///
/// Every clustering algorithm in the workspace implements this trait on its checked
/// hyperparameters. The meaning of each output slot is algorithm specific: DBSCAN reserves
/// index `0` for noise, k-means uses the centroid index, hierarchical clustering keeps the
/// order of the final dendrogram level.
pub trait Cluster<F: Float, E: Error + From<crate::error::Error>> {
    fn cluster(&self, dataset: &DataSet<F>) -> Result<Vec<DataSet<F>>, E>;
}
