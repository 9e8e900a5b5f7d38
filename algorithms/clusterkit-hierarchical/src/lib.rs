//! # Hierarchical Clustering
//!
//! `clusterkit-hierarchical` provides an implementation of agglomerative hierarchical clustering.
//! In this clustering algorithm, each point is first considered as a separate cluster. During each
//! step, the two closest clusters are merged into a new cluster, until the requested number of
//! clusters is reached. How close two clusters are is measured by a
//! [`Proximity`](clusterkit::proximity::Proximity) (the linkage) built on top of a
//! [`Distance`](clusterkit::distance::Distance) between their instances.
//!
//! ## The big picture
//!
//! `clusterkit-hierarchical` is a crate in the `clusterkit` workspace and implements the
//! [`Cluster`](clusterkit::traits::Cluster) trait shared by all of its algorithms.
//!
//! ## Current state
//!
//! `clusterkit-hierarchical` keeps the full proximity matrix between the current clusters and
//! updates it after every merge, so a run costs O(n²) memory and O(n³) time. Besides the final
//! partition, the whole merge history is available as a [`Dendrogram`].
//!
//! ## Example
//!
//! ```rust
//! use clusterkit::distance::L2Dist;
//! use clusterkit::prelude::*;
//! use clusterkit::proximity::MinProximity;
//! use clusterkit_hierarchical::HierarchicalCluster;
//! use ndarray::array;
//!
//! let observations = DataSet::from(array![[0., 0.], [0., 1.], [10., 10.], [10., 11.]]);
//!
//! let clusters = HierarchicalCluster::params(MinProximity, L2Dist, 2)
//!     .check()
//!     .unwrap()
//!     .cluster(&observations)
//!     .unwrap();
//!
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].len(), 2);
//! assert_eq!(clusters[1].len(), 2);
//! ```

use clusterkit::distance::{Distance, L2Dist};
use clusterkit::proximity::Proximity;
use clusterkit::traits::Cluster;
use clusterkit::{DataSet, Float};
use log::{debug, trace};
use ndarray::Array2;

mod dendrogram;
mod error;
mod hyperparams;

pub use dendrogram::{Dendrogram, Merge};
pub use error::{HierarchicalError, HierarchicalParamsError, Result};
pub use hyperparams::{HierarchicalParams, HierarchicalValidParams};

/// Agglomerative hierarchical clustering
///
/// In this clustering algorithm, each point is first considered as a separate cluster. During each
/// step, the two clusters with the lowest proximity are merged, until `n_clusters` clusters are
/// left.
///
/// ## The algorithm
///
/// - Level 0 holds one singleton cluster per instance, in dataset order. Their proximities are
///   always computed with the Euclidean distance, whatever the configured distance.
/// - At every step the upper triangle of the proximity matrix is scanned row by row and the
///   first pair `(x, y)`, `x < y`, holding the strictly smallest proximity is selected.
/// - Cluster `y` is appended to cluster `x`, the merged cluster takes the position of `x` and
///   every other cluster keeps its relative order.
/// - Proximities between untouched clusters are carried over, the ones involving the merged
///   cluster are recomputed with the configured proximity and distance.
///
/// The output is the level holding `n_clusters` clusters.
pub struct HierarchicalCluster;

impl HierarchicalCluster {
    /// Configures the linkage, the distance it is built on and the number of clusters to stop at
    pub fn params<F: Float, P: Proximity<F>, D: Distance<F>>(
        proximity: P,
        dist_fn: D,
        n_clusters: usize,
    ) -> HierarchicalParams<F, P, D> {
        HierarchicalParams::new(proximity, dist_fn, n_clusters)
    }
}

/// Current clusters of a run and the proximities between them
struct Agglomeration<F: Float> {
    clusters: Vec<DataSet<F>>,
    // only the upper triangle is maintained
    proximities: Array2<F>,
}

impl<F: Float> Agglomeration<F> {
    /// One singleton cluster per instance
    fn new<P: Proximity<F>>(proximity: &P, dataset: &DataSet<F>) -> Result<Self> {
        let clusters = dataset
            .iter()
            .map(|instance| DataSet::from_instance(instance.clone()))
            .collect::<Vec<_>>();

        let n_clusters = clusters.len();
        let mut proximities = Array2::zeros((n_clusters, n_clusters));
        for i in 0..n_clusters {
            for j in i + 1..n_clusters {
                proximities[[i, j]] = proximity.compute(&L2Dist, &clusters[i], &clusters[j])?;
            }
        }

        Ok(Agglomeration {
            clusters,
            proximities,
        })
    }

    fn len(&self) -> usize {
        self.clusters.len()
    }

    /// First pair of the upper triangle, in row-major order, with the smallest proximity
    fn closest_pair(&self) -> (usize, usize, F) {
        let n_clusters = self.len();
        let (mut closest, mut min_proximity) = ((0, 1), F::infinity());

        for x in 0..n_clusters {
            for y in x + 1..n_clusters {
                if self.proximities[[x, y]] < min_proximity {
                    closest = (x, y);
                    min_proximity = self.proximities[[x, y]];
                }
            }
        }

        (closest.0, closest.1, self.proximities[[closest.0, closest.1]])
    }

    /// Merge the two closest clusters, needs at least two of them
    fn merge_closest<P: Proximity<F>, D: Distance<F>>(
        &mut self,
        proximity: &P,
        dist_fn: &D,
        step: usize,
    ) -> Result<Merge<F>> {
        let (left, right, min_proximity) = self.closest_pair();

        let merged = DataSet::merge(&self.clusters[left], &self.clusters[right])?;
        self.clusters[left] = merged;
        self.clusters.remove(right);

        // index in the previous matrix of a cluster of the new level
        let previous = |idx: usize| if idx < right { idx } else { idx + 1 };

        let n_clusters = self.len();
        let mut proximities = Array2::zeros((n_clusters, n_clusters));
        for x in 0..n_clusters {
            for y in x + 1..n_clusters {
                proximities[[x, y]] = if x == left || y == left {
                    proximity.compute(dist_fn, &self.clusters[x], &self.clusters[y])?
                } else {
                    self.proximities[[previous(x), previous(y)]]
                };
            }
        }
        self.proximities = proximities;

        trace!(
            "hierarchical step {}: merged clusters {} and {} at proximity {}",
            step,
            left,
            right,
            min_proximity
        );

        Ok(Merge {
            step,
            left,
            right,
            proximity: min_proximity,
        })
    }
}

impl<F: Float, P: Proximity<F>, D: Distance<F>> HierarchicalValidParams<F, P, D> {
    fn start(&self, dataset: &DataSet<F>) -> Result<Agglomeration<F>> {
        if dataset.len() < self.n_clusters() {
            return Err(HierarchicalError::NotEnoughSamples {
                n_samples: dataset.len(),
                n_clusters: self.n_clusters(),
            });
        }

        Agglomeration::new(self.proximity(), dataset)
    }

    /// Every level of the merge tree, from the singletons down to `n_clusters` clusters
    pub fn dendrogram(&self, dataset: &DataSet<F>) -> Result<Dendrogram<F>> {
        let mut agglomeration = self.start(dataset)?;
        let mut dendrogram = Dendrogram::new(agglomeration.clusters.clone());

        let mut step = 1;
        while agglomeration.len() > self.n_clusters() {
            let merge = agglomeration.merge_closest(self.proximity(), self.dist_fn(), step)?;
            dendrogram.push(merge, agglomeration.clusters.clone());
            step += 1;
        }

        Ok(dendrogram)
    }
}

impl<F: Float, P: Proximity<F>, D: Distance<F>> Cluster<F, HierarchicalError>
    for HierarchicalValidParams<F, P, D>
{
    fn cluster(&self, dataset: &DataSet<F>) -> Result<Vec<DataSet<F>>> {
        let mut agglomeration = self.start(dataset)?;

        let mut step = 1;
        while agglomeration.len() > self.n_clusters() {
            agglomeration.merge_closest(self.proximity(), self.dist_fn(), step)?;
            step += 1;
        }

        debug!(
            "hierarchical clustering: {} instances grouped in {} clusters after {} merges",
            dataset.len(),
            agglomeration.len(),
            step - 1
        );
        Ok(agglomeration.clusters)
    }
}
