use std::cmp::Ordering;
use std::collections::VecDeque;

use clusterkit::distance::{Distance, L2Dist};
use clusterkit::traits::Cluster;
use clusterkit::{DataSet, Float};
use log::debug;
use ndarray::Array2;

use crate::dbscan::{DbscanError, DbscanParams, DbscanValidParams};

#[derive(Clone, Debug, PartialEq)]
/// DBSCAN (Density-based Spatial Clustering of Applications with Noise)
/// clusters together points which are close together with enough neighbors
/// and labels points which are sparsely neighbored as noise.
///
/// As it groups together points in dense regions the number of clusters is
/// determined by the dataset and distance tolerance not the user.
///
/// We provide an implementation of the standard O(N^2) matrix-based algorithm.
/// More details on DBSCAN can be found
/// [here](https://en.wikipedia.org/wiki/DBSCAN).
///
/// ## The algorithm
///
/// - The full pairwise distance matrix is computed. Its diagonal is zero, so every point is
///   a neighbour of itself.
/// - Two points are neighbours when their distance is strictly below `tolerance`.
/// - A point with at least `min_points` neighbours (itself included) is a *core* point. A
///   point that isn't core but has a core neighbour is a *border* point, every other point
///   is *noise*.
/// - Core points are visited in index order; each one not yet in a cluster opens a new cluster
///   which is flooded breadth-first through neighbouring core points.
/// - Each border point joins the cluster of its nearest core neighbour. On ties the neighbour
///   with the lowest index wins.
///
/// ## Output
///
/// `cluster` returns `k + 1` data sets. Index `0` holds the noise points, indices `1..=k` the
/// clusters in order of discovery.
///
/// ## Tutorial
///
/// ```rust
/// use clusterkit::prelude::*;
/// use clusterkit_clustering::Dbscan;
/// use ndarray::array;
///
/// let observations = DataSet::from(array![[0., 0.], [0., 1.], [10., 10.], [10., 11.], [50., 50.]]);
///
/// // `min_points` is the only mandatory parameter, the tolerance defaults to 1e-4
/// let clusters = Dbscan::params(2)
///     .tolerance(2.)
///     .check()
///     .unwrap()
///     .cluster(&observations)
///     .unwrap();
///
/// assert_eq!(clusters.len(), 3);
/// // the isolated point is noise
/// assert_eq!(clusters[0].len(), 1);
/// assert_eq!(clusters[1].len(), 2);
/// assert_eq!(clusters[2].len(), 2);
/// ```
pub struct Dbscan;

impl Dbscan {
    /// Configures the hyperparameters with the minimum number of points required to form a cluster
    ///
    /// Defaults are provided if the optional parameters are not specified:
    /// * `tolerance = 1e-4`
    /// * `dist_fn = L2Dist` (Euclidean distance)
    pub fn params<F: Float>(min_points: usize) -> DbscanParams<F, L2Dist> {
        DbscanParams::new(min_points, L2Dist)
    }

    /// Configures the hyperparameters with the minimum number of points and a custom distance
    /// metric
    pub fn params_with<F: Float, D: Distance<F>>(
        min_points: usize,
        dist_fn: D,
    ) -> DbscanParams<F, D> {
        DbscanParams::new(min_points, dist_fn)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointKind {
    Core,
    Border,
    Noise,
}

impl<F: Float, D: Distance<F>> Cluster<F, DbscanError> for DbscanValidParams<F, D> {
    fn cluster(&self, dataset: &DataSet<F>) -> Result<Vec<DataSet<F>>, DbscanError> {
        let memberships = self.memberships(dataset)?;
        let n_clusters = memberships.iter().flatten().max().copied().unwrap_or(0);

        let mut clusters = vec![DataSet::new(); n_clusters + 1];
        for (instance, membership) in dataset.iter().zip(memberships) {
            clusters[membership.unwrap_or(0)].push(instance.clone())?;
        }

        debug!(
            "dbscan: {} clusters, {} noise points out of {}",
            n_clusters,
            clusters[0].len(),
            dataset.len()
        );
        Ok(clusters)
    }
}

impl<F: Float, D: Distance<F>> DbscanValidParams<F, D> {
    /// Cluster id of every instance of `dataset`
    ///
    /// Ids start at `1`, noise points are `None`.
    pub fn memberships(&self, dataset: &DataSet<F>) -> Result<Vec<Option<usize>>, DbscanError> {
        let n_points = dataset.len();
        let distances = distance_matrix(self.dist_fn(), dataset)?;
        let tolerance = self.tolerance();
        let neighbors = distances.mapv(|d| d < tolerance);

        let mut kinds = neighbors
            .rows()
            .into_iter()
            .map(|row| {
                if row.iter().filter(|&&adjacent| adjacent).count() >= self.minimum_points() {
                    PointKind::Core
                } else {
                    PointKind::Noise
                }
            })
            .collect::<Vec<_>>();

        for i in 0..n_points {
            if kinds[i] == PointKind::Noise
                && (0..n_points).any(|j| neighbors[[i, j]] && kinds[j] == PointKind::Core)
            {
                kinds[i] = PointKind::Border;
            }
        }

        let mut memberships = vec![None; n_points];
        let mut current_cluster_id = 0;
        let mut search_queue = VecDeque::with_capacity(n_points);

        for i in 0..n_points {
            if kinds[i] != PointKind::Core || memberships[i].is_some() {
                continue;
            }
            current_cluster_id += 1;
            memberships[i] = Some(current_cluster_id);
            search_queue.push_back(i);

            // Only core points propagate the cluster, border points are attached afterwards
            while let Some(candidate_idx) = search_queue.pop_front() {
                for j in 0..n_points {
                    if neighbors[[candidate_idx, j]]
                        && memberships[j].is_none()
                        && kinds[j] == PointKind::Core
                    {
                        memberships[j] = Some(current_cluster_id);
                        search_queue.push_back(j);
                    }
                }
            }
        }

        for i in 0..n_points {
            if kinds[i] != PointKind::Border || memberships[i].is_some() {
                continue;
            }
            let mut nearest_core: Option<(usize, F)> = None;
            for j in 0..n_points {
                if neighbors[[i, j]] && kinds[j] == PointKind::Core {
                    let dist = distances[[i, j]];
                    if nearest_core.map_or(true, |(_, min_dist)| dist < min_dist) {
                        nearest_core = Some((j, dist));
                    }
                }
            }
            let label = nearest_core.and_then(|(j, _)| memberships[j]);
            memberships[i] = label;
        }

        Ok(memberships)
    }

    /// Distance between each point and its `k`-th nearest neighbour, sorted in ascending order
    ///
    /// The point itself is its first neighbour (at distance zero), so `k = 1` always yields
    /// zeros. When `k` exceeds the number of points the farthest neighbour is used instead.
    /// Plotting this curve is the usual way of picking `tolerance` for a given `min_points`.
    pub fn k_distance(&self, dataset: &DataSet<F>, k: usize) -> Result<Vec<F>, DbscanError> {
        if k == 0 {
            return Err(DbscanError::KDistance);
        }
        let distances = distance_matrix(self.dist_fn(), dataset)?;

        let mut k_distances = distances
            .rows()
            .into_iter()
            .map(|row| {
                let mut sorted = row.to_vec();
                sorted.sort_by(ascending);
                sorted[k.min(sorted.len()) - 1]
            })
            .collect::<Vec<_>>();
        k_distances.sort_by(ascending);

        Ok(k_distances)
    }
}

impl<F: Float, D: Distance<F>> DbscanParams<F, D> {
    /// Checks the hyperparameters and computes the k-distances with them
    pub fn k_distance(&self, dataset: &DataSet<F>, k: usize) -> Result<Vec<F>, DbscanError> {
        use clusterkit::ParamGuard;

        self.check_ref()?.k_distance(dataset, k)
    }
}

fn ascending<F: Float>(a: &F, b: &F) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Symmetric matrix of pairwise distances, the diagonal is left at zero
fn distance_matrix<F: Float, D: Distance<F>>(
    dist_fn: &D,
    dataset: &DataSet<F>,
) -> Result<Array2<F>, clusterkit::Error> {
    let n_points = dataset.len();
    let mut distances = Array2::zeros((n_points, n_points));

    for i in 0..n_points {
        for j in i + 1..n_points {
            let dist = dist_fn.distance(&dataset[i], &dataset[j])?;
            distances[[i, j]] = dist;
            distances[[j, i]] = dist;
        }
    }

    Ok(distances)
}
