use std::cmp::Ordering;

use crate::k_means::errors::{KMeansError, KMeansParamsError};
use crate::k_means::{KMeansParams, KMeansValidParams};
use clusterkit::distance::{Distance, L2Dist};
use clusterkit::traits::Cluster;
use clusterkit::{DataSet, Float, Instance, ParamGuard};
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Number of leading instances a run is scored on
const SCORE_WINDOW: usize = 10;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// K-means clustering aims to partition a set of unlabeled observations into clusters,
/// where each observation belongs to the cluster with the nearest centroid.
///
/// The representative point of a cluster is called *centroid*. Under the Euclidean and cosine
/// distances it is the mean of the points within the cluster.
///
/// We provide the _standard algorithm_ (also known as Lloyd's Algorithm) together with a
/// repair step for centroids left without observations.
///
/// More details on the algorithm can be found
/// [here](https://en.wikipedia.org/wiki/K-means_clustering).
///
/// ## Standard algorithm
///
/// K-means is an iterative algorithm: it progressively refines the choice of centroids.
///
/// It's guaranteed to converge, even though it might not find the optimal set of centroids
/// (unfortunately it can get stuck in a local minimum, finding the optimal minimum if NP-hard!).
///
/// There are three steps in the standard algorithm:
/// - initialisation step: draw random centroids in the bounding box of the observations or
///   start from precomputed ones;
/// - assignment step: assign each observation to the nearest cluster
///                    (minimum distance between the observation and the cluster's centroid,
///                    ties go to the lowest cluster index);
/// - update step: recompute the centroid of each cluster.
///
/// The initialisation step is a one-off, done at the very beginning.
/// Assignment and update are repeated in a loop until convergence is reached (the fraction of
/// observations changing cluster is at most `threshold`, or we reach `max_n_iterations`).
///
/// ## Empty clusters
///
/// When the update step leaves some centroids without observations, the observations closest
/// to their own centroid become the new centroids of the empty clusters. The observations
/// themselves keep their cluster until the next assignment step, so an empty cluster can be
/// part of the final output.
///
/// ## Restarts
///
/// The algorithm is run `n_runs` times and the run with the lowest score wins. The score of a
/// run is the sum of squared distances between the first ten observations and their centroid.
///
/// ## Tutorial
///
/// ```rust
/// use clusterkit::prelude::*;
/// use clusterkit_clustering::{KMeans, KMeansInit};
/// use ndarray::array;
///
/// let observations = DataSet::from(array![[0., 0.], [0., 1.], [10., 10.], [10., 11.]]);
/// let seeds = DataSet::from(array![[0., 0.], [10., 10.]]);
///
/// let model = KMeans::params(2)
///     .max_n_iterations(10)
///     .init_method(KMeansInit::Precomputed(seeds.into_instances()))
///     .fit(&observations)
///     .unwrap();
///
/// assert_eq!(model.memberships(), &[0, 0, 1, 1]);
/// assert_eq!(model.centroids()[1].data(), array![10., 10.5].view());
///
/// // the partition itself, one data set per cluster
/// let clusters = model.clusters(&observations).unwrap();
/// assert_eq!(clusters[0].len(), 2);
/// assert_eq!(clusters[1].len(), 2);
/// ```
pub struct KMeans<F: Float, D: Distance<F>> {
    centroids: Vec<Instance<F>>,
    memberships: Vec<usize>,
    score: F,
    n_iterations: u64,
    dist_fn: D,
}

impl<F: Float> KMeans<F, L2Dist> {
    pub fn params(n_clusters: usize) -> KMeansParams<F, SmallRng, L2Dist> {
        KMeansParams::new(n_clusters, SmallRng::seed_from_u64(42), L2Dist)
    }

    pub fn params_with_rng<R: Rng>(n_clusters: usize, rng: R) -> KMeansParams<F, R, L2Dist> {
        KMeansParams::new(n_clusters, rng, L2Dist)
    }
}

impl<F: Float, D: Distance<F>> KMeans<F, D> {
    pub fn params_with<R: Rng>(n_clusters: usize, rng: R, dist_fn: D) -> KMeansParams<F, R, D> {
        KMeansParams::new(n_clusters, rng, dist_fn)
    }

    /// Return the centroids, one per cluster
    pub fn centroids(&self) -> &[Instance<F>] {
        &self.centroids
    }

    /// Return the cluster index of every training observation
    pub fn memberships(&self) -> &[usize] {
        &self.memberships
    }

    /// Return the sum of squared distances between the first ten training observations and
    /// their centroid
    pub fn score(&self) -> F {
        self.score
    }

    /// Return the number of assignment steps of the winning run
    pub fn n_iterations(&self) -> u64 {
        self.n_iterations
    }

    /// Split the training observations in `n_clusters` data sets, following `memberships`
    ///
    /// Clusters without members are returned as empty data sets.
    pub fn clusters(&self, dataset: &DataSet<F>) -> Result<Vec<DataSet<F>>, KMeansError> {
        if dataset.len() != self.memberships.len() {
            return Err(KMeansError::SampleCount {
                expected: self.memberships.len(),
                found: dataset.len(),
            });
        }

        let mut clusters = vec![DataSet::new(); self.centroids.len()];
        for (instance, &membership) in dataset.iter().zip(&self.memberships) {
            clusters[membership].push(instance.clone())?;
        }
        Ok(clusters)
    }

    /// Return the index of the centroid closest to `observation`
    pub fn predict(&self, observation: &Instance<F>) -> Result<usize, KMeansError> {
        let (membership, _) = closest_centroid(&self.dist_fn, &self.centroids, observation)?;
        Ok(membership)
    }
}

/// Outcome of a single run of the algorithm
struct Run<F: Float> {
    centroids: Vec<Instance<F>>,
    memberships: Vec<usize>,
    score: F,
    n_iterations: u64,
}

impl<F: Float, R: Rng + Clone, D: Distance<F>> KMeansValidParams<F, R, D> {
    /// Given a `dataset` holding at least `n_clusters` observations, `fit` identifies
    /// `n_clusters` centroids based on the training data distribution.
    ///
    /// The random generator is cloned first, so fitting twice with the same parameters gives
    /// the same model.
    pub fn fit(&self, dataset: &DataSet<F>) -> Result<KMeans<F, D>, KMeansError> {
        let n_samples = dataset.len();
        if n_samples == 0 || n_samples < self.n_clusters() {
            return Err(KMeansError::NotEnoughSamples {
                n_samples,
                n_clusters: self.n_clusters(),
            });
        }

        let mut rng = self.rng().clone();
        let mut best: Option<Run<F>> = None;

        for n_run in 0..self.n_runs() {
            let run = self.run(dataset, &mut rng)?;
            debug!(
                "k-means run {}: {} iterations, score {}",
                n_run, run.n_iterations, run.score
            );

            // Ties keep the earliest run
            if best.as_ref().map_or(true, |best| run.score < best.score) {
                best = Some(run);
            }
        }

        let best = best.ok_or(KMeansError::InvalidParams(KMeansParamsError::NRuns))?;
        debug!("k-means best score {}", best.score);

        Ok(KMeans {
            centroids: best.centroids,
            memberships: best.memberships,
            score: best.score,
            n_iterations: best.n_iterations,
            dist_fn: self.dist_fn().clone(),
        })
    }

    fn run(&self, dataset: &DataSet<F>, rng: &mut R) -> Result<Run<F>, KMeansError> {
        let n_samples = dataset.len();
        let dist_fn = self.dist_fn();
        let mut centroids = self.init_method().run(self.n_clusters(), dataset, rng)?;
        // The first iteration compares against everyone being in cluster zero
        let mut memberships = vec![0; n_samples];
        let mut n_iterations = 0;

        loop {
            n_iterations += 1;

            let new_memberships = assign(dist_fn, &centroids, dataset)?;
            let n_changes = new_memberships
                .iter()
                .zip(&memberships)
                .filter(|(new, old)| new != old)
                .count();
            memberships = new_memberships;

            let mut empty_centroids = Vec::new();
            for (idx, centroid) in centroids.iter_mut().enumerate() {
                let members = dataset
                    .iter()
                    .zip(&memberships)
                    .filter(|(_, &membership)| membership == idx)
                    .map(|(instance, _)| instance)
                    .collect::<Vec<_>>();

                if members.is_empty() {
                    empty_centroids.push(idx);
                } else {
                    *centroid = dist_fn.center(&members)?;
                }
            }

            if !empty_centroids.is_empty() {
                reseed_empty_centroids(
                    dist_fn,
                    &mut centroids,
                    &empty_centroids,
                    &memberships,
                    dataset,
                )?;
            }

            let changed_fraction = F::cast(n_changes) / F::cast(n_samples);
            if changed_fraction <= self.threshold() || n_iterations >= self.max_n_iterations() {
                break;
            }
        }

        let mut score = F::zero();
        for (instance, &membership) in dataset.iter().zip(&memberships).take(SCORE_WINDOW) {
            let dist = dist_fn.distance(instance, &centroids[membership])?;
            score += dist * dist;
        }

        Ok(Run {
            centroids,
            memberships,
            score,
            n_iterations,
        })
    }
}

impl<F: Float, R: Rng + Clone, D: Distance<F>> KMeansParams<F, R, D> {
    /// Checks the hyperparameters and fits a model with them
    pub fn fit(&self, dataset: &DataSet<F>) -> Result<KMeans<F, D>, KMeansError> {
        self.check_ref()?.fit(dataset)
    }
}

impl<F: Float, R: Rng + Clone, D: Distance<F>> Cluster<F, KMeansError>
    for KMeansValidParams<F, R, D>
{
    /// Returns `n_clusters` data sets, the one at index `i` holding the observations closest to
    /// the `i`-th centroid. Some of them can be empty.
    fn cluster(&self, dataset: &DataSet<F>) -> Result<Vec<DataSet<F>>, KMeansError> {
        self.fit(dataset)?.clusters(dataset)
    }
}

/// Index of the closest centroid of every observation
fn assign<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &[Instance<F>],
    dataset: &DataSet<F>,
) -> Result<Vec<usize>, clusterkit::Error> {
    dataset
        .iter()
        .map(|instance| closest_centroid(dist_fn, centroids, instance).map(|(idx, _)| idx))
        .collect()
}

/// Given a list of centroids and an observation, return the index of the closest centroid
/// and its distance. On ties the lowest index wins.
pub(crate) fn closest_centroid<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &[Instance<F>],
    observation: &Instance<F>,
) -> Result<(usize, F), clusterkit::Error> {
    let mut closest_index = 0;
    let mut minimum_distance = F::infinity();

    for (centroid_index, centroid) in centroids.iter().enumerate() {
        let distance = dist_fn.distance(observation, centroid)?;
        if centroid_index == 0 || distance < minimum_distance {
            closest_index = centroid_index;
            minimum_distance = distance;
        }
    }
    Ok((closest_index, minimum_distance))
}

/// Replace each empty centroid with one of the observations closest to their own centroid
///
/// Observations are ranked by the distance to their freshly updated centroid, a stable sort
/// keeping dataset order on ties, and handed out to the empty centroids in increasing index.
fn reseed_empty_centroids<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &mut [Instance<F>],
    empty_centroids: &[usize],
    memberships: &[usize],
    dataset: &DataSet<F>,
) -> Result<(), clusterkit::Error> {
    let mut ranked = dataset
        .iter()
        .zip(memberships)
        .map(|(instance, &membership)| {
            dist_fn
                .distance(instance, &centroids[membership])
                .map(|dist| (instance, dist))
        })
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    for (&idx, (seed, _)) in empty_centroids.iter().zip(ranked) {
        trace!("k-means: reseeding empty centroid {} with {:?}", idx, seed.data());
        centroids[idx] = seed.clone();
    }

    Ok(())
}
