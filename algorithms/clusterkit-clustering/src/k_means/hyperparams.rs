use crate::KMeansParamsError;

use super::init::KMeansInit;
use clusterkit::distance::Distance;
use clusterkit::{Float, ParamGuard};
use rand::Rng;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the execution of
/// the [K-means algorithm](crate::KMeans).
pub struct KMeansValidParams<F: Float, R: Rng, D: Distance<F>> {
    /// Number of time the k-means algorithm will be run with different centroid seeds.
    n_runs: usize,
    /// A run also stops once the fraction of instances changing cluster during an
    /// iteration is lower or equal than `threshold`.
    threshold: F,
    /// We exit the training loop when the number of training iterations
    /// reaches `max_n_iterations` even if the `threshold` convergence
    /// condition has not been met.
    max_n_iterations: u64,
    /// The number of clusters we will be looking for in the training dataset.
    n_clusters: usize,
    /// The initialization strategy used to initialize the centroids.
    init: KMeansInit<F>,
    /// The random number generator
    rng: R,
    /// Distance metric used in the centroid assignment step
    dist_fn: D,
}

#[derive(Clone, Debug, PartialEq)]
/// An helper struct used to construct a set of [valid hyperparameters](KMeansValidParams) for
/// the [K-means algorithm](crate::KMeans) (using the builder pattern).
pub struct KMeansParams<F: Float, R: Rng, D: Distance<F>>(KMeansValidParams<F, R, D>);

impl<F: Float, R: Rng, D: Distance<F>> KMeansParams<F, R, D> {
    /// `new` lets us configure our training algorithm parameters:
    /// * we will be looking for `n_clusters` in the training dataset;
    /// * a run stops once the fraction of instances changing cluster in an
    ///   iteration is lower or equal than `threshold`;
    /// * we exit the training loop when the number of training iterations
    ///   reaches `max_n_iterations` even if the `threshold` convergence
    ///   condition has not been met.
    /// * As KMeans convergence depends on centroids initialization
    ///   we run the algorithm `n_runs` times and we keep the best outputs
    ///   in terms of score, the sum of squared distances between the first
    ///   ten observations and their centroid.
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `threshold = 0`
    /// * `max_n_iterations = 100`
    /// * `n_runs = 1`
    /// * `init = Random`
    pub fn new(n_clusters: usize, rng: R, dist_fn: D) -> Self {
        Self(KMeansValidParams {
            n_runs: 1,
            threshold: F::zero(),
            max_n_iterations: 100,
            n_clusters,
            init: KMeansInit::Random,
            rng,
            dist_fn,
        })
    }

    /// Change the value of `n_runs`
    pub fn n_runs(mut self, n_runs: usize) -> Self {
        self.0.n_runs = n_runs;
        self
    }

    /// Change the value of `threshold`
    pub fn threshold(mut self, threshold: F) -> Self {
        self.0.threshold = threshold;
        self
    }

    /// Change the value of `max_n_iterations`
    pub fn max_n_iterations(mut self, max_n_iterations: u64) -> Self {
        self.0.max_n_iterations = max_n_iterations;
        self
    }

    /// Change the value of `init`
    pub fn init_method(mut self, init: KMeansInit<F>) -> Self {
        self.0.init = init;
        self
    }
}

impl<F: Float, R: Rng, D: Distance<F>> ParamGuard for KMeansParams<F, R, D> {
    type Checked = KMeansValidParams<F, R, D>;
    type Error = KMeansParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.n_clusters == 0 {
            Err(KMeansParamsError::NClusters)
        } else if self.0.n_runs == 0 {
            Err(KMeansParamsError::NRuns)
        } else if !(self.0.threshold >= F::zero() && self.0.threshold < F::one()) {
            Err(KMeansParamsError::Threshold)
        } else if self.0.max_n_iterations == 0 {
            Err(KMeansParamsError::MaxIterations)
        } else {
            match &self.0.init {
                KMeansInit::Precomputed(centroids) if centroids.len() != self.0.n_clusters => {
                    Err(KMeansParamsError::CentroidCount {
                        expected: self.0.n_clusters,
                        found: centroids.len(),
                    })
                }
                _ => Ok(&self.0),
            }
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float, R: Rng, D: Distance<F>> KMeansValidParams<F, R, D> {
    /// The final results will be the best output of n_runs consecutive runs in terms of score.
    pub fn n_runs(&self) -> usize {
        self.n_runs
    }

    /// A run is considered complete once the fraction of instances changing cluster
    /// during an iteration is lower or equal than `threshold`.
    pub fn threshold(&self) -> F {
        self.threshold
    }

    /// We exit the training loop when the number of training iterations
    /// reaches `max_n_iterations` even if the `threshold` convergence
    /// condition has not been met.
    pub fn max_n_iterations(&self) -> u64 {
        self.max_n_iterations
    }

    /// The number of clusters we will be looking for in the training dataset.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Cluster initialization strategy
    pub fn init_method(&self) -> &KMeansInit<F> {
        &self.init
    }

    /// Returns the random generator
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Returns the distance metric
    pub fn dist_fn(&self) -> &D {
        &self.dist_fn
    }
}

#[cfg(test)]
mod tests {
    use crate::{KMeans, KMeansInit, KMeansParams, KMeansParamsError, KMeansValidParams};
    use clusterkit::distance::L2Dist;
    use clusterkit::{Instance, ParamGuard};
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<KMeansParams<f64, Xoshiro256Plus, L2Dist>>();
        has_autotraits::<KMeansValidParams<f64, Xoshiro256Plus, L2Dist>>();
    }

    #[test]
    fn defaults() {
        let params = KMeans::<f64, _>::params(3).check().unwrap();
        assert_eq!(params.n_clusters(), 3);
        assert_eq!(params.n_runs(), 1);
        assert_eq!(params.max_n_iterations(), 100);
        assert_eq!(params.threshold(), 0.);
        assert_eq!(params.init_method(), &KMeansInit::Random);
    }

    #[test]
    fn n_clusters_cannot_be_zero() {
        let res = KMeans::<f32, _>::params(0).check();
        assert!(matches!(res, Err(KMeansParamsError::NClusters)))
    }

    #[test]
    fn threshold_cannot_be_negative() {
        let res = KMeans::params(1).threshold(-0.1).check();
        assert!(matches!(res, Err(KMeansParamsError::Threshold)))
    }

    #[test]
    fn threshold_must_be_below_one() {
        let res = KMeans::params(1).threshold(1.).check();
        assert!(matches!(res, Err(KMeansParamsError::Threshold)));
        let res = KMeans::params(1).threshold(f64::NAN).check();
        assert!(matches!(res, Err(KMeansParamsError::Threshold)));

        let params = KMeans::params(1).threshold(0.99).check().unwrap();
        assert_eq!(params.threshold(), 0.99);
    }

    #[test]
    fn max_n_iterations_cannot_be_zero() {
        let res = KMeans::<f64, _>::params(1).max_n_iterations(0).check();
        assert!(matches!(res, Err(KMeansParamsError::MaxIterations)))
    }

    #[test]
    fn n_runs_cannot_be_zero() {
        let res = KMeans::<f64, _>::params(1).n_runs(0).check();
        assert!(matches!(res, Err(KMeansParamsError::NRuns)))
    }

    #[test]
    fn one_precomputed_centroid_per_cluster() {
        let centroids = vec![Instance::from(vec![0., 0.]), Instance::from(vec![1., 1.])];

        let res = KMeans::params(3)
            .init_method(KMeansInit::Precomputed(centroids.clone()))
            .check();
        assert!(matches!(
            res,
            Err(KMeansParamsError::CentroidCount {
                expected: 3,
                found: 2
            })
        ));

        let res = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(centroids))
            .check();
        assert!(res.is_ok());
    }
}
