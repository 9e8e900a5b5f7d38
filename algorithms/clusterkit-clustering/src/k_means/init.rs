use clusterkit::{DataSet, Error, Float, Instance};
use rand::Rng;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
/// Specifies centroid initialization algorithm for KMeans.
pub enum KMeansInit<F: Float> {
    /// Draw every centroid uniformly inside the bounding box of the dataset
    Random,
    /// Start every run from these centroids, one per cluster
    ///
    /// All runs then start identically, so more than one run only helps with `Random`.
    Precomputed(Vec<Instance<F>>),
}

impl<F: Float> Default for KMeansInit<F> {
    fn default() -> Self {
        KMeansInit::Random
    }
}

impl<F: Float> KMeansInit<F> {
    /// Runs the chosen initialization routine
    pub(crate) fn run<R: Rng>(
        &self,
        n_clusters: usize,
        dataset: &DataSet<F>,
        rng: &mut R,
    ) -> Result<Vec<Instance<F>>, Error> {
        match self {
            Self::Random => random_init(n_clusters, dataset, rng),
            Self::Precomputed(centroids) => {
                if let Some(centroid) = centroids
                    .iter()
                    .find(|centroid| centroid.size() != dataset.dimension())
                {
                    return Err(Error::DimensionMismatch {
                        expected: dataset.dimension(),
                        found: centroid.size(),
                    });
                }
                Ok(centroids.clone())
            }
        }
    }
}

fn random_init<F: Float, R: Rng>(
    n_clusters: usize,
    dataset: &DataSet<F>,
    rng: &mut R,
) -> Result<Vec<Instance<F>>, Error> {
    let (min, max) = dataset.bounds().ok_or(Error::EmptyInstances)?;

    (0..n_clusters)
        .map(|_| Instance::random_within(min.view(), max.view(), rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn random_centroids_stay_in_bounding_box() {
        let mut rng = Xoshiro256Plus::seed_from_u64(40);
        let observations: Array2<f64> =
            Array2::random_using((100, 3), Uniform::new(-10., 30.), &mut rng);
        let dataset = DataSet::from(observations);
        let (min, max) = dataset.bounds().unwrap();

        let centroids = KMeansInit::Random.run(8, &dataset, &mut rng).unwrap();
        assert_eq!(centroids.len(), 8);
        for centroid in &centroids {
            assert_eq!(centroid.size(), 3);
            for ((&x, &lo), &hi) in centroid.data().iter().zip(min.iter()).zip(max.iter()) {
                assert!(lo <= x && x <= hi);
            }
        }
    }

    #[test]
    fn random_init_is_reproducible() {
        let dataset = DataSet::from(arr2(&[[0., 1.], [4., -3.], [2., 2.]]));

        let first = KMeansInit::Random
            .run(2, &dataset, &mut Xoshiro256Plus::seed_from_u64(7))
            .unwrap();
        let second = KMeansInit::Random
            .run(2, &dataset, &mut Xoshiro256Plus::seed_from_u64(7))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_init_of_empty_dataset_fails() {
        let res = KMeansInit::<f64>::Random.run(2, &DataSet::new(), &mut rand::thread_rng());
        assert_eq!(res, Err(Error::EmptyInstances));
    }

    #[test]
    fn precomputed_centroids_are_cloned() {
        let dataset = DataSet::from(arr2(&[[0., 1.], [4., -3.]]));
        let centroids = vec![Instance::from(vec![1., 1.]), Instance::from(vec![5., 5.])];

        let init = KMeansInit::Precomputed(centroids.clone());
        assert_eq!(
            init.run(2, &dataset, &mut rand::thread_rng()).unwrap(),
            centroids
        );
    }

    #[test]
    fn precomputed_centroids_must_match_dimension() {
        let dataset = DataSet::from(arr2(&[[0., 1.], [4., -3.]]));
        let init = KMeansInit::Precomputed(vec![
            Instance::from(vec![1., 1.]),
            Instance::from(vec![5., 5., 5.]),
        ]);

        assert_eq!(
            init.run(2, &dataset, &mut rand::thread_rng()),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
