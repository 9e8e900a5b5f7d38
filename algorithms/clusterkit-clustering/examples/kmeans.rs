use clusterkit::benchmarks::generate;
use clusterkit::prelude::*;
use clusterkit_clustering::KMeans;
use ndarray::array;
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

// A routine K-means task: build a synthetic dataset, fit the algorithm on it
// and print the centroids it found.
fn main() {
    // Our random number generator, seeded for reproducibility
    let mut rng = Xoshiro256Plus::seed_from_u64(42);

    // For each our expected centroids, generate `n` data points around it (a "blob")
    let expected_centroids = array![[0., 1.], [-10., 20.], [-1., 10.]];
    let n = 10000;
    let dataset = generate::blobs(n, &expected_centroids, 2., &mut rng).unwrap();

    // Configure our training algorithm
    let n_clusters = expected_centroids.len_of(ndarray::Axis(0));
    let model = KMeans::params_with_rng(n_clusters, rng)
        .max_n_iterations(200)
        .threshold(1e-4)
        .n_runs(10)
        .fit(&dataset)
        .expect("KMeans fitted");

    println!(
        "Converged in {} iterations, score {:.3}",
        model.n_iterations(),
        model.score()
    );

    let clusters = model.clusters(&dataset).expect("fitted on this dataset");
    for (centroid, cluster) in model.centroids().iter().zip(&clusters) {
        println!(" - {} points around {}", cluster.len(), centroid.data());
    }
}
