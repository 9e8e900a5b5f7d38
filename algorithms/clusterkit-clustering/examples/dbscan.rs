use clusterkit::benchmarks::generate;
use clusterkit::prelude::*;
use clusterkit_clustering::Dbscan;
use ndarray::array;
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

// A routine DBScan task: build a synthetic dataset, look at its k-distance curve
// and cluster it.
fn main() {
    // Our random number generator, seeded for reproducibility
    let mut rng = Xoshiro256Plus::seed_from_u64(42);

    // For each our expected centroids, generate `n` data points around it (a "blob")
    let expected_centroids = array![[10., 10.], [1., 12.], [20., 30.], [-20., 30.],];
    let n = 100;
    let dataset = generate::blobs(n, &expected_centroids, 1., &mut rng).unwrap();

    // Configure our training algorithm
    let min_points = 3;
    let params = Dbscan::params(min_points).tolerance(1.).check_unwrap();

    println!(
        "Clustering #{} data points grouped in 4 clusters of {} points each",
        dataset.len(),
        n
    );

    // The knee of the k-distance curve is a good tolerance for `min_points`
    let k_distances = params.k_distance(&dataset, min_points).unwrap();
    for quantile in &[0.5, 0.9, 0.99] {
        let idx = ((k_distances.len() - 1) as f64 * quantile) as usize;
        println!(" - {}-distance quantile {}: {:.3}", min_points, quantile, k_distances[idx]);
    }

    let clusters = params.cluster(&dataset).unwrap();

    println!();
    println!("Result: ");
    println!(" - {} noise points", clusters[0].len());
    for (id, cluster) in clusters.iter().enumerate().skip(1) {
        println!(" - {} points in cluster {}", cluster.len(), id);
    }
    println!();
}
