use clusterkit::prelude::*;
use clusterkit_clustering::{Dbscan, KMeans};
use proptest::prelude::*;

fn dataset(points: &[Vec<f64>]) -> DataSet<f64> {
    let mut dataset = DataSet::new();
    for point in points {
        dataset.push(Instance::from(point.clone())).unwrap();
    }
    dataset
}

/// Every instance of `dataset` shows up exactly as many times in `clusters`
fn is_rearrangement(dataset: &DataSet<f64>, clusters: &[DataSet<f64>]) -> bool {
    let mut remaining = dataset.instances().to_vec();
    for instance in clusters.iter().flat_map(|c| c.iter()) {
        match remaining.iter().position(|x| x == instance) {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => return false,
        }
    }
    remaining.is_empty()
}

proptest! {
    #[test]
    fn prop_dbscan_partition_covers_input(
        points in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 0..30),
        min_points in 1usize..5,
        tolerance in 0.1f64..5.0,
    ) {
        let dataset = dataset(&points);
        let params = Dbscan::params(min_points).tolerance(tolerance).check_unwrap();

        let clusters = params.cluster(&dataset).unwrap();
        prop_assert!(is_rearrangement(&dataset, &clusters));
        // only the noise bucket can be empty
        prop_assert!(clusters[1..].iter().all(|c| !c.is_empty()));

        let memberships = params.memberships(&dataset).unwrap();
        prop_assert_eq!(memberships.len(), dataset.len());
        for (id, cluster) in clusters.iter().enumerate() {
            let expected = if id == 0 { None } else { Some(id) };
            prop_assert_eq!(
                memberships.iter().filter(|&&m| m == expected).count(),
                cluster.len()
            );
        }
    }

    #[test]
    fn prop_dbscan_min_points_one_has_no_noise(
        points in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 1..30),
        tolerance in 0.1f64..5.0,
    ) {
        let dataset = dataset(&points);
        let clusters = Dbscan::params(1)
            .tolerance(tolerance)
            .check_unwrap()
            .cluster(&dataset)
            .unwrap();

        prop_assert!(clusters[0].is_empty());
    }

    #[test]
    fn prop_kmeans_partition_covers_input(
        points in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..30),
        n_clusters in 1usize..5,
        n_runs in 1usize..3,
    ) {
        prop_assume!(n_clusters <= points.len());
        let dataset = dataset(&points);

        let model = KMeans::params(n_clusters).n_runs(n_runs).fit(&dataset).unwrap();
        prop_assert_eq!(model.centroids().len(), n_clusters);
        prop_assert!(model.memberships().iter().all(|&m| m < n_clusters));

        let clusters = model.clusters(&dataset).unwrap();
        prop_assert_eq!(clusters.len(), n_clusters);
        prop_assert!(is_rearrangement(&dataset, &clusters));
    }

    #[test]
    fn prop_k_distances_are_sorted(
        points in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 0..20),
        k in 1usize..25,
    ) {
        let dataset = dataset(&points);
        let k_distances = Dbscan::params(2)
            .tolerance(1.)
            .k_distance(&dataset, k)
            .unwrap();

        prop_assert_eq!(k_distances.len(), dataset.len());
        prop_assert!(k_distances.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(k_distances.iter().all(|&d| d >= 0.));
    }
}
