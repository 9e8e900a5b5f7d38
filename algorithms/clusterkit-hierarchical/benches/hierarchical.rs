use clusterkit::benchmarks::{config, generate};
use clusterkit::distance::L2Dist;
use clusterkit::prelude::*;
use clusterkit::proximity::CommonProximity;
use clusterkit_hierarchical::HierarchicalCluster;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand_xoshiro::Xoshiro256Plus;

fn hierarchical_bench(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(40);
    let n_features = 2;
    let n_clusters = 4;
    let centroids =
        Array2::random_using((n_clusters, n_features), Uniform::new(-30., 30.), &mut rng);

    let mut benchmark = c.benchmark_group("hierarchical");
    config::set_default_benchmark_configs(&mut benchmark);

    for &cluster_size in &[10, 25, 50] {
        let dataset = generate::blobs(cluster_size, &centroids, 1., &mut rng).unwrap();

        for proximity in &[
            CommonProximity::Min,
            CommonProximity::Average,
            CommonProximity::Centroid,
        ] {
            benchmark.bench_with_input(
                BenchmarkId::new(format!("{:?}", proximity), dataset.len()),
                &dataset,
                |bencher, dataset| {
                    let params = HierarchicalCluster::params(*proximity, L2Dist, n_clusters)
                        .check_unwrap();
                    bencher.iter(|| black_box(params.cluster(dataset)));
                },
            );
        }
    }

    benchmark.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = config::get_default_profiling_configs();
    targets = hierarchical_bench
}
#[cfg(target_os = "windows")]
criterion_group!(benches, hierarchical_bench);

criterion_main!(benches);
