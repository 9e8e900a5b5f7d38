#[cfg(feature = "benchmarks")]
pub mod config {
    use criterion::{measurement::WallTime, BenchmarkGroup, Criterion};
    #[cfg(not(target_os = "windows"))]
    use pprof::criterion::{Output, PProfProfiler};
    use std::time::Duration;

    #[cfg(not(target_os = "windows"))]
    pub fn get_default_profiling_configs() -> Criterion {
        Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
    }

    /// The clustering benches are quadratic in the number of points, keep the sampling short
    pub fn set_default_benchmark_configs(benchmark: &mut BenchmarkGroup<WallTime>) {
        benchmark
            .sample_size(30)
            .measurement_time(Duration::new(5, 0))
            .confidence_level(0.97)
            .warm_up_time(Duration::new(2, 0))
            .noise_threshold(0.05);
    }
}

#[cfg(feature = "benchmarks")]
pub mod generate {
    use ndarray::{Array2, Axis};
    use rand::Rng;

    use crate::dataset::{DataSet, Instance};
    use crate::error::Result;

    /// `n_per_center` points scattered uniformly in a box of half-width `spread` around each
    /// row of `centers`
    pub fn blobs<R: Rng>(
        n_per_center: usize,
        centers: &Array2<f64>,
        spread: f64,
        rng: &mut R,
    ) -> Result<DataSet<f64>> {
        let mut dataset = DataSet::new();
        for center in centers.axis_iter(Axis(0)) {
            for _ in 0..n_per_center {
                let point = center.mapv(|c| c + rng.gen_range(-spread..spread));
                dataset.push(Instance::new(point))?;
            }
        }
        Ok(dataset)
    }
}
