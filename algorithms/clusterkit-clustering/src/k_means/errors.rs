use thiserror::Error;

/// An error when fitting with an invalid hyperparameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansParamsError {
    #[error("n_clusters cannot be 0")]
    NClusters,
    #[error("n_runs cannot be 0")]
    NRuns,
    #[error("threshold must be in [0, 1)")]
    Threshold,
    #[error("max_n_iterations cannot be 0")]
    MaxIterations,
    #[error("{found} precomputed centroids were given for {expected} clusters")]
    CentroidCount { expected: usize, found: usize },
}

/// An error when modeling a KMeans algorithm
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] KMeansParamsError),
    /// When the dataset holds fewer instances than the requested number of clusters
    #[error("Fitting failed: {n_samples} samples cannot be split in {n_clusters} clusters")]
    NotEnoughSamples { n_samples: usize, n_clusters: usize },
    /// When the dataset given to a fitted model isn't the one it was fitted on
    #[error("the model was fitted on {expected} samples, found {found}")]
    SampleCount { expected: usize, found: usize },
    #[error(transparent)]
    BaseCrate(#[from] clusterkit::Error),
}
