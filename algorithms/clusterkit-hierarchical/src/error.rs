//! Error definitions
//!

use thiserror::Error;

/// Simplified `Result` using [`HierarchicalError`](crate::HierarchicalError) as error type
pub type Result<T> = std::result::Result<T, HierarchicalError>;

/// Error variants from parameter construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchicalParamsError {
    /// Invalid stopping condition
    #[error("n_clusters must be greater than 0")]
    NClusters,
}

/// Error variants from clustering
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchicalError {
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] HierarchicalParamsError),
    /// Merging never adds clusters, so the dataset needs at least `n_clusters` instances
    #[error("{n_samples} samples cannot be grouped in {n_clusters} clusters")]
    NotEnoughSamples { n_samples: usize, n_clusters: usize },
    #[error(transparent)]
    BaseCrate(#[from] clusterkit::Error),
}
