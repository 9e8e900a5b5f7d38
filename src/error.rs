//! Error types in clusterkit
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("cannot compute the center of an empty list of instances")]
    EmptyInstances,
}

impl Error {
    /// Returns `Ok(())` when both dimensions agree
    pub(crate) fn check_dimension(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Error::DimensionMismatch { expected, found })
        }
    }
}
