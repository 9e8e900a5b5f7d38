use clusterkit::{distance::Distance, Float, ParamGuard};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the execution of
/// the [DBSCAN algorithm](struct.Dbscan.html).
pub struct DbscanValidParams<F: Float, D: Distance<F>> {
    pub(crate) tolerance: F,
    pub(crate) min_points: usize,
    pub(crate) dist_fn: D,
}

#[derive(Clone, Debug, PartialEq)]
/// Helper struct for building a set of [DBSCAN hyperparameters](struct.DbscanParams.html)
pub struct DbscanParams<F: Float, D: Distance<F>>(DbscanValidParams<F, D>);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DbscanParamsError {
    #[error("min_points must be greater than 0")]
    MinPoints,
    #[error("tolerance must be greater than 0")]
    Tolerance,
}

/// An error when running DBSCAN
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DbscanError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] DbscanParamsError),
    /// When the rank asked to `k_distance` is zero
    #[error("k must be greater than 0 to compute k-distances")]
    KDistance,
    #[error(transparent)]
    BaseCrate(#[from] clusterkit::Error),
}

impl<F: Float, D: Distance<F>> DbscanParams<F, D> {
    pub(crate) fn new(min_points: usize, dist_fn: D) -> Self {
        Self(DbscanValidParams {
            min_points,
            tolerance: F::cast(1e-4),
            dist_fn,
        })
    }

    /// Set the tolerance
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set the distance metric
    pub fn dist_fn(mut self, dist_fn: D) -> Self {
        self.0.dist_fn = dist_fn;
        self
    }
}

impl<F: Float, D: Distance<F>> ParamGuard for DbscanParams<F, D> {
    type Checked = DbscanValidParams<F, D>;
    type Error = DbscanParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.min_points == 0 {
            Err(DbscanParamsError::MinPoints)
        } else if !(self.0.tolerance > F::zero()) {
            Err(DbscanParamsError::Tolerance)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float, D: Distance<F>> DbscanValidParams<F, D> {
    /// Two points are neighbours when their distance is strictly below the tolerance
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Minimum number of neighbours, the point itself included, a point needs to be a core
    /// point and not a noise point.
    pub fn minimum_points(&self) -> usize {
        self.min_points
    }

    /// Distance metric used in the DBSCAN calculation
    pub fn dist_fn(&self) -> &D {
        &self.dist_fn
    }
}
