use std::error::Error;

use crate::{dataset::DataSet, traits::Cluster, Float};

/// A set of hyperparameters whose values have not been checked for validity. A reference to the
/// checked hyperparameters can only be obtained after checking has completed. If the
/// `Cluster` trait has been implemented on the checked hyperparameters, it is also implemented
/// on the unchecked hyperparameters with the checking step done automatically.
///
/// The hyperparameter validation done in `check_ref()` and `check()` should be identical.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error: Error;

    /// Checks the hyperparameters and returns a reference to the checked hyperparameters if
    /// successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the hyperparameters and returns the checked hyperparameters if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Performs the checking step and calls `cluster` on the checked hyperparameters. If checking
/// failed, the checking error is converted to the error type of the clustering algorithm.
impl<F: Float, E, P: ParamGuard> Cluster<F, E> for P
where
    P::Checked: Cluster<F, E>,
    E: Error + From<crate::error::Error> + From<P::Error>,
{
    fn cluster(&self, dataset: &DataSet<F>) -> Result<Vec<DataSet<F>>, E> {
        let checked = self.check_ref()?;
        checked.cluster(dataset)
    }
}
