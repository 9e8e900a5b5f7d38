use std::marker::PhantomData;

use clusterkit::distance::Distance;
use clusterkit::proximity::Proximity;
use clusterkit::{Float, ParamGuard};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::HierarchicalParamsError;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the execution of
/// the [hierarchical clustering](crate::HierarchicalCluster).
pub struct HierarchicalValidParams<F: Float, P: Proximity<F>, D: Distance<F>> {
    proximity: P,
    dist_fn: D,
    n_clusters: usize,
    phantom: PhantomData<F>,
}

#[derive(Clone, Debug, PartialEq)]
/// Helper struct for building a set of [hierarchical clustering
/// hyperparameters](HierarchicalValidParams)
pub struct HierarchicalParams<F: Float, P: Proximity<F>, D: Distance<F>>(
    HierarchicalValidParams<F, P, D>,
);

impl<F: Float, P: Proximity<F>, D: Distance<F>> HierarchicalParams<F, P, D> {
    pub(crate) fn new(proximity: P, dist_fn: D, n_clusters: usize) -> Self {
        Self(HierarchicalValidParams {
            proximity,
            dist_fn,
            n_clusters,
            phantom: PhantomData,
        })
    }

    /// Stop merging once this many clusters are left
    pub fn n_clusters(mut self, n_clusters: usize) -> Self {
        self.0.n_clusters = n_clusters;
        self
    }

    /// Select the linkage between clusters
    pub fn proximity(mut self, proximity: P) -> Self {
        self.0.proximity = proximity;
        self
    }

    /// Select the distance the linkage is computed with
    pub fn dist_fn(mut self, dist_fn: D) -> Self {
        self.0.dist_fn = dist_fn;
        self
    }
}

impl<F: Float, P: Proximity<F>, D: Distance<F>> ParamGuard for HierarchicalParams<F, P, D> {
    type Checked = HierarchicalValidParams<F, P, D>;
    type Error = HierarchicalParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.n_clusters == 0 {
            Err(HierarchicalParamsError::NClusters)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float, P: Proximity<F>, D: Distance<F>> HierarchicalValidParams<F, P, D> {
    /// Linkage between clusters
    pub fn proximity(&self) -> &P {
        &self.proximity
    }

    /// Distance between instances the linkage is built on
    ///
    /// The very first merge always compares instances with the Euclidean distance.
    pub fn dist_fn(&self) -> &D {
        &self.dist_fn
    }

    /// Number of clusters the merging stops at
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}
