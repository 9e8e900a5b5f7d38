//! Linkage metrics between clusters
//!
//! A proximity measures how far apart two clusters are, on top of a [`Distance`] between their
//! instances. Hierarchical clustering uses it to decide which clusters are merged next.

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::DataSet;
use crate::distance::Distance;
use crate::error::Result;
use crate::Float;

pub trait Proximity<F: Float> {
    /// Linkage distance between the clusters `a` and `b` under `dist_fn`
    fn compute<D: Distance<F>>(&self, dist_fn: &D, a: &DataSet<F>, b: &DataSet<F>) -> Result<F>;
}

/// Visit the distance of every pair made of one instance of `a` and one of `b`
fn pairwise<F: Float, D: Distance<F>>(
    dist_fn: &D,
    a: &DataSet<F>,
    b: &DataSet<F>,
    mut visit: impl FnMut(F),
) -> Result<()> {
    for x in a {
        for y in b {
            visit(dist_fn.distance(x, y)?);
        }
    }

    Ok(())
}

/// Single linkage: the smallest distance between an instance of each cluster
///
/// Zero if either cluster is empty.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinProximity;

impl<F: Float> Proximity<F> for MinProximity {
    fn compute<D: Distance<F>>(&self, dist_fn: &D, a: &DataSet<F>, b: &DataSet<F>) -> Result<F> {
        if a.is_empty() || b.is_empty() {
            return Ok(F::zero());
        }

        let mut min = F::infinity();
        pairwise(dist_fn, a, b, |d| {
            if d < min {
                min = d;
            }
        })?;

        Ok(min)
    }
}

/// Complete linkage: the largest distance between an instance of each cluster
///
/// Zero if either cluster is empty.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaxProximity;

impl<F: Float> Proximity<F> for MaxProximity {
    fn compute<D: Distance<F>>(&self, dist_fn: &D, a: &DataSet<F>, b: &DataSet<F>) -> Result<F> {
        if a.is_empty() || b.is_empty() {
            return Ok(F::zero());
        }

        let mut max = F::neg_infinity();
        pairwise(dist_fn, a, b, |d| {
            if d > max {
                max = d;
            }
        })?;

        Ok(max)
    }
}

/// Average linkage: the mean of all distances between an instance of each cluster
///
/// Zero if either cluster is empty.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AverageProximity;

impl<F: Float> Proximity<F> for AverageProximity {
    fn compute<D: Distance<F>>(&self, dist_fn: &D, a: &DataSet<F>, b: &DataSet<F>) -> Result<F> {
        if a.is_empty() || b.is_empty() {
            return Ok(F::zero());
        }

        let mut total = F::zero();
        pairwise(dist_fn, a, b, |d| total += d)?;

        Ok(total / F::cast(a.len() * b.len()))
    }
}

/// Centroid linkage: the distance between the centers of the two clusters
///
/// Fails if either cluster is empty, as an empty cluster has no center.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CentroidProximity;

impl<F: Float> Proximity<F> for CentroidProximity {
    fn compute<D: Distance<F>>(&self, dist_fn: &D, a: &DataSet<F>, b: &DataSet<F>) -> Result<F> {
        let center_a = dist_fn.center(&a.iter().collect::<Vec<_>>())?;
        let center_b = dist_fn.center(&b.iter().collect::<Vec<_>>())?;

        dist_fn.distance(&center_a, &center_b)
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommonProximity {
    /// Single linkage
    Min,
    /// Complete linkage
    Max,
    /// Average linkage
    Average,
    /// Centroid linkage
    Centroid,
}

impl<F: Float> Proximity<F> for CommonProximity {
    fn compute<D: Distance<F>>(&self, dist_fn: &D, a: &DataSet<F>, b: &DataSet<F>) -> Result<F> {
        match self {
            Self::Min => MinProximity.compute(dist_fn, a, b),
            Self::Max => MaxProximity.compute(dist_fn, a, b),
            Self::Average => AverageProximity.compute(dist_fn, a, b),
            Self::Centroid => CentroidProximity.compute(dist_fn, a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::dataset::Instance;
    use crate::distance::L2Dist;
    use crate::error::Error;

    fn cluster(points: &[[f64; 2]]) -> DataSet<f64> {
        DataSet::try_from(
            points
                .iter()
                .map(|p| Instance::from(p.to_vec()))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn linkages() {
        let a = cluster(&[[0., 0.], [0., 2.]]);
        let b = cluster(&[[3., 0.], [6., 0.]]);

        // pairwise distances: 3, 6, sqrt(13), sqrt(40)
        let avg = (3. + 6. + 13f64.sqrt() + 40f64.sqrt()) / 4.;
        assert_abs_diff_eq!(CommonProximity::Min.compute(&L2Dist, &a, &b).unwrap(), 3.);
        assert_abs_diff_eq!(
            CommonProximity::Max.compute(&L2Dist, &a, &b).unwrap(),
            40f64.sqrt()
        );
        assert_abs_diff_eq!(
            CommonProximity::Average.compute(&L2Dist, &a, &b).unwrap(),
            avg,
            epsilon = 1e-12
        );
        // centers (0, 1) and (4.5, 0)
        assert_abs_diff_eq!(
            CommonProximity::Centroid.compute(&L2Dist, &a, &b).unwrap(),
            (4.5f64 * 4.5 + 1.).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn linkages_are_symmetric() {
        let a = cluster(&[[0., 0.], [1., 5.], [2., 2.]]);
        let b = cluster(&[[3., 0.], [6., 1.]]);

        for p in &[
            CommonProximity::Min,
            CommonProximity::Max,
            CommonProximity::Average,
            CommonProximity::Centroid,
        ] {
            assert_abs_diff_eq!(
                p.compute(&L2Dist, &a, &b).unwrap(),
                p.compute(&L2Dist, &b, &a).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn pairwise_linkages_of_empty_cluster_are_zero() {
        let a = cluster(&[[0., 0.]]);
        let empty = DataSet::new();

        assert_abs_diff_eq!(MinProximity.compute(&L2Dist, &a, &empty).unwrap(), 0.);
        assert_abs_diff_eq!(MaxProximity.compute(&L2Dist, &empty, &a).unwrap(), 0.);
        assert_abs_diff_eq!(AverageProximity.compute(&L2Dist, &a, &empty).unwrap(), 0.);
    }

    #[test]
    fn centroid_linkage_of_empty_cluster_fails() {
        let a = cluster(&[[0., 0.]]);
        let empty = DataSet::new();

        assert_eq!(
            CentroidProximity.compute(&L2Dist, &a, &empty),
            Err(Error::EmptyInstances)
        );
    }
}
