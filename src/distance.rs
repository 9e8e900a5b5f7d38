//! Distance metrics between instances
//!

use ndarray::Zip;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::Instance;
use crate::error::{Error, Result};
use crate::Float;

/// A metric between two instances together with the point that best represents a group of
/// instances under this metric
pub trait Distance<F: Float>: Clone + Send + Sync {
    /// Distance between `a` and `b`
    ///
    /// Symmetric and zero for instances holding identical data. Fails if the two instances
    /// have different sizes.
    fn distance(&self, a: &Instance<F>, b: &Instance<F>) -> Result<F>;

    /// The point minimising the aggregate distance to `instances`
    ///
    /// Fails on an empty list or on instances of different sizes.
    fn center(&self, instances: &[&Instance<F>]) -> Result<Instance<F>>;
}

/// Arithmetic mean of the instances, the center shared by the metrics of this module
fn mean<F: Float>(instances: &[&Instance<F>]) -> Result<Instance<F>> {
    let (first, _) = instances.split_first().ok_or(Error::EmptyInstances)?;

    let mut total = Instance::zeros(first.size());
    for instance in instances {
        total = total.sum(instance)?;
    }

    Ok(total.scale(F::one() / F::cast(instances.len())))
}

/// Euclidean distance
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct L2Dist;

impl L2Dist {
    /// Euclidean norm of an instance
    pub fn norm<F: Float>(&self, a: &Instance<F>) -> F {
        a.data().fold(F::zero(), |acc, &x| acc + x * x).sqrt()
    }
}

impl<F: Float> Distance<F> for L2Dist {
    fn distance(&self, a: &Instance<F>, b: &Instance<F>) -> Result<F> {
        Error::check_dimension(a.size(), b.size())?;

        let sq = Zip::from(a.data())
            .and(b.data())
            .fold(F::zero(), |acc, &x, &y| acc + (x - y) * (x - y));

        Ok(sq.sqrt())
    }

    fn center(&self, instances: &[&Instance<F>]) -> Result<Instance<F>> {
        mean(instances)
    }
}

/// Cosine distance, `1 - cos(a, b)`
///
/// Two zero vectors are at distance zero, a zero vector and a non-zero one at distance one.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CosineDist;

impl<F: Float> Distance<F> for CosineDist {
    fn distance(&self, a: &Instance<F>, b: &Instance<F>) -> Result<F> {
        Error::check_dimension(a.size(), b.size())?;

        let norms = L2Dist.norm(a) * L2Dist.norm(b);
        if norms == F::zero() {
            return Ok(if a.data() == b.data() { F::zero() } else { F::one() });
        }

        let dot = Zip::from(a.data())
            .and(b.data())
            .fold(F::zero(), |acc, &x, &y| acc + x * y);
        // rounding can push the similarity of parallel vectors slightly above one
        Ok((F::one() - dot / norms).max(F::zero()))
    }

    fn center(&self, instances: &[&Instance<F>]) -> Result<Instance<F>> {
        mean(instances)
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommonDistance {
    /// Euclidean distance
    L2Dist,
    /// Cosine distance
    CosineDist,
}

impl<F: Float> Distance<F> for CommonDistance {
    fn distance(&self, a: &Instance<F>, b: &Instance<F>) -> Result<F> {
        match self {
            Self::L2Dist => L2Dist.distance(a, b),
            Self::CosineDist => CosineDist.distance(a, b),
        }
    }

    fn center(&self, instances: &[&Instance<F>]) -> Result<Instance<F>> {
        match self {
            Self::L2Dist => L2Dist.center(instances),
            Self::CosineDist => CosineDist.center(instances),
        }
    }
}
