//! Datasets
//!
//! This module implements the two containers every algorithm works on: the [`Instance`], an
//! immutable labelled point in R^n, and the [`DataSet`], an ordered collection of instances
//! sharing one dimension. A `DataSet` is also how a single cluster is represented.
use ndarray::{Array1, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::fmt;
use std::iter::Sum;

mod impl_dataset;
mod impl_instance;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used for the coordinates of
/// every instance and for every distance computed between them.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Instance
///
/// The minimal element handled by the clustering algorithms: a vector in R^n together with an
/// optional name. The name has no effect on clustering. An instance cannot be mutated once
/// built; arithmetic always returns a new instance.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Instance<F> {
    name: String,
    data: Array1<F>,
}

/// DataSet
///
/// An ordered list of instances whose dimension is fixed by the first inserted instance. The
/// only way to grow a data set is to append validated instances, so every contained instance
/// is guaranteed to have `size() == dimension()`.
///
/// # Fields
///
/// * `instances`: the instances in insertion order
/// * `dimension`: size shared by all instances, `0` while the set is empty
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet<F> {
    instances: Vec<Instance<F>>,
    dimension: usize,
}
