//! `clusterkit` groups numeric feature vectors into clusters.
//!
//! The root crate holds what every clustering algorithm of the workspace shares:
//!
//! * the data model, [`Instance`] and [`DataSet`], a dimension-checked container of
//!   immutable instances also used to represent a single cluster;
//! * the [`Distance`](distance::Distance) strategy, a metric plus the center of a group of
//!   instances under that metric;
//! * the [`Proximity`](proximity::Proximity) strategy, a linkage metric between two clusters;
//! * the [`Cluster`](traits::Cluster) trait and the [`ParamGuard`] hyperparameter checking
//!   shared by the algorithm crates.
//!
//! The algorithms themselves live in their own crates:
//!
//! * `clusterkit-clustering`: DBSCAN and k-means
//! * `clusterkit-hierarchical`: agglomerative hierarchical clustering
//!
//! ## Example
//!
//! ```
//! use std::convert::TryFrom;
//! use clusterkit::prelude::*;
//! use clusterkit::distance::L2Dist;
//!
//! let points = vec![
//!     Instance::from(vec![0., 0.]),
//!     Instance::from(vec![3., 4.]).with_name("far"),
//! ];
//! let dataset = DataSet::try_from(points).unwrap();
//!
//! assert_eq!(dataset.dimension(), 2);
//! assert_eq!(dataset.diameter(&L2Dist).unwrap(), 5.);
//! ```

pub mod benchmarks;
pub mod dataset;
pub mod distance;
pub mod error;
mod param_guard;
pub mod prelude;
pub mod proximity;
pub mod traits;

pub use dataset::{DataSet, Float, Instance};
pub use error::{Error, Result};
pub use param_guard::ParamGuard;
