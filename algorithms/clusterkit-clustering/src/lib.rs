//! `clusterkit-clustering` provides flat clustering algorithms on top of the `clusterkit`
//! data model.
//!
//! ## The big picture
//!
//! `clusterkit-clustering` is a crate in the `clusterkit` workspace. Every algorithm takes a
//! [`DataSet`](clusterkit::DataSet) and returns its partition as an ordered list of data sets,
//! through the [`Cluster`](clusterkit::traits::Cluster) trait.
//!
//! ## Current state
//!
//! Right now `clusterkit-clustering` provides the following clustering algorithms:
//! * [K-Means](KMeans)
//! * [DBSCAN](Dbscan)
//!
//! Implementation choices, algorithmic details and tutorials can be found in the page dedicated to the specific algorithms.
mod dbscan;
mod k_means;

pub use dbscan::*;
pub use k_means::*;
