//! Dense clustering primitives.
//!
//! `shoal` is a small library of clustering algorithms for dense numeric
//! vectors, built around an incremental add → learn → predict lifecycle.
//!
//! The primary public API is under [`cluster`], which provides:
//! - k-means (deterministic seeding, fixed Lloyd iterations)
//! - k-means++ (distance-weighted seeding, convergence detection)
//! - DBSCAN (density clustering with noise labeling)
//! - agglomerative (greedy nearest-pair merging with selectable linkage)

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    euclidean, Agglomerative, Clusterer, Dataset, Dbscan, KMeans, KMeansPlusPlus, Linkage, NOISE,
};
pub use error::{Error, Result};
