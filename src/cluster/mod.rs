//! Clustering algorithms for grouping similar points.
//!
//! All models share one lifecycle, captured by the [`Clusterer`] trait:
//! build a [`Dataset`] with repeated `add` calls, fit exactly once with the
//! model's `learn` method, then classify points with `predict`. The dataset
//! is frozen at `learn` time; adding afterwards is an error.
//!
//! ## Algorithms
//!
//! ### K-means ([`KMeans`], [`KMeansPlusPlus`])
//!
//! The classic centroid scheme: assign each point to the nearest centroid,
//! then update centroids to the mean of their points.
//!
//! **Objective**: minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! [`KMeans`] seeds centroids from the first `k` dataset points and runs a
//! fixed iteration count, so its output is fully deterministic.
//! [`KMeansPlusPlus`] seeds by distance-weighted random sampling and stops
//! early once assignments settle; seed it with `with_seed` for reproducible
//! runs.
//!
//! **When to use**: clusters are roughly spherical and `k` is known.
//!
//! ### DBSCAN ([`Dbscan`])
//!
//! Density-based clustering that discovers the cluster count itself, finds
//! non-convex clusters, and marks outliers as noise ([`NOISE`], `-1`).
//! Cluster ids start at `1`.
//!
//! ### Agglomerative ([`Agglomerative`])
//!
//! Bottom-up hierarchical merging: every point starts as its own cluster and
//! the closest pair of clusters merges until a target count remains, under a
//! selectable [`Linkage`] distance.
//!
//! ## Usage
//!
//! ```rust
//! use shoal::cluster::{Clusterer, KMeans};
//!
//! let mut model = KMeans::new();
//! model.add(vec![0.0, 0.0])?;
//! model.add(vec![0.0, 1.0])?;
//! model.add(vec![10.0, 10.0])?;
//! model.add(vec![10.0, 11.0])?;
//!
//! model.learn(2, 10)?;
//!
//! assert_eq!(model.predict(&[0.0, 0.2])?, 0);
//! assert_eq!(model.predict(&[10.0, 10.8])?, 1);
//! # Ok::<(), shoal::Error>(())
//! ```
//!
//! ## Persistence
//!
//! Every model derives `serde::{Serialize, Deserialize}`; pick any serde
//! format to round-trip fitted state losslessly.

mod agglomerative;
mod dataset;
mod dbscan;
mod kmeans;
pub mod metric;
mod traits;

pub use agglomerative::Agglomerative;
pub use dataset::Dataset;
pub use dbscan::{Dbscan, NOISE};
pub use kmeans::{KMeans, KMeansPlusPlus};
pub use metric::{euclidean, Linkage};
pub use traits::Clusterer;
