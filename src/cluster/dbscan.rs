//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! DBSCAN (Ester et al., 1996) groups points by neighborhood density. Unlike
//! k-means it discovers the number of clusters on its own, finds clusters of
//! arbitrary shape, and labels outliers as noise.
//!
//! ## Core concepts
//!
//! - **Epsilon (ε)**: maximum distance between two points to be neighbors
//!   (inclusive).
//! - **MinPts**: minimum neighborhood size, counting the point itself, for a
//!   point to be core.
//! - **Noise point**: not density-reachable from any core point; labeled
//!   [`NOISE`]. A point first marked noise can still be promoted to a border
//!   point when a later cluster reaches it.
//!
//! ## Labeling convention
//!
//! Cluster ids are allocated by pre-increment and start at `1`; `-1` is
//! reserved for noise and never reused as a cluster id. Internally `0` means
//! "not yet classified" and never survives to the fitted label array.
//!
//! ## Complexity
//!
//! The region query is an exact O(n²) scan; there is no spatial index. Learn
//! is worst-case O(n²) region queries on dense data.
//!
//! ## Prediction
//!
//! `predict` is an exact-match lookup: it returns the label of a dataset
//! point at distance exactly `0.0` from the query, or [`NOISE`] when the
//! query matches no stored point. It does not density-classify unseen points.

use super::dataset::Dataset;
use super::metric::euclidean;
use super::traits::Clusterer;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Label for points not density-reachable from any cluster.
pub const NOISE: i64 = -1;

// Zero-value default of the label array; replaced for every point by learn.
const UNCLASSIFIED: i64 = 0;

/// DBSCAN clustering model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dbscan {
    data: Dataset,
    labels: Vec<i64>,
    fitted: bool,
}

impl Dbscan {
    /// Create an empty, unfitted model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit with neighborhood radius `eps` (inclusive) and density threshold
    /// `min_pts` (counting the point itself).
    ///
    /// For every unvisited point the ε-neighborhood is computed; points whose
    /// neighborhood is smaller than `min_pts` become noise, otherwise a new
    /// cluster id is allocated and the neighborhood expanded through a FIFO
    /// work queue: every reached core point contributes its own neighborhood,
    /// and any unclassified or noise point reached this way joins the
    /// current cluster.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `eps` is not positive or `min_pts == 0`,
    /// `InsufficientData` on an empty dataset. On error the model is left
    /// untouched.
    pub fn learn(&mut self, eps: f64, min_pts: usize) -> Result<()> {
        if eps <= 0.0 || eps.is_nan() {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be positive",
            });
        }
        if min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }
        let n = self.data.len();
        if n == 0 {
            return Err(Error::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        let mut labels = vec![UNCLASSIFIED; n];
        let mut visited = vec![false; n];
        let mut cluster: i64 = 0;

        for idx in 0..n {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            let region = self.region_query(idx, eps)?;
            if region.len() < min_pts {
                // Possibly promoted to a border point later.
                labels[idx] = NOISE;
                continue;
            }

            cluster += 1;
            labels[idx] = cluster;
            self.expand_cluster(region, eps, min_pts, cluster, &mut labels, &mut visited)?;
        }

        self.labels = labels;
        self.fitted = true;
        Ok(())
    }

    /// Number of clusters found by the last `learn` (noise excluded).
    pub fn cluster_count(&self) -> Result<usize> {
        if !self.fitted {
            return Err(Error::NotFitted);
        }
        let max = self.labels.iter().copied().max().unwrap_or(0);
        Ok(max.max(0) as usize)
    }

    /// All points within `eps` of `point_idx`, the point itself included.
    fn region_query(&self, point_idx: usize, eps: f64) -> Result<Vec<usize>> {
        let point = self.data.point(point_idx);
        let mut region = Vec::new();
        for (idx, other) in self.data.points().iter().enumerate() {
            if euclidean(point, other)? <= eps {
                region.push(idx);
            }
        }
        Ok(region)
    }

    /// Grow `cluster` from a seeded region.
    ///
    /// The queue is seeded with the core point's neighborhood and appended to
    /// whenever an unvisited member turns out to be core itself. Each point's
    /// neighborhood is computed at most once (guarded by `visited`), so queue
    /// growth is bounded and the loop terminates.
    fn expand_cluster(
        &self,
        region: Vec<usize>,
        eps: f64,
        min_pts: usize,
        cluster: i64,
        labels: &mut [i64],
        visited: &mut [bool],
    ) -> Result<()> {
        let mut queue: VecDeque<usize> = region.into();

        while let Some(idx) = queue.pop_front() {
            // Unclassified and noise points join the cluster; points already
            // claimed by a cluster keep their label.
            if labels[idx] <= 0 {
                labels[idx] = cluster;
            }

            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            let neighborhood = self.region_query(idx, eps)?;
            if neighborhood.len() >= min_pts {
                queue.extend(neighborhood);
            }
        }
        Ok(())
    }
}

impl Clusterer for Dbscan {
    fn add(&mut self, point: Vec<f64>) -> Result<()> {
        if self.fitted {
            return Err(Error::AlreadyFitted);
        }
        self.data.push(point)
    }

    /// Exact-match lookup: the label of the dataset point at distance `0.0`
    /// from the query, or [`NOISE`] when none matches.
    fn predict(&self, point: &[f64]) -> Result<i64> {
        if !self.fitted {
            return Err(Error::NotFitted);
        }
        self.data.check_query(point)?;
        for (idx, other) in self.data.points().iter().enumerate() {
            if euclidean(point, other)? == 0.0 {
                return Ok(self.labels[idx]);
            }
        }
        Ok(NOISE)
    }

    fn labels(&self) -> Result<&[i64]> {
        if !self.fitted {
            return Err(Error::NotFitted);
        }
        Ok(&self.labels)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_from(points: &[Vec<f64>]) -> Dbscan {
        let mut model = Dbscan::new();
        for p in points {
            model.add(p.clone()).unwrap();
        }
        model
    }

    #[test]
    fn dbscan_cluster_and_noise() {
        let mut model = model_from(&[
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![20.0, 20.0],
        ]);
        model.learn(1.5, 2).unwrap();

        let labels = model.labels().unwrap();
        assert_eq!(labels[0], 1);
        assert_eq!(labels[1], 1);
        assert_eq!(labels[2], 1);
        assert_eq!(labels[3], NOISE);
        assert_eq!(model.cluster_count().unwrap(), 1);
    }

    #[test]
    fn dbscan_first_cluster_id_is_one() {
        let mut model = model_from(&[vec![0.0], vec![0.1], vec![0.2]]);
        model.learn(0.5, 2).unwrap();
        for &label in model.labels().unwrap() {
            assert_eq!(label, 1);
        }
    }

    #[test]
    fn dbscan_two_clusters() {
        let mut model = model_from(&[
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
        ]);
        model.learn(0.3, 2).unwrap();

        let labels = model.labels().unwrap();
        assert_eq!(labels[0], 1);
        assert_eq!(labels[1], 1);
        assert_eq!(labels[2], 1);
        assert_eq!(labels[3], 2);
        assert_eq!(labels[4], 2);
        assert_eq!(labels[5], 2);
        assert_eq!(model.cluster_count().unwrap(), 2);
    }

    #[test]
    fn dbscan_all_noise() {
        let mut model = model_from(&[
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
        ]);
        model.learn(0.5, 2).unwrap();
        for &label in model.labels().unwrap() {
            assert_eq!(label, NOISE);
        }
        assert_eq!(model.cluster_count().unwrap(), 0);
    }

    #[test]
    fn dbscan_chain_is_one_cluster() {
        // Density-reachability is transitive along a chain.
        let points: Vec<Vec<f64>> = (0..10).map(|i| vec![f64::from(i) * 0.3, 0.0]).collect();
        let mut model = model_from(&points);
        model.learn(0.5, 2).unwrap();
        for &label in model.labels().unwrap() {
            assert_eq!(label, 1);
        }
    }

    #[test]
    fn dbscan_noise_promoted_to_border() {
        // eps=1.0, min_pts=3: region(0) = {0, 1} is too small, so point 0
        // becomes noise first. Point 1 is core (region {0, 1, 2}) and must
        // reclaim point 0 as a border point of cluster 1.
        let mut model = model_from(&[vec![0.0], vec![1.0], vec![2.0], vec![2.5]]);
        model.learn(1.0, 3).unwrap();
        let labels = model.labels().unwrap();
        assert_eq!(labels, &[1, 1, 1, 1][..]);
    }

    #[test]
    fn dbscan_predict_exact_match_only() {
        let mut model = model_from(&[
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![20.0, 20.0],
        ]);
        model.learn(1.5, 2).unwrap();

        assert_eq!(model.predict(&[0.0, 1.0]).unwrap(), 1);
        assert_eq!(model.predict(&[20.0, 20.0]).unwrap(), NOISE);
        // Near misses are not classified.
        assert_eq!(model.predict(&[0.0, 0.9]).unwrap(), NOISE);
    }

    #[test]
    fn dbscan_rejects_bad_parameters() {
        let mut model = model_from(&[vec![0.0, 0.0]]);
        assert!(matches!(
            model.learn(0.0, 2).unwrap_err(),
            Error::InvalidParameter { name: "eps", .. }
        ));
        assert!(matches!(
            model.learn(-1.0, 2).unwrap_err(),
            Error::InvalidParameter { name: "eps", .. }
        ));
        assert!(matches!(
            model.learn(0.5, 0).unwrap_err(),
            Error::InvalidParameter { name: "min_pts", .. }
        ));
        assert!(!model.is_fitted());

        let mut empty = Dbscan::new();
        assert!(matches!(
            empty.learn(0.5, 2).unwrap_err(),
            Error::InsufficientData { .. }
        ));
    }

    #[test]
    fn dbscan_lifecycle_errors() {
        let mut model = model_from(&[vec![0.0], vec![0.1]]);
        assert!(matches!(
            model.predict(&[0.0]).unwrap_err(),
            Error::NotFitted
        ));
        model.learn(0.5, 2).unwrap();
        assert!(matches!(
            model.add(vec![1.0]).unwrap_err(),
            Error::AlreadyFitted
        ));
        assert!(matches!(
            model.predict(&[0.0, 0.0]).unwrap_err(),
            Error::DimensionMismatch { .. }
        ));
    }
}
