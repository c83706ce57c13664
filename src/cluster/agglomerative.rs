//! Agglomerative clustering: greedy nearest-pair merging.
//!
//! Every point starts as its own cluster. Each round scans all point pairs
//! with different labels, finds the pair at minimum [`Linkage`] distance, and
//! merges the two clusters by rewriting one label to the other. Merging
//! repeats until the number of clusters reaches the requested target.
//!
//! The linkage distances here are per-coordinate functions of two raw
//! vectors (see [`Linkage`]), not the classical inter-cluster linkage
//! criteria the names usually refer to.
//!
//! ## Complexity
//!
//! O(n²) pair scan per merge and O(n) merges: O(n³) overall. There is no
//! distance cache or spatial index; this model is meant for small datasets.
//!
//! ## Prediction
//!
//! `predict` returns the label of the nearest dataset point by plain
//! Euclidean distance. Linkage plays no role in prediction.

use super::dataset::Dataset;
use super::metric::{euclidean, Linkage};
use super::traits::Clusterer;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Agglomerative (hierarchical) clustering model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agglomerative {
    data: Dataset,
    labels: Vec<i64>,
    n_clusters: usize,
    fitted: bool,
}

impl Agglomerative {
    /// Create an empty, unfitted model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge clusters under `linkage` until exactly `target_clusters` remain.
    ///
    /// Final labels are compacted to `[0, target_clusters)` in order of first
    /// appearance, so label values are stable cluster identifiers.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `target_clusters == 0`, `InsufficientData` if
    /// the dataset holds fewer than `target_clusters` points. On error the
    /// model is left untouched.
    pub fn learn(&mut self, linkage: Linkage, target_clusters: usize) -> Result<()> {
        if target_clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "target_clusters",
                message: "must be at least 1",
            });
        }
        let n = self.data.len();
        if n < target_clusters {
            return Err(Error::InsufficientData {
                required: target_clusters,
                available: n,
            });
        }

        // Every point starts as its own cluster.
        let mut labels: Vec<i64> = (0..n as i64).collect();
        let mut active = n;

        while active > target_clusters {
            let Some((_, min_i, min_j)) = self.closest_pair(&labels, linkage)? else {
                break;
            };

            // Merge: rewrite the whole cluster of j into the cluster of i.
            let from = labels[min_j];
            let to = labels[min_i];
            for label in labels.iter_mut() {
                if *label == from {
                    *label = to;
                }
            }
            active -= 1;
        }

        compact_labels(&mut labels);
        self.labels = labels;
        self.n_clusters = target_clusters;
        self.fitted = true;
        Ok(())
    }

    /// Number of clusters requested by the last `learn`.
    pub fn cluster_count(&self) -> Result<usize> {
        if !self.fitted {
            return Err(Error::NotFitted);
        }
        Ok(self.n_clusters)
    }

    /// Minimum-distance pair `(dist, i, j)` among points with different
    /// labels, or `None` when every point shares one label.
    ///
    /// The candidate starts as `None` and is replaced only by a strictly
    /// smaller distance, so ties keep the first pair found in scan order.
    fn closest_pair(
        &self,
        labels: &[i64],
        linkage: Linkage,
    ) -> Result<Option<(f64, usize, usize)>> {
        let n = self.data.len();
        let mut best: Option<(f64, usize, usize)> = None;

        for i in 0..n {
            for j in (i + 1)..n {
                if labels[i] == labels[j] {
                    continue;
                }
                let d = linkage.distance(self.data.point(i), self.data.point(j))?;
                if best.is_none_or(|(bd, _, _)| d < bd) {
                    best = Some((d, i, j));
                }
            }
        }
        Ok(best)
    }
}

/// Rewrite labels to `[0, k)` in order of first appearance.
fn compact_labels(labels: &mut [i64]) {
    let mut seen: Vec<i64> = Vec::new();
    for label in labels.iter_mut() {
        let compact = match seen.iter().position(|&s| s == *label) {
            Some(pos) => pos,
            None => {
                seen.push(*label);
                seen.len() - 1
            }
        };
        *label = compact as i64;
    }
}

impl Clusterer for Agglomerative {
    fn add(&mut self, point: Vec<f64>) -> Result<()> {
        if self.fitted {
            return Err(Error::AlreadyFitted);
        }
        self.data.push(point)
    }

    /// Label of the nearest dataset point by Euclidean distance.
    fn predict(&self, point: &[f64]) -> Result<i64> {
        if !self.fitted {
            return Err(Error::NotFitted);
        }
        self.data.check_query(point)?;

        let mut best: Option<(f64, usize)> = None;
        for (idx, other) in self.data.points().iter().enumerate() {
            let d = euclidean(point, other)?;
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, idx));
            }
        }
        // The dataset is non-empty after a successful learn.
        let (_, idx) = best.ok_or(Error::NotFitted)?;
        Ok(self.labels[idx])
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
