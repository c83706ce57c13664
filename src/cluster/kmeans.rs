//! Centroid-based clustering: k-means and k-means++.
//!
//! Both models follow Lloyd's scheme — assign every point to its nearest
//! centroid, then recompute each centroid as the mean of its assignment set —
//! but differ in seeding and in loop control:
//!
//! - [`KMeans`] seeds centroid `i` from dataset point `i` and runs a fixed
//!   number of refinement rounds with no convergence check. Output is fully
//!   deterministic for a given dataset.
//! - [`KMeansPlusPlus`] seeds the first centroid uniformly at random, then
//!   draws each further centroid with probability proportional to its minimum
//!   distance to the already-chosen centroids, and iterates refinement to a
//!   change-free fixed point or an iteration cap.
//!
//! Ties in the nearest-centroid scan go to the lowest centroid index: only a
//! strictly smaller distance replaces the current candidate.
//!
//! Note the k-means++ seeding weights use the plain Euclidean distance, not
//! the squared distance of the classical D² formulation. This is intentional;
//! see the crate design notes.

use super::dataset::Dataset;
use super::metric::euclidean;
use super::traits::Clusterer;
use crate::error::{Error, Result};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// K-means with deterministic seeding and a fixed refinement count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KMeans {
    data: Dataset,
    centroids: Vec<Vec<f64>>,
    labels: Vec<i64>,
}

impl KMeans {
    /// Create an empty, unfitted model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit `k` centroids with exactly `iterations` refinement rounds.
    ///
    /// Centroid `i` is seeded from dataset point `i`, so the dataset must
    /// hold at least `k` points. Each round assigns every point to its
    /// nearest centroid by Euclidean distance, then recomputes each centroid
    /// as the coordinate-wise mean of its assigned points. A centroid whose
    /// assignment set is empty becomes the all-zero vector; this degeneracy
    /// is non-fatal and left as-is for reproducibility.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `k == 0`, `InsufficientData` if the dataset has
    /// fewer than `k` points. On error the model is left untouched.
    pub fn learn(&mut self, k: usize, iterations: usize) -> Result<()> {
        validate_k(k, self.data.len())?;

        let mut centroids: Vec<Vec<f64>> =
            (0..k).map(|i| self.data.point(i).to_vec()).collect();
        let mut labels = vec![0i64; self.data.len()];

        // Fixed-count loop, no early stopping.
        for _ in 0..iterations {
            for (i, point) in self.data.points().iter().enumerate() {
                labels[i] = nearest_centroid(point, &centroids)? as i64;
            }
            centroids = recompute_centroids(&self.data, &labels, k);
        }

        self.centroids = centroids;
        self.labels = labels;
        Ok(())
    }

    /// The fitted centroids.
    pub fn centroids(&self) -> Result<&[Vec<f64>]> {
        if !self.is_fitted() {
            return Err(Error::NotFitted);
        }
        Ok(&self.centroids)
    }
}

impl Clusterer for KMeans {
    fn add(&mut self, point: Vec<f64>) -> Result<()> {
        if self.is_fitted() {
            return Err(Error::AlreadyFitted);
        }
        self.data.push(point)
    }

    fn predict(&self, point: &[f64]) -> Result<i64> {
        if !self.is_fitted() {
            return Err(Error::NotFitted);
        }
        self.data.check_query(point)?;
        Ok(nearest_centroid(point, &self.centroids)? as i64)
    }

    fn labels(&self) -> Result<&[i64]> {
        if !self.is_fitted() {
            return Err(Error::NotFitted);
        }
        Ok(&self.labels)
    }

    fn is_fitted(&self) -> bool {
        !self.centroids.is_empty()
    }
}

/// K-means with distance-weighted random seeding and convergence detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KMeansPlusPlus {
    data: Dataset,
    centroids: Vec<Vec<f64>>,
    labels: Vec<i64>,
    seed: Option<u64>,
}

impl KMeansPlusPlus {
    /// Create an empty, unfitted model seeded from system entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an RNG seed for reproducible seeding.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fit `k` centroids, stopping when an assignment pass changes no label
    /// or after the iteration cap.
    ///
    /// Seeding picks the first centroid uniformly at random, then draws each
    /// remaining centroid with probability proportional to its minimum
    /// Euclidean distance to the centroids chosen so far (inverse-CDF
    /// sampling over the raw weights). If every weight is zero — all points
    /// coincide with a chosen centroid — the draw falls back to a uniform
    /// random index.
    ///
    /// The refinement loop checks for stop between assignment and update, so
    /// the centroid update of the final round is skipped once labels settle.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `k == 0`, `InsufficientData` if the dataset has
    /// fewer than `k` points. On error the model is left untouched.
    pub fn learn(&mut self, k: usize, iterations: usize) -> Result<()> {
        validate_k(k, self.data.len())?;
        let n = self.data.len();

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let first = rng.random_range(0..n);
        let mut centroids: Vec<Vec<f64>> = vec![self.data.point(first).to_vec()];

        while centroids.len() < k {
            let mut weights = Vec::with_capacity(n);
            for point in self.data.points() {
                let mut min_dist = f64::INFINITY;
                for centroid in &centroids {
                    let d = euclidean(point, centroid)?;
                    if d < min_dist {
                        min_dist = d;
                    }
                }
                weights.push(min_dist);
            }
            let next = weighted_random(&mut rng, &weights);
            centroids.push(self.data.point(next).to_vec());
        }

        let mut labels = vec![0i64; n];
        let mut iteration = 0usize;
        loop {
            let mut changed = false;
            for (i, point) in self.data.points().iter().enumerate() {
                let label = nearest_centroid(point, &centroids)? as i64;
                if labels[i] != label {
                    labels[i] = label;
                    changed = true;
                }
            }
            if !changed || iteration > iterations {
                break;
            }
            centroids = recompute_centroids(&self.data, &labels, k);
            iteration += 1;
        }

        self.centroids = centroids;
        self.labels = labels;
        Ok(())
    }

    /// The fitted centroids.
    pub fn centroids(&self) -> Result<&[Vec<f64>]> {
        if !self.is_fitted() {
            return Err(Error::NotFitted);
        }
        Ok(&self.centroids)
    }
}

impl Clusterer for KMeansPlusPlus {
    fn add(&mut self, point: Vec<f64>) -> Result<()> {
        if self.is_fitted() {
            return Err(Error::AlreadyFitted);
        }
        self.data.push(point)
    }

    fn predict(&self, point: &[f64]) -> Result<i64> {
        if !self.is_fitted() {
            return Err(Error::NotFitted);
        }
        self.data.check_query(point)?;
        Ok(nearest_centroid(point, &self.centroids)? as i64)
    }

    fn labels(&self) -> Result<&[i64]> {
        if !self.is_fitted() {
            return Err(Error::NotFitted);
        }
        Ok(&self.labels)
    }

    fn is_fitted(&self) -> bool {
        !self.centroids.is_empty()
    }
}

fn validate_k(k: usize, n: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if n < k {
        return Err(Error::InsufficientData {
            required: k,
            available: n,
        });
    }
    Ok(())
}

/// Index of the nearest centroid; ties keep the lowest index because only a
/// strictly smaller distance replaces the candidate.
fn nearest_centroid(point: &[f64], centroids: &[Vec<f64>]) -> Result<usize> {
    let mut best: Option<(f64, usize)> = None;
    for (i, centroid) in centroids.iter().enumerate() {
        let d = euclidean(point, centroid)?;
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, i));
        }
    }
    // Centroid count is validated as >= 1 before any call.
    Ok(best.map(|(_, i)| i).unwrap_or(0))
}

/// Mean of each assignment set. A cluster with no assigned points yields an
/// all-zero centroid of the dataset dimensionality.
fn recompute_centroids(data: &Dataset, labels: &[i64], k: usize) -> Vec<Vec<f64>> {
    let dim = data.dim().unwrap_or(0);
    let mut sums = vec![vec![0.0f64; dim]; k];
    let mut counts = vec![0usize; k];

    for (i, point) in data.points().iter().enumerate() {
        let label = labels[i] as usize;
        counts[label] += 1;
        for (s, x) in sums[label].iter_mut().zip(point.iter()) {
            *s += x;
        }
    }

    for (sum, &count) in sums.iter_mut().zip(counts.iter()) {
        if count > 0 {
            for s in sum.iter_mut() {
                *s /= count as f64;
            }
        }
    }

    sums
}

/// Inverse-CDF sample over raw weights: draw `u` uniform in `[0, total)` and
/// subtract weights in order until the running value goes negative.
///
/// All-zero weights fall back to a uniform index draw.
fn weighted_random(rng: &mut Box<dyn RngCore>, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }
    let mut u = rng.random_range(0.0..total);
    for (i, w) in weights.iter().enumerate() {
        u -= w;
        if u < 0.0 {
            return i;
        }
    }
    weights.len() - 1
}
