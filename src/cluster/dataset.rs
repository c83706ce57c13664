//! Append-only point storage shared by all clustering models.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered, append-only collection of equal-dimension points.
///
/// Insertion order is preserved and doubles as point identity: every model in
/// this crate works over indices into its dataset, never copies, so labels
/// stay aligned with the points they describe.
///
/// The dimensionality is fixed by the first point pushed; later points with a
/// different length are rejected with [`Error::DimensionMismatch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    points: Vec<Vec<f64>>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, enforcing the established dimensionality.
    pub fn push(&mut self, point: Vec<f64>) -> Result<()> {
        if point.is_empty() {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }
        if let Some(first) = self.points.first() {
            if point.len() != first.len() {
                return Err(Error::DimensionMismatch {
                    expected: first.len(),
                    found: point.len(),
                });
            }
        }
        self.points.push(point);
        Ok(())
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimensionality, once established by the first point.
    pub fn dim(&self) -> Option<usize> {
        self.points.first().map(Vec::len)
    }

    /// The point at `index`.
    pub fn point(&self, index: usize) -> &[f64] {
        &self.points[index]
    }

    /// All points, in insertion order.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Validate a query vector against the dataset dimensionality.
    pub(crate) fn check_query(&self, point: &[f64]) -> Result<()> {
        if let Some(dim) = self.dim() {
            if point.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: point.len(),
                });
            }
        }
        Ok(())
    }
}
