//! Distance functions over dense vectors.
//!
//! [`euclidean`] is the workhorse metric used by every model in this crate.
//! The [`Linkage`] variants are the per-coordinate distances selectable for
//! the agglomerative model: minimum, maximum, or mean absolute coordinate
//! difference. Note that despite the name these operate coordinate-wise on
//! two raw vectors, not over inter-cluster point pairs as classical
//! single/complete/average linkage does.
//!
//! Every function validates that both inputs have the same length and fails
//! with [`Error::DimensionMismatch`] otherwise.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Euclidean (L2) distance between two equal-length vectors.
///
/// Symmetric, nonnegative, and zero iff `a == b` elementwise.
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    Ok(sum.sqrt())
}

/// Per-coordinate distance selector for the agglomerative model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Linkage {
    /// Minimum absolute coordinate-wise difference.
    Single,
    /// Maximum absolute coordinate-wise difference.
    Complete,
    /// Mean absolute coordinate-wise difference.
    Average,
}

impl Linkage {
    /// Distance between two equal-length vectors under this linkage.
    pub fn distance(self, a: &[f64], b: &[f64]) -> Result<f64> {
        check_lengths(a, b)?;
        let diffs = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs());
        Ok(match self {
            Linkage::Single => diffs.fold(f64::INFINITY, f64::min),
            Linkage::Complete => diffs.fold(0.0, f64::max),
            Linkage::Average => diffs.sum::<f64>() / a.len() as f64,
        })
    }
}

impl FromStr for Linkage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(Linkage::Single),
            "complete" => Ok(Linkage::Complete),
            "average" => Ok(Linkage::Average),
            _ => Err(Error::InvalidParameter {
                name: "linkage",
                message: "must be one of: single, complete, average",
            }),
        }
    }
}

#[inline]
fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_basic() {
        let d = euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_zero_iff_equal() {
        let d = euclidean(&[1.5, -2.0, 0.25], &[1.5, -2.0, 0.25]).unwrap();
        assert_eq!(d, 0.0);
        let d = euclidean(&[1.5, -2.0, 0.25], &[1.5, -2.0, 0.3]).unwrap();
        assert!(d > 0.0);
    }

    #[test]
    fn euclidean_symmetric() {
        let a = [1.0, 2.0, 3.0];
        let b = [-4.0, 0.5, 7.0];
        assert_eq!(euclidean(&a, &b).unwrap(), euclidean(&b, &a).unwrap());
    }

    #[test]
    fn euclidean_length_mismatch() {
        let err = euclidean(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn linkage_coordinate_wise() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 2.0, 6.0];
        assert_eq!(Linkage::Single.distance(&a, &b).unwrap(), 1.0);
        assert_eq!(Linkage::Complete.distance(&a, &b).unwrap(), 6.0);
        assert_eq!(Linkage::Average.distance(&a, &b).unwrap(), 3.0);
    }

    #[test]
    fn linkage_length_mismatch() {
        let err = Linkage::Average.distance(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn linkage_from_str() {
        assert_eq!("single".parse::<Linkage>().unwrap(), Linkage::Single);
        assert_eq!("complete".parse::<Linkage>().unwrap(), Linkage::Complete);
        assert_eq!("average".parse::<Linkage>().unwrap(), Linkage::Average);
        assert!(matches!(
            "ward".parse::<Linkage>().unwrap_err(),
            Error::InvalidParameter { name: "linkage", .. }
        ));
    }
}
