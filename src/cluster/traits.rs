use crate::error::Result;

/// Common interface for the incremental clustering lifecycle.
///
/// Every model follows the same three-phase protocol: build a dataset with
/// repeated [`add`](Clusterer::add) calls, fit once with the model's inherent
/// `learn` method (parameters differ per algorithm, so `learn` is not part of
/// this trait), then query with [`predict`](Clusterer::predict) any number of
/// times. After `learn` the model is read-only; `predict` is side-effect-free.
pub trait Clusterer {
    /// Append a point to the dataset.
    ///
    /// Fails with `DimensionMismatch` if the point's length disagrees with
    /// the established dataset dimensionality, or `AlreadyFitted` once
    /// `learn` has run.
    fn add(&mut self, point: Vec<f64>) -> Result<()>;

    /// Classify a point against the fitted model, returning a cluster id.
    ///
    /// Fails with `NotFitted` before `learn`, or `DimensionMismatch` on a
    /// wrong-length query.
    fn predict(&self, point: &[f64]) -> Result<i64>;

    /// One label per dataset point, as computed by `learn`.
    ///
    /// Fails with `NotFitted` before `learn`.
    fn labels(&self) -> Result<&[i64]>;

    /// Whether `learn` has completed on this model.
    fn is_fitted(&self) -> bool;
}
