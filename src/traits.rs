//! Core traits for column transformers.

use crate::error::Result;

/// Trait for fitted column transformations (scalers).
///
/// Parameters are learned once from training data with [`fit`](Self::fit)
/// and reapplied unchanged to any other column with
/// [`transform`](Self::transform).
///
/// # Examples
///
/// ```
/// use studyperf::preprocessing::MinMaxScaler;
/// use studyperf::traits::Transformer;
///
/// let mut scaler = MinMaxScaler::new();
/// let train = scaler.fit_transform(&[2.0, 4.0, 6.0]).expect("non-constant column");
/// assert_eq!(train, vec![0.0, 0.5, 1.0]);
///
/// let eval = scaler.transform(&[8.0]).expect("fitted");
/// assert_eq!(eval, vec![1.5]);
/// ```
pub trait Transformer {
    /// Learns transformation parameters from `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the column cannot be fitted.
    fn fit(&mut self, x: &[f64]) -> Result<()>;

    /// Applies the learned parameters to `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted.
    fn transform(&self, x: &[f64]) -> Result<Vec<f64>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &[f64]) -> Result<Vec<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}
