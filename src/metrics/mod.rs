//! Regression accuracy metrics.
//!
//! R² here is measured against the mean of the *training* response, not
//! the evaluation set's own mean. A model that does worse on held-out data
//! than always predicting the training mean gets a negative R².

use crate::error::{Result, StudyPerfError};
use serde::{Deserialize, Serialize};

/// Accuracy of one fitted model on an evaluation set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Mean squared error.
    pub mse: f64,
    /// Coefficient of determination against the training mean.
    pub r_squared: f64,
}

fn check_parallel(operation: &'static str, actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() {
        return Err(StudyPerfError::empty_input(operation));
    }
    if actual.len() != predicted.len() {
        return Err(StudyPerfError::length_mismatch(
            operation,
            actual.len(),
            predicted.len(),
        ));
    }
    Ok(())
}

fn sum_squared_residuals(actual: &[f64], predicted: &[f64]) -> f64 {
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum()
}

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(actual - predicted)²`
///
/// # Errors
///
/// Returns `InvalidInput` if the inputs are empty or differ in length.
///
/// # Examples
///
/// ```
/// use studyperf::metrics::mse;
///
/// let actual = [3.0, -0.5, 2.0, 7.0];
/// let predicted = [2.5, 0.0, 2.0, 8.0];
/// assert!((mse(&actual, &predicted).expect("parallel") - 0.375).abs() < 1e-12);
/// ```
pub fn mse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_parallel("mse", actual, predicted)?;
    Ok(sum_squared_residuals(actual, predicted) / actual.len() as f64)
}

/// Computes the Root Mean Squared Error (RMSE).
///
/// # Errors
///
/// Returns `InvalidInput` if the inputs are empty or differ in length.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mse(actual, predicted).map(f64::sqrt)
}

/// Computes the Mean Absolute Error (MAE).
///
/// # Errors
///
/// Returns `InvalidInput` if the inputs are empty or differ in length.
pub fn mae(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_parallel("mae", actual, predicted)?;
    let sum_abs: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum();
    Ok(sum_abs / actual.len() as f64)
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`), with `SS_res = Σ(actual - predicted)²`
/// and `SS_tot = Σ(actual - reference_mean)²`.
///
/// # Errors
///
/// Returns `InvalidInput` if the inputs are empty or differ in length, and
/// `DegenerateInput` if `SS_tot` is zero.
///
/// # Examples
///
/// ```
/// use studyperf::metrics::r_squared;
///
/// let actual = [2.0, 4.0];
/// let r2 = r_squared(&actual, &[2.0, 4.0], 3.0).expect("non-zero SS_tot");
/// assert_eq!(r2, 1.0);
/// ```
pub fn r_squared(actual: &[f64], predicted: &[f64], reference_mean: f64) -> Result<f64> {
    check_parallel("r_squared", actual, predicted)?;

    let ss_res = sum_squared_residuals(actual, predicted);
    let ss_tot: f64 = actual.iter().map(|a| (a - reference_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Err(StudyPerfError::degenerate(
            "r_squared",
            format!("SS_total is zero (every actual value equals the reference mean {reference_mean})"),
        ));
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// MSE and R² of `predicted` against `actual`, with R²'s baseline taken
/// from `train_response`.
///
/// # Errors
///
/// Returns `InvalidInput` if any input is empty or `actual` and
/// `predicted` differ in length, and `DegenerateInput` if `SS_tot` is zero.
pub fn evaluate(actual: &[f64], predicted: &[f64], train_response: &[f64]) -> Result<Evaluation> {
    if train_response.is_empty() {
        return Err(StudyPerfError::empty_input("evaluate"));
    }
    let train_mean = train_response.iter().sum::<f64>() / train_response.len() as f64;
    Ok(Evaluation {
        mse: mse(actual, predicted)?,
        r_squared: r_squared(actual, predicted, train_mean)?,
    })
}
