//! Linear models for regression.
//!
//! Ordinary Least Squares over a selectable [`FeatureSpec`], predicting the
//! performance index.

use crate::data::{Feature, FeatureSpec, Observation};
use crate::error::{Result, StudyPerfError};
use crate::metrics::{self, Evaluation};
use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits a linear model by minimizing the residual sum of squares between
/// observed and predicted performance index. The model equation is:
///
/// ```text
/// y = b0 + b1*x1 + ... + bk*xk
/// ```
///
/// where `x1..xk` are the [`FeatureSpec`] features, in order.
///
/// # Solver
///
/// Centers every feature and the response, then solves the normal equations
/// `b = (Xc^T Xc)^-1 Xc^T yc` via Cholesky decomposition. The intercept is
/// recovered as `b0 = mean(y) - sum(b_i * mean(x_i))`, so large offsets in a
/// feature do not swamp the pivot test. A rank-deficient `[1 | X]` is
/// reported, never solved.
///
/// # Examples
///
/// ```
/// use studyperf::data::{FeatureSpec, Observation};
/// use studyperf::linear_model::LinearRegression;
///
/// // performance = 10 + 5 * hours
/// let train: Vec<Observation> = (1..=4)
///     .map(|h| {
///         let h = f64::from(h);
///         Observation::new(h, 50.0, false, 7.0, 1.0, 10.0 + 5.0 * h)
///     })
///     .collect();
///
/// let spec = FeatureSpec::from_ids(&[0]).expect("known feature");
/// let model = LinearRegression::new(spec).fit(&train).expect("full rank");
///
/// assert!((model.intercept() - 10.0).abs() < 1e-9);
/// assert!((model.coefficients()[0] - 5.0).abs() < 1e-9);
/// assert!((model.predict(&[6.0]).expect("one feature") - 40.0).abs() < 1e-9);
/// ```
///
/// # Performance
///
/// - Time complexity: O(n·p² + p³) where n = samples, p = features
/// - Space complexity: O(n·p)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    features: FeatureSpec,
}

impl LinearRegression {
    /// Creates an OLS regression over `features`.
    #[must_use]
    pub fn new(features: FeatureSpec) -> Self {
        Self { features }
    }

    /// The predictors this regression uses.
    #[must_use]
    pub fn features(&self) -> &FeatureSpec {
        &self.features
    }

    /// Fits the model to `train`, with performance index as the response.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidInput` if `train` is empty or holds a NaN or infinite value
    ///   in a selected feature or the response
    /// - `DegenerateInput` if the design matrix is rank-deficient (fewer
    ///   rows than features + 1, or collinear columns)
    pub fn fit(&self, train: &[Observation]) -> Result<FittedModel> {
        let x = self.features.design_matrix(train)?;
        let y: Vec<f64> = train
            .iter()
            .map(|o| Feature::PerformanceIndex.value(o))
            .collect();

        for (i, obs) in train.iter().enumerate() {
            let values = self.features.extract(obs);
            if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
                return Err(StudyPerfError::invalid(
                    "fit",
                    format!(
                        "row {i}: feature '{}' is {}; filter missing values before fitting",
                        self.features.features()[pos],
                        values[pos]
                    ),
                ));
            }
            if !y[i].is_finite() {
                return Err(StudyPerfError::invalid(
                    "fit",
                    format!("row {i}: response is {}", y[i]),
                ));
            }
        }

        let (intercept, coefficients) = least_squares(&x, &y)?;
        let train_response_mean = y.iter().sum::<f64>() / y.len() as f64;

        Ok(FittedModel {
            features: self.features.clone(),
            intercept,
            coefficients: coefficients.into_vec(),
            n_train: train.len(),
            train_response_mean,
        })
    }
}

/// Solves `y ≈ b0 + X b` by least squares.
///
/// Returns the intercept and one coefficient per column of `x`.
///
/// # Errors
///
/// Returns `InvalidInput` if `x` and `y` disagree in length or are empty,
/// and `DegenerateInput` if `[1 | X]` does not have full column rank.
pub fn least_squares(x: &Matrix<f64>, y: &[f64]) -> Result<(f64, Vector<f64>)> {
    let (n_samples, n_features) = x.shape();

    if n_samples != y.len() {
        return Err(StudyPerfError::length_mismatch("fit", n_samples, y.len()));
    }
    if n_samples == 0 {
        return Err(StudyPerfError::empty_input("fit"));
    }

    // With an intercept the system needs n_samples >= n_features + 1.
    let required_samples = n_features + 1;
    if n_samples < required_samples {
        debug!(n_samples, n_features, "rejecting underdetermined fit");
        return Err(StudyPerfError::degenerate(
            "fit",
            format!(
                "rank-deficient design matrix: {n_samples} training rows for \
                 {n_features} features + intercept (need at least {required_samples})"
            ),
        ));
    }

    let n = n_samples as f64;
    let x_means: Vec<f64> = (0..n_features)
        .map(|j| (0..n_samples).map(|i| x.get(i, j)).sum::<f64>() / n)
        .collect();
    let y_mean = y.iter().sum::<f64>() / n;

    // A constant column is exactly collinear with the intercept and centers to zero.
    let constant_column =
        (0..n_features).find(|&j| (1..n_samples).all(|i| x.get(i, j) == x.get(0, j)));
    if let Some(j) = constant_column {
        debug!(n_samples, n_features, column = j, "rejecting constant column");
        return Err(StudyPerfError::degenerate(
            "fit",
            format!(
                "rank-deficient design matrix: column {j} is constant \
                 (collinear with the intercept)"
            ),
        ));
    }

    let mut centered = Vec::with_capacity(n_samples * n_features);
    for i in 0..n_samples {
        centered.extend(x.row(i).iter().zip(&x_means).map(|(v, m)| v - m));
    }
    let xc = Matrix::from_vec(n_samples, n_features, centered)?;
    let yc: Vec<f64> = y.iter().map(|v| v - y_mean).collect();

    let xt = xc.transpose();
    let gram = xt.matmul(&xc)?;
    let rhs = xt.matvec(&Vector::from_vec(yc))?;

    let slopes = gram.cholesky_solve(&rhs).map_err(|e| match e {
        StudyPerfError::DegenerateInput { detail, .. } => {
            debug!(n_samples, n_features, %detail, "rejecting collinear fit");
            StudyPerfError::degenerate(
                "fit",
                format!("rank-deficient design matrix (collinear columns): {detail}"),
            )
        }
        other => other,
    })?;

    let intercept = y_mean
        - slopes
            .as_slice()
            .iter()
            .zip(&x_means)
            .map(|(b, m)| b * m)
            .sum::<f64>();

    debug!(n_samples, n_features, intercept, "fitted OLS model");
    Ok((intercept, slopes))
}

/// A fitted OLS model: intercept plus one coefficient per feature.
///
/// Immutable after fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    features: FeatureSpec,
    intercept: f64,
    coefficients: Vec<f64>,
    n_train: usize,
    train_response_mean: f64,
}

impl FittedModel {
    /// The features, in coefficient order.
    #[must_use]
    pub fn features(&self) -> &FeatureSpec {
        &self.features
    }

    /// Intercept term `b0`.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficients `b1..bk`, in feature order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient for one feature, if it was selected.
    #[must_use]
    pub fn coefficient(&self, feature: Feature) -> Option<f64> {
        self.features
            .position(feature)
            .map(|i| self.coefficients[i])
    }

    /// Number of training observations.
    #[must_use]
    pub fn n_train(&self) -> usize {
        self.n_train
    }

    /// Mean performance index of the training set.
    #[must_use]
    pub fn train_response_mean(&self) -> f64 {
        self.train_response_mean
    }

    /// Predicts `b0 + Σ bi*xi` for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `x` has a different length than the
    /// feature spec.
    pub fn predict(&self, x: &[f64]) -> Result<f64> {
        if x.len() != self.coefficients.len() {
            return Err(StudyPerfError::length_mismatch(
                "predict",
                self.coefficients.len(),
                x.len(),
            ));
        }
        Ok(self.linear_combination(x))
    }

    /// Predicts the performance index of one observation.
    #[must_use]
    pub fn predict_observation(&self, obs: &Observation) -> f64 {
        self.linear_combination(&self.features.extract(obs))
    }

    /// Predicts every observation, in order.
    #[must_use]
    pub fn predict_all(&self, observations: &[Observation]) -> Vec<f64> {
        observations
            .iter()
            .map(|o| self.predict_observation(o))
            .collect()
    }

    /// MSE and R² on `eval`, with R² measured against the training mean.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `eval` is empty and `DegenerateInput` if
    /// every evaluation response equals the training mean.
    pub fn evaluate(&self, eval: &[Observation]) -> Result<Evaluation> {
        let actual: Vec<f64> = eval
            .iter()
            .map(|o| Feature::PerformanceIndex.value(o))
            .collect();
        let predicted = self.predict_all(eval);
        Ok(Evaluation {
            mse: metrics::mse(&actual, &predicted)?,
            r_squared: metrics::r_squared(&actual, &predicted, self.train_response_mean)?,
        })
    }

    fn linear_combination(&self, x: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(x)
                .map(|(b, v)| b * v)
                .sum::<f64>()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
