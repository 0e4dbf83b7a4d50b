//! Min-max normalization of feature columns.
//!
//! # Example
//!
//! ```
//! use studyperf::preprocessing::normalize;
//!
//! let scaled = normalize(&[10.0, 15.0, 20.0]).expect("non-constant column");
//! assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
//!
//! // A constant column carries no signal and is rejected.
//! assert!(normalize(&[5.0, 5.0, 5.0]).is_err());
//! ```

use crate::data::{Dataset, Feature};
use crate::error::{Result, StudyPerfError};
use crate::stats::min_max;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Rescales `data` to [0, 1] via `(v - min) / (max - min)`.
///
/// The minimum maps to exactly 0.0 and the maximum to exactly 1.0. NaN
/// anywhere in `data` makes every output NaN.
///
/// # Errors
///
/// Returns `InvalidInput` for empty input and `DegenerateInput` when all
/// values are equal.
pub fn normalize(data: &[f64]) -> Result<Vec<f64>> {
    MinMaxScaler::new().fit_transform(data)
}

/// Scales one column to [0, 1] using the min and max seen during fit.
///
/// Values outside the fitted range map outside [0, 1]; nothing is clipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// (min, max) computed during fit.
    range: Option<(f64, f64)>,
}

impl MinMaxScaler {
    /// Creates an unfitted scaler.
    #[must_use]
    pub fn new() -> Self {
        Self { range: None }
    }
}

impl Transformer for MinMaxScaler {
    fn fit(&mut self, x: &[f64]) -> Result<()> {
        if x.is_empty() {
            return Err(StudyPerfError::empty_input("normalize"));
        }
        let (min, max) = min_max(x);
        if max == min {
            return Err(StudyPerfError::degenerate(
                "normalize",
                format!("zero-variance column (min == max == {min})"),
            ));
        }
        self.range = Some((min, max));
        Ok(())
    }

    fn transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        let (min, max) = self
            .range
            .ok_or_else(|| StudyPerfError::invalid("MinMaxScaler::transform", "scaler not fitted"))?;
        let span = max - min;
        Ok(x.iter().map(|v| (v - min) / span).collect())
    }
}

/// Per-feature min-max scaling of whole datasets.
///
/// Fit on the training set, then apply the same mapping to the
/// evaluation set so both live in the training scale.
///
/// # Example
///
/// ```
/// use studyperf::data::{Dataset, Feature, Observation};
/// use studyperf::preprocessing::DatasetScaler;
///
/// let train = Dataset::new(vec![
///     Observation::new(1.0, 40.0, false, 6.0, 0.0, 30.0),
///     Observation::new(5.0, 80.0, true, 8.0, 4.0, 70.0),
/// ]);
/// let scaler = DatasetScaler::fit(&train, &[Feature::HoursStudied]).expect("non-constant");
/// let scaled = scaler.transform(&train).expect("fitted");
/// assert_eq!(scaled.column(Feature::HoursStudied), vec![0.0, 1.0]);
/// assert_eq!(scaled.column(Feature::PreviousScores), vec![40.0, 80.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetScaler {
    scalers: Vec<(Feature, MinMaxScaler)>,
}

impl DatasetScaler {
    /// Fits one scaler per feature on `train`.
    ///
    /// The boolean flag is already in {0, 1} and is skipped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `train` is empty and `DegenerateInput` if
    /// any requested column is constant.
    pub fn fit(train: &Dataset, features: &[Feature]) -> Result<Self> {
        let mut scalers = Vec::with_capacity(features.len());
        for &feature in features {
            if feature == Feature::Extracurricular {
                continue;
            }
            let mut scaler = MinMaxScaler::new();
            scaler.fit(&train.column(feature)).map_err(|e| match e {
                StudyPerfError::DegenerateInput { operation, detail } => {
                    StudyPerfError::degenerate(operation, format!("{feature}: {detail}"))
                }
                other => other,
            })?;
            scalers.push((feature, scaler));
        }
        Ok(Self { scalers })
    }

    /// Features this scaler rescales.
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.scalers.iter().map(|(f, _)| *f)
    }

    /// Rescales the fitted features of every observation.
    ///
    /// # Errors
    ///
    /// Propagates transform errors from the per-feature scalers.
    pub fn transform(&self, data: &Dataset) -> Result<Dataset> {
        let mut observations = data.observations().to_vec();
        for (feature, scaler) in &self.scalers {
            let scaled = scaler.transform(&data.column(*feature))?;
            for (obs, value) in observations.iter_mut().zip(scaled) {
                *obs = obs.with_value(*feature, value);
            }
        }
        Ok(Dataset::new(observations))
    }
}
