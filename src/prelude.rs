//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use studyperf::prelude::*;
//! ```

pub use crate::data::{Dataset, Feature, FeatureSpec, Observation};
pub use crate::error::{ErrorKind, Result, StudyPerfError};
pub use crate::linear_model::{FittedModel, LinearRegression};
pub use crate::metrics::{evaluate, mae, mse, r_squared, rmse, Evaluation};
pub use crate::model_selection::{shuffle, split, train_test_split, DEFAULT_TRAIN_RATIO};
pub use crate::preprocessing::{normalize, DatasetScaler, MinMaxScaler};
pub use crate::primitives::{Matrix, Vector};
pub use crate::stats::{histogram, summarize, DescriptiveStats, Histogram, StatResult, Statistic};
pub use crate::traits::Transformer;
