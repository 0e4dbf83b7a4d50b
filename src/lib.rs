//! Studyperf: descriptive statistics and least-squares regression for
//! student performance data.
//!
//! The engine is pure and synchronous. It never opens files; callers hand it
//! typed [`data::Observation`] values and receive typed results or a
//! [`StudyPerfError`] naming the offending operation.
//!
//! # Quick Start
//!
//! ```
//! use studyperf::prelude::*;
//!
//! // performance = 20 + 4 * hours + 0.5 * previous
//! let ds: Dataset = (0..20)
//!     .map(|i| {
//!         let hours = f64::from(i % 9 + 1);
//!         let prev = f64::from(40 + (i * 7) % 50);
//!         Observation::new(hours, prev, i % 2 == 0, 7.0, 2.0, 20.0 + 4.0 * hours + 0.5 * prev)
//!     })
//!     .collect();
//!
//! let (train, eval) = ds.shuffled(42).split(DEFAULT_TRAIN_RATIO).unwrap();
//! let spec = FeatureSpec::new(vec![Feature::HoursStudied, Feature::PreviousScores]).unwrap();
//!
//! let model = LinearRegression::new(spec).fit(train.observations()).unwrap();
//! let eval = model.evaluate(eval.observations()).unwrap();
//! assert!(eval.r_squared > 0.99);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: Observations, datasets and feature selection
//! - [`stats`]: Descriptive statistics (quantiles, histograms)
//! - [`preprocessing`]: Min-max normalization
//! - [`model_selection`]: Seeded shuffling and train/evaluation splitting
//! - [`linear_model`]: Ordinary least squares regression
//! - [`metrics`]: Regression accuracy metrics

pub mod data;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod stats;
pub mod traits;

pub use error::{ErrorKind, Result, StudyPerfError};
pub use primitives::{Matrix, Vector};
pub use traits::Transformer;
