//! Experiment orchestration: filter, shuffle, split, then fit and evaluate
//! every configured model variant against the same split.
//!
//! A failing model is logged and recorded; the remaining models still run.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use studyperf::data::{Dataset, Feature, FeatureSpec};
use studyperf::linear_model::LinearRegression;
use studyperf::metrics::Evaluation;
use studyperf::model_selection::DEFAULT_TRAIN_RATIO;
use studyperf::preprocessing::DatasetScaler;
use studyperf::stats::StatResult;
use tracing::{info, warn};

/// Seed used when none is configured.
pub(crate) const DEFAULT_SEED: u64 = 42;

/// One named model variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ModelConfig {
    pub(crate) name: String,
    pub(crate) features: FeatureSpec,
}

impl ModelConfig {
    fn new(name: &str, features: FeatureSpec) -> Self {
        Self {
            name: name.to_string(),
            features,
        }
    }

    /// The three variants the legacy scripts fit.
    pub(crate) fn legacy() -> Vec<Self> {
        vec![
            Self::new("study_habits", FeatureSpec::study_habits()),
            Self::new("prior_and_practice", FeatureSpec::prior_and_practice()),
            Self::new("all_predictors", FeatureSpec::all_predictors()),
        ]
    }
}

impl FromStr for ModelConfig {
    type Err = String;

    /// Parses `NAME=feature,feature,...`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, features) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=feature,..., got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("model name missing in '{s}'"));
        }
        let features: FeatureSpec = features.parse().map_err(|e| format!("{e}"))?;
        Ok(Self::new(name, features))
    }
}

/// Full configuration of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ExperimentConfig {
    pub(crate) train_ratio: f64,
    pub(crate) seed: u64,
    pub(crate) models: Vec<ModelConfig>,
    /// Remove observations with any missing value.
    pub(crate) drop_incomplete: bool,
    /// Remove observations whose performance index is exactly zero.
    pub(crate) drop_zero_response: bool,
    /// Min-max scale predictors, fitted on the training set.
    pub(crate) normalize: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            train_ratio: DEFAULT_TRAIN_RATIO,
            seed: DEFAULT_SEED,
            models: ModelConfig::legacy(),
            drop_incomplete: false,
            drop_zero_response: false,
            normalize: false,
        }
    }
}

impl ExperimentConfig {
    /// Reads a JSON configuration file. Missing keys take their defaults.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a run.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(CliError::Config("no models configured".to_string()));
        }
        for (i, model) in self.models.iter().enumerate() {
            if self.models[..i].iter().any(|m| m.name == model.name) {
                return Err(CliError::Config(format!(
                    "duplicate model name '{}'",
                    model.name
                )));
            }
        }
        Ok(())
    }

    /// Applies the configured filtering steps.
    pub(crate) fn filter(&self, dataset: &Dataset) -> Dataset {
        let mut filtered = dataset.clone();
        if self.drop_incomplete {
            filtered = filtered.drop_incomplete();
        }
        if self.drop_zero_response {
            filtered = filtered.drop_zero(Feature::PerformanceIndex);
        }
        if filtered.len() != dataset.len() {
            info!(
                before = dataset.len(),
                after = filtered.len(),
                "filtered observations"
            );
        }
        filtered
    }
}

/// Fitted parameters and accuracy of one successful model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FitSummary {
    pub(crate) intercept: f64,
    pub(crate) coefficients: Vec<(Feature, f64)>,
    pub(crate) evaluation: Evaluation,
}

/// What happened to one model variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum ModelOutcome {
    Fitted(FitSummary),
    Failed { error: String },
}

/// One row of the experiment report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ModelReport {
    pub(crate) name: String,
    pub(crate) features: FeatureSpec,
    #[serde(flatten)]
    pub(crate) outcome: ModelOutcome,
}

/// Everything the reporting layer prints for a `train` run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ExperimentReport {
    pub(crate) seed: u64,
    pub(crate) train_ratio: f64,
    pub(crate) n_observations: usize,
    pub(crate) n_train: usize,
    pub(crate) n_eval: usize,
    pub(crate) train_summaries: Vec<(Feature, StatResult)>,
    pub(crate) models: Vec<ModelReport>,
}

impl ExperimentReport {
    /// Number of models that failed.
    pub(crate) fn n_failed(&self) -> usize {
        self.models
            .iter()
            .filter(|m| matches!(m.outcome, ModelOutcome::Failed { .. }))
            .count()
    }
}

/// Runs every configured model against one seeded split of `dataset`.
///
/// Filtering, splitting and training-set statistics abort the run on
/// failure. Individual model failures do not.
pub(crate) fn run(config: &ExperimentConfig, dataset: &Dataset) -> Result<ExperimentReport> {
    config.validate()?;
    let filtered = config.filter(dataset);
    let (train, eval) = filtered.shuffled(config.seed).split(config.train_ratio)?;
    info!(
        n_train = train.len(),
        n_eval = eval.len(),
        seed = config.seed,
        "split dataset"
    );

    let train_summaries = train.summaries()?;

    let models = config
        .models
        .iter()
        .map(|model| {
            let outcome = match fit_one(config, model, &train, &eval) {
                Ok(summary) => {
                    info!(
                        model = %model.name,
                        mse = summary.evaluation.mse,
                        r_squared = summary.evaluation.r_squared,
                        "evaluated model"
                    );
                    ModelOutcome::Fitted(summary)
                }
                Err(e) => {
                    warn!(model = %model.name, error = %e, "model failed, continuing");
                    ModelOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            ModelReport {
                name: model.name.clone(),
                features: model.features.clone(),
                outcome,
            }
        })
        .collect();

    Ok(ExperimentReport {
        seed: config.seed,
        train_ratio: config.train_ratio,
        n_observations: filtered.len(),
        n_train: train.len(),
        n_eval: eval.len(),
        train_summaries,
        models,
    })
}

fn fit_one(
    config: &ExperimentConfig,
    model: &ModelConfig,
    train: &Dataset,
    eval: &Dataset,
) -> studyperf::Result<FitSummary> {
    let (train, eval) = if config.normalize {
        let scaler = DatasetScaler::fit(train, model.features.features())?;
        (scaler.transform(train)?, scaler.transform(eval)?)
    } else {
        (train.clone(), eval.clone())
    };

    let fitted = LinearRegression::new(model.features.clone()).fit(train.observations())?;
    let evaluation = fitted.evaluate(eval.observations())?;

    Ok(FitSummary {
        intercept: fitted.intercept(),
        coefficients: model
            .features
            .features()
            .iter()
            .copied()
            .zip(fitted.coefficients().iter().copied())
            .collect(),
        evaluation,
    })
}
