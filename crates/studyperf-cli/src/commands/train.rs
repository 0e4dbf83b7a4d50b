//! Fit and evaluate model variants on a seeded train/evaluation split.

use crate::error::Result;
use crate::experiment::{self, ExperimentConfig, ModelConfig};
use crate::output;
use std::path::Path;
use tracing::warn;

/// Command-line overrides layered on top of a base configuration.
#[derive(Debug, Default)]
pub(crate) struct TrainOverrides {
    pub(crate) ratio: Option<f64>,
    pub(crate) seed: Option<u64>,
    pub(crate) models: Vec<ModelConfig>,
    pub(crate) drop_incomplete: bool,
    pub(crate) drop_zero_response: bool,
    pub(crate) normalize: bool,
}

impl TrainOverrides {
    /// Merges overrides into `base`. Flags can only switch steps on.
    pub(crate) fn apply(self, mut base: ExperimentConfig) -> ExperimentConfig {
        if let Some(ratio) = self.ratio {
            base.train_ratio = ratio;
        }
        if let Some(seed) = self.seed {
            base.seed = seed;
        }
        if !self.models.is_empty() {
            base.models = self.models;
        }
        base.drop_incomplete |= self.drop_incomplete;
        base.drop_zero_response |= self.drop_zero_response;
        base.normalize |= self.normalize;
        base
    }
}

/// Run the train command
pub(crate) fn run(
    path: &Path,
    config_path: Option<&Path>,
    overrides: TrainOverrides,
    json: bool,
) -> Result<()> {
    let base = match config_path {
        Some(p) => ExperimentConfig::load(p)?,
        None => ExperimentConfig::default(),
    };
    let config = overrides.apply(base);
    let dataset = crate::ingest::load_dataset(path)?;
    let report = experiment::run(&config, &dataset)?;

    if report.n_failed() > 0 {
        warn!(
            failed = report.n_failed(),
            total = report.models.len(),
            "some models could not be fitted"
        );
    }

    if json {
        output::json(&report)
    } else {
        output::experiment(&report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_what_is_given() {
        let base = ExperimentConfig {
            seed: 9,
            normalize: true,
            ..ExperimentConfig::default()
        };
        let merged = TrainOverrides {
            ratio: Some(0.5),
            ..TrainOverrides::default()
        }
        .apply(base);
        assert_eq!(merged.seed, 9);
        assert!((merged.train_ratio - 0.5).abs() < f64::EPSILON);
        assert!(merged.normalize);
        assert_eq!(merged.models.len(), 3);
    }

    #[test]
    fn test_override_models() {
        let merged = TrainOverrides {
            models: vec!["h=hours_studied".parse().expect("valid")],
            ..TrainOverrides::default()
        }
        .apply(ExperimentConfig::default());
        assert_eq!(merged.models.len(), 1);
        assert_eq!(merged.models[0].name, "h");
    }
}
