//! Command implementations

pub(crate) mod histogram;
pub(crate) mod stats;
pub(crate) mod train;

use crate::error::Result;
use clap::Args;
use std::path::Path;
use studyperf::data::{Dataset, Feature};

/// Record filtering shared by every command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub(crate) struct FilterArgs {
    /// Drop records with any missing numeric field
    #[arg(long)]
    pub(crate) drop_incomplete: bool,

    /// Drop records whose performance index is exactly zero
    #[arg(long)]
    pub(crate) drop_zero_response: bool,
}

impl FilterArgs {
    pub(crate) fn apply(self, dataset: Dataset) -> Dataset {
        let dataset = if self.drop_incomplete {
            dataset.drop_incomplete()
        } else {
            dataset
        };
        if self.drop_zero_response {
            dataset.drop_zero(Feature::PerformanceIndex)
        } else {
            dataset
        }
    }
}

/// Loads `path` and applies `filters`.
pub(crate) fn load(path: &Path, filters: FilterArgs) -> Result<Dataset> {
    Ok(filters.apply(crate::ingest::load_dataset(path)?))
}
