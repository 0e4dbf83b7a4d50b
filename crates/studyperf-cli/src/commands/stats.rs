//! Descriptive statistics for every continuous column.

use super::FilterArgs;
use crate::error::Result;
use crate::output;
use serde::Serialize;
use std::path::Path;
use studyperf::data::Feature;
use studyperf::stats::StatResult;

#[derive(Serialize)]
struct ColumnStats {
    feature: Feature,
    #[serde(flatten)]
    stats: StatResult,
}

/// Run the stats command
pub(crate) fn run(path: &Path, filters: FilterArgs, json: bool) -> Result<()> {
    let dataset = super::load(path, filters)?;
    let summaries = dataset.summaries()?;

    if json {
        let rows: Vec<ColumnStats> = summaries
            .into_iter()
            .map(|(feature, stats)| ColumnStats { feature, stats })
            .collect();
        output::json(&rows)
    } else {
        output::summaries(&format!("Statistics ({} records)", dataset.len()), &summaries);
        Ok(())
    }
}
