//! Text histograms of one or every continuous column.

use super::FilterArgs;
use crate::error::Result;
use crate::output;
use serde::Serialize;
use std::path::Path;
use studyperf::data::Feature;
use studyperf::stats::{self, Histogram};

#[derive(Serialize)]
struct FeatureHistogram {
    feature: Feature,
    #[serde(flatten)]
    histogram: Histogram,
}

/// Run the histogram command
pub(crate) fn run(
    path: &Path,
    feature: Option<Feature>,
    bins: usize,
    width: usize,
    filters: FilterArgs,
    json: bool,
) -> Result<()> {
    let dataset = super::load(path, filters)?;
    let features: Vec<Feature> = match feature {
        Some(f) => vec![f],
        None => Feature::CONTINUOUS.to_vec(),
    };

    let histograms = features
        .into_iter()
        .map(|f| {
            stats::histogram(&dataset.column(f), bins).map(|histogram| FeatureHistogram {
                feature: f,
                histogram,
            })
        })
        .collect::<studyperf::Result<Vec<_>>>()?;

    if json {
        output::json(&histograms)
    } else {
        for h in &histograms {
            output::histogram(h.feature, &h.histogram, width);
        }
        Ok(())
    }
}
