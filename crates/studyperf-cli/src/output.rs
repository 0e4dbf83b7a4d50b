//! Console and JSON rendering.
//!
//! Everything human-facing lives here; the engine only returns values.

use crate::error::{CliError, Result};
use crate::experiment::{ExperimentReport, ModelOutcome};
use colored::Colorize;
use serde::Serialize;
use studyperf::data::Feature;
use studyperf::stats::{Histogram, StatResult};

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a success message
pub(crate) fn success(msg: &str) {
    println!("{} {}", "[PASS]".green().bold(), msg);
}

/// Print a failure message
pub(crate) fn fail(msg: &str) {
    println!("{} {}", "[FAIL]".red().bold(), msg);
}

/// Print any serializable value as pretty JSON on stdout.
pub(crate) fn json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Config(format!("JSON serialization failed: {e}")))?;
    println!("{text}");
    Ok(())
}

/// Formats a statistic, keeping NaN visible.
pub(crate) fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.4}")
    }
}

/// Print one summary block per column.
pub(crate) fn summaries(title: &str, rows: &[(Feature, StatResult)]) {
    section(title);
    for (feature, stats) in rows {
        println!("\n  {}", feature.title().bold());
        for (stat, value) in stats.iter() {
            kv(&format!("  {stat}"), format_value(value));
        }
    }
}

/// Renders a histogram as `[lo, hi) count ####` lines, bars scaled to `width`.
pub(crate) fn histogram_lines(hist: &Histogram, width: usize) -> Vec<String> {
    let peak = hist.counts.iter().copied().max().unwrap_or(0);
    hist.counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let bar_len = if peak == 0 {
                0
            } else {
                (count * width).div_ceil(peak)
            };
            format!(
                "[{:>10.3}, {:>10.3}) {:>6} {}",
                hist.bins[i],
                hist.bins[i + 1],
                count,
                "#".repeat(bar_len)
            )
        })
        .collect()
}

/// Print a text histogram for one feature.
pub(crate) fn histogram(feature: Feature, hist: &Histogram, width: usize) {
    section(&format!("Histogram of {}", feature.title()));
    for line in histogram_lines(hist, width) {
        println!("  {line}");
    }
}

/// Print the full result of a `train` run.
pub(crate) fn experiment(report: &ExperimentReport) {
    section("Experiment");
    kv("Seed", report.seed);
    kv("Train ratio", report.train_ratio);
    kv("Observations", report.n_observations);
    kv("Training rows", report.n_train);
    kv("Evaluation rows", report.n_eval);

    summaries("Training Set Statistics", &report.train_summaries);

    for model in &report.models {
        section(&format!("Model {}", model.name));
        kv("Features", &model.features);
        match &model.outcome {
            ModelOutcome::Fitted(summary) => {
                kv("Intercept", format_value(summary.intercept));
                for (feature, b) in &summary.coefficients {
                    kv(&format!("  {feature}"), format_value(*b));
                }
                kv("MSE", format_value(summary.evaluation.mse));
                kv("R²", format_value(summary.evaluation.r_squared));
                success(&format!("{} fitted", model.name));
            }
            ModelOutcome::Failed { error } => fail(&format!("{}: {error}", model.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.5), "1.5000");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_histogram_lines_scale_to_peak() {
        let hist = Histogram {
            bins: vec![0.0, 1.0, 2.0, 3.0],
            counts: vec![2, 4, 0],
        };
        let lines = histogram_lines(&hist, 10);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(&"#".repeat(5)));
        assert!(lines[1].ends_with(&"#".repeat(10)));
        assert!(!lines[2].contains('#'));
    }

    #[test]
    fn test_histogram_lines_small_counts_visible() {
        let hist = Histogram {
            bins: vec![0.0, 1.0, 2.0],
            counts: vec![1, 1000],
        };
        let lines = histogram_lines(&hist, 20);
        assert!(lines[0].ends_with('#'));
    }
}
