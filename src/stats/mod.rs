//! Descriptive statistics for one feature column.
//!
//! - Population standard deviation (divisor `n`)
//! - Quantiles by linear interpolation between order statistics
//!   (R-7 method, Hyndman & Fan 1996)
//! - Equal-width histograms
//!
//! Missing values are NaN and are not skipped: a column containing NaN
//! yields NaN for every statistic except `count`. Callers that want
//! statistics over the observed values must filter first.
//!
//! # Examples
//!
//! ```
//! use studyperf::stats::DescriptiveStats;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(&data);
//!
//! assert_eq!(stats.quantile(0.5).expect("non-empty"), 3.0);
//! assert_eq!(stats.quantile(0.0).expect("non-empty"), 1.0);
//! assert_eq!(stats.quantile(1.0).expect("non-empty"), 5.0);
//! ```

use crate::error::{Result, StudyPerfError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bin count used by the histogram reports.
pub const DEFAULT_HISTOGRAM_BINS: usize = 16;

/// Descriptive statistics over a borrowed slice.
///
/// The caller's data is never reordered; order statistics are taken from
/// a private sorted copy.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveStats<'a> {
    data: &'a [f64],
}

/// Name of one entry in a [`StatResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    Count,
    Mean,
    StdDev,
    Min,
    Max,
    P25,
    P50,
    P75,
}

impl Statistic {
    /// All statistics in report order.
    pub const ALL: [Statistic; 8] = [
        Statistic::Count,
        Statistic::Mean,
        Statistic::StdDev,
        Statistic::Min,
        Statistic::Max,
        Statistic::P25,
        Statistic::P50,
        Statistic::P75,
    ];

    /// Short name used as a mapping key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Mean => "mean",
            Statistic::StdDev => "stdDev",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::P25 => "p25",
            Statistic::P50 => "p50",
            Statistic::P75 => "p75",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatResult {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

impl StatResult {
    /// Looks up one statistic by name.
    #[must_use]
    pub fn get(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Count => self.count as f64,
            Statistic::Mean => self.mean,
            Statistic::StdDev => self.std_dev,
            Statistic::Min => self.min,
            Statistic::Max => self.max,
            Statistic::P25 => self.p25,
            Statistic::P50 => self.p50,
            Statistic::P75 => self.p75,
        }
    }

    /// Iterates `(name, value)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Statistic, f64)> + '_ {
        Statistic::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges (length = `n_bins` + 1)
    pub bins: Vec<f64>,
    /// Bin counts (length = `n_bins`)
    pub counts: Vec<usize>,
}

impl<'a> DescriptiveStats<'a> {
    /// Wraps a data slice.
    #[must_use]
    pub fn new(data: &'a [f64]) -> Self {
        Self { data }
    }

    fn ensure_non_empty(&self, operation: &'static str) -> Result<()> {
        if self.data.is_empty() {
            return Err(StudyPerfError::empty_input(operation));
        }
        Ok(())
    }

    /// Number of values (NaN included).
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty.
    pub fn mean(&self) -> Result<f64> {
        self.ensure_non_empty("mean")?;
        Ok(self.data.iter().sum::<f64>() / self.data.len() as f64)
    }

    /// Population standard deviation: `sqrt(Σ(v - mean)² / n)`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty.
    pub fn std_dev(&self) -> Result<f64> {
        let mean = self.mean()?;
        let sum_sq: f64 = self.data.iter().map(|v| (v - mean).powi(2)).sum();
        Ok((sum_sq / self.data.len() as f64).sqrt())
    }

    /// Smallest value, NaN if any value is NaN.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty.
    pub fn min(&self) -> Result<f64> {
        self.ensure_non_empty("min")?;
        Ok(min_max(self.data).0)
    }

    /// Largest value, NaN if any value is NaN.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty.
    pub fn max(&self) -> Result<f64> {
        self.ensure_non_empty("max")?;
        Ok(min_max(self.data).1)
    }

    /// Quantile by linear interpolation between order statistics.
    ///
    /// With the data sorted ascending and `idx = q * (n - 1)`, returns
    /// `data[lo] + (data[hi] - data[lo]) * (idx - lo)` where `lo` and `hi`
    /// are the floor and ceiling of `idx`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty or `q` is not in [0, 1].
    ///
    /// # Examples
    /// ```
    /// use studyperf::stats::DescriptiveStats;
    ///
    /// let data = [4.0, 1.0, 3.0, 2.0];
    /// let q1 = DescriptiveStats::new(&data).quantile(0.25).expect("valid");
    /// assert!((q1 - 1.75).abs() < 1e-12);
    /// ```
    pub fn quantile(&self, q: f64) -> Result<f64> {
        self.ensure_non_empty("quantile")?;
        validate_quantile(q)?;
        Ok(interpolate(&self.sorted_copy(), q))
    }

    /// Several quantiles from a single sort.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty or any `q` is not in [0, 1].
    pub fn quantiles(&self, qs: &[f64]) -> Result<Vec<f64>> {
        self.ensure_non_empty("quantiles")?;
        for &q in qs {
            validate_quantile(q)?;
        }
        let sorted = self.sorted_copy();
        Ok(qs.iter().map(|&q| interpolate(&sorted, q)).collect())
    }

    /// Count, mean, standard deviation, min, max and quartiles.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty.
    ///
    /// # Examples
    /// ```
    /// use studyperf::stats::DescriptiveStats;
    ///
    /// let s = DescriptiveStats::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
    ///     .summary()
    ///     .expect("non-empty");
    /// assert_eq!(s.count, 8);
    /// assert!((s.mean - 5.0).abs() < 1e-12);
    /// assert!((s.std_dev - 2.0).abs() < 1e-12);
    /// ```
    pub fn summary(&self) -> Result<StatResult> {
        self.ensure_non_empty("summary")?;
        let (min, max) = min_max(self.data);
        let q = self.quantiles(&[0.25, 0.5, 0.75])?;
        Ok(StatResult {
            count: self.count(),
            mean: self.mean()?,
            std_dev: self.std_dev()?,
            min,
            max,
            p25: q[0],
            p50: q[1],
            p75: q[2],
        })
    }

    /// Histogram with `n_bins` equal-width bins spanning [min, max].
    ///
    /// A constant column produces a single bin holding every value. The
    /// maximum falls into the last bin.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the data is empty, `n_bins` is zero, or
    /// the data contains a non-finite value.
    pub fn histogram(&self, n_bins: usize) -> Result<Histogram> {
        self.ensure_non_empty("histogram")?;
        if n_bins == 0 {
            return Err(StudyPerfError::invalid(
                "histogram",
                "number of bins must be at least 1",
            ));
        }
        if let Some(bad) = self.data.iter().find(|v| !v.is_finite()) {
            return Err(StudyPerfError::invalid(
                "histogram",
                format!("non-finite value {bad}; filter missing values first"),
            ));
        }

        let (data_min, data_max) = min_max(self.data);
        if data_min == data_max {
            return Ok(Histogram {
                bins: vec![data_min, data_max],
                counts: vec![self.data.len()],
            });
        }

        let bin_width = (data_max - data_min) / n_bins as f64;
        let bins: Vec<f64> = (0..=n_bins)
            .map(|i| data_min + i as f64 * bin_width)
            .collect();

        let mut counts = vec![0usize; n_bins];
        for &value in self.data {
            let idx = (((value - data_min) / bin_width) as usize).min(n_bins - 1);
            counts[idx] += 1;
        }

        Ok(Histogram { bins, counts })
    }

    /// Stable ascending sort of a private copy.
    fn sorted_copy(&self) -> Vec<f64> {
        let mut sorted = self.data.to_vec();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

/// Summary statistics of `data`.
///
/// # Errors
/// Returns `InvalidInput` if `data` is empty.
pub fn summarize(data: &[f64]) -> Result<StatResult> {
    DescriptiveStats::new(data).summary()
}

/// Equal-width histogram of `data`.
///
/// # Errors
/// See [`DescriptiveStats::histogram`].
pub fn histogram(data: &[f64], n_bins: usize) -> Result<Histogram> {
    DescriptiveStats::new(data).histogram(n_bins)
}

/// Minimum and maximum, both NaN if any element is NaN.
pub(crate) fn min_max(data: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in data {
        if v.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

fn validate_quantile(q: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&q) {
        return Err(StudyPerfError::invalid(
            "quantile",
            format!("quantile must be in [0, 1], got {q}"),
        ));
    }
    Ok(())
}

/// Interpolates quantile `q` from ascending, non-empty `sorted` data.
fn interpolate(sorted: &[f64], q: f64) -> f64 {
    // total_cmp sorts NaN to the ends.
    if sorted[0].is_nan() || sorted[sorted.len() - 1].is_nan() {
        return f64::NAN;
    }
    let idx = q * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (idx - lo as f64)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
