//! Observation records and the dataset collection that owns them.
//!
//! Parsing from files happens elsewhere; this module only holds values
//! that are already typed. A blank numeric source field arrives here as
//! NaN and stays NaN unless a filtering step removes the record.

mod features;

pub use features::{Feature, FeatureSpec};

use crate::error::Result;
use crate::model_selection;
use crate::stats::{DescriptiveStats, StatResult};
use serde::{Deserialize, Serialize};

/// One student's study habits and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Hours spent studying.
    pub hours_studied: f64,
    /// Score on previous tests.
    pub previous_scores: f64,
    /// Participates in extracurricular activities.
    pub extracurricular: bool,
    /// Average hours of sleep.
    pub sleep_hours: f64,
    /// Sample question papers practiced.
    pub sample_papers: f64,
    /// Performance index (regression response).
    pub performance_index: f64,
}

impl Observation {
    /// Creates an observation with fields in source column order.
    #[must_use]
    pub fn new(
        hours_studied: f64,
        previous_scores: f64,
        extracurricular: bool,
        sleep_hours: f64,
        sample_papers: f64,
        performance_index: f64,
    ) -> Self {
        Self {
            hours_studied,
            previous_scores,
            extracurricular,
            sleep_hours,
            sample_papers,
            performance_index,
        }
    }

    /// Copy with one field replaced. For the boolean flag any non-zero
    /// value means true.
    #[must_use]
    pub fn with_value(mut self, feature: Feature, value: f64) -> Self {
        match feature {
            Feature::HoursStudied => self.hours_studied = value,
            Feature::PreviousScores => self.previous_scores = value,
            Feature::Extracurricular => self.extracurricular = value != 0.0,
            Feature::SleepHours => self.sleep_hours = value,
            Feature::SamplePapers => self.sample_papers = value,
            Feature::PerformanceIndex => self.performance_index = value,
        }
        self
    }

    /// True if no numeric field is NaN.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Feature::CONTINUOUS
            .iter()
            .all(|f| !f.value(self).is_nan())
    }
}

/// An ordered collection of observations.
///
/// # Examples
///
/// ```
/// use studyperf::data::{Dataset, Feature, Observation};
///
/// let ds = Dataset::new(vec![
///     Observation::new(1.0, 10.0, false, 8.0, 1.0, 55.0),
///     Observation::new(2.0, 20.0, true, 7.0, 2.0, 60.0),
/// ]);
/// assert_eq!(ds.column(Feature::Extracurricular), vec![0.0, 1.0]);
/// assert_eq!(ds.response(), vec![55.0, 60.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Wraps a sequence of observations.
    #[must_use]
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Borrow the observations in their current order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterate over observations.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Values of one feature across all observations.
    #[must_use]
    pub fn column(&self, feature: Feature) -> Vec<f64> {
        self.observations.iter().map(|o| feature.value(o)).collect()
    }

    /// Performance index values.
    #[must_use]
    pub fn response(&self) -> Vec<f64> {
        self.column(Feature::PerformanceIndex)
    }

    /// Descriptive statistics for each continuous column.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the dataset is empty.
    pub fn summaries(&self) -> Result<Vec<(Feature, StatResult)>> {
        Feature::CONTINUOUS
            .iter()
            .map(|&f| {
                let column = self.column(f);
                DescriptiveStats::new(&column)
                    .summary()
                    .map(|summary| (f, summary))
            })
            .collect()
    }

    /// Keeps only observations without NaN fields.
    #[must_use]
    pub fn drop_incomplete(&self) -> Self {
        self.filter(Observation::is_complete)
    }

    /// Removes observations whose `feature` value is exactly zero.
    #[must_use]
    pub fn drop_zero(&self, feature: Feature) -> Self {
        self.filter(|o| feature.value(o) != 0.0)
    }

    /// Keeps observations matching `keep`, preserving order.
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Observation) -> bool,
    {
        Self::new(
            self.observations
                .iter()
                .filter(|o| keep(o))
                .copied()
                .collect(),
        )
    }

    /// Returns a seeded random permutation of this dataset.
    #[must_use]
    pub fn shuffled(&self, seed: u64) -> Self {
        Self::new(model_selection::shuffle(&self.observations, seed))
    }

    /// Cuts the dataset into a training prefix and evaluation suffix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the dataset is empty or `train_ratio` is
    /// outside `(0, 1)`.
    pub fn split(&self, train_ratio: f64) -> Result<(Self, Self)> {
        let (train, eval) = model_selection::split(&self.observations, train_ratio)?;
        Ok((Self::new(train), Self::new(eval)))
    }
}

impl From<Vec<Observation>> for Dataset {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Observation::new(1.0, 10.0, false, 8.0, 1.0, 55.0),
            Observation::new(2.0, 20.0, true, 7.0, 0.0, 60.0),
            Observation::new(f64::NAN, 30.0, false, 6.0, 3.0, 65.0),
            Observation::new(4.0, 40.0, true, 5.0, 4.0, 0.0),
        ])
    }

    #[test]
    fn test_column_and_response() {
        let ds = sample();
        assert_eq!(ds.column(Feature::SleepHours), vec![8.0, 7.0, 6.0, 5.0]);
        assert_eq!(ds.response(), vec![55.0, 60.0, 65.0, 0.0]);
        assert!(ds.column(Feature::HoursStudied)[2].is_nan());
    }

    #[test]
    fn test_with_value() {
        let o = Observation::new(1.0, 10.0, false, 8.0, 1.0, 55.0);
        let o = o
            .with_value(Feature::SleepHours, 6.5)
            .with_value(Feature::Extracurricular, 1.0);
        assert_eq!(o.sleep_hours, 6.5);
        assert!(o.extracurricular);
        assert_eq!(o.performance_index, 55.0);
    }

    #[test]
    fn test_drop_incomplete() {
        let ds = sample().drop_incomplete();
        assert_eq!(ds.len(), 3);
        assert!(ds.iter().all(Observation::is_complete));
    }

    #[test]
    fn test_drop_zero() {
        let ds = sample().drop_zero(Feature::PerformanceIndex);
        assert_eq!(ds.response(), vec![55.0, 60.0, 65.0]);
        let ds = sample().drop_zero(Feature::SamplePapers);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_summaries_propagate_nan() {
        let summaries = sample().summaries().expect("non-empty");
        assert_eq!(summaries.len(), 5);
        let (feature, hours) = &summaries[0];
        assert_eq!(*feature, Feature::HoursStudied);
        assert!(hours.mean.is_nan());
        let (_, prev) = &summaries[1];
        assert!((prev.mean - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_summaries_empty() {
        assert!(Dataset::default().summaries().is_err());
    }

    #[test]
    fn test_split_preserves_multiset() {
        let ds = sample().drop_incomplete();
        let (train, eval) = ds.shuffled(3).split(0.5).expect("valid ratio");
        assert_eq!(train.len() + eval.len(), ds.len());
        assert_eq!(train.len(), 2);
        let mut all: Vec<f64> = train.response();
        all.extend(eval.response());
        all.sort_by(f64::total_cmp);
        let mut expected = ds.response();
        expected.sort_by(f64::total_cmp);
        assert_eq!(all, expected);
    }
}
