//! Feature identifiers and feature-subset selection.
//!
//! A [`FeatureSpec`] is validated once, when it is built, so a
//! misconfigured model variant fails before any training work starts.

use super::Observation;
use crate::error::{Result, StudyPerfError};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One column of an [`Observation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Hours spent studying.
    HoursStudied,
    /// Score on previous tests.
    PreviousScores,
    /// Extracurricular participation, coerced to 1.0 / 0.0.
    Extracurricular,
    /// Average hours of sleep.
    SleepHours,
    /// Number of sample question papers practiced.
    SamplePapers,
    /// Performance index (the regression response).
    PerformanceIndex,
}

impl Feature {
    /// Every feature, in legacy id order.
    pub const ALL: [Feature; 6] = [
        Feature::HoursStudied,
        Feature::PreviousScores,
        Feature::Extracurricular,
        Feature::SleepHours,
        Feature::SamplePapers,
        Feature::PerformanceIndex,
    ];

    /// The five continuous measures (everything except the boolean flag).
    pub const CONTINUOUS: [Feature; 5] = [
        Feature::HoursStudied,
        Feature::PreviousScores,
        Feature::SleepHours,
        Feature::SamplePapers,
        Feature::PerformanceIndex,
    ];

    /// Legacy numeric identifier (0..=5).
    #[must_use]
    pub fn id(self) -> usize {
        match self {
            Feature::HoursStudied => 0,
            Feature::PreviousScores => 1,
            Feature::Extracurricular => 2,
            Feature::SleepHours => 3,
            Feature::SamplePapers => 4,
            Feature::PerformanceIndex => 5,
        }
    }

    /// Looks up a feature by legacy numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for identifiers outside `0..=5`.
    pub fn from_id(id: usize) -> Result<Self> {
        Self::ALL.get(id).copied().ok_or_else(|| {
            StudyPerfError::invalid("Feature::from_id", format!("unknown feature id {id}"))
        })
    }

    /// Snake-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Feature::HoursStudied => "hours_studied",
            Feature::PreviousScores => "previous_scores",
            Feature::Extracurricular => "extracurricular",
            Feature::SleepHours => "sleep_hours",
            Feature::SamplePapers => "sample_papers",
            Feature::PerformanceIndex => "performance_index",
        }
    }

    /// Human-readable column title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Feature::HoursStudied => "Hours Studied",
            Feature::PreviousScores => "Previous Scores",
            Feature::Extracurricular => "Extracurricular Activities",
            Feature::SleepHours => "Sleep Hours",
            Feature::SamplePapers => "Sample Question Papers Practiced",
            Feature::PerformanceIndex => "Performance Index",
        }
    }

    /// Numeric value of this feature for one observation.
    #[must_use]
    pub fn value(self, obs: &Observation) -> f64 {
        match self {
            Feature::HoursStudied => obs.hours_studied,
            Feature::PreviousScores => obs.previous_scores,
            Feature::Extracurricular => {
                if obs.extracurricular {
                    1.0
                } else {
                    0.0
                }
            }
            Feature::SleepHours => obs.sleep_hours,
            Feature::SamplePapers => obs.sample_papers,
            Feature::PerformanceIndex => obs.performance_index,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = StudyPerfError;

    /// Accepts a snake-case name or a legacy numeric id.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if let Ok(id) = token.parse::<usize>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                StudyPerfError::invalid("Feature::from_str", format!("unknown feature '{token}'"))
            })
    }
}

/// Ordered, duplicate-free selection of features for one regression.
///
/// Order defines coefficient order in the fitted model.
///
/// # Examples
///
/// ```
/// use studyperf::data::{Feature, FeatureSpec};
///
/// let spec: FeatureSpec = "hours_studied, previous_scores".parse().expect("known features");
/// assert_eq!(spec.features(), &[Feature::HoursStudied, Feature::PreviousScores]);
/// assert!(FeatureSpec::from_ids(&[0, 9]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Feature>", into = "Vec<Feature>")]
pub struct FeatureSpec {
    features: Vec<Feature>,
}

impl FeatureSpec {
    /// Creates a spec from an ordered feature list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the list is empty or names a feature twice.
    pub fn new(features: Vec<Feature>) -> Result<Self> {
        if features.is_empty() {
            return Err(StudyPerfError::invalid(
                "FeatureSpec::new",
                "at least one feature is required",
            ));
        }
        for (i, f) in features.iter().enumerate() {
            if features[..i].contains(f) {
                return Err(StudyPerfError::invalid(
                    "FeatureSpec::new",
                    format!("feature '{f}' selected more than once"),
                ));
            }
        }
        Ok(Self { features })
    }

    /// Creates a spec from legacy numeric identifiers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown, duplicate, or no identifiers.
    pub fn from_ids(ids: &[usize]) -> Result<Self> {
        let features = ids
            .iter()
            .map(|&id| Feature::from_id(id))
            .collect::<Result<Vec<_>>>()?;
        Self::new(features)
    }

    /// Hours studied, previous scores, extracurricular.
    #[must_use]
    pub fn study_habits() -> Self {
        Self {
            features: vec![
                Feature::HoursStudied,
                Feature::PreviousScores,
                Feature::Extracurricular,
            ],
        }
    }

    /// Previous scores, extracurricular, sample papers.
    #[must_use]
    pub fn prior_and_practice() -> Self {
        Self {
            features: vec![
                Feature::PreviousScores,
                Feature::Extracurricular,
                Feature::SamplePapers,
            ],
        }
    }

    /// All five predictors.
    #[must_use]
    pub fn all_predictors() -> Self {
        Self {
            features: vec![
                Feature::HoursStudied,
                Feature::PreviousScores,
                Feature::Extracurricular,
                Feature::SleepHours,
                Feature::SamplePapers,
            ],
        }
    }

    /// The selected features, in coefficient order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of selected features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Always false: a spec holds at least one feature.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Position of `feature` in coefficient order.
    #[must_use]
    pub fn position(&self, feature: Feature) -> Option<usize> {
        self.features.iter().position(|&f| f == feature)
    }

    /// Extracts the feature vector for one observation.
    #[must_use]
    pub fn extract(&self, obs: &Observation) -> Vec<f64> {
        self.features.iter().map(|f| f.value(obs)).collect()
    }

    /// Builds the predictor matrix: one row per observation, one column per
    /// selected feature. The intercept column is not included.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `observations` is empty.
    pub fn design_matrix(&self, observations: &[Observation]) -> Result<Matrix<f64>> {
        if observations.is_empty() {
            return Err(StudyPerfError::empty_input("FeatureSpec::design_matrix"));
        }
        let mut data = Vec::with_capacity(observations.len() * self.len());
        for obs in observations {
            data.extend(self.features.iter().map(|f| f.value(obs)));
        }
        Matrix::from_vec(observations.len(), self.len(), data)
    }
}

impl FromStr for FeatureSpec {
    type Err = StudyPerfError;

    /// Parses a comma-separated list of feature names or ids.
    fn from_str(s: &str) -> Result<Self> {
        let features = s
            .split(',')
            .filter(|t| !t.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Feature>>>()?;
        Self::new(features)
    }
}

impl TryFrom<Vec<Feature>> for FeatureSpec {
    type Error = StudyPerfError;

    fn try_from(features: Vec<Feature>) -> Result<Self> {
        Self::new(features)
    }
}

impl From<FeatureSpec> for Vec<Feature> {
    fn from(spec: FeatureSpec) -> Self {
        spec.features
    }
}

impl fmt::Display for FeatureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, feature) in self.features.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{feature}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn obs() -> Observation {
        Observation::new(7.0, 99.0, true, 9.0, 1.0, 91.0)
    }

    #[test]
    fn test_feature_ids_round_trip_through_lookup() {
        for f in Feature::ALL {
            assert_eq!(Feature::from_id(f.id()).expect("known id"), f);
        }
        assert_eq!(
            Feature::from_id(6).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_feature_from_str() {
        assert_eq!(
            "sleep_hours".parse::<Feature>().expect("known name"),
            Feature::SleepHours
        );
        assert_eq!("4".parse::<Feature>().expect("known id"), Feature::SamplePapers);
        assert_eq!(
            " Previous_Scores ".parse::<Feature>().expect("case-insensitive"),
            Feature::PreviousScores
        );
        assert!("shoe_size".parse::<Feature>().is_err());
    }

    #[test]
    fn test_boolean_coercion() {
        let mut o = obs();
        assert_eq!(Feature::Extracurricular.value(&o), 1.0);
        o.extracurricular = false;
        assert_eq!(Feature::Extracurricular.value(&o), 0.0);
    }

    #[test]
    fn test_extract_follows_spec_order() {
        let spec = FeatureSpec::new(vec![
            Feature::SamplePapers,
            Feature::Extracurricular,
            Feature::HoursStudied,
        ])
        .expect("valid spec");
        assert_eq!(spec.extract(&obs()), vec![1.0, 1.0, 7.0]);
    }

    #[test]
    fn test_spec_rejects_empty_and_duplicates() {
        assert_eq!(
            FeatureSpec::new(vec![]).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert!(FeatureSpec::from_ids(&[0, 1, 0]).is_err());
        assert!(FeatureSpec::from_ids(&[0, 7]).is_err());
        assert!("".parse::<FeatureSpec>().is_err());
    }

    #[test]
    fn test_presets_match_legacy_ids() {
        assert_eq!(
            FeatureSpec::study_habits(),
            FeatureSpec::from_ids(&[0, 1, 2]).expect("valid ids")
        );
        assert_eq!(
            FeatureSpec::prior_and_practice(),
            FeatureSpec::from_ids(&[1, 2, 4]).expect("valid ids")
        );
        assert_eq!(
            FeatureSpec::all_predictors(),
            FeatureSpec::from_ids(&[0, 1, 2, 3, 4]).expect("valid ids")
        );
    }

    #[test]
    fn test_design_matrix() {
        let spec = FeatureSpec::from_ids(&[0, 2]).expect("valid ids");
        let rows = [obs(), Observation::new(1.0, 50.0, false, 6.0, 3.0, 40.0)];
        let m = spec.design_matrix(&rows).expect("non-empty");
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[7.0, 1.0, 1.0, 0.0]);
        assert!(spec.design_matrix(&[]).is_err());
    }

    #[test]
    fn test_display_and_serde() {
        let spec = FeatureSpec::from_ids(&[1, 2]).expect("valid ids");
        assert_eq!(spec.to_string(), "{previous_scores, extracurricular}");

        let json = serde_json::to_string(&spec).expect("serializable");
        assert_eq!(json, r#"["previous_scores","extracurricular"]"#);
        let back: FeatureSpec = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, spec);
        assert!(serde_json::from_str::<FeatureSpec>("[]").is_err());
    }
}
