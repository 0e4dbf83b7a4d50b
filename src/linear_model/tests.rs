use super::*;
use crate::error::ErrorKind;

/// performance = 2 + 3 * hours - sleep, other fields arbitrary.
fn linear_obs(hours: f64, sleep: f64) -> Observation {
    Observation::new(hours, 50.0 + hours, hours > 3.0, sleep, 2.0, 2.0 + 3.0 * hours - sleep)
}

fn hours_and_sleep() -> FeatureSpec {
    FeatureSpec::new(vec![Feature::HoursStudied, Feature::SleepHours]).expect("valid spec")
}

#[test]
fn test_recovers_known_coefficients() {
    let train: Vec<Observation> = [(1.0, 8.0), (2.0, 5.0), (3.0, 9.0), (4.0, 4.0), (5.0, 7.0), (6.0, 6.0)]
        .iter()
        .map(|&(h, s)| linear_obs(h, s))
        .collect();

    let model = LinearRegression::new(hours_and_sleep())
        .fit(&train)
        .expect("full rank");

    assert!((model.intercept() - 2.0).abs() < 1e-6);
    assert!((model.coefficients()[0] - 3.0).abs() < 1e-6);
    assert!((model.coefficients()[1] + 1.0).abs() < 1e-6);
    assert_eq!(model.n_train(), 6);

    let held_out = [linear_obs(7.0, 3.0), linear_obs(8.0, 10.0), linear_obs(0.5, 6.5)];
    let eval = model.evaluate(&held_out).expect("non-degenerate");
    assert!(eval.mse < 1e-10);
    assert!((eval.r_squared - 1.0).abs() < 1e-9);
}

#[test]
fn test_minimum_rows_is_exact_fit() {
    // Three rows, two features + intercept: square, full-rank system.
    let train = [linear_obs(1.0, 2.0), linear_obs(2.0, 1.0), linear_obs(4.0, 4.0)];
    let model = LinearRegression::new(hours_and_sleep())
        .fit(&train)
        .expect("full rank");
    assert!((model.coefficients()[0] - 3.0).abs() < 1e-6);
}

#[test]
fn test_coefficient_order_follows_feature_order() {
    let train: Vec<Observation> = [(1.0, 8.0), (2.0, 5.0), (3.0, 9.0), (4.0, 4.0)]
        .iter()
        .map(|&(h, s)| linear_obs(h, s))
        .collect();
    let reversed = FeatureSpec::new(vec![Feature::SleepHours, Feature::HoursStudied])
        .expect("valid spec");
    let model = LinearRegression::new(reversed).fit(&train).expect("full rank");

    assert!((model.coefficients()[0] + 1.0).abs() < 1e-6);
    assert!((model.coefficients()[1] - 3.0).abs() < 1e-6);
    assert!((model.coefficient(Feature::HoursStudied).expect("selected") - 3.0).abs() < 1e-6);
    assert!(model.coefficient(Feature::SamplePapers).is_none());
}

#[test]
fn test_boolean_feature() {
    // performance = 40 + 10 * extracurricular + 2 * papers
    let rows = [(false, 1.0), (true, 1.0), (false, 3.0), (true, 5.0), (false, 6.0)];
    let train: Vec<Observation> = rows
        .iter()
        .map(|&(e, p)| {
            Observation::new(1.0, 60.0, e, 7.0, p, 40.0 + if e { 10.0 } else { 0.0 } + 2.0 * p)
        })
        .collect();
    let spec = FeatureSpec::new(vec![Feature::Extracurricular, Feature::SamplePapers])
        .expect("valid spec");
    let model = LinearRegression::new(spec).fit(&train).expect("full rank");

    assert!((model.intercept() - 40.0).abs() < 1e-6);
    assert!((model.coefficients()[0] - 10.0).abs() < 1e-6);
    assert!((model.coefficients()[1] - 2.0).abs() < 1e-6);
}

#[test]
fn test_single_row_two_features_is_rank_deficient() {
    let err = LinearRegression::new(hours_and_sleep())
        .fit(&[linear_obs(1.0, 8.0)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    assert_eq!(err.operation(), "fit");
}

#[test]
fn test_collinear_columns_are_rank_deficient() {
    // previous_scores = 10 * hours_studied
    let train: Vec<Observation> = (1..=6)
        .map(|h| {
            let h = f64::from(h);
            Observation::new(h, 10.0 * h, false, 7.0, 1.0, 50.0 + 5.0 * h)
        })
        .collect();
    let spec = FeatureSpec::from_ids(&[0, 1]).expect("valid ids");
    let err = LinearRegression::new(spec).fit(&train).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    assert!(err.to_string().contains("collinear"));
}

#[test]
fn test_constant_feature_is_rank_deficient() {
    // sleep_hours is constant, indistinguishable from the intercept.
    let train: Vec<Observation> = (1..=5)
        .map(|h| {
            let h = f64::from(h);
            Observation::new(h, 60.0, false, 7.0, 1.0, 10.0 * h)
        })
        .collect();
    let err = LinearRegression::new(hours_and_sleep())
        .fit(&train)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
}

#[test]
fn test_large_offset_feature_is_not_rank_deficient() {
    // previous_scores sits far from zero but still varies row to row.
    for offset in [1e5, 1e6] {
        let train: Vec<Observation> = (0..10)
            .map(|i| {
                let i = f64::from(i);
                Observation::new(1.0, offset + i, false, 7.0, 1.0, 3.0 + 2.0 * i)
            })
            .collect();
        let spec = FeatureSpec::new(vec![Feature::PreviousScores]).expect("valid spec");

        let model = LinearRegression::new(spec)
            .fit(&train)
            .expect("offset column has full rank");

        assert!((model.coefficients()[0] - 2.0).abs() < 1e-6);
        assert!((model.intercept() - (3.0 - 2.0 * offset)).abs() < 1e-6);
    }
}

#[test]
fn test_empty_training_set() {
    let err = LinearRegression::new(hours_and_sleep()).fit(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_missing_value_in_selected_feature() {
    let mut train: Vec<Observation> = (1..=5).map(|h| linear_obs(f64::from(h), 6.0 - f64::from(h) / 2.0)).collect();
    train[2].sleep_hours = f64::NAN;
    let err = LinearRegression::new(hours_and_sleep())
        .fit(&train)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().contains("sleep_hours"));
}

#[test]
fn test_missing_value_in_response() {
    let mut train: Vec<Observation> = (1..=5).map(|h| linear_obs(f64::from(h), f64::from(h * h))).collect();
    train[0].performance_index = f64::NAN;
    let err = LinearRegression::new(hours_and_sleep())
        .fit(&train)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_missing_value_in_unselected_feature_is_ignored() {
    let mut train: Vec<Observation> = (1..=5).map(|h| linear_obs(f64::from(h), f64::from(h * h))).collect();
    train[1].sample_papers = f64::NAN;
    assert!(LinearRegression::new(hours_and_sleep()).fit(&train).is_ok());
}

#[test]
fn test_predict_arity() {
    let train: Vec<Observation> = (1..=5).map(|h| linear_obs(f64::from(h), f64::from(h * h))).collect();
    let model = LinearRegression::new(hours_and_sleep())
        .fit(&train)
        .expect("full rank");

    let err = model.predict(&[1.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(model.predict(&[1.0, 2.0, 3.0]).is_err());

    let p = model.predict(&[10.0, 1.0]).expect("two features");
    assert!((p - 31.0).abs() < 1e-6);
    let obs = linear_obs(10.0, 1.0);
    assert!((model.predict_observation(&obs) - p).abs() < 1e-12);
}

#[test]
fn test_evaluate_reference_is_training_mean() {
    // performance = 10 * hours on hours 1..=3: training mean 20.
    let train: Vec<Observation> = (1..=3)
        .map(|h| Observation::new(f64::from(h), 0.0, false, 0.0, 0.0, 10.0 * f64::from(h)))
        .collect();
    let spec = FeatureSpec::from_ids(&[0]).expect("valid id");
    let model = LinearRegression::new(spec).fit(&train).expect("full rank");
    assert!((model.train_response_mean() - 20.0).abs() < 1e-12);

    // A held-out point predicted exactly, far from the training mean.
    let eval = [Observation::new(5.0, 0.0, false, 0.0, 0.0, 50.0)];
    let result = model.evaluate(&eval).expect("SS_total = 900");
    assert!(result.mse < 1e-12);
    assert!((result.r_squared - 1.0).abs() < 1e-12);

    // Evaluation response equal to the training mean: SS_total = 0.
    let flat = [Observation::new(2.0, 0.0, false, 0.0, 0.0, 20.0)];
    assert_eq!(
        model.evaluate(&flat).unwrap_err().kind(),
        ErrorKind::DegenerateInput
    );
}

#[test]
fn test_least_squares_dimension_mismatch() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("3x1");
    let err = least_squares(&x, &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_fitted_model_serde() {
    let train: Vec<Observation> = (1..=5).map(|h| linear_obs(f64::from(h), f64::from(h * h))).collect();
    let model = LinearRegression::new(hours_and_sleep())
        .fit(&train)
        .expect("full rank");
    let json = serde_json::to_string(&model).expect("serializable");
    assert!(json.contains("hours_studied"));
    let back: FittedModel = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, model);
}
