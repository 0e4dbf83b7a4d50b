//! CSV ingestion of student performance records.
//!
//! Expected layout, header row first:
//!
//! ```text
//! Hours Studied,Previous Scores,Extracurricular Activities,Sleep Hours,Sample Question Papers Practiced,Performance Index
//! 7,99,Yes,9,1,91.0
//! ```
//!
//! The header is skipped, never matched by name. Columns are positional.

use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use studyperf::data::{Dataset, Feature, Observation};
use tracing::{debug, info};

/// Number of fields in every record.
const N_COLUMNS: usize = Feature::ALL.len();

/// Loads a dataset from a CSV file.
pub(crate) fn load_dataset(path: &Path) -> Result<Dataset> {
    validate_path(path)?;
    let file = File::open(path)?;
    let dataset = read_dataset(BufReader::new(file))?;
    info!(path = %path.display(), rows = dataset.len(), "loaded dataset");
    Ok(dataset)
}

fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Parses CSV records from any reader.
pub(crate) fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut observations = Vec::new();
    // Line 1 is the header.
    let mut line_num: u64 = 1;

    for result in reader.records() {
        line_num += 1;
        let record = result.map_err(|e| CliError::CsvParse {
            line: e.position().map_or(line_num, csv::Position::line),
            column: "record".to_string(),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(line_num, csv::Position::line);

        if record.len() != N_COLUMNS {
            return Err(CliError::CsvParse {
                line,
                column: "record".to_string(),
                message: format!("expected {N_COLUMNS} fields, found {}", record.len()),
            });
        }

        let mut values = [0.0_f64; N_COLUMNS];
        let mut extracurricular = false;
        for (feature, field) in Feature::ALL.iter().zip(record.iter()) {
            if *feature == Feature::Extracurricular {
                extracurricular = field == "Yes";
            } else {
                values[feature.id()] = parse_numeric(field).ok_or_else(|| CliError::CsvParse {
                    line,
                    column: feature.title().to_string(),
                    message: format!("'{field}' is not a number"),
                })?;
            }
        }

        observations.push(Observation::new(
            values[Feature::HoursStudied.id()],
            values[Feature::PreviousScores.id()],
            extracurricular,
            values[Feature::SleepHours.id()],
            values[Feature::SamplePapers.id()],
            values[Feature::PerformanceIndex.id()],
        ));
    }

    debug!(rows = observations.len(), "parsed CSV records");
    Ok(Dataset::new(observations))
}

/// Blank means missing and becomes NaN.
fn parse_numeric(field: &str) -> Option<f64> {
    if field.is_empty() {
        return Some(f64::NAN);
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Hours Studied,Previous Scores,Extracurricular Activities,Sleep Hours,Sample Question Papers Practiced,Performance Index\n";

    fn parse(body: &str) -> Result<Dataset> {
        read_dataset(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn test_parses_records_in_column_order() {
        let ds = parse("7,99,Yes,9,1,91.0\n4,82,No,4,2,65.0\n").expect("valid CSV");
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.observations()[0],
            Observation::new(7.0, 99.0, true, 9.0, 1.0, 91.0)
        );
        assert!(!ds.observations()[1].extracurricular);
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        assert!(parse("").expect("valid CSV").is_empty());
    }

    #[test]
    fn test_blank_numeric_field_is_nan() {
        let ds = parse("7,,Yes,9,1,91\n").expect("valid CSV");
        assert!(ds.observations()[0].previous_scores.is_nan());
        assert!(!ds.observations()[0].is_complete());
    }

    #[test]
    fn test_only_exact_yes_is_true() {
        let ds = parse("1,1,yes,1,1,1\n1,1,Y,1,1,1\n1,1, Yes ,1,1,1\n").expect("valid CSV");
        let flags: Vec<bool> = ds.iter().map(|o| o.extracurricular).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_non_numeric_field_names_line_and_column() {
        let err = parse("7,99,Yes,9,1,91\n4,82,No,lots,2,65\n").unwrap_err();
        match err {
            CliError::CsvParse { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Sleep Hours");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse("7,99,Yes\n").unwrap_err();
        assert!(matches!(err, CliError::CsvParse { line: 2, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/students.csv")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
