//! Error types for the studyperf CLI.

use std::path::PathBuf;
use std::process::ExitCode;
use studyperf::StudyPerfError;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Malformed CSV row or field
    #[error("CSV parse error at line {line}, column '{column}': {message}")]
    CsvParse {
        line: u64,
        column: String,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad experiment configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Statistics or regression failure
    #[error(transparent)]
    Engine(#[from] StudyPerfError),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Engine(_) => ExitCode::from(1),
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::CsvParse { .. } => ExitCode::from(4),
            Self::Config(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}
