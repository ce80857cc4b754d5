//! Error types.
//!
//! The query and payroll engines are infallible.  Errors only arise at
//! the edges: reading employees from a data source and loading
//! configuration.

use thiserror::Error;

/// Failures reported by an [`EmployeeSource`](crate::source::EmployeeSource).
#[derive(Error, Debug)]
pub enum SourceError {
    /// The backing store could not be reached or read.
    #[error("employee data unavailable: {0}")]
    Unavailable(String),
    #[error("employee {0} not found")]
    NotFound(String),
    #[error("malformed employee data: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Unavailable(err.to_string())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
