//! Error types for the taxkit core library.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;

/// Top-level error enum for the taxkit core library.
#[derive(Debug, thiserror::Error)]
pub enum TaxkitError {
    /// A caller-supplied value failed validation; the message names the
    /// offending field.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown filing status: {0}")]
    UnknownFilingStatus(String),

    #[error("Unsupported tax year: {0}")]
    UnsupportedTaxYear(i64),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<TaxkitError> for PyErr {
    fn from(err: TaxkitError) -> PyErr {
        match &err {
            TaxkitError::InvalidInput(_)
            | TaxkitError::UnknownFilingStatus(_)
            | TaxkitError::UnsupportedTaxYear(_) => PyValueError::new_err(err.to_string()),
            TaxkitError::Catalog(_) => PyRuntimeError::new_err(err.to_string()),
            TaxkitError::Json(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

pub type TaxkitResult<T> = Result<T, TaxkitError>;
