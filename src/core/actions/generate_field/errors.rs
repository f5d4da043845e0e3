use crate::core::data::field::FieldError;
use crate::core::fractals::errors::ConfigurationError;
use rayon::ThreadPoolBuildError;
use std::error::Error;
use std::fmt;

/// A row task did not produce a usable row. Any one of these fails the whole
/// field.
#[derive(Debug)]
pub enum ComputationFailure {
    Row {
        row: u32,
        source: Box<dyn Error + Send + Sync>,
    },
    RowPanicked {
        row: u32,
        message: String,
    },
    RowLengthMismatch {
        row: u32,
        expected: usize,
        actual: usize,
    },
    InvalidField(FieldError),
}

impl fmt::Display for ComputationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { row, source } => write!(f, "row {} failed: {}", row, source),
            Self::RowPanicked { row, message } => {
                write!(f, "row {} panicked: {}", row, message)
            }
            Self::RowLengthMismatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} values, expected {}",
                    row, actual, expected
                )
            }
            Self::InvalidField(err) => write!(f, "assembled field is invalid: {}", err),
        }
    }
}

impl Error for ComputationFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Row { source, .. } => Some(source.as_ref()),
            Self::InvalidField(err) => Some(err),
            Self::RowPanicked { .. } | Self::RowLengthMismatch { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum GenerateFieldError {
    Configuration(ConfigurationError),
    Computation(ComputationFailure),
    WorkerPool(ThreadPoolBuildError),
}

impl fmt::Display for GenerateFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid configuration: {}", err),
            Self::Computation(err) => write!(f, "field computation failed: {}", err),
            Self::WorkerPool(err) => write!(f, "could not start worker pool: {}", err),
        }
    }
}

impl Error for GenerateFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::Computation(err) => Some(err),
            Self::WorkerPool(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for GenerateFieldError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<ComputationFailure> for GenerateFieldError {
    fn from(err: ComputationFailure) -> Self {
        Self::Computation(err)
    }
}

impl From<ThreadPoolBuildError> for GenerateFieldError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::WorkerPool(err)
    }
}
