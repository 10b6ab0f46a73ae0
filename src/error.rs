//! Error type shared by every fallible operation in this crate.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Failures raised synchronously, before any iteration starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument is outside of its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two vectors, or a vector and a function, disagree on dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Fails unless `found == expected`.
    pub(crate) fn check_dimension(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Error::DimensionMismatch { expected, found })
        }
    }
}

impl From<UninitializedFieldError> for Error {
    fn from(err: UninitializedFieldError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
