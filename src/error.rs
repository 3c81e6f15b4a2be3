//! Error types for medir operations.
//!
//! Provides rich error context for harness consumers.

use std::fmt;

/// Main error type for medir operations.
///
/// Covers the two unrecoverable failure classes of a benchmark run
/// (allocation and backend failure) plus the contract violations a
/// backend reports for malformed inputs.
///
/// # Examples
///
/// ```
/// use medir::error::Error;
///
/// let err = Error::DimensionMismatch {
///     expected: "x.len()=4".to_string(),
///     actual: "y.len()=3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum Error {
    /// A buffer of the requested size could not be allocated.
    Allocation {
        /// Number of bytes requested
        requested_bytes: usize,
    },

    /// The numeric or random backend reported a failure.
    Backend {
        /// Kernel or fill identifier
        kernel: String,
        /// Backend-provided detail
        message: String,
    },

    /// Vector/matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid parameter value provided to a fill or kernel.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error while emitting a report.
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Allocation { requested_bytes } => {
                write!(f, "Allocation failure: {requested_bytes} bytes requested")
            }
            Error::Backend { kernel, message } => {
                write!(f, "Backend failure in {kernel}: {message}")
            }
            Error::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Buffer dimension mismatch: expected {expected}, got {actual}"
                )
            }
            Error::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl Error {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a backend failure for a named kernel
    #[must_use]
    pub fn backend(kernel: &str, message: impl Into<String>) -> Self {
        Self::Backend {
            kernel: kernel.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;
