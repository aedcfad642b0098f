//! Error types for CoFFE analysis
//!
//! Each stage owns its error type ([`InvalidTableError`] for the table model,
//! [`ConfigurationError`] for the run options, [`MinimizationError`] for the
//! minimizer). [`CoffeError`] gathers them for [`analyze`](crate::analyze), so a
//! caller can either match on the stage or just propagate with `?`.

use std::fmt;
use std::io;
use std::sync::Arc;

pub use crate::cover::MinimizationError;
pub use crate::expression::ParseFormulaError;
pub use crate::table::{InvalidTableError, TableReadError};

/// Errors in the analysis options
///
/// These are detected before any expression is built, so a failing analysis
/// never yields partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The number of custom headers differs from the number of table columns
    HeaderCountMismatch {
        /// Number of columns in the table
        expected: usize,
        /// Number of custom headers supplied
        found: usize,
    },
    /// A custom header is empty (after trimming)
    EmptyHeader {
        /// Zero-based position of the header
        index: usize,
    },
    /// Two custom headers share the same name
    DuplicateHeader {
        /// The repeated header
        name: Arc<str>,
    },
    /// Two different (column, state) pairs render to the same literal name
    AmbiguousLiteral {
        /// The shared literal name
        name: Arc<str>,
    },
    /// The filters removed every outcome (only raised in strict mode)
    NothingToAnalyze,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::HeaderCountMismatch { expected, found } => write!(
                f,
                "{} custom headers given but the table has {} columns",
                found, expected
            ),
            ConfigurationError::EmptyHeader { index } => {
                write!(f, "Custom header {} is empty", index)
            }
            ConfigurationError::DuplicateHeader { name } => {
                write!(f, "Custom header '{}' appears more than once", name)
            }
            ConfigurationError::AmbiguousLiteral { name } => write!(
                f,
                "Literal '{}' is produced by more than one (column, state) pair",
                name
            ),
            ConfigurationError::NothingToAnalyze => write!(
                f,
                "Ignored states and outcomes leave no outcome to analyze"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<ConfigurationError> for io::Error {
    fn from(err: ConfigurationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// The error type returned by [`analyze`](crate::analyze)
#[derive(Debug)]
pub enum CoffeError {
    /// The input table is malformed
    Table(InvalidTableError),
    /// The analysis options are inconsistent with the table
    Configuration(ConfigurationError),
    /// An expression could not be minimized within the configured effort
    Minimization(MinimizationError),
}

impl fmt::Display for CoffeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeError::Table(e) => write!(f, "Invalid table: {}", e),
            CoffeError::Configuration(e) => write!(f, "Configuration error: {}", e),
            CoffeError::Minimization(e) => write!(f, "Minimization error: {}", e),
        }
    }
}

impl std::error::Error for CoffeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoffeError::Table(e) => Some(e),
            CoffeError::Configuration(e) => Some(e),
            CoffeError::Minimization(e) => Some(e),
        }
    }
}

impl From<InvalidTableError> for CoffeError {
    fn from(err: InvalidTableError) -> Self {
        CoffeError::Table(err)
    }
}

impl From<ConfigurationError> for CoffeError {
    fn from(err: ConfigurationError) -> Self {
        CoffeError::Configuration(err)
    }
}

impl From<MinimizationError> for CoffeError {
    fn from(err: MinimizationError) -> Self {
        CoffeError::Minimization(err)
    }
}

impl From<CoffeError> for io::Error {
    fn from(err: CoffeError) -> Self {
        match err {
            CoffeError::Table(e) => e.into(),
            CoffeError::Configuration(e) => e.into(),
            CoffeError::Minimization(e) => e.into(),
        }
    }
}
