//! Error types for minimization

use std::fmt;
use std::io;

/// Errors that can occur during minimization
///
/// This error type is returned by [`Minimizable::minimize()`](super::Minimizable::minimize)
/// and [`simplify()`](crate::simplify). The tables this crate is built for are small
/// (tens of columns and states), so hitting it points at a defect or a runaway input,
/// not at a user mistake; it is always propagated rather than answered with an
/// unsimplified expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// The number of product terms exceeded the configured bound
    EffortExceeded {
        /// Number of terms the minimizer was asked to handle
        terms: usize,
        /// The configured maximum (`MinimizerConfig::max_terms`)
        limit: usize,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::EffortExceeded { terms, limit } => write!(
                f,
                "Expression has {} product terms, more than the limit of {}",
                terms, limit
            ),
        }
    }
}

impl std::error::Error for MinimizationError {}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        io::Error::other(err)
    }
}
