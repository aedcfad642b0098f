//! Minimizable trait for monotone boolean functions
//!
//! This module provides the public [`Minimizable`] trait which defines a uniform
//! interface for minimizing the types of this crate.

use super::MinimizationError;
use crate::MinimizerConfig;

/// Public trait for types that can be minimized
///
/// All methods take `&self` and return a new minimized instance, so the original
/// stays usable:
///
/// ```
/// use coffe_analyzer::{formula, Formula, Minimizable};
///
/// # fn main() -> Result<(), coffe_analyzer::MinimizationError> {
/// let redundant = formula!("A_F" * "B_F" + "A_F" * "B_F" * "C_F" + "A_F" * "B_F");
/// let minimized = redundant.minimize()?;
///
/// assert_eq!(minimized.to_string(), "A_F AND B_F");
/// assert_eq!(redundant.literal_count(), 7);
/// # Ok(())
/// # }
/// ```
///
/// # Implementations
///
/// - **[`Cover`](crate::Cover)**: removes duplicate and absorbed cubes, result sorted
/// - **[`Formula`](crate::Formula)**: expands to a cover, minimizes it, then factorises
/// - **[`SimplifiedExpression`](crate::SimplifiedExpression)**: same as `Formula`,
///   with TRUE mapped to the tautology sentinel
///
/// Minimizing a minimized value returns it unchanged.
pub trait Minimizable {
    /// Minimize with the default [`MinimizerConfig`]
    fn minimize(&self) -> Result<Self, MinimizationError>
    where
        Self: Sized,
    {
        let config = MinimizerConfig::default();
        self.minimize_with_config(&config)
    }

    /// Minimize with a custom configuration
    ///
    /// This is the primary method that implementations must provide.
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError>
    where
        Self: Sized;
}
