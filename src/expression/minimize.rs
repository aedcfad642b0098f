//! Minimization implementation for formulas
//!
//! A formula is expanded to a cover, the cover is minimized, and the result is
//! factorised back into a formula.

use super::{Formula, SimplifiedExpression};
use crate::cover::MinimizationError;
use crate::{Minimizable, MinimizerConfig};

impl Minimizable for Formula {
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError> {
        let cover = self
            .to_cover_with_config(config)?
            .minimize_with_config(config)?;
        Ok(Formula::from_cover_with_config(&cover, config))
    }
}

impl Minimizable for SimplifiedExpression {
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError> {
        match self {
            SimplifiedExpression::Tautology => Ok(SimplifiedExpression::Tautology),
            SimplifiedExpression::Formula(formula) => {
                let minimized = formula.minimize_with_config(config)?;
                if minimized.is_constant(true) {
                    Ok(SimplifiedExpression::Tautology)
                } else {
                    Ok(SimplifiedExpression::Formula(minimized))
                }
            }
        }
    }
}
