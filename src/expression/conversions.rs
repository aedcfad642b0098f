//! Conversions between formulas, covers and aggregated expressions

use super::Formula;
use crate::cover::{absorb, check_effort, Cover, Cube, Expression, MinimizationError};
use crate::MinimizerConfig;
use std::sync::Arc;

impl Formula {
    /// Expand into sum-of-products with the default configuration
    pub fn to_cover(&self) -> Result<Cover, MinimizationError> {
        self.to_cover_with_config(&MinimizerConfig::default())
    }

    /// Expand into sum-of-products
    ///
    /// Absorbed cubes are dropped as the expansion proceeds. Fails with
    /// [`MinimizationError::EffortExceeded`] when an intermediate product would
    /// exceed `config.max_terms` cubes.
    pub fn to_cover_with_config(&self, config: &MinimizerConfig) -> Result<Cover, MinimizationError> {
        Ok(Cover::from_cubes(self.expand(config)?))
    }

    fn expand(&self, config: &MinimizerConfig) -> Result<Vec<Cube>, MinimizationError> {
        match self {
            Formula::Constant(true) => Ok(vec![Cube::new()]),
            Formula::Constant(false) => Ok(Vec::new()),
            Formula::Literal(name) => Ok(vec![std::iter::once(Arc::clone(name)).collect()]),
            Formula::Or(children) => {
                let mut cubes = Vec::new();
                for child in children {
                    cubes.extend(child.expand(config)?);
                    check_effort(cubes.len(), config)?;
                }
                Ok(absorb(cubes))
            }
            Formula::And(children) => {
                let mut product = vec![Cube::new()];
                for child in children {
                    let factor = child.expand(config)?;
                    check_effort(product.len().saturating_mul(factor.len()), config)?;
                    let cubes = product
                        .iter()
                        .flat_map(|p| factor.iter().map(move |q| p.conjoin(q)))
                        .collect();
                    product = absorb(cubes);
                }
                Ok(product)
            }
        }
    }
}

/// Convert a cover into a factorised formula
impl From<&Cover> for Formula {
    fn from(cover: &Cover) -> Self {
        Formula::from_cover(cover, true)
    }
}

/// Convert an aggregated expression into a flat OR of ANDs, unsimplified
///
/// Terms keep their row order and column order, duplicates included.
impl From<&Expression> for Formula {
    fn from(expression: &Expression) -> Self {
        Formula::any(expression.terms().iter().map(|term| {
            Formula::all(
                term.literals()
                    .iter()
                    .map(|lit| Formula::Literal(Arc::clone(lit.name_arc()))),
            )
        }))
    }
}
