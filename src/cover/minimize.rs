//! Minimization of monotone covers
//!
//! For positive literals the minimal sum-of-products is obtained by dropping
//! repeated cubes and every cube absorbed by a smaller one (`A + A*B = A`). No
//! consensus or covering step is needed: every remaining cube is an essential
//! prime.

use super::minimizable::Minimizable;
use super::{Cover, Cube, Expression, MinimizationError};
use crate::expression::{Formula, SimplifiedExpression};
use crate::MinimizerConfig;

impl Minimizable for Cover {
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError> {
        check_effort(self.num_cubes(), config)?;
        Ok(Cover::from_cubes(absorb(self.cubes().to_vec())))
    }
}

/// Fail when `terms` exceeds the configured bound
pub(crate) fn check_effort(terms: usize, config: &MinimizerConfig) -> Result<(), MinimizationError> {
    if terms > config.max_terms {
        return Err(MinimizationError::EffortExceeded {
            terms,
            limit: config.max_terms,
        });
    }
    Ok(())
}

/// Remove duplicate and absorbed cubes, returning the survivors sorted
///
/// A TRUE cube absorbs everything, so a cover containing one collapses to it.
pub(crate) fn absorb(mut cubes: Vec<Cube>) -> Vec<Cube> {
    if cubes.iter().any(Cube::is_empty) {
        return vec![Cube::new()];
    }

    // Shorter cubes first: an absorbing cube is never longer than its victim
    cubes.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    cubes.dedup();

    let mut kept: Vec<Cube> = Vec::with_capacity(cubes.len());
    for cube in cubes {
        if !kept.iter().any(|k| k.absorbs(&cube)) {
            kept.push(cube);
        }
    }
    kept.sort();
    kept
}

/// Minimize an outcome expression with the default configuration
///
/// # Examples
///
/// ```
/// use coffe_analyzer::{aggregate, simplify, Table};
/// use std::collections::BTreeSet;
/// use std::sync::Arc;
///
/// let mut table = Table::new(&["A", "B", "C"]).unwrap();
/// table.add_row(&["F", "O", "O"], "Loss").unwrap();
/// table.add_row(&["F", "F", "O"], "Loss").unwrap();
/// table.add_row(&["O", "F", "F"], "Loss").unwrap();
///
/// let ignored: BTreeSet<Arc<str>> = [Arc::from("O")].into_iter().collect();
/// let expressions = aggregate(&table, &ignored, &BTreeSet::new());
/// let simplified = simplify(expressions.get("Loss").unwrap()).unwrap();
///
/// assert_eq!(simplified.to_string(), "A_F OR (B_F AND C_F)");
/// ```
pub fn simplify(expression: &Expression) -> Result<SimplifiedExpression, MinimizationError> {
    simplify_with_config(expression, &MinimizerConfig::default())
}

/// Minimize an outcome expression
///
/// The result is logically equivalent to `expression` and never has more
/// literal occurrences. An expression with an empty term simplifies to
/// [`SimplifiedExpression::Tautology`].
pub fn simplify_with_config(
    expression: &Expression,
    config: &MinimizerConfig,
) -> Result<SimplifiedExpression, MinimizationError> {
    let minimized = expression.to_cover().minimize_with_config(config)?;

    if minimized.is_tautology() {
        log::warn!(
            "outcome '{}' is reached by a row with every column in an ignored state; it simplifies to TRUE",
            expression.outcome()
        );
        return Ok(SimplifiedExpression::Tautology);
    }

    let formula = Formula::from_cover_with_config(&minimized, config);
    log::debug!(
        "outcome '{}': {} terms / {} literals -> {} literals",
        expression.outcome(),
        expression.num_terms(),
        expression.literal_count(),
        formula.literal_count()
    );
    Ok(SimplifiedExpression::Formula(formula))
}
