//! Evaluation and equivalence checking for formulas

use super::Formula;
use crate::{Minimizable, MinimizerConfig};
use std::collections::HashMap;
use std::sync::Arc;

impl Formula {
    /// Evaluate the formula with a given literal assignment
    ///
    /// Literals missing from `assignment` are false.
    ///
    /// # Examples
    ///
    /// ```
    /// use coffe_analyzer::Formula;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let f = Formula::parse("WBrake_F AND (Flap_D OR Flap_F)").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("WBrake_F"), true);
    /// assert!(!f.evaluate(&assignment));
    ///
    /// assignment.insert(Arc::from("Flap_F"), true);
    /// assert!(f.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        match self {
            Formula::Constant(value) => *value,
            Formula::Literal(name) => assignment.get(name).copied().unwrap_or(false),
            Formula::And(children) => children.iter().all(|c| c.evaluate(assignment)),
            Formula::Or(children) => children.iter().any(|c| c.evaluate(assignment)),
        }
    }

    /// Check if two formulas are logically equivalent
    ///
    /// Both sides are reduced to their minimal sum-of-products. For monotone
    /// formulas that form is unique, so equal covers mean equal functions and the
    /// check is exact. Returns `false` if either side exceeds the default effort
    /// bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use coffe_analyzer::Formula;
    ///
    /// let a = Formula::literal("A_F");
    /// let b = Formula::literal("B_F");
    /// let c = Formula::literal("C_F");
    ///
    /// // Distributivity
    /// let factored = a.and(&b.or(&c));
    /// let expanded = a.and(&b).or(&a.and(&c));
    /// assert!(factored.equivalent_to(&expanded));
    ///
    /// // Absorption
    /// assert!(a.or(&a.and(&b)).equivalent_to(&a));
    /// assert!(!a.equivalent_to(&b));
    /// ```
    pub fn equivalent_to(&self, other: &Formula) -> bool {
        let config = MinimizerConfig::default();
        let minimal = |f: &Formula| {
            f.to_cover_with_config(&config)
                .and_then(|cover| cover.minimize_with_config(&config))
        };

        match (minimal(self), minimal(other)) {
            (Ok(left), Ok(right)) => left == right,
            _ => false,
        }
    }
}
