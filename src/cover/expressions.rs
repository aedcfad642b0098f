//! Per-outcome disjunctions and row aggregation
//!
//! This module groups encoded rows by outcome. The result is the raw,
//! unsimplified sum-of-products for each outcome; duplicates and redundant terms
//! are left for the minimizer to remove.

use super::literals::{encode_row, Term};
use super::{Cover, Cube};
use crate::outcome::OutcomeMap;
use crate::table::Table;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// The disjunction of product terms collected for one outcome
///
/// Terms are kept in row order, duplicates included. An expression holding an
/// empty term is a tautology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    outcome: Arc<str>,
    terms: Vec<Term>,
}

impl Expression {
    /// Create an expression without terms (the constant FALSE)
    pub fn new(outcome: impl Into<Arc<str>>) -> Self {
        Expression {
            outcome: outcome.into(),
            terms: Vec::new(),
        }
    }

    /// Create an expression from terms
    pub fn with_terms(outcome: impl Into<Arc<str>>, terms: Vec<Term>) -> Self {
        Expression {
            outcome: outcome.into(),
            terms,
        }
    }

    /// Append a term
    pub fn push_term(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// The outcome this expression describes
    pub fn outcome(&self) -> &Arc<str> {
        &self.outcome
    }

    /// Terms in row order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Total number of literal occurrences
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(Term::len).sum()
    }

    /// Whether some row contributed an empty term
    pub fn has_vacuous_term(&self) -> bool {
        self.terms.iter().any(Term::is_empty)
    }

    /// Evaluate under an assignment (missing literals are false)
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.terms.iter().any(|term| term.evaluate(assignment))
    }

    /// The terms as a cover of literal-name cubes
    pub fn to_cover(&self) -> Cover {
        let cubes = self
            .terms
            .iter()
            .map(|term| {
                term.literals()
                    .iter()
                    .map(|lit| Arc::clone(lit.name_arc()))
                    .collect::<Cube>()
            })
            .collect();
        Cover::from_cubes(cubes)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("FALSE");
        }
        let compound = self.terms.len() > 1;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            if compound && term.len() > 1 {
                write!(f, "({})", term)?;
            } else {
                write!(f, "{}", term)?;
            }
        }
        Ok(())
    }
}

/// Group the rows of `table` into one [`Expression`] per outcome
///
/// Rows whose outcome is in `ignored_outcomes` are skipped entirely. Outcomes are
/// ordered by their first surviving row, terms by row order.
///
/// # Examples
///
/// ```
/// use coffe_analyzer::{aggregate, Table};
/// use std::collections::BTreeSet;
/// use std::sync::Arc;
///
/// let mut table = Table::new(&["A", "B"]).unwrap();
/// table.add_row(&["F", "F"], "Total Loss").unwrap();
/// table.add_row(&["F", "O"], "Partial Loss").unwrap();
/// table.add_row(&["O", "O"], "No Loss").unwrap();
///
/// let ignored_states: BTreeSet<Arc<str>> = [Arc::from("O")].into_iter().collect();
/// let ignored_outcomes: BTreeSet<Arc<str>> = [Arc::from("No Loss")].into_iter().collect();
/// let expressions = aggregate(&table, &ignored_states, &ignored_outcomes);
///
/// assert_eq!(expressions.len(), 2);
/// assert_eq!(expressions.get("Total Loss").unwrap().to_string(), "A_F AND B_F");
/// ```
pub fn aggregate(
    table: &Table,
    ignored_states: &BTreeSet<Arc<str>>,
    ignored_outcomes: &BTreeSet<Arc<str>>,
) -> OutcomeMap<Expression> {
    let mut expressions = OutcomeMap::new();

    for row in table.rows() {
        if ignored_outcomes.contains(row.outcome()) {
            continue;
        }
        let term = encode_row(table.columns(), row, ignored_states);
        expressions
            .get_or_insert_with(row.outcome(), || Expression::new(Arc::clone(row.outcome())))
            .push_term(term);
    }

    for expression in expressions.values() {
        log::debug!(
            "outcome '{}': {} terms, {} literals",
            expression.outcome(),
            expression.num_terms(),
            expression.literal_count()
        );
    }

    expressions
}
