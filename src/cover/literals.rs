//! Literals, product terms and row encoding
//!
//! A CoFFE row such as `F;D;O;O` under columns `WBrake;GrndSpoiler;ThrustRev;Flap`
//! becomes the product term `WBrake_F AND GrndSpoiler_D` once the nominal state `O`
//! is ignored. Literals are never complemented: a column that is not mentioned
//! simply does not constrain the term.

use crate::table::{Column, Row};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Separator placed between column name and state in a literal name
pub const LITERAL_SEPARATOR: char = '_';

/// A positive boolean variable asserting "column is in state"
///
/// The name is `"<column>_<state>"`. Ordering and equality compare the name
/// first, so two literals with the same name sort next to each other even when
/// they come from different (column, state) pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    name: Arc<str>,
    column: Arc<str>,
    state: Arc<str>,
}

impl Literal {
    /// Create the literal for `column` being in `state`
    ///
    /// # Examples
    ///
    /// ```
    /// use coffe_analyzer::Literal;
    ///
    /// let lit = Literal::new("WBrake", "F");
    /// assert_eq!(lit.name(), "WBrake_F");
    /// ```
    pub fn new(column: impl Into<Arc<str>>, state: impl Into<Arc<str>>) -> Self {
        let column = column.into();
        let state = state.into();
        let name = Arc::from(format!("{}{}{}", column, LITERAL_SEPARATOR, state));
        Literal {
            name,
            column,
            state,
        }
    }

    /// The rendered literal name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the rendered name
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// The column this literal constrains
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The state the column must be in
    pub fn state(&self) -> &str {
        &self.state
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A conjunction of literals, one per non-ignored column of a row
///
/// Literals keep the column order of the table. An empty term is the constant
/// TRUE: the row it came from had every column in an ignored state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// Create a term from literals in column order
    pub fn new(literals: Vec<Literal>) -> Self {
        Term { literals }
    }

    /// The literals of this term
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether this term is the constant TRUE
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Evaluate the term: true when every literal is true
    ///
    /// Literals missing from `assignment` are false.
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.literals
            .iter()
            .all(|lit| assignment.get(lit.name()).copied().unwrap_or(false))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return f.write_str("TRUE");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

/// Turn one row into a product term
///
/// Every column whose state is not in `ignored_states` contributes the literal
/// `<column display name>_<state>`. `columns` must have one entry per state of
/// the row, which [`Table`](crate::Table) guarantees for its own rows.
///
/// # Examples
///
/// ```
/// use coffe_analyzer::{encode_row, Table};
/// use std::collections::BTreeSet;
/// use std::sync::Arc;
///
/// let mut table = Table::new(&["WBrake", "GrndSpoiler", "Flap"]).unwrap();
/// table.add_row(&["F", "D", "O"], "High-speed overrun").unwrap();
///
/// let ignored: BTreeSet<Arc<str>> = [Arc::from("O")].into_iter().collect();
/// let term = encode_row(table.columns(), &table.rows()[0], &ignored);
/// assert_eq!(term.to_string(), "WBrake_F AND GrndSpoiler_D");
/// ```
pub fn encode_row(columns: &[Column], row: &Row, ignored_states: &BTreeSet<Arc<str>>) -> Term {
    debug_assert_eq!(columns.len(), row.states().len());

    let literals = columns
        .iter()
        .zip(row.states())
        .filter(|(_, state)| !ignored_states.contains(*state))
        .map(|(column, state)| Literal::new(Arc::clone(column.display_name()), Arc::clone(state)))
        .collect();

    let term = Term::new(literals);
    log::trace!("encoded row for '{}': {}", row.outcome(), term);
    term
}
