//! In-memory CoFFE table model
//!
//! A [`Table`] is an ordered list of state columns plus an ordered list of
//! [`Row`]s, each giving one failure state per column and one outcome label.
//! Rows are validated as they are added, so a built table always satisfies the
//! row-shape invariant and downstream stages never re-check it.
//!
//! States are opaque symbols: the table never orders or compares them beyond
//! equality, and any severity reasoning stays with the analyst.

mod error;
mod reader;

pub use error::{InvalidTableError, TableReadError};
pub use reader::DEFAULT_DELIMITER;

use crate::error::ConfigurationError;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// A named axis of the table, usually one subsystem function
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: Arc<str>,
    alias: Option<Arc<str>>,
}

impl Column {
    fn new(name: Arc<str>) -> Self {
        Column { name, alias: None }
    }

    /// The column name as it appears in the source table
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The custom header substituted for the name, if any
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The name used when forming literals: the alias if set, else the name
    pub fn display_name(&self) -> &Arc<str> {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

/// One combination of failure states and the outcome it leads to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    states: Arc<[Arc<str>]>,
    outcome: Arc<str>,
}

impl Row {
    /// States in column order
    pub fn states(&self) -> &[Arc<str>] {
        &self.states
    }

    /// State of the column at `index`
    pub fn state(&self, index: usize) -> Option<&str> {
        self.states.get(index).map(|s| s.as_ref())
    }

    /// The outcome (failure condition) label of this row
    pub fn outcome(&self) -> &Arc<str> {
        &self.outcome
    }
}

/// A validated CoFFE table
///
/// # Examples
///
/// ```
/// use coffe_analyzer::Table;
///
/// # fn main() -> Result<(), coffe_analyzer::InvalidTableError> {
/// let mut table = Table::new(&["WBrake", "Flap"])?;
/// table.add_row(&["F", "D"], "High-speed overrun")?;
/// table.add_row(&["O", "O"], "No overrun")?;
///
/// assert_eq!(table.num_columns(), 2);
/// assert_eq!(table.num_rows(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    state_alphabet: Option<BTreeSet<Arc<str>>>,
}

impl Table {
    /// Create an empty table with the given state columns
    ///
    /// Column names are trimmed; they must be non-empty and unique.
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Result<Self, InvalidTableError> {
        if columns.is_empty() {
            return Err(InvalidTableError::NoColumns);
        }

        let mut seen = HashSet::new();
        let mut cols = Vec::with_capacity(columns.len());
        for (index, name) in columns.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(InvalidTableError::EmptyColumnName { index });
            }
            let name: Arc<str> = Arc::from(name);
            if !seen.insert(Arc::clone(&name)) {
                return Err(InvalidTableError::DuplicateColumn { name });
            }
            cols.push(Column::new(name));
        }

        Ok(Table {
            columns: cols,
            rows: Vec::new(),
            state_alphabet: None,
        })
    }

    /// Restrict the states rows may use
    ///
    /// Rows already in the table are checked against the alphabet, as are all
    /// rows added later.
    pub fn with_state_alphabet<I, S>(mut self, states: I) -> Result<Self, InvalidTableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alphabet: BTreeSet<Arc<str>> = states
            .into_iter()
            .map(|s| normalise_state(s.as_ref()))
            .collect();

        for (index, row) in self.rows.iter().enumerate() {
            self.check_alphabet(&alphabet, index + 1, row.states())?;
        }

        self.state_alphabet = Some(alphabet);
        Ok(self)
    }

    /// Append a row
    ///
    /// Whitespace inside states is removed (`" F "` is the state `F`) and the
    /// outcome is trimmed. The row must give exactly one non-empty state per
    /// column and a non-empty outcome.
    pub fn add_row<S: AsRef<str>>(
        &mut self,
        states: &[S],
        outcome: &str,
    ) -> Result<(), InvalidTableError> {
        let row = self.rows.len() + 1;

        if states.len() != self.columns.len() {
            return Err(InvalidTableError::RowLength {
                row,
                expected: self.columns.len(),
                found: states.len(),
            });
        }

        let states: Vec<Arc<str>> = states.iter().map(|s| normalise_state(s.as_ref())).collect();
        for (state, column) in states.iter().zip(&self.columns) {
            if state.is_empty() {
                return Err(InvalidTableError::MissingValue {
                    row,
                    column: Arc::clone(&column.name),
                });
            }
        }

        if let Some(alphabet) = &self.state_alphabet {
            self.check_alphabet(alphabet, row, &states)?;
        }

        let outcome = outcome.trim();
        if outcome.is_empty() {
            return Err(InvalidTableError::MissingOutcome { row });
        }

        self.rows.push(Row {
            states: states.into(),
            outcome: Arc::from(outcome),
        });
        Ok(())
    }

    fn check_alphabet(
        &self,
        alphabet: &BTreeSet<Arc<str>>,
        row: usize,
        states: &[Arc<str>],
    ) -> Result<(), InvalidTableError> {
        for (state, column) in states.iter().zip(&self.columns) {
            if !alphabet.contains(state) {
                return Err(InvalidTableError::UnknownState {
                    row,
                    column: Arc::clone(&column.name),
                    state: Arc::clone(state),
                });
            }
        }
        Ok(())
    }

    /// Return a copy of this table whose columns display the given headers
    ///
    /// There must be exactly one header per column; headers are trimmed and must
    /// be non-empty and unique.
    pub fn with_aliases<S: AsRef<str>>(&self, headers: &[S]) -> Result<Table, ConfigurationError> {
        if headers.len() != self.columns.len() {
            return Err(ConfigurationError::HeaderCountMismatch {
                expected: self.columns.len(),
                found: headers.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut columns = self.columns.clone();
        for (index, (column, header)) in columns.iter_mut().zip(headers).enumerate() {
            let header = header.as_ref().trim();
            if header.is_empty() {
                return Err(ConfigurationError::EmptyHeader { index });
            }
            let header: Arc<str> = Arc::from(header);
            if !seen.insert(Arc::clone(&header)) {
                return Err(ConfigurationError::DuplicateHeader { name: header });
            }
            column.alias = Some(header);
        }

        Ok(Table {
            columns,
            rows: self.rows.clone(),
            state_alphabet: self.state_alphabet.clone(),
        })
    }

    /// Columns in table order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Display names of the columns, in table order
    pub fn column_names(&self) -> Vec<Arc<str>> {
        self.columns
            .iter()
            .map(|c| Arc::clone(c.display_name()))
            .collect()
    }

    /// Rows in table order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The declared state alphabet, if any
    pub fn state_alphabet(&self) -> Option<&BTreeSet<Arc<str>>> {
        self.state_alphabet.as_ref()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct outcomes in order of first occurrence
    pub fn outcomes(&self) -> Vec<Arc<str>> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(Arc::clone(&row.outcome)))
            .map(|row| Arc::clone(&row.outcome))
            .collect()
    }
}

pub(crate) fn normalise_state(state: &str) -> Arc<str> {
    let state: String = state.chars().filter(|c| !c.is_whitespace()).collect();
    Arc::from(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_rejects_bad_columns() {
        let empty: [&str; 0] = [];
        assert_eq!(Table::new(&empty), Err(InvalidTableError::NoColumns));
        assert_eq!(
            Table::new(&["A", " "]),
            Err(InvalidTableError::EmptyColumnName { index: 1 })
        );
        assert_eq!(
            Table::new(&["A", "B", "A"]),
            Err(InvalidTableError::DuplicateColumn {
                name: Arc::from("A")
            })
        );
    }

    #[test]
    fn test_add_row_normalises_states_and_outcome() {
        let mut table = Table::new(&["A", "B"]).unwrap();
        table.add_row(&[" F ", "O"], "  Total Loss ").unwrap();

        let row = &table.rows()[0];
        assert_eq!(row.state(0), Some("F"));
        assert_eq!(row.state(1), Some("O"));
        assert_eq!(row.outcome().as_ref(), "Total Loss");
    }

    #[test]
    fn test_add_row_rejects_wrong_length() {
        let mut table = Table::new(&["A", "B"]).unwrap();
        let err = table.add_row(&["F"], "Loss").unwrap_err();
        assert_eq!(
            err,
            InvalidTableError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_add_row_rejects_missing_values() {
        let mut table = Table::new(&["A", "B"]).unwrap();
        table.add_row(&["F", "F"], "Loss").unwrap();

        let err = table.add_row(&["F", "  "], "Loss").unwrap_err();
        assert_eq!(
            err,
            InvalidTableError::MissingValue {
                row: 2,
                column: Arc::from("B")
            }
        );

        let err = table.add_row(&["F", "O"], " ").unwrap_err();
        assert_eq!(err, InvalidTableError::MissingOutcome { row: 2 });
    }

    #[test]
    fn test_state_alphabet() {
        let mut table = Table::new(&["A"])
            .unwrap()
            .with_state_alphabet(["F", "D", "O"])
            .unwrap();
        table.add_row(&["D"], "Loss").unwrap();

        let err = table.add_row(&["X"], "Loss").unwrap_err();
        assert!(matches!(err, InvalidTableError::UnknownState { row: 2, .. }));

        // Existing rows are checked when the alphabet is declared late
        let mut table = Table::new(&["A"]).unwrap();
        table.add_row(&["X"], "Loss").unwrap();
        assert!(table.with_state_alphabet(["F", "O"]).is_err());
    }

    #[test]
    fn test_with_aliases() {
        let mut table = Table::new(&["Wheel brake", "Flap"]).unwrap();
        table.add_row(&["F", "O"], "Overrun").unwrap();

        let aliased = table.with_aliases(&["WBrake", "Flap"]).unwrap();
        assert_eq!(aliased.columns()[0].name(), "Wheel brake");
        assert_eq!(aliased.columns()[0].alias(), Some("WBrake"));
        assert_eq!(
            aliased.column_names(),
            vec![Arc::<str>::from("WBrake"), Arc::from("Flap")]
        );
        assert_eq!(aliased.rows(), table.rows());

        assert_eq!(
            table.with_aliases(&["A", "B", "C"]),
            Err(ConfigurationError::HeaderCountMismatch {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            table.with_aliases(&["A", ""]),
            Err(ConfigurationError::EmptyHeader { index: 1 })
        );
        assert_eq!(
            table.with_aliases(&["A", "A"]),
            Err(ConfigurationError::DuplicateHeader {
                name: Arc::from("A")
            })
        );
    }

    #[test]
    fn test_outcomes_in_first_occurrence_order() {
        let mut table = Table::new(&["A"]).unwrap();
        table.add_row(&["O"], "No Loss").unwrap();
        table.add_row(&["F"], "Total Loss").unwrap();
        table.add_row(&["O"], "No Loss").unwrap();
        table.add_row(&["D"], "Partial Loss").unwrap();

        let outcomes: Vec<_> = table.outcomes().iter().map(|o| o.to_string()).collect();
        assert_eq!(outcomes, ["No Loss", "Total Loss", "Partial Loss"]);
    }
}
