//! Error types for table construction and reading

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to a malformed or incomplete CoFFE table
///
/// A table is validated once, when it is built, so every later stage can rely on
/// each row holding exactly one state per column and one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTableError {
    /// The table declares no state columns
    NoColumns,
    /// A column name is empty (after trimming)
    EmptyColumnName {
        /// Zero-based position of the column
        index: usize,
    },
    /// Two columns share the same name
    DuplicateColumn {
        /// The repeated column name
        name: Arc<str>,
    },
    /// A row does not provide one state per column
    RowLength {
        /// One-based data row number
        row: usize,
        /// Number of columns in the table
        expected: usize,
        /// Number of states the row provided
        found: usize,
    },
    /// A row leaves a column without a state
    MissingValue {
        /// One-based data row number
        row: usize,
        /// The column with no state
        column: Arc<str>,
    },
    /// A row has no outcome label
    MissingOutcome {
        /// One-based data row number
        row: usize,
    },
    /// A row uses a state outside the table's declared state alphabet
    UnknownState {
        /// One-based data row number
        row: usize,
        /// The column holding the state
        column: Arc<str>,
        /// The unrecognised state
        state: Arc<str>,
    },
}

impl fmt::Display for InvalidTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTableError::NoColumns => write!(f, "Table has no state columns"),
            InvalidTableError::EmptyColumnName { index } => {
                write!(f, "Column {} has an empty name", index)
            }
            InvalidTableError::DuplicateColumn { name } => {
                write!(f, "Column '{}' appears more than once", name)
            }
            InvalidTableError::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} states but the table has {} columns",
                row, found, expected
            ),
            InvalidTableError::MissingValue { row, column } => {
                write!(f, "Row {} has no state for column '{}'", row, column)
            }
            InvalidTableError::MissingOutcome { row } => {
                write!(f, "Row {} has no outcome", row)
            }
            InvalidTableError::UnknownState { row, column, state } => write!(
                f,
                "Row {} uses unknown state '{}' in column '{}'",
                row, state, column
            ),
        }
    }
}

impl std::error::Error for InvalidTableError {}

impl From<InvalidTableError> for io::Error {
    fn from(err: InvalidTableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading a table from delimited text
///
/// This error type is returned by `Table::from_reader()` and friends.
#[derive(Debug)]
pub enum TableReadError {
    /// The input has no header line
    MissingHeader,
    /// The header names no outcome column (fewer than two fields)
    MissingOutcomeColumn,
    /// The table content is invalid
    Table(InvalidTableError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for TableReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableReadError::MissingHeader => write!(f, "Table input has no header line"),
            TableReadError::MissingOutcomeColumn => write!(
                f,
                "Table header needs at least one state column followed by the outcome column"
            ),
            TableReadError::Table(e) => write!(f, "Invalid table: {}", e),
            TableReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TableReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableReadError::Table(e) => Some(e),
            TableReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidTableError> for TableReadError {
    fn from(err: InvalidTableError) -> Self {
        TableReadError::Table(err)
    }
}

impl From<io::Error> for TableReadError {
    fn from(err: io::Error) -> Self {
        TableReadError::Io(err)
    }
}

impl From<TableReadError> for io::Error {
    fn from(err: TableReadError) -> Self {
        match err {
            TableReadError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
