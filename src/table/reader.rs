//! Delimited-text input for CoFFE tables
//!
//! The expected layout is the one analysts export from their spreadsheets:
//!
//! ```text
//! WBrake;GrndSpoiler;ThrustRev;Flap;Result
//! F;F;F;F;High-speed overrun
//! F;D;O;O;High-speed overrun
//! O;O;O;O;No overrun
//! ```
//!
//! The first non-empty line is the header. Its last field names the outcome
//! column; every other field names a state column. Blank lines and lines starting
//! with `#` are skipped. Fields are split on the delimiter without quoting rules.

use super::{Table, TableReadError};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Delimiter used when none is given (semicolon, as spreadsheet exports in
/// comma-decimal locales produce)
pub const DEFAULT_DELIMITER: char = ';';

impl Table {
    /// Read a table from any `BufRead` implementation
    ///
    /// This is the core reading method; [`Table::from_str_with_delimiter`] and
    /// [`Table::from_file`] delegate to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use coffe_analyzer::Table;
    /// use std::io::Cursor;
    ///
    /// let text = "A;B;Result\nF;O;Partial Loss\nF;F;Total Loss\n";
    /// let table = Table::from_reader(Cursor::new(text), ';').unwrap();
    /// assert_eq!(table.num_columns(), 2);
    /// assert_eq!(table.num_rows(), 2);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R, delimiter: char) -> Result<Table, TableReadError> {
        let mut table: Option<Table> = None;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

            match table.as_mut() {
                None => {
                    if fields.len() < 2 {
                        return Err(TableReadError::MissingOutcomeColumn);
                    }
                    let columns = &fields[..fields.len() - 1];
                    log::debug!(
                        "table header: {} state columns, outcome column '{}'",
                        columns.len(),
                        fields[fields.len() - 1]
                    );
                    table = Some(Table::new(columns)?);
                }
                Some(table) => {
                    // A row without any delimiter still goes through add_row so the
                    // length error names the row
                    let (states, outcome) = match fields.split_last() {
                        Some((outcome, states)) if !states.is_empty() => (states, *outcome),
                        _ => (&fields[..], ""),
                    };
                    table.add_row(states, outcome)?;
                }
            }
        }

        let table = table.ok_or(TableReadError::MissingHeader)?;
        log::debug!(
            "read table with {} columns and {} rows",
            table.num_columns(),
            table.num_rows()
        );
        Ok(table)
    }

    /// Read a table from a string
    pub fn from_str_with_delimiter(text: &str, delimiter: char) -> Result<Table, TableReadError> {
        Self::from_reader(Cursor::new(text.as_bytes()), delimiter)
    }

    /// Read a table from a file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coffe_analyzer::{Table, DEFAULT_DELIMITER};
    ///
    /// let table = Table::from_file("table_Q-4-6.csv", DEFAULT_DELIMITER).unwrap();
    /// println!("{} rows", table.num_rows());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Table, TableReadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::InvalidTableError;
    use std::io::Write;

    #[test]
    fn test_read_basic_table() {
        let text = "\
# example table
A;B;C;D;Result

F;O;O;O;Partial Loss
F;F;O;O;Total Loss
O;O;O;O;No Loss
";
        let table = Table::from_str_with_delimiter(text, ';').unwrap();
        assert_eq!(table.num_columns(), 4);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.columns()[3].name(), "D");
        assert_eq!(table.rows()[1].outcome().as_ref(), "Total Loss");
    }

    #[test]
    fn test_read_trims_fields_and_other_delimiters() {
        let text = "A , B , Result\n F , D F , Loss \n";
        let table = Table::from_str_with_delimiter(text, ',').unwrap();
        assert_eq!(table.rows()[0].state(1), Some("DF"));
        assert_eq!(table.rows()[0].outcome().as_ref(), "Loss");
    }

    #[test]
    fn test_read_missing_header() {
        let err = Table::from_str_with_delimiter("\n# nothing\n", ';').unwrap_err();
        assert!(matches!(err, TableReadError::MissingHeader));
    }

    #[test]
    fn test_read_header_without_outcome() {
        let err = Table::from_str_with_delimiter("Result\nLoss\n", ';').unwrap_err();
        assert!(matches!(err, TableReadError::MissingOutcomeColumn));
    }

    #[test]
    fn test_read_short_row() {
        let text = "A;B;Result\nF;F;Loss\nF;Loss\n";
        let err = Table::from_str_with_delimiter(text, ';').unwrap_err();
        assert!(matches!(
            err,
            TableReadError::Table(InvalidTableError::RowLength {
                row: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_read_row_without_delimiter() {
        let text = "A;B;Result\nF\n";
        let err = Table::from_str_with_delimiter(text, ';').unwrap_err();
        assert!(matches!(
            err,
            TableReadError::Table(InvalidTableError::RowLength { row: 1, .. })
        ));
    }

    #[test]
    fn test_read_missing_value() {
        let text = "A;B;Result\nF;;Loss\n";
        let err = Table::from_str_with_delimiter(text, ';').unwrap_err();
        assert!(matches!(
            err,
            TableReadError::Table(InvalidTableError::MissingValue { row: 1, .. })
        ));
    }

    #[test]
    fn test_read_from_file() -> std::io::Result<()> {
        let mut temp = tempfile::NamedTempFile::new()?;
        temp.write_all(b"A;B;Result\nF;O;Loss\n")?;
        temp.flush()?;

        let table = Table::from_file(temp.path(), DEFAULT_DELIMITER)?;
        assert_eq!(table.num_rows(), 1);
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let err = Table::from_file("/nonexistent/coffe.csv", ';').unwrap_err();
        assert!(matches!(err, TableReadError::Io(_)));
    }
}
