//! Parsing support for formulas

use super::error::ParseFormulaError;
use super::Formula;
use lalrpop_util::ParseError;
use std::str::FromStr;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/formula.rs"));
}

impl Formula {
    /// Parse a formula from a string
    ///
    /// Accepts the text produced by `Display` and a few shorthands:
    /// - `AND`, `and`, `*` or `&` for AND
    /// - `OR`, `or`, `+` or `|` for OR (binds looser than AND)
    /// - Parentheses for grouping
    /// - Constants: `TRUE` / `FALSE`, `true` / `false`, `1` / `0`
    /// - Literal names made of letters, digits, `_`, `.` and `-`; other names
    ///   (for example with spaces) go in double quotes: `"Ground Spoiler_F"`
    ///
    /// # Examples
    ///
    /// ```
    /// use coffe_analyzer::Formula;
    ///
    /// let f = Formula::parse("A_F * B_F + C_F * D_F").unwrap();
    /// assert_eq!(f.to_string(), "(A_F AND B_F) OR (C_F AND D_F)");
    ///
    /// assert!(Formula::parse("A_F AND").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseFormulaError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| ParseFormulaError::InvalidSyntax {
                position: error_position(&e),
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
            })
    }
}

impl FromStr for Formula {
    type Err = ParseFormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

/// Byte offset the parser stopped at
fn error_position<T, E>(err: &ParseError<usize, T, E>) -> Option<usize> {
    match err {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}
