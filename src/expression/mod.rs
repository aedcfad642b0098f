//! Monotone boolean formulas: construction, parsing, rendering and minimization
//!
//! A [`Formula`] is a tree of AND/OR over positive literals. Formulas are built
//! three ways:
//!
//! 1. Method API: `a.and(&b).or(&c)`
//! 2. Operator overloading: `&a * &b + &c` (or `&` / `|`)
//! 3. The [`formula!`](crate::formula) macro: `formula!("A_F" * "B_F" + c)`
//!
//! They can also be parsed from the same text they render to:
//!
//! ```
//! use coffe_analyzer::Formula;
//!
//! # fn main() -> Result<(), coffe_analyzer::ParseFormulaError> {
//! let f = Formula::parse("WBrake_F AND (Flap_D OR Flap_F)")?;
//! assert_eq!(f.to_string(), "WBrake_F AND (Flap_D OR Flap_F)");
//! assert_eq!(f.literal_count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! There is no negation: a CoFFE literal says a column *is* in some state, and
//! the analysis never needs the complement. Every formula is therefore monotone,
//! which keeps minimization exact and cheap.
//!
//! ## Rendering
//!
//! `AND` and `OR` are written out, every compound operand is parenthesised, and
//! operands appear in their stored order. Minimized formulas store their operands
//! in a canonical order (plain literals first, then groups, each sorted by literal
//! names), so equal inputs always render to the same string.

mod ast;
mod conversions;
mod display;
pub mod error;
mod eval;
pub(crate) mod factorization;
mod minimize;
mod operators;
mod parser;

pub use ast::ExprNode;
pub use error::ParseFormulaError;

use std::sync::Arc;

/// A monotone boolean formula
///
/// Build formulas with [`Formula::literal`], [`Formula::and`], [`Formula::or`],
/// [`Formula::all`] and [`Formula::any`]; these keep `And`/`Or` nodes flat
/// (no `And` directly inside `And`) and fold constants away. The variants are
/// public for pattern matching.
///
/// # Examples
///
/// ```
/// use coffe_analyzer::Formula;
///
/// let brake = Formula::literal("WBrake_F");
/// let flap = Formula::literal("Flap_F");
/// let spoiler = Formula::literal("GrndSpoiler_D");
///
/// let overrun = brake.and(&flap.or(&spoiler));
/// assert_eq!(overrun.to_string(), "WBrake_F AND (Flap_F OR GrndSpoiler_D)");
///
/// // Operators work on references
/// let same = &brake * &(&flap + &spoiler);
/// assert_eq!(overrun, same);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// TRUE or FALSE
    Constant(bool),
    /// A positive literal such as `WBrake_F`
    Literal(Arc<str>),
    /// Conjunction of the operands
    And(Vec<Formula>),
    /// Disjunction of the operands
    Or(Vec<Formula>),
}

impl Formula {
    /// Create a literal
    pub fn literal(name: &str) -> Self {
        Formula::Literal(Arc::from(name))
    }

    /// Create a constant
    pub fn constant(value: bool) -> Self {
        Formula::Constant(value)
    }

    /// Conjunction of `self` and `other`
    pub fn and(&self, other: &Formula) -> Formula {
        Formula::all([self.clone(), other.clone()])
    }

    /// Disjunction of `self` and `other`
    pub fn or(&self, other: &Formula) -> Formula {
        Formula::any([self.clone(), other.clone()])
    }

    /// Conjunction of any number of operands
    ///
    /// Nested conjunctions are flattened and TRUE operands dropped; a FALSE
    /// operand makes the result FALSE. No operands gives TRUE.
    pub fn all<I>(operands: I) -> Formula
    where
        I: IntoIterator<Item = Formula>,
    {
        let mut flat = Vec::new();
        for operand in operands {
            match operand {
                Formula::Constant(true) => {}
                Formula::Constant(false) => return Formula::Constant(false),
                Formula::And(children) => flat.extend(children),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Formula::Constant(true),
            1 => flat.swap_remove(0),
            _ => Formula::And(flat),
        }
    }

    /// Disjunction of any number of operands
    ///
    /// Nested disjunctions are flattened and FALSE operands dropped; a TRUE
    /// operand makes the result TRUE. No operands gives FALSE.
    pub fn any<I>(operands: I) -> Formula
    where
        I: IntoIterator<Item = Formula>,
    {
        let mut flat = Vec::new();
        for operand in operands {
            match operand {
                Formula::Constant(false) => {}
                Formula::Constant(true) => return Formula::Constant(true),
                Formula::Or(children) => flat.extend(children),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Formula::Constant(false),
            1 => flat.swap_remove(0),
            _ => Formula::Or(flat),
        }
    }

    /// Whether this is the constant `value`
    pub fn is_constant(&self, value: bool) -> bool {
        matches!(self, Formula::Constant(v) if *v == value)
    }
}

/// A minimized outcome expression
///
/// `Tautology` stands for the constant TRUE produced when some row of the
/// outcome had every column in an ignored state. It renders as `TRUE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimplifiedExpression {
    /// The outcome holds unconditionally
    Tautology,
    /// A minimized formula
    Formula(Formula),
}

impl SimplifiedExpression {
    /// Whether this is the tautology sentinel
    pub fn is_tautology(&self) -> bool {
        matches!(self, SimplifiedExpression::Tautology)
    }

    /// The formula, if this is not the tautology sentinel
    pub fn formula(&self) -> Option<&Formula> {
        match self {
            SimplifiedExpression::Tautology => None,
            SimplifiedExpression::Formula(f) => Some(f),
        }
    }

    /// Literal occurrences (zero for the tautology)
    pub fn literal_count(&self) -> usize {
        self.formula().map_or(0, Formula::literal_count)
    }

    /// The equivalent formula, with the tautology as `Constant(true)`
    pub fn to_formula(&self) -> Formula {
        match self {
            SimplifiedExpression::Tautology => Formula::Constant(true),
            SimplifiedExpression::Formula(f) => f.clone(),
        }
    }
}

impl From<SimplifiedExpression> for Formula {
    fn from(expr: SimplifiedExpression) -> Self {
        match expr {
            SimplifiedExpression::Tautology => Formula::Constant(true),
            SimplifiedExpression::Formula(f) => f,
        }
    }
}
