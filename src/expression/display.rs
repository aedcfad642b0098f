//! Display formatting for formulas

use super::{Formula, SimplifiedExpression};
use std::fmt;

impl Formula {
    /// Write an operand of `AND`/`OR`, parenthesised when compound
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::And(children) | Formula::Or(children) if children.len() > 1 => {
                write!(f, "(")?;
                self.fmt_node(f)?;
                write!(f, ")")
            }
            _ => self.fmt_node(f),
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Constant(true) => write!(f, "TRUE"),
            Formula::Constant(false) => write!(f, "FALSE"),
            Formula::Literal(name) => write!(f, "{}", name),
            Formula::And(children) => fmt_joined(f, children, " AND ", "TRUE"),
            Formula::Or(children) => fmt_joined(f, children, " OR ", "FALSE"),
        }
    }
}

fn fmt_joined(
    f: &mut fmt::Formatter<'_>,
    children: &[Formula],
    separator: &str,
    identity: &str,
) -> fmt::Result {
    match children {
        [] => write!(f, "{}", identity),
        [only] => only.fmt_node(f),
        _ => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, "{}", separator)?;
                }
                child.fmt_operand(f)?;
            }
            Ok(())
        }
    }
}

/// Display formatting for formulas
///
/// Uses `AND` / `OR` keywords, `TRUE` / `FALSE` for constants, and wraps every
/// compound operand in parentheses.
///
/// # Examples
///
/// ```
/// use coffe_analyzer::Formula;
///
/// let a = Formula::literal("A_F");
/// let b = Formula::literal("B_F");
/// let c = Formula::literal("C_F");
/// let d = Formula::literal("D_F");
///
/// let total = a.and(&b).or(&c.and(&d));
/// assert_eq!(total.to_string(), "(A_F AND B_F) OR (C_F AND D_F)");
/// ```
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f)
    }
}

impl fmt::Display for SimplifiedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimplifiedExpression::Tautology => write!(f, "TRUE"),
            SimplifiedExpression::Formula(formula) => write!(f, "{}", formula),
        }
    }
}
