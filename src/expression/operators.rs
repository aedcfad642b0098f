//! Operator overloading for formulas
//!
//! `*` and `&` build AND, `+` and `|` build OR, matching the [`formula!`](crate::formula)
//! macro and the text parser. There is no `!`: formulas are monotone.

use super::Formula;
use std::ops::{Add, BitAnd, BitOr, Mul};

/// Logical AND operator for references: `&a * &b`
///
/// # Examples
///
/// ```
/// use coffe_analyzer::Formula;
///
/// let a = Formula::literal("A_F");
/// let b = Formula::literal("B_F");
/// let result = &a * &b;  // Equivalent to a.and(&b)
/// assert_eq!(result, a.and(&b));
/// ```
impl Mul for &Formula {
    type Output = Formula;

    fn mul(self, rhs: &Formula) -> Formula {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to [`Formula::all`])
impl Mul for Formula {
    type Output = Formula;

    fn mul(self, rhs: Formula) -> Formula {
        Formula::all([self, rhs])
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// # Examples
///
/// ```
/// use coffe_analyzer::Formula;
///
/// let a = Formula::literal("A_F");
/// let b = Formula::literal("B_F");
/// let result = &a + &b;  // Equivalent to a.or(&b)
/// assert_eq!(result.to_string(), "A_F OR B_F");
/// ```
impl Add for &Formula {
    type Output = Formula;

    fn add(self, rhs: &Formula) -> Formula {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to [`Formula::any`])
impl Add for Formula {
    type Output = Formula;

    fn add(self, rhs: Formula) -> Formula {
        Formula::any([self, rhs])
    }
}

/// Logical AND operator for references: `&a & &b`
impl BitAnd for &Formula {
    type Output = Formula;

    fn bitand(self, rhs: &Formula) -> Formula {
        self.and(rhs)
    }
}

/// Logical AND operator: `a & b`
impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        Formula::all([self, rhs])
    }
}

/// Logical OR operator for references: `&a | &b`
impl BitOr for &Formula {
    type Output = Formula;

    fn bitor(self, rhs: &Formula) -> Formula {
        self.or(rhs)
    }
}

/// Logical OR operator: `a | b`
impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        Formula::any([self, rhs])
    }
}
