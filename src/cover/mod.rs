//! Covers, literals and the row-to-expression pipeline
//!
//! This module turns table rows into boolean structure:
//!
//! - [`encode_row`] maps a row to a [`Term`] of positive [`Literal`]s
//! - [`aggregate`] groups terms by outcome into [`Expression`]s
//! - [`Cover`] is the set-of-[`Cube`]s form the minimizer works on
//!
//! Because literals are never complemented every cover is monotone, and its
//! minimal sum-of-products is unique: the cubes that no other cube absorbs.

mod cubes;
mod error;
mod expressions;
mod literals;
mod minimizable;
mod minimize;

#[cfg(test)]
mod tests;

pub use cubes::Cube;
pub use error::MinimizationError;
pub use expressions::{aggregate, Expression};
pub use literals::{encode_row, Literal, Term, LITERAL_SEPARATOR};
pub use minimizable::Minimizable;
pub use minimize::{simplify, simplify_with_config};

pub(crate) use minimize::{absorb, check_effort};

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// A sum-of-products over positive literal names
///
/// The empty cover is FALSE; a cover holding the empty cube is TRUE.
///
/// # Examples
///
/// ```
/// use coffe_analyzer::{Cover, Cube, Minimizable};
///
/// let mut cover = Cover::new();
/// cover.add_cube(["A_F", "B_F"].into_iter().collect());
/// cover.add_cube(["A_F"].into_iter().collect());
/// cover.add_cube(["A_F", "B_F", "C_F"].into_iter().collect());
///
/// let minimized = cover.minimize().unwrap();
/// assert_eq!(minimized.num_cubes(), 1);
/// assert_eq!(minimized.to_string(), "A_F");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cover {
    cubes: Vec<Cube>,
}

impl Cover {
    /// Create the empty (FALSE) cover
    pub fn new() -> Self {
        Cover::default()
    }

    /// Create a cover from cubes, kept as given
    pub fn from_cubes(cubes: Vec<Cube>) -> Self {
        Cover { cubes }
    }

    /// The TRUE cover
    pub fn tautology() -> Self {
        Cover {
            cubes: vec![Cube::new()],
        }
    }

    /// Append a cube
    pub fn add_cube(&mut self, cube: Cube) {
        self.cubes.push(cube);
    }

    /// The cubes of this cover
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Consume the cover, returning its cubes
    pub fn into_cubes(self) -> Vec<Cube> {
        self.cubes
    }

    /// Number of cubes
    pub fn num_cubes(&self) -> usize {
        self.cubes.len()
    }

    /// Whether this cover is FALSE
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Whether some cube is TRUE, making the whole cover TRUE
    pub fn is_tautology(&self) -> bool {
        self.cubes.iter().any(Cube::is_empty)
    }

    /// Total literal occurrences across cubes
    pub fn literal_count(&self) -> usize {
        self.cubes.iter().map(Cube::len).sum()
    }

    /// Every literal name used by the cover, sorted
    pub fn variables(&self) -> BTreeSet<Arc<str>> {
        self.cubes
            .iter()
            .flat_map(|cube| cube.literals().cloned())
            .collect()
    }

    /// Evaluate under an assignment (missing literals are false)
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.cubes.iter().any(|cube| {
            cube.evaluate(|name| assignment.get(name).copied().unwrap_or(false))
        })
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cubes.is_empty() {
            return f.write_str("FALSE");
        }
        let compound = self.cubes.len() > 1;
        for (i, cube) in self.cubes.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            if compound && cube.len() > 1 {
                write!(f, "({})", cube)?;
            } else {
                write!(f, "{}", cube)?;
            }
        }
        Ok(())
    }
}
