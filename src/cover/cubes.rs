//! Cube type for monotone covers
//!
//! A [`Cube`] is a set of positive literal names read as their conjunction.
//! Storing the names in a sorted set gives idempotence (`A AND A = A`) and
//! commutativity for free, and makes the derived ordering canonical.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A product term over literal names
///
/// The empty cube is the constant TRUE. Cubes order lexicographically by their
/// sorted literal names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cube {
    literals: BTreeSet<Arc<str>>,
}

impl Cube {
    /// Create the TRUE cube
    pub fn new() -> Self {
        Cube::default()
    }

    /// Literal names in sorted order
    pub fn literals(&self) -> impl Iterator<Item = &Arc<str>> {
        self.literals.iter()
    }

    /// Number of literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether this cube is TRUE
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether `name` appears in this cube
    pub fn contains(&self, name: &str) -> bool {
        self.literals.contains(name)
    }

    /// Add a literal, returning whether it was new
    pub fn insert(&mut self, name: Arc<str>) -> bool {
        self.literals.insert(name)
    }

    /// Whether this cube absorbs `other` (`self + other = self`)
    ///
    /// For positive literals that holds exactly when every literal of `self`
    /// also appears in `other`.
    pub fn absorbs(&self, other: &Cube) -> bool {
        self.literals.is_subset(&other.literals)
    }

    /// Conjunction of two cubes
    pub fn conjoin(&self, other: &Cube) -> Cube {
        Cube {
            literals: self.literals.union(&other.literals).cloned().collect(),
        }
    }

    /// This cube with `name` removed
    pub fn without(&self, name: &str) -> Cube {
        Cube {
            literals: self
                .literals
                .iter()
                .filter(|lit| &***lit != name)
                .cloned()
                .collect(),
        }
    }

    /// Evaluate the cube under a lookup of literal values
    pub fn evaluate<F>(&self, mut value: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        self.literals.iter().all(|lit| value(&**lit))
    }
}

impl FromIterator<Arc<str>> for Cube {
    fn from_iter<I: IntoIterator<Item = Arc<str>>>(iter: I) -> Self {
        Cube {
            literals: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Cube {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(Arc::<str>::from).collect()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return f.write_str("TRUE");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            f.write_str(lit)?;
        }
        Ok(())
    }
}
