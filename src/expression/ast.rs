//! Tree traversal operations
//!
//! This module contains the [`ExprNode`] view and fold operations for formulas.

use super::Formula;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Node type for formula tree folding
///
/// This enum represents the structure of a formula node with the results
/// already computed for its children. It's used with [`Formula::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A literal with the given name
    Literal(&'a str),
    /// A constant boolean value
    Constant(bool),
    /// Logical AND with results from every operand
    And(Vec<T>),
    /// Logical OR with results from every operand
    Or(Vec<T>),
}

impl Formula {
    /// Fold the formula tree depth-first from leaves to root
    ///
    /// The function `f` receives an [`ExprNode`] holding the node type and the
    /// results accumulated from its children.
    ///
    /// # Examples
    ///
    /// Count the AND/OR nodes of a formula:
    ///
    /// ```
    /// use coffe_analyzer::{ExprNode, Formula};
    ///
    /// let f = Formula::parse("A_F AND (B_F OR C_F)").unwrap();
    ///
    /// let op_count = f.fold(|node| match node {
    ///     ExprNode::Literal(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(children) | ExprNode::Or(children) => {
    ///         children.iter().sum::<usize>() + 1
    ///     }
    /// });
    ///
    /// assert_eq!(op_count, 2);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            Formula::Literal(name) => f(ExprNode::Literal(name)),
            Formula::Constant(value) => f(ExprNode::Constant(*value)),
            Formula::And(children) => {
                let results = children.iter().map(|c| c.fold_impl(f)).collect();
                f(ExprNode::And(results))
            }
            Formula::Or(children) => {
                let results = children.iter().map(|c| c.fold_impl(f)).collect();
                f(ExprNode::Or(results))
            }
        }
    }

    /// Number of literal occurrences
    ///
    /// Constants count zero. This is the cost that minimization never increases.
    pub fn literal_count(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Literal(_) => 1,
            ExprNode::Constant(_) => 0,
            ExprNode::And(counts) | ExprNode::Or(counts) => counts.into_iter().sum(),
        })
    }

    /// The distinct literal names used, sorted
    pub fn literals(&self) -> BTreeSet<Arc<str>> {
        self.fold(|node| match node {
            ExprNode::Literal(name) => BTreeSet::from([Arc::<str>::from(name)]),
            ExprNode::Constant(_) => BTreeSet::new(),
            ExprNode::And(sets) | ExprNode::Or(sets) => sets.into_iter().flatten().collect(),
        })
    }

    /// Depth of the tree (a literal or constant has depth zero)
    pub fn depth(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Literal(_) | ExprNode::Constant(_) => 0,
            ExprNode::And(depths) | ExprNode::Or(depths) => {
                depths.into_iter().max().unwrap_or(0) + 1
            }
        })
    }
}
