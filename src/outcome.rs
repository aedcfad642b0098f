//! Outcome-keyed map preserving first-occurrence order
//!
//! This module provides the [`OutcomeMap`] type used for aggregated expressions
//! and analysis results. It keeps both the ordered entries (Vec) and a fast
//! name->index lookup (HashMap), so iteration follows the order in which outcomes
//! first appear in the table while lookups stay O(1).

use std::collections::HashMap;
use std::sync::Arc;

/// Ordered map from outcome label to `V`
#[derive(Clone, Debug)]
pub struct OutcomeMap<V> {
    /// Entries by first occurrence
    entries: Vec<(Arc<str>, V)>,
    /// Fast lookup: outcome -> position index
    index: HashMap<Arc<str>, usize>,
}

impl<V> OutcomeMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        OutcomeMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of outcomes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an outcome is present
    pub fn contains(&self, outcome: &str) -> bool {
        self.index.contains_key(outcome)
    }

    /// Position of an outcome in iteration order
    pub fn position(&self, outcome: &str) -> Option<usize> {
        self.index.get(outcome).copied()
    }

    /// Value for an outcome
    pub fn get(&self, outcome: &str) -> Option<&V> {
        self.position(outcome).map(|i| &self.entries[i].1)
    }

    /// Mutable value for an outcome
    pub fn get_mut(&mut self, outcome: &str) -> Option<&mut V> {
        self.position(outcome).map(move |i| &mut self.entries[i].1)
    }

    /// Insert or replace the value for an outcome
    ///
    /// A replaced outcome keeps its original position. Returns the previous value.
    pub fn insert(&mut self, outcome: Arc<str>, value: V) -> Option<V> {
        match self.position(&outcome) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(Arc::clone(&outcome), self.entries.len());
                self.entries.push((outcome, value));
                None
            }
        }
    }

    /// Value for an outcome, inserting `default()` at the end if absent
    pub fn get_or_insert_with<F>(&mut self, outcome: &Arc<str>, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let i = match self.position(outcome) {
            Some(i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(Arc::clone(outcome), i);
                self.entries.push((Arc::clone(outcome), default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Outcomes in order
    pub fn outcomes(&self) -> impl Iterator<Item = &Arc<str>> {
        self.entries.iter().map(|(outcome, _)| outcome)
    }

    /// Values in order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// (outcome, value) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &V)> {
        self.entries.iter().map(|(outcome, value)| (outcome, value))
    }

    /// Apply a fallible function to every value, keeping the order
    ///
    /// Stops at the first error, so either every value is mapped or none is returned.
    pub fn try_map<W, E, F>(&self, mut f: F) -> Result<OutcomeMap<W>, E>
    where
        F: FnMut(&Arc<str>, &V) -> Result<W, E>,
    {
        let entries = self
            .entries
            .iter()
            .map(|(outcome, value)| Ok((Arc::clone(outcome), f(outcome, value)?)))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(OutcomeMap {
            entries,
            index: self.index.clone(),
        })
    }
}

impl<V> Default for OutcomeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for OutcomeMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for OutcomeMap<V> {}

impl<V> IntoIterator for OutcomeMap<V> {
    type Item = (Arc<str>, V);
    type IntoIter = std::vec::IntoIter<(Arc<str>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> FromIterator<(Arc<str>, V)> for OutcomeMap<V> {
    fn from_iter<I: IntoIterator<Item = (Arc<str>, V)>>(iter: I) -> Self {
        let mut map = OutcomeMap::new();
        for (outcome, value) in iter {
            map.insert(outcome, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_first_occurrence_order() {
        let mut map = OutcomeMap::new();
        for outcome in ["No Loss", "Total Loss", "No Loss", "Partial Loss"] {
            *map.get_or_insert_with(&Arc::from(outcome), || 0) += 1;
        }
        let order: Vec<&str> = map.outcomes().map(|o| o.as_ref()).collect();
        assert_eq!(order, vec!["No Loss", "Total Loss", "Partial Loss"]);
        assert_eq!(map.get("No Loss"), Some(&2));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = OutcomeMap::new();
        assert_eq!(map.insert(Arc::from("a"), 1), None);
        map.insert(Arc::from("b"), 2);
        assert_eq!(map.insert(Arc::from("a"), 3), Some(1));
        assert_eq!(map.position("a"), Some(0));
        assert_eq!(map.get("a"), Some(&3));
    }

    #[test]
    fn test_try_map_stops_on_error() {
        let map: OutcomeMap<i32> = [(Arc::from("x"), 1), (Arc::from("y"), -1)]
            .into_iter()
            .collect();

        let doubled: Result<OutcomeMap<i32>, ()> = map.try_map(|_, v| Ok(v * 2));
        assert_eq!(doubled.unwrap().get("y"), Some(&-2));

        let failed: Result<OutcomeMap<i32>, String> = map.try_map(|outcome, v| {
            if *v < 0 {
                Err(outcome.to_string())
            } else {
                Ok(*v)
            }
        });
        assert_eq!(failed.unwrap_err(), "y");
    }

    #[test]
    fn test_missing_outcome() {
        let map: OutcomeMap<()> = OutcomeMap::new();
        assert!(map.is_empty());
        assert!(!map.contains("anything"));
        assert!(map.get("anything").is_none());
    }
}
