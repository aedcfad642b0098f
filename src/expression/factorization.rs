//! Algebraic factorisation of monotone sum-of-products
//!
//! This module turns a minimal cover into the shortest of a few equivalent
//! renderings. Greedy factorisation works as follows:
//!
//! 1. Count, for each literal, the number of terms it appears in
//! 2. Factor out the literal shared by the most terms (`a*b + a*c -> a*(b + c)`)
//! 3. Recurse on the quotient and on the remaining terms
//!
//! Factoring out a literal shared by `k >= 2` terms saves `k - 1` literal
//! occurrences, so the result never has more literals than the input cover.
//!
//! Single-literal factoring cannot reach a product of sums such as
//! `(a + b)*(c + d)`. For a monotone cover the minimal product-of-sums has one
//! clause per minimal transversal of the cubes (a minimal set of literals
//! meeting every cube), so that form is built too and the shorter one wins.
//!
//! Complexity: O(n² × m) where n = number of product terms, m = literals per term

use super::Formula;
use crate::cover::{absorb, Cover, Cube};
use crate::MinimizerConfig;
use std::collections::BTreeMap;
use std::sync::Arc;

impl Formula {
    /// Build a formula from a cover
    ///
    /// With `factorise` the result is the shortest rendering found (see
    /// [`Formula::from_cover_with_config`]); without it the result is the flat
    /// OR of ANDs. Either way operands are put in canonical order: inside an AND
    /// plain literals come first, then groups; every operand list is sorted by
    /// the sequence of literal names it renders.
    ///
    /// # Examples
    ///
    /// ```
    /// use coffe_analyzer::{Cover, Cube, Formula};
    ///
    /// let cover = Cover::from_cubes(vec![
    ///     ["WBrake_F", "Flap_F"].into_iter().collect::<Cube>(),
    ///     ["WBrake_F", "Flap_D"].into_iter().collect::<Cube>(),
    /// ]);
    ///
    /// let factored = Formula::from_cover(&cover, true);
    /// assert_eq!(factored.to_string(), "WBrake_F AND (Flap_D OR Flap_F)");
    ///
    /// let flat = Formula::from_cover(&cover, false);
    /// assert_eq!(flat.to_string(), "(Flap_D AND WBrake_F) OR (Flap_F AND WBrake_F)");
    /// ```
    pub fn from_cover(cover: &Cover, factorise: bool) -> Formula {
        let config = MinimizerConfig {
            factorise,
            ..MinimizerConfig::default()
        };
        Formula::from_cover_with_config(cover, &config)
    }

    /// Build the shortest rendering of a cover
    ///
    /// Candidates, in order of preference: the greedily factorised
    /// sum-of-products, the minimal product-of-sums, the flat sum-of-products.
    /// The one with the fewest literal occurrences is returned; on a tie the
    /// earlier candidate wins. The product-of-sums is skipped when it would need
    /// more than `config.max_terms` clauses. With `config.factorise` false only
    /// the flat form is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use coffe_analyzer::{Cover, Cube, Formula, MinimizerConfig};
    ///
    /// // (A_F OR B_F) AND (C_F OR D_F), expanded
    /// let cover = Cover::from_cubes(vec![
    ///     ["A_F", "C_F"].into_iter().collect::<Cube>(),
    ///     ["A_F", "D_F"].into_iter().collect::<Cube>(),
    ///     ["B_F", "C_F"].into_iter().collect::<Cube>(),
    ///     ["B_F", "D_F"].into_iter().collect::<Cube>(),
    /// ]);
    ///
    /// let formula = Formula::from_cover_with_config(&cover, &MinimizerConfig::default());
    /// assert_eq!(formula.to_string(), "(A_F OR B_F) AND (C_F OR D_F)");
    /// ```
    pub fn from_cover_with_config(cover: &Cover, config: &MinimizerConfig) -> Formula {
        let flat = normalise(Formula::any(cover.cubes().iter().map(cube_to_formula)));
        if !config.factorise {
            return flat;
        }

        let mut best = normalise(factorise_cubes(cover.cubes().to_vec()));
        let product_of_sums =
            minimal_transversals(cover.cubes(), config.max_terms).map(|clauses| {
                normalise(Formula::all(clauses.iter().map(clause_to_formula)))
            });

        for candidate in product_of_sums.into_iter().chain(std::iter::once(flat)) {
            if candidate.literal_count() < best.literal_count() {
                best = candidate;
            }
        }
        best
    }
}

fn cube_to_formula(cube: &Cube) -> Formula {
    Formula::all(cube.literals().map(|name| Formula::Literal(Arc::clone(name))))
}

fn clause_to_formula(clause: &Cube) -> Formula {
    Formula::any(clause.literals().map(|name| Formula::Literal(Arc::clone(name))))
}

/// Clauses of the minimal product-of-sums of a monotone cover
///
/// Each clause is a minimal set of literals meeting every cube. `None` for the
/// constant covers and when more than `limit` clauses would be needed.
fn minimal_transversals(cubes: &[Cube], limit: usize) -> Option<Vec<Cube>> {
    if cubes.is_empty() || cubes.iter().any(Cube::is_empty) {
        return None;
    }

    let mut clauses = vec![Cube::new()];
    for cube in cubes {
        let mut next = Vec::with_capacity(clauses.len());
        for clause in &clauses {
            if cube.literals().any(|name| clause.contains(name)) {
                next.push(clause.clone());
                continue;
            }
            for name in cube.literals() {
                let mut extended = clause.clone();
                extended.insert(Arc::clone(name));
                next.push(extended);
            }
        }
        if next.len() > limit {
            return None;
        }
        clauses = absorb(next);
    }
    Some(clauses)
}

/// Factor out a single literal from terms
///
/// Splits terms into those containing the literal (with it removed) and the rest.
fn factor_literal(terms: Vec<Cube>, name: &str) -> (Vec<Cube>, Vec<Cube>) {
    let mut with_literal = Vec::new();
    let mut without_literal = Vec::new();

    for term in terms {
        if term.contains(name) {
            with_literal.push(term.without(name));
        } else {
            without_literal.push(term);
        }
    }

    (with_literal, without_literal)
}

/// Find the best literal to factor out (greedy heuristic)
///
/// Prefers the literal that appears in the most terms; ties go to the
/// lexicographically smallest name. Literals in fewer than 2 terms never qualify.
fn find_best_factor(terms: &[Cube]) -> Option<Arc<str>> {
    if terms.len() < 2 {
        return None;
    }

    let mut counts: BTreeMap<&Arc<str>, usize> = BTreeMap::new();
    for term in terms {
        for name in term.literals() {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&Arc<str>, usize)> = None;
    for (name, count) in counts {
        if count < 2 {
            continue;
        }
        // Strictly greater keeps the earliest name on ties
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }

    best.map(|(name, _)| Arc::clone(name))
}

/// Recursively factorise a list of product terms
fn factorise_cubes(terms: Vec<Cube>) -> Formula {
    if terms.is_empty() {
        return Formula::Constant(false);
    }
    if terms.iter().any(Cube::is_empty) {
        return Formula::Constant(true);
    }
    if terms.len() == 1 {
        return cube_to_formula(&terms[0]);
    }

    match find_best_factor(&terms) {
        Some(name) => {
            let (with_literal, without_literal) = factor_literal(terms, &name);
            let factored = Formula::all([Formula::Literal(name), factorise_cubes(with_literal)]);
            if without_literal.is_empty() {
                factored
            } else {
                Formula::any([factorise_cubes(without_literal), factored])
            }
        }
        // No common factors, just OR all terms together
        None => Formula::any(terms.iter().map(cube_to_formula)),
    }
}

/// Literal names in rendering order
fn sort_key(formula: &Formula) -> Vec<Arc<str>> {
    fn walk(formula: &Formula, out: &mut Vec<Arc<str>>) {
        match formula {
            Formula::Literal(name) => out.push(Arc::clone(name)),
            Formula::Constant(_) => {}
            Formula::And(children) | Formula::Or(children) => {
                for child in children {
                    walk(child, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(formula, &mut out);
    out
}

/// Put operands in canonical order, bottom-up
fn normalise(formula: Formula) -> Formula {
    match formula {
        Formula::And(children) => {
            let (mut literals, mut groups): (Vec<Formula>, Vec<Formula>) = children
                .into_iter()
                .map(normalise)
                .partition(|c| matches!(c, Formula::Literal(_)));
            literals.sort_by_cached_key(sort_key);
            groups.sort_by_cached_key(sort_key);
            literals.extend(groups);
            Formula::And(literals)
        }
        Formula::Or(children) => {
            let mut children: Vec<Formula> = children.into_iter().map(normalise).collect();
            children.sort_by_cached_key(sort_key);
            Formula::Or(children)
        }
        other => other,
    }
}
