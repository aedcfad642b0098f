//! The analysis entry point
//!
//! [`analyze`] validates the run options against the table, aggregates rows per
//! outcome and minimizes every outcome expression. All checks happen before the
//! first expression is built, and a minimization failure aborts the whole run, so
//! a caller never sees a partial result.

use crate::cover::{aggregate, simplify_with_config, Literal};
use crate::error::{CoffeError, ConfigurationError};
use crate::expression::SimplifiedExpression;
use crate::outcome::OutcomeMap;
use crate::table::Table;
use crate::AnalysisConfig;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Minimized expressions per outcome, in table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    results: OutcomeMap<SimplifiedExpression>,
    filtered: Vec<Arc<str>>,
}

impl Analysis {
    /// The expression for an outcome
    pub fn get(&self, outcome: &str) -> Option<&SimplifiedExpression> {
        self.results.get(outcome)
    }

    /// (outcome, expression) pairs in order of first occurrence in the table
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &SimplifiedExpression)> {
        self.results.iter()
    }

    /// Analyzed outcomes in order
    pub fn outcomes(&self) -> impl Iterator<Item = &Arc<str>> {
        self.results.outcomes()
    }

    /// The underlying outcome map
    pub fn results(&self) -> &OutcomeMap<SimplifiedExpression> {
        &self.results
    }

    /// Number of analyzed outcomes
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no outcome was analyzed
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Outcomes present in the table but removed by the ignored-outcome filter
    pub fn filtered_outcomes(&self) -> &[Arc<str>] {
        &self.filtered
    }

    /// Outcomes whose expression simplified to TRUE
    pub fn vacuous_outcomes(&self) -> Vec<&Arc<str>> {
        self.results
            .iter()
            .filter(|(_, expr)| expr.is_tautology())
            .map(|(outcome, _)| outcome)
            .collect()
    }
}

impl IntoIterator for Analysis {
    type Item = (Arc<str>, SimplifiedExpression);
    type IntoIter = std::vec::IntoIter<(Arc<str>, SimplifiedExpression)>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// One `outcome: expression` line per analyzed outcome
impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (outcome, expr) in self.results.iter() {
            writeln!(f, "{}: {}", outcome, expr)?;
        }
        Ok(())
    }
}

/// Analyze a table
///
/// # Errors
///
/// Checked in this order:
/// 1. [`ConfigurationError::HeaderCountMismatch`], `EmptyHeader` or `DuplicateHeader`
///    when custom headers do not fit the table
/// 2. [`ConfigurationError::AmbiguousLiteral`] when two (column, state) pairs
///    would share a literal name
/// 3. [`ConfigurationError::NothingToAnalyze`] in strict mode when the filters
///    leave no outcome
/// 4. [`MinimizationError`](crate::MinimizationError) from any outcome
///
/// # Examples
///
/// ```
/// use coffe_analyzer::{analyze, AnalysisConfig, Table};
///
/// let mut table = Table::new(&["A", "B"]).unwrap();
/// table.add_row(&["F", "F"], "Total Loss").unwrap();
/// table.add_row(&["F", "O"], "Partial Loss").unwrap();
/// table.add_row(&["O", "F"], "Partial Loss").unwrap();
/// table.add_row(&["O", "O"], "No Loss").unwrap();
///
/// let config = AnalysisConfig::new()
///     .ignore_states(["O"])
///     .ignore_outcomes(["No Loss"]);
/// let analysis = analyze(&table, &config).unwrap();
///
/// assert_eq!(analysis.get("Total Loss").unwrap().to_string(), "A_F AND B_F");
/// assert_eq!(analysis.get("Partial Loss").unwrap().to_string(), "A_F OR B_F");
/// assert!(analysis.get("No Loss").is_none());
/// assert_eq!(analysis.filtered_outcomes().len(), 1);
/// ```
pub fn analyze(table: &Table, config: &AnalysisConfig) -> Result<Analysis, CoffeError> {
    let aliased;
    let table = match &config.custom_headers {
        Some(headers) => {
            aliased = table.with_aliases(headers.as_slice())?;
            &aliased
        }
        None => table,
    };

    check_literal_names(table, config)?;

    let filtered: Vec<Arc<str>> = table
        .outcomes()
        .into_iter()
        .filter(|outcome| config.ignored_outcomes.contains(outcome))
        .collect();

    let expressions = aggregate(table, &config.ignored_states, &config.ignored_outcomes);
    if expressions.is_empty() {
        if config.strict {
            return Err(ConfigurationError::NothingToAnalyze.into());
        }
        log::warn!(
            "nothing to analyze: {} rows, {} outcomes filtered out",
            table.num_rows(),
            filtered.len()
        );
    }

    let results =
        expressions.try_map(|_, expression| simplify_with_config(expression, &config.minimizer))?;

    log::info!(
        "analyzed {} rows into {} outcomes ({} filtered)",
        table.num_rows(),
        results.len(),
        filtered.len()
    );

    Ok(Analysis { results, filtered })
}

impl Table {
    /// Analyze this table; see [`analyze`]
    pub fn analyze(&self, config: &AnalysisConfig) -> Result<Analysis, CoffeError> {
        analyze(self, config)
    }
}

/// Reject tables where two (column, state) pairs render to the same literal
///
/// Only cells that will actually be encoded are considered: rows of ignored
/// outcomes and ignored states are skipped.
fn check_literal_names(table: &Table, config: &AnalysisConfig) -> Result<(), ConfigurationError> {
    let mut pairs: BTreeSet<(usize, &Arc<str>)> = BTreeSet::new();
    for row in table.rows() {
        if config.ignored_outcomes.contains(row.outcome()) {
            continue;
        }
        for (index, state) in row.states().iter().enumerate() {
            if !config.ignored_states.contains(state) {
                pairs.insert((index, state));
            }
        }
    }

    let columns = table.columns();
    let mut owners: HashMap<Arc<str>, usize> = HashMap::new();
    for (index, state) in pairs {
        let literal = Literal::new(Arc::clone(columns[index].display_name()), Arc::clone(state));
        match owners.get(literal.name()) {
            Some(&owner) if owner != index => {
                return Err(ConfigurationError::AmbiguousLiteral {
                    name: Arc::clone(literal.name_arc()),
                });
            }
            Some(_) => {}
            None => {
                owners.insert(Arc::clone(literal.name_arc()), index);
            }
        }
    }
    Ok(())
}
