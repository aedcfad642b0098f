//! # CoFFE Analyzer
//!
//! This crate turns a Combinational Functional Failures Effects (CoFFE) table
//! into one minimal boolean expression per outcome, ready to be drawn as a fault
//! tree (ARP4761A / ED-135).
//!
//! ## Overview
//!
//! A CoFFE table has one column per subsystem function and one row per
//! combination of failure states (for example `F` failed, `D` degraded, `O`
//! operational), plus the outcome that combination leads to:
//!
//! ```text
//! WBrake;GrndSpoiler;ThrustRev;Flap;Result
//! F;F;O;O;High-speed overrun
//! F;O;O;O;Low-speed overrun
//! O;O;O;O;No overrun
//! ```
//!
//! Each row becomes a product of literals `<column>_<state>` (skipping ignored
//! states such as `O`), the rows of one outcome are OR-ed together, and the
//! result is minimized and factorised:
//!
//! ```
//! use coffe_analyzer::{AnalysisConfig, Table};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "\
//! A;B;C;D;Result
//! F;F;O;O;Total Loss
//! O;O;F;F;Total Loss
//! F;F;F;O;Total Loss
//! F;O;O;O;Partial Loss
//! O;O;O;O;No Loss
//! ";
//! let table = Table::from_str_with_delimiter(text, ';')?;
//!
//! let config = AnalysisConfig::new()
//!     .ignore_states(["O"])
//!     .ignore_outcomes(["No Loss"]);
//! let analysis = table.analyze(&config)?;
//!
//! assert_eq!(
//!     analysis.get("Total Loss").unwrap().to_string(),
//!     "(A_F AND B_F) OR (C_F AND D_F)"
//! );
//! assert_eq!(analysis.get("Partial Loss").unwrap().to_string(), "A_F");
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! - [`Table`] - validated input, built in code or read from delimited text
//! - [`encode_row`] - one row to a [`Term`] of positive [`Literal`]s
//! - [`aggregate`] - terms grouped by outcome into [`Expression`]s
//! - [`simplify`] - minimal sum-of-products, factorised into a [`Formula`]
//! - [`analyze`] - all of the above with the options of an [`AnalysisConfig`]
//!
//! Literals are never complemented, so every expression is monotone. Its minimal
//! sum-of-products is unique (duplicate and absorbed terms removed), which makes
//! minimization exact and deterministic: the same table and options always render
//! byte-identical results.
//!
//! ## Working with formulas
//!
//! [`Formula`] values can be built with methods, operators, the [`formula!`]
//! macro, or parsed from text, then minimized through the [`Minimizable`] trait:
//!
//! ```
//! use coffe_analyzer::{formula, Formula, Minimizable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parsed = Formula::parse("WBrake_F AND Flap_F OR WBrake_F AND Flap_D")?;
//! let built = formula!("WBrake_F" * ("Flap_D" + "Flap_F"));
//!
//! assert!(parsed.equivalent_to(&built));
//! assert_eq!(parsed.minimize()?.to_string(), "WBrake_F AND (Flap_D OR Flap_F)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! All public types hold their names as `Arc<str>` and are `Send + Sync`.
//! Analysis is pure and synchronous, so separate tables or separate outcomes can
//! be processed on different threads without synchronisation.

// Public modules
pub mod analysis;
pub mod cover;
pub mod error;
pub mod expression;
pub mod outcome;
pub mod table;

// Re-export high-level public API
pub use analysis::{analyze, Analysis};
pub use cover::{
    aggregate, encode_row, simplify, simplify_with_config, Cover, Cube, Expression, Literal,
    Minimizable, Term,
};
pub use error::{
    CoffeError, ConfigurationError, InvalidTableError, MinimizationError, ParseFormulaError,
    TableReadError,
};
pub use expression::{ExprNode, Formula, SimplifiedExpression};
pub use outcome::OutcomeMap;
pub use table::{Column, Row, Table, DEFAULT_DELIMITER};

/// Procedural macro building a [`Formula`] with infix syntax
pub use coffe_analyzer_macros::formula;

use std::collections::BTreeSet;
use std::sync::Arc;

/// Default bound on the number of product terms handled by the minimizer
pub const DEFAULT_MAX_TERMS: usize = 65_536;

/// Configuration for the minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Largest number of product terms a cover may reach, before or during
    /// expansion; beyond it minimization fails with
    /// [`MinimizationError::EffortExceeded`]
    pub max_terms: usize,
    /// Render the shortest of the factorised sum-of-products and the
    /// product-of-sums instead of the flat minimal sum-of-products
    pub factorise: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            max_terms: DEFAULT_MAX_TERMS,
            factorise: true,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for one [`analyze`] run
///
/// States are compared after removing whitespace and outcomes after trimming,
/// the same normalisation [`Table::add_row`] applies.
///
/// # Examples
///
/// ```
/// use coffe_analyzer::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .ignore_states(["O"])
///     .ignore_results(["No overrun", "Low-speed overrun"])
///     .custom_headers(["WBrake", "GrndSpoiler", "ThrustRev", "Flap"]);
///
/// assert!(config.ignored_states.contains("O"));
/// assert_eq!(config.ignored_outcomes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// States that never produce a literal
    pub ignored_states: BTreeSet<Arc<str>>,
    /// Outcomes excluded from the analysis
    pub ignored_outcomes: BTreeSet<Arc<str>>,
    /// Display names replacing the column names, one per column
    pub custom_headers: Option<Vec<Arc<str>>>,
    /// Fail with [`ConfigurationError::NothingToAnalyze`] instead of returning an
    /// empty analysis
    pub strict: bool,
    /// Minimizer options
    pub minimizer: MinimizerConfig,
}

impl AnalysisConfig {
    /// Create a new configuration with defaults (nothing ignored, no aliases)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add states to ignore
    pub fn ignore_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored_states
            .extend(states.into_iter().map(|s| table::normalise_state(s.as_ref())));
        self
    }

    /// Add outcomes to ignore
    pub fn ignore_outcomes<I, S>(mut self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored_outcomes
            .extend(outcomes.into_iter().map(|s| Arc::from(s.as_ref().trim())));
        self
    }

    /// Alias of [`ignore_outcomes`](Self::ignore_outcomes)
    pub fn ignore_results<I, S>(self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore_outcomes(outcomes)
    }

    /// Replace the column names in literals
    ///
    /// An empty list clears any custom headers.
    pub fn custom_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<Arc<str>> = headers.into_iter().map(|h| Arc::from(h.as_ref())).collect();
        self.custom_headers = if headers.is_empty() {
            None
        } else {
            Some(headers)
        };
        self
    }

    /// Set strict mode
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the minimizer options
    pub fn minimizer(mut self, minimizer: MinimizerConfig) -> Self {
        self.minimizer = minimizer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimizer_config_defaults() {
        let config = MinimizerConfig::new();
        assert_eq!(config.max_terms, DEFAULT_MAX_TERMS);
        assert!(config.factorise);
    }

    #[test]
    fn test_analysis_config_normalises_filters() {
        let config = AnalysisConfig::new()
            .ignore_states([" O ", "D"])
            .ignore_outcomes(["  No Loss "]);
        assert!(config.ignored_states.contains("O"));
        assert!(config.ignored_states.contains("D"));
        assert!(config.ignored_outcomes.contains("No Loss"));
        assert!(!config.strict);
        assert!(config.custom_headers.is_none());
    }

    #[test]
    fn test_analysis_config_chaining() {
        let config = AnalysisConfig::new()
            .ignore_results(["a"])
            .ignore_outcomes(["b"])
            .custom_headers(vec![String::from("X")])
            .strict(true);
        assert_eq!(config.ignored_outcomes.len(), 2);
        assert_eq!(config.custom_headers, Some(vec![Arc::from("X")]));
        assert!(config.strict);
    }

    #[test]
    fn test_empty_custom_headers_mean_none() {
        let config = AnalysisConfig::new().custom_headers(Vec::<String>::new());
        assert!(config.custom_headers.is_none());

        let cleared = AnalysisConfig::new()
            .custom_headers(["A", "B"])
            .custom_headers(Vec::<&str>::new());
        assert!(cleared.custom_headers.is_none());
    }
}
