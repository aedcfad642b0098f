//! Tests for the cover module

use super::minimize::check_effort;
use super::*;
use crate::expression::SimplifiedExpression;
use crate::table::Table;
use crate::MinimizerConfig;
use test_log::test;

fn cube(names: &[&str]) -> Cube {
    names.iter().copied().collect()
}

fn states(names: &[&str]) -> BTreeSet<Arc<str>> {
    names.iter().map(|s| Arc::from(*s)).collect()
}

fn assignment(true_literals: &[&str]) -> HashMap<Arc<str>, bool> {
    true_literals.iter().map(|s| (Arc::from(*s), true)).collect()
}

fn loss_table() -> Table {
    let mut table = Table::new(&["A", "B", "C", "D"]).unwrap();
    table.add_row(&["F", "F", "O", "O"], "Total Loss").unwrap();
    table.add_row(&["F", "O", "O", "O"], "Partial Loss").unwrap();
    table.add_row(&["O", "O", "F", "F"], "Total Loss").unwrap();
    table.add_row(&["O", "O", "O", "O"], "No Loss").unwrap();
    table.add_row(&["F", "F", "F", "O"], "Total Loss").unwrap();
    table
}

#[test]
fn test_literal_name() {
    let lit = Literal::new("GrndSpoiler", "D");
    assert_eq!(lit.name(), "GrndSpoiler_D");
    assert_eq!(lit.column(), "GrndSpoiler");
    assert_eq!(lit.state(), "D");
    assert_eq!(lit.to_string(), "GrndSpoiler_D");
}

#[test]
fn test_encode_row_skips_ignored_states() {
    let table = loss_table();
    let term = encode_row(table.columns(), &table.rows()[2], &states(&["O"]));
    let names: Vec<&str> = term.literals().iter().map(Literal::name).collect();
    assert_eq!(names, vec!["C_F", "D_F"]);
}

#[test]
fn test_encode_row_without_ignored_states() {
    let table = loss_table();
    let term = encode_row(table.columns(), &table.rows()[1], &BTreeSet::new());
    assert_eq!(term.len(), 4);
    assert_eq!(term.to_string(), "A_F AND B_O AND C_O AND D_O");
}

#[test]
fn test_encode_row_all_ignored_is_true() {
    let table = loss_table();
    let term = encode_row(table.columns(), &table.rows()[3], &states(&["O"]));
    assert!(term.is_empty());
    assert_eq!(term.to_string(), "TRUE");
    assert!(term.evaluate(&HashMap::new()));
}

#[test]
fn test_encode_row_uses_aliases() {
    let table = loss_table().with_aliases(&["W", "X", "Y", "Z"]).unwrap();
    let term = encode_row(table.columns(), &table.rows()[0], &states(&["O"]));
    assert_eq!(term.to_string(), "W_F AND X_F");
}

#[test]
fn test_aggregate_groups_by_outcome() {
    let table = loss_table();
    let expressions = aggregate(&table, &states(&["O"]), &BTreeSet::new());

    let outcomes: Vec<&str> = expressions.outcomes().map(|o| o.as_ref()).collect();
    assert_eq!(outcomes, vec!["Total Loss", "Partial Loss", "No Loss"]);

    let total = expressions.get("Total Loss").unwrap();
    assert_eq!(total.num_terms(), 3);
    assert_eq!(total.literal_count(), 7);
    assert_eq!(
        total.to_string(),
        "(A_F AND B_F) OR (C_F AND D_F) OR (A_F AND B_F AND C_F)"
    );

    assert!(expressions.get("No Loss").unwrap().has_vacuous_term());
}

#[test]
fn test_aggregate_ignores_outcomes() {
    let table = loss_table();
    let expressions = aggregate(&table, &states(&["O"]), &states(&["No Loss", "Partial Loss"]));
    assert_eq!(expressions.len(), 1);
    assert!(expressions.contains("Total Loss"));
    assert!(!expressions.contains("No Loss"));
}

#[test]
fn test_aggregate_keeps_duplicates() {
    let mut table = Table::new(&["A"]).unwrap();
    table.add_row(&["F"], "Loss").unwrap();
    table.add_row(&["F"], "Loss").unwrap();
    let expressions = aggregate(&table, &BTreeSet::new(), &BTreeSet::new());
    assert_eq!(expressions.get("Loss").unwrap().num_terms(), 2);
}

#[test]
fn test_expression_evaluate() {
    let table = loss_table();
    let expressions = aggregate(&table, &states(&["O"]), &BTreeSet::new());
    let total = expressions.get("Total Loss").unwrap();

    assert!(total.evaluate(&assignment(&["A_F", "B_F"])));
    assert!(total.evaluate(&assignment(&["C_F", "D_F"])));
    assert!(!total.evaluate(&assignment(&["A_F", "C_F"])));
    assert!(!total.evaluate(&HashMap::new()));
}

#[test]
fn test_cube_absorbs() {
    let a = cube(&["A_F"]);
    let ab = cube(&["A_F", "B_F"]);
    assert!(a.absorbs(&ab));
    assert!(!ab.absorbs(&a));
    assert!(Cube::new().absorbs(&a));
    assert!(ab.absorbs(&ab));
}

#[test]
fn test_cube_is_idempotent() {
    let c = cube(&["B_F", "A_F", "B_F"]);
    assert_eq!(c.len(), 2);
    assert_eq!(c.to_string(), "A_F AND B_F");
}

#[test]
fn test_cover_display() {
    assert_eq!(Cover::new().to_string(), "FALSE");
    assert_eq!(Cover::tautology().to_string(), "TRUE");

    let cover = Cover::from_cubes(vec![cube(&["A_F", "B_F"]), cube(&["C_F"])]);
    assert_eq!(cover.to_string(), "(A_F AND B_F) OR C_F");
}

#[test]
fn test_minimize_removes_duplicates_and_absorbed() {
    let cover = Cover::from_cubes(vec![
        cube(&["C_F", "D_F"]),
        cube(&["A_F", "B_F", "C_F"]),
        cube(&["A_F", "B_F"]),
        cube(&["C_F", "D_F"]),
    ]);
    let minimized = cover.minimize().unwrap();
    assert_eq!(
        minimized.cubes(),
        &[cube(&["A_F", "B_F"]), cube(&["C_F", "D_F"])]
    );
    assert_eq!(minimized.literal_count(), 4);
}

#[test]
fn test_minimize_tautology() {
    let cover = Cover::from_cubes(vec![cube(&["A_F"]), Cube::new(), cube(&["B_F"])]);
    let minimized = cover.minimize().unwrap();
    assert!(minimized.is_tautology());
    assert_eq!(minimized.num_cubes(), 1);
}

#[test]
fn test_minimize_empty_cover() {
    let minimized = Cover::new().minimize().unwrap();
    assert!(minimized.is_empty());
}

#[test]
fn test_minimize_is_idempotent() {
    let cover = Cover::from_cubes(vec![
        cube(&["B_F"]),
        cube(&["A_F", "B_F"]),
        cube(&["A_D", "C_F"]),
    ]);
    let once = cover.minimize().unwrap();
    let twice = once.minimize().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_minimize_effort_bound() {
    let cover = Cover::from_cubes(vec![cube(&["A_F"]), cube(&["B_F"]), cube(&["C_F"])]);
    let config = MinimizerConfig {
        max_terms: 2,
        ..MinimizerConfig::default()
    };
    assert_eq!(
        cover.minimize_with_config(&config),
        Err(MinimizationError::EffortExceeded { terms: 3, limit: 2 })
    );
    assert!(check_effort(2, &config).is_ok());
}

#[test]
fn test_simplify_total_loss() {
    let table = loss_table();
    let expressions = aggregate(&table, &states(&["O"]), &BTreeSet::new());
    let simplified = simplify(expressions.get("Total Loss").unwrap()).unwrap();
    assert_eq!(simplified.to_string(), "(A_F AND B_F) OR (C_F AND D_F)");
}

#[test]
fn test_simplify_vacuous_row_is_tautology() {
    let table = loss_table();
    let expressions = aggregate(&table, &states(&["O"]), &BTreeSet::new());
    let simplified = simplify(expressions.get("No Loss").unwrap()).unwrap();
    assert_eq!(simplified, SimplifiedExpression::Tautology);
    assert_eq!(simplified.to_string(), "TRUE");
}

#[test]
fn test_simplify_without_terms_is_false() {
    let simplified = simplify(&Expression::new("Nothing")).unwrap();
    assert_eq!(simplified.to_string(), "FALSE");
}

#[test]
fn test_simplify_never_adds_literals() {
    let table = loss_table();
    let expressions = aggregate(&table, &BTreeSet::new(), &BTreeSet::new());
    for expression in expressions.values() {
        let simplified = simplify(expression).unwrap();
        assert!(simplified.literal_count() <= expression.literal_count());
    }
}

#[test]
fn test_simplify_factorises_shared_literal() {
    let mut table = Table::new(&["WBrake", "Flap", "ThrustRev"]).unwrap();
    table.add_row(&["F", "F", "O"], "Overrun").unwrap();
    table.add_row(&["F", "O", "D"], "Overrun").unwrap();
    let expressions = aggregate(&table, &states(&["O"]), &BTreeSet::new());
    let expression = expressions.get("Overrun").unwrap();

    let factored = simplify(expression).unwrap();
    assert_eq!(factored.to_string(), "WBrake_F AND (Flap_F OR ThrustRev_D)");

    let config = MinimizerConfig {
        factorise: false,
        ..MinimizerConfig::default()
    };
    let flat = simplify_with_config(expression, &config).unwrap();
    assert_eq!(flat.to_string(), "(Flap_F AND WBrake_F) OR (ThrustRev_D AND WBrake_F)");
}
