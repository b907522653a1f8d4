//! Tests for the structural scanner that walks selection sets and emits one
//! field per leaf selection.

use crate::ScanDiagnostic;
use crate::scanner::StructuralScanner;
use crate::tests::utils::DEVICE_QUERY;
use crate::tests::utils::field_names;
use crate::tests::utils::parse;

fn scan(body: &str) -> crate::scanner::ScanOutput {
    let lines: Vec<&str> = body.lines().collect();
    StructuralScanner::scan(&lines, 1)
}

fn scanned_names(body: &str) -> Vec<String> {
    scan(body).fields
        .into_iter()
        .map(|field| field.dotted_name)
        .collect()
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn leaf_names_carry_their_full_prefix() {
    let query = parse(DEVICE_QUERY);

    assert_eq!(field_names(&query), vec![
        "edges_node_id",
        "edges_node_name_value",
        "edges_node_role_value",
        "edges_node_role_id",
        "edges_node_platform_node_id",
        "edges_node_primary_address_node_id",
    ]);
    assert!(query.diagnostics().is_empty());
}

/// A leaf declared after a nested selection set closes is still emitted under
/// the enclosing prefix.
#[test]
fn leaf_after_closed_selection_set() {
    let names = scanned_names(
        "edges {\n  node {\n    name {\n      value\n    }\n    id\n  }\n}\n",
    );

    assert_eq!(names, vec!["edges_node_name_value", "edges_node_id"]);
}

/// Only the first token of a leaf line names the field.
#[test]
fn leaf_uses_first_token_only() {
    let names = scanned_names("edges {\n  node {\n    name # display name\n  }\n}\n");
    assert_eq!(names, vec!["edges_node_name"]);
}

#[test]
fn blank_lines_are_ignored() {
    let names = scanned_names("edges {\n\n  node {\n\n    id\n\n  }\n}\n");
    assert_eq!(names, vec!["edges_node_id"]);
}

// =============================================================================
// Immutable tokens
// =============================================================================

#[test]
fn compound_selection_sets_and_leaves_are_remembered_in_order() {
    let output = scan(
        "edges {\n  node {\n    primary_address {\n      ip_value\n    }\n    device_type {\n      id\n    }\n    primary_address {\n      id\n    }\n  }\n}\n",
    );

    let tokens: Vec<&str> =
        output.immutable_tokens.iter().map(String::as_str).collect();
    assert_eq!(tokens, vec!["primary_address", "ip_value", "device_type"]);
}

// =============================================================================
// Early termination
// =============================================================================

/// A closing brace at nesting depth one ends the scan even when further
/// selection sets follow.
#[test]
fn shallow_closing_brace_stops_scanning() {
    let query = parse(
        "query Odd {\n  Root {\n    first {\n      a\n    }\n    second {\n      b\n    }\n  }\n}\n",
    );

    assert_eq!(field_names(&query), vec!["first_a"]);
    assert_eq!(query.diagnostics(), &[
        ScanDiagnostic::TrailingContentIgnored {
            stopped_at_line: 5,
            first_ignored_line: 6,
        },
    ]);
}

/// The stop rule counts separators in the rendered prefix, so a top-level
/// selection set whose own name contains a separator is closed normally.
#[test]
fn separator_inside_top_level_name_defers_termination() {
    let names = scanned_names(
        "device_type {\n  a\n}\nsecond {\n  b\n}\nthird {\n  c\n}\n",
    );

    assert_eq!(names, vec!["device_type_a", "second_b"]);
}

/// Closing braces of the enclosing root and header after the stop point are
/// not reported.
#[test]
fn closing_braces_after_stop_are_not_reported() {
    let output = scan("edges {\n  node {\n    id\n  }\n}\n}\n}\n");

    assert_eq!(output.fields.len(), 1);
    assert!(output.diagnostics.is_empty());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn leaf_outside_any_selection_set_is_skipped() {
    let query = parse(
        "query Flat {\n  Root {\n    stray\n    edges {\n      x\n    }\n  }\n}\n",
    );

    assert_eq!(field_names(&query), vec!["edges_x"]);
    assert_eq!(query.diagnostics(), &[
        ScanDiagnostic::SelectionOutsideBlock {
            line: 3,
            text: "stray".to_string(),
        },
    ]);
}

#[test]
fn unclosed_selection_sets_are_reported() {
    let output = scan("edges {\n  node {\n    x\n");

    assert_eq!(output.fields.len(), 1);
    assert_eq!(output.diagnostics, vec![
        ScanDiagnostic::UnclosedSelectionSet { depth: 2 },
    ]);
}
