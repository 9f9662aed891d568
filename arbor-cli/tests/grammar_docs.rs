//! Grammar-docs tests (definitions → markdown via the CLI)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn render_all_nodes_via_cli() {
    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.arg("grammar-docs").arg(fixture_path("expressions.json"));

    let output_pred = predicate::str::contains("### BinaryExprSyntax")
        .and(predicate::str::contains(" - `operator`: (`'+'` | `'-'`)"))
        .and(predicate::str::contains("### IfStmtSyntax"))
        .and(predicate::str::contains(
            " - `elseBody`: (``IfStmtSyntax`` | ``CodeBlockSyntax``)?",
        ))
        .and(predicate::str::contains("### FunctionCallSyntax"))
        .and(predicate::str::contains(" - `arguments`: ``ArgumentSyntax``"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn error_recovery_slots_never_reach_the_docs() {
    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.arg("grammar-docs").arg(fixture_path("expressions.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("unexpectedAfterBody").not());
}

#[test]
fn render_a_single_node() {
    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.arg("grammar-docs")
        .arg(fixture_path("expressions.json"))
        .arg("--node")
        .arg("IfStmtSyntax");

    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("### IfStmtSyntax")
                .and(predicate::str::contains("BinaryExprSyntax").not()),
        );
}

#[test]
fn unknown_node_name_fails() {
    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.arg("grammar-docs")
        .arg(fixture_path("expressions.json"))
        .arg("--node")
        .arg("NoSuchSyntax");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No node type named 'NoSuchSyntax'"));
}

#[test]
fn missing_definition_file_fails() {
    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.arg("grammar-docs").arg("does-not-exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
