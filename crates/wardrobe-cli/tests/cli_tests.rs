//! CLI tests for the commands that do not need a database.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("wardrobe").unwrap();
    cmd.args(["--config", "does-not-exist.json"]);
    cmd
}

#[test]
fn help_lists_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn generate_prints_one_statement_per_item() {
    let output = cmd()
        .args(["generate", "--count", "3", "--seed", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert!(
            line.starts_with("INSERT INTO Clothes (id, category, size, color, price, material"),
            "unexpected statement: {line}"
        );
        assert!(line.ends_with(");"));
    }
}

#[test]
fn create_renders_explicit_fields() {
    cmd()
        .args([
            "create", "Top", "--size", "40", "--color", "Red", "--price", "25.5", "--material",
            "Cotton", "--sleeves", "true", "--table", "items",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "INSERT INTO items (id, category, size, color, price, material, sleeves) VALUES (1",
        ))
        .stdout(predicate::str::contains(
            "'Top', 40, 'Red', 25.5, 'Cotton', TRUE);",
        ));
}

#[test]
fn create_fixed_columns_mode() {
    cmd()
        .args(["create", "Footwear", "--mode", "fixed-columns"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(id, category, size, color, price, material, style)",
        ))
        .stdout(predicate::str::contains("'Footwear', NULL, NULL, NULL, NULL, NULL);"));
}

#[test]
fn create_renders_non_finite_price_as_null() {
    cmd()
        .args(["create", "Footwear", "--price", "NaN", "--mode", "fixed-columns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Footwear', NULL, NULL, NULL, NULL, NULL);"))
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn execute_rejects_table_that_is_not_a_plain_identifier() {
    cmd()
        .args([
            "create",
            "Top",
            "--table",
            "Clothes; DROP TABLE x",
            "--execute",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidIdentifier"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn create_rejects_invalid_category() {
    cmd()
        .args(["create", "Dress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dress"));
}

#[test]
fn create_rejects_attribute_of_other_category() {
    cmd()
        .args(["create", "Footwear", "--style", "Cap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("style"));
}

#[test]
fn list_requires_config() {
    cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}
