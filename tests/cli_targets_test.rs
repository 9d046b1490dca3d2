//! Integration tests for the target inspection subcommands

use assert_cmd::Command;
use predicates::prelude::*;

fn targetgen() -> Command {
    Command::cargo_bin("targetgen").unwrap()
}

#[test]
fn test_targets_list_command() {
    targetgen()
        .arg("targets")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Php"))
        .stdout(predicate::str::contains("version=4.7.2"))
        .stdout(predicate::str::contains("overloading=false"))
        .stdout(predicate::str::contains("segment_limit=21845"));
}

#[test]
fn test_targets_info_command() {
    targetgen()
        .args(["targets", "info", "PHP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target: Php 4.7.2"))
        .stdout(predicate::str::contains("Supports overloaded methods: false"))
        .stdout(predicate::str::contains("Serialized segment limit: 21845"))
        .stdout(predicate::str::contains("  class\n"))
        .stdout(predicate::str::contains("  parserRule\n"));
}

#[test]
fn test_targets_info_unknown_target() {
    targetgen()
        .args(["targets", "info", "Cobol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown target language: Cobol"));
}

#[test]
fn test_check_reports_collisions() {
    targetgen()
        .args(["check", "php", "class", "myRule", "rule", "class"])
        .assert()
        .failure()
        .stdout(predicate::str::diff("class\nrule\n"))
        .stderr(predicate::str::contains(
            "Symbols conflict with generated code in target Php: class, rule",
        ));
}

#[test]
fn test_check_without_collisions() {
    targetgen()
        .args(["check", "php", "expr", "NUMBER", "Class"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No collisions for target Php"));
}

#[test]
fn test_escape_java_escape_mode() {
    targetgen()
        .args(["escape", "php", "path\\uXYZ", "--format", "java-escape"])
        .assert()
        .success()
        .stdout(predicate::str::diff("path\\u005CuXYZ\n"));
}

#[test]
fn test_escape_without_format_is_passthrough() {
    targetgen()
        .args(["escape", "php", "path\\uXYZ"])
        .assert()
        .success()
        .stdout(predicate::str::diff("path\\uXYZ\n"));
}

#[test]
fn test_escape_literal() {
    targetgen()
        .args(["escape", "php", "caf\u{e9}\t\"x\"", "--literal"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\"caf\\u00E9\\t\\\"x\\\"\"\n"));
}

#[test]
fn test_escape_literal_escapes_dollar() {
    targetgen()
        .args(["escape", "php", "'$name'", "--literal"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\"'\\$name'\"\n"));
}
