//! Integration tests for the `protoform` binary entry point.
//!
//! Verifies the stdin-to-stdout contract, configuration flags, and
//! user-facing error handling.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

const PLAIN_CLASS: &str = "class Foo {\n    func bar() -> Int {\n        return 1\n    }\n}";

#[test]
fn extracts_protocol_from_stdin() {
    let mut command = cargo_bin_cmd!("protoform");
    command.write_stdin(PLAIN_CLASS);
    command.assert().success().stdout(concat!(
        "protocol FooProtocol: AnyObject {\n",
        "\tfunc bar() -> Int \n",
        "\n",
        "}\n",
        "class Foo: FooProtocol {\n",
        "    {\n",
        "        return 1\n",
        "    }\n",
        "}",
    ));
}

#[test]
fn debug_logging_keeps_stdout_clean() {
    let mut command = cargo_bin_cmd!("protoform");
    command.args(["--log-filter", "debug"]);
    command.write_stdin(PLAIN_CLASS);
    command
        .assert()
        .success()
        .stdout(predicates::str::starts_with("protocol FooProtocol: AnyObject {\n"))
        .stderr(contains("extracted signature"));
}

#[test]
fn sources_without_a_class_are_echoed() {
    let source = "struct Point {\n    let x: Int\n}\n";
    let mut command = cargo_bin_cmd!("protoform");
    command.write_stdin(source);
    command.assert().success().stdout(source);
}

#[test]
fn protocol_suffix_flag_is_honoured() {
    let mut command = cargo_bin_cmd!("protoform");
    command.args(["--protocol-suffix", "Contract"]);
    command.write_stdin(PLAIN_CLASS);
    command
        .assert()
        .success()
        .stdout(contains("protocol FooContract: AnyObject {"))
        .stdout(contains("class Foo: FooContract {"));
}

#[test]
fn protocol_bound_can_come_from_the_environment() {
    let mut command = cargo_bin_cmd!("protoform");
    command.env("PROTOFORM_PROTOCOL_BOUND", "Sendable");
    command.write_stdin(PLAIN_CLASS);
    command
        .assert()
        .success()
        .stdout(contains("protocol FooProtocol: Sendable {"));
}

#[test]
fn overlapping_declaration_exits_with_failure() {
    let mut command = cargo_bin_cmd!("protoform");
    command.write_stdin("func open(a: Int)\nclass Foo {\n}");
    command
        .assert()
        .failure()
        .code(1)
        .stderr(contains("overlaps the class declaration"));
}

#[test]
fn invalid_log_filter_exits_with_failure() {
    let mut command = cargo_bin_cmd!("protoform");
    command.args(["--log-filter", "protoform=loudest"]);
    command.write_stdin(PLAIN_CLASS);
    command
        .assert()
        .failure()
        .stderr(contains("invalid log filter"));
}
