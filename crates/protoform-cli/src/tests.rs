//! Unit tests for the protoform host.

use std::io::{self, Cursor, Write};

use protoform_config::{Config, LogFormat};
use protoform_syntax::{NoOpReason, RefactorError};
use rstest::{fixture, rstest};

use crate::telemetry::{TelemetryError, build_filter, initialise};
use crate::{CliError, protocol_options, run};

const PLAIN_CLASS: &str = "class Foo {\n    func bar() -> Int {\n        return 1\n    }\n}";

#[fixture]
fn config() -> Config {
    Config::default()
}

fn run_to_string(input: &[u8], config: &Config) -> Result<String, CliError> {
    let mut output = Vec::new();
    run(&mut Cursor::new(input), &mut output, config)?;
    Ok(String::from_utf8(output).expect("output is UTF-8"))
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn applied_refactor_is_written(config: Config) {
    let output = run_to_string(PLAIN_CLASS.as_bytes(), &config).expect("run");
    assert_eq!(
        output,
        "protocol FooProtocol: AnyObject {\n\tfunc bar() -> Int \n\n}\nclass Foo: FooProtocol {\n    {\n        return 1\n    }\n}"
    );
}

#[rstest]
#[case("struct Point {\n}\n")]
#[case("")]
fn skipped_refactor_echoes_input(config: Config, #[case] input: &str) {
    let mut output = Vec::new();
    let outcome = run(&mut Cursor::new(input), &mut output, &config).expect("run");

    assert_eq!(outcome.skip_reason(), Some(NoOpReason::ClassNotFound));
    assert_eq!(output, input.as_bytes());
}

#[test]
fn configuration_shapes_the_protocol() {
    let config = Config {
        protocol_suffix: String::from("Contract"),
        protocol_bound: String::new(),
        indent: String::from("  "),
        ..Config::default()
    };
    let output = run_to_string(PLAIN_CLASS.as_bytes(), &config).expect("run");

    assert!(output.starts_with("protocol FooContract {\n  func bar() -> Int \n"));
    assert!(output.contains("class Foo: FooContract {"));
}

#[rstest]
fn options_follow_configuration(config: Config) {
    let options = protocol_options(&config);
    assert_eq!(options.suffix(), config.protocol_suffix());
    assert_eq!(options.bound(), config.protocol_bound());
    assert_eq!(options.indent(), config.indent());
}

#[rstest]
fn overlapping_declaration_fails_without_output(config: Config) {
    let mut output = Vec::new();
    let error = run(
        &mut Cursor::new("func open(a: Int)\nclass Foo {\n}"),
        &mut output,
        &config,
    )
    .expect_err("overlap should fail");

    assert!(matches!(
        error,
        CliError::Refactor(RefactorError::DeclarationConsumed { .. })
    ));
    assert!(output.is_empty());
}

#[rstest]
fn invalid_utf8_is_a_read_error(config: Config) {
    let error = run_to_string(&[0x66, 0xff, 0x0a], &config).expect_err("invalid input");
    assert!(matches!(error, CliError::Read { .. }));
}

#[rstest]
fn write_failures_are_reported(config: Config) {
    let error = run(&mut Cursor::new(PLAIN_CLASS), &mut BrokenPipe, &config)
        .expect_err("write should fail");
    assert!(matches!(error, CliError::Write { .. }));
    assert!(error.to_string().starts_with("failed to write output"));
}

#[test]
fn invalid_log_filter_is_rejected() {
    let config = Config {
        log_filter: String::from("protoform=loudest"),
        ..Config::default()
    };
    let error = build_filter(&config).expect_err("filter should be rejected");
    assert!(matches!(error, TelemetryError::Filter(_)));
}

#[rstest]
#[case("warn")]
#[case("protoform-syntax=debug,protoform-cli=info")]
fn crate_scoped_filters_are_accepted(#[case] filter: &str) {
    let config = Config {
        log_filter: filter.to_owned(),
        ..Config::default()
    };
    assert!(build_filter(&config).is_ok());
}

#[test]
fn telemetry_initialisation_is_idempotent() {
    let config = Config {
        log_format: LogFormat::Json,
        ..Config::default()
    };
    assert!(initialise(&config).is_ok());
    assert!(initialise(&config).is_ok());
}
