//! Binary entrypoint for protoform.

use std::io::{self, Write};

use protoform_cli::{CliError, run, telemetry};
use protoform_config::Config;

fn main() {
    if let Err(error) = try_main() {
        writeln!(io::stderr().lock(), "{error}").ok();
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), CliError> {
    let config =
        Config::load_from_iter(std::env::args_os()).map_err(CliError::LoadConfiguration)?;
    let _telemetry = telemetry::initialise(&config)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    run(&mut reader, &mut writer, &config).map(|_| ())
}
