use solid_patterns::{builder, runner};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    runner::run(|config| builder::run_demo(&config.report, &mut io::stdout().lock()))
}
