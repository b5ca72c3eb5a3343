use solid_patterns::{runner, single_responsibility};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    runner::run(|_| single_responsibility::run_demo(&mut io::stdout().lock()))
}
