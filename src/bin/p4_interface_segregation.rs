use solid_patterns::{runner, interface_segregation};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    runner::run(|_| interface_segregation::run_demo(&mut io::stdout().lock()))
}
