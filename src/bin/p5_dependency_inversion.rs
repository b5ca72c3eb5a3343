use solid_patterns::{dependency_inversion, runner};
use std::process::ExitCode;

fn main() -> ExitCode {
    runner::run(|config| dependency_inversion::run_demo(&config.alerts))
}
