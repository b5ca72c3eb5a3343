use solid_patterns::{runner, liskov_substitution};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    runner::run(|_| liskov_substitution::run_demo(&mut io::stdout().lock()))
}
