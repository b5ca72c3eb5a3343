use solid_patterns::{runner, open_closed};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    runner::run(|_| open_closed::run_demo(&mut io::stdout().lock()))
}
