//! Shared `main` for the demo binaries.

use crate::config::DemoConfig;
use crate::error::Result;
use crate::logging;
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Initializes logging, loads the optional config path given as the first
/// argument, and runs `demo`. Errors are printed to stderr.
pub fn run<F>(demo: F) -> ExitCode
where
    F: FnOnce(&DemoConfig) -> Result<()>,
{
    logging::init();

    let config_path = env::args_os().nth(1).map(PathBuf::from);
    match run_with_config(config_path.as_deref(), demo) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

pub fn run_with_config<F>(config_path: Option<&Path>, demo: F) -> Result<()>
where
    F: FnOnce(&DemoConfig) -> Result<()>,
{
    let config = DemoConfig::load_or_default(config_path)?;
    demo(&config)
}
