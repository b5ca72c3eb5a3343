use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("An alert manager needs a message sender, but none was configured")]
    MissingSender,

    #[error("Unknown message channel '{0}' (expected 'email' or 'sms')")]
    UnknownChannel(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid demo config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl DemoError {
    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
