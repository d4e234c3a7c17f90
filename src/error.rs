use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("failed to write greeting: {0}")]
    Write(#[from] io::Error),

    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid greeter config: {0}")]
    ParseConfig(#[from] toml::de::Error),
}

impl GreetError {
    pub fn read_config(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }
}
