// error.rs - Configuration errors

use std::io;
use std::path::PathBuf;

use sparse_life::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--delay-ms must be greater than zero")]
    ZeroDelay,

    #[error("viewport must be at least 1x1, got {width}x{height}")]
    ZeroViewport { width: u16, height: u16 },

    #[error("--workers must be at least 1")]
    ZeroWorkers,

    #[error("unknown pattern {name:?} (try --list-patterns)")]
    UnknownPattern { name: String },

    #[error("failed to read pattern file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid pattern file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
