//! Error handling for new-puzzle.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scaffolding a puzzle day.
#[derive(Error, Debug)]
pub enum Error {
    /// The required DAY argument was not given
    #[error("missing argument DAY")]
    MissingDay,

    /// The DAY argument could not be parsed as an integer
    #[error("invalid argument DAY")]
    InvalidDay(String),

    /// The project configuration file could not be parsed
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Writing or touching a generated file failed
    #[error("failed to write '{}': {source}.", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other file system failure
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
