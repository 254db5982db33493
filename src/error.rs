//! Error definitions for module file generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main `Result` type of the library.
pub type ModfileResult<T> = Result<T, ModfileError>;

/// All errors that can occur while building or writing a module file.
#[derive(Error, Debug)]
pub enum ModfileError {
    #[error("Module name must not be empty")]
    EmptyModuleName,

    #[error("Destination directory must not be empty")]
    EmptyDestination,

    #[error("Missing required argument: --{0}")]
    MissingArgument(&'static str),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write module file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Descriptor file ===
    #[error("Failed to read descriptor file {}: {source}", .path.display())]
    ReadDescriptor {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid descriptor file {}: {message}", .path.display())]
    ParseDescriptor { path: PathBuf, message: String },
}
