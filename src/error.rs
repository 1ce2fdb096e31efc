//! Error types for the generation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while materializing or streaming a generated project.
///
/// Rendering itself is infallible; everything here is filesystem or
/// archive-stream I/O.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The staging root could not be created.
    #[error("failed to create staging directory {path}")]
    StagingCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single generated file (or its parent directory) could not be written.
    /// These are collected per file; one failure does not abort the request.
    #[error("failed to write {path}")]
    StagingWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The staging tree could not be enumerated for archiving.
    #[error("failed to walk staging tree at {path}")]
    StagingWalk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive writer failed mid-stream (typically a client disconnect).
    #[error("archive streaming failed")]
    Archive(#[from] async_zip::error::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
