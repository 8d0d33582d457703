use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Framework;

/// The kinds of errors that can occur during operations.
#[derive(Debug, Error)]
pub enum SetupError {
  // I/O errors
  #[error("Could not create the dir `{path:?}`: {source}")]
  DirCreation { path: PathBuf, source: io::Error },

  #[error("Failed to create or write to the file `{path:?}`: {source}")]
  WriteError { path: PathBuf, source: io::Error },

  #[error("Could not read the contents of `{path:?}`: {source}")]
  ReadError { path: PathBuf, source: io::Error },

  #[error("Could not copy `{from:?}` to `{to:?}`: {source}")]
  CopyError {
    from: PathBuf,
    to: PathBuf,
    source: io::Error,
  },

  // Guard violations
  #[error("Cannot install inside {0}.")]
  SelfInstall(String),

  // Serde errors
  #[error("Error while serializing the content for `{file:?}`: {error}")]
  SerializationError { file: PathBuf, error: String },

  #[error("Error while deserializing the contents of `{file:?}`: {error}")]
  DeserializationError { file: PathBuf, error: String },

  #[error("The {framework} build failed: {source}")]
  BuildFailed {
    framework: Framework,
    source: Box<SetupError>,
  },

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}
