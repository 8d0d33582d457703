use std::{
  fs::{copy, create_dir_all, read_to_string, File},
  io::Write,
  path::Path,
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use walkdir::WalkDir;

use crate::SetupError;

/// The line terminator appended to every rewritten JSON document.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

pub fn deserialize_json<T: DeserializeOwned>(path: &Path) -> Result<T, SetupError> {
  let file = File::open(path).map_err(|e| SetupError::ReadError {
    path: path.to_path_buf(),
    source: e,
  })?;

  serde_json::from_reader(file).map_err(|e| SetupError::DeserializationError {
    file: path.to_path_buf(),
    error: e.to_string(),
  })
}

/// Writes `item` as tab-indented JSON with a trailing line terminator, the
/// way npm tooling conventionally formats the files it touches.
pub fn serialize_json<T: Serialize>(item: &T, path: &Path) -> Result<(), SetupError> {
  let mut buffer = Vec::new();
  let formatter = PrettyFormatter::with_indent(b"\t");
  let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

  item
    .serialize(&mut serializer)
    .map_err(|e| SetupError::SerializationError {
      file: path.to_path_buf(),
      error: e.to_string(),
    })?;

  buffer.extend_from_slice(LINE_ENDING.as_bytes());

  write_bytes(path, &buffer)
}

pub fn read_file(path: &Path) -> Result<String, SetupError> {
  read_to_string(path).map_err(|e| SetupError::ReadError {
    path: path.to_path_buf(),
    source: e,
  })
}

pub fn write_file(path: &Path, content: &str) -> Result<(), SetupError> {
  write_bytes(path, content.as_bytes())
}

fn write_bytes(path: &Path, content: &[u8]) -> Result<(), SetupError> {
  let mut file = File::create(path).map_err(|e| SetupError::WriteError {
    path: path.to_path_buf(),
    source: e,
  })?;

  file
    .write_all(content)
    .map_err(|e| SetupError::WriteError {
      path: path.to_path_buf(),
      source: e,
    })
}

/// Copies a single file, overwriting the destination if it exists.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), SetupError> {
  copy(from, to)
    .map(|_| ())
    .map_err(|e| SetupError::CopyError {
      from: from.to_path_buf(),
      to: to.to_path_buf(),
      source: e,
    })
}

/// Recursively copies the contents of `from` into `to`, creating directories
/// as needed and overwriting existing files.
pub fn copy_dir_recursive(from: &Path, to: &Path) -> Result<(), SetupError> {
  for entry in WalkDir::new(from) {
    let entry = entry.map_err(|e| SetupError::CopyError {
      from: from.to_path_buf(),
      to: to.to_path_buf(),
      source: e.into(),
    })?;

    let relative = entry
      .path()
      .strip_prefix(from)
      .expect("walkdir yields paths under its root");
    let dest = to.join(relative);

    if entry.file_type().is_dir() {
      create_all_dirs(&dest)?;
    } else {
      copy_file(entry.path(), &dest)?;
    }
  }

  Ok(())
}

pub fn create_all_dirs(path: &Path) -> Result<(), SetupError> {
  create_dir_all(path).map_err(|e| SetupError::DirCreation {
    path: path.to_path_buf(),
    source: e,
  })
}
