//! File-backed [`StorageAdapter`] for the rideboard store.
//!
//! Each storage slot maps to one JSON file under a directory
//! (`<dir>/transport_rides.json` and friends) — the durable key-value
//! analogue of the browser storage the original deployment used. Writes are
//! whole-file replacements, matching the store's full-snapshot persistence.

use std::{
  fs, io,
  path::{Path, PathBuf},
};

use rideboard_core::{Slot, StorageAdapter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("storage directory {path}: {source}")]
  CreateDir {
    path:   PathBuf,
    source: io::Error,
  },

  #[error("reading {path}: {source}")]
  Read {
    path:   PathBuf,
    source: io::Error,
  },

  #[error("writing {path}: {source}")]
  Write {
    path:   PathBuf,
    source: io::Error,
  },

  #[error("removing {path}: {source}")]
  Remove {
    path:   PathBuf,
    source: io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A [`StorageAdapter`] that keeps one JSON file per slot under `dir`.
#[derive(Debug)]
pub struct FsAdapter {
  dir: PathBuf,
}

impl FsAdapter {
  /// Open an adapter rooted at `dir`, creating the directory if needed.
  pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
    let dir = dir.into();
    fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
      path: dir.clone(),
      source,
    })?;
    tracing::debug!(dir = %dir.display(), "opened file-backed storage");
    Ok(Self { dir })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn slot_path(&self, slot: Slot) -> PathBuf {
    self.dir.join(format!("{}.json", slot.key()))
  }
}

impl StorageAdapter for FsAdapter {
  type Error = Error;

  fn read(&self, slot: Slot) -> Result<Option<String>> {
    let path = self.slot_path(slot);
    match fs::read_to_string(&path) {
      Ok(payload) => Ok(Some(payload)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(source) => Err(Error::Read { path, source }),
    }
  }

  fn write(&mut self, slot: Slot, payload: &str) -> Result<()> {
    let path = self.slot_path(slot);
    fs::write(&path, payload).map_err(|source| Error::Write { path, source })
  }

  fn remove(&mut self, slot: Slot) -> Result<()> {
    let path = self.slot_path(slot);
    match fs::remove_file(&path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(source) => Err(Error::Remove { path, source }),
    }
  }
}
