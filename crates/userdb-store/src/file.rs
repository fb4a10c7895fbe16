use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How [`StoreFile::replace`] puts new contents on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Seek to the start, truncate and write through the open handle.
    #[default]
    InPlace,
    /// Write a temp file in the same directory and rename it over the store.
    Atomic,
}

/// An open store file. The handle is released when this is dropped.
pub struct StoreFile {
    path: PathBuf,
    file: File,
    mode: WriteMode,
}

fn open_read_write(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl StoreFile {
    /// Opens the store for reading and writing, creating it if absent.
    pub fn open(path: impl AsRef<Path>, mode: WriteMode) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let file = open_read_write(&path)?;
        debug!("Opened store file {} ({:?})", path.display(), mode);
        Ok(Self { path, file, mode })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file. Zero bytes or a bare `null` is an empty collection.
    pub fn load<T>(&mut self) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        self.file.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        self.file.read_to_end(&mut data)?;
        debug!("Read {} bytes from {}", data.len(), self.path.display());

        if data.is_empty() {
            return Ok(Vec::new());
        }

        let records: Option<Vec<T>> = serde_json::from_slice(&data)?;
        Ok(records.unwrap_or_default())
    }

    /// Replaces the file contents wholesale with `data`.
    pub fn replace(&mut self, data: &[u8]) -> Result<(), StoreError> {
        match self.mode {
            WriteMode::InPlace => {
                self.file.seek(SeekFrom::Start(0))?;
                self.file.set_len(0)?;
                self.file.write_all(data)?;
                self.file.flush()?;
            }
            WriteMode::Atomic => {
                // The temp file is deleted on drop if anything below fails.
                let mut temp = NamedTempFile::new_in(parent_dir(&self.path))?;
                temp.as_file()
                    .set_permissions(self.file.metadata()?.permissions())?;
                temp.write_all(data)?;
                temp.as_file().sync_all()?;
                temp.persist(&self.path).map_err(|e| e.error)?;
                self.file = open_read_write(&self.path)?;
            }
        }
        debug!("Wrote {} bytes to {}", data.len(), self.path.display());
        Ok(())
    }
}
