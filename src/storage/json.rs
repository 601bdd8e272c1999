//! Whole-document JSON storage.
//!
//! Used for the input roster, the enriched roster and the output bundle.
//! Each file holds one pretty-printed JSON value and is replaced on write.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{ensure_parent, StorageError};

/// JSON document writer.
pub struct JsonWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Write `value`, replacing the file.
    pub fn write(&self, value: &T) -> Result<(), StorageError> {
        ensure_parent(&self.path)?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writeln!(writer)?;
        writer.flush()?;

        debug!("Wrote JSON document to {:?}", self.path);
        Ok(())
    }
}

/// JSON document reader.
pub struct JsonReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the whole document. A missing file is an error.
    pub fn read(&self) -> Result<T, StorageError> {
        if !self.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }
        if fs::metadata(&self.path)?.is_dir() {
            return Err(StorageError::InvalidPath(format!(
                "{} is a directory",
                self.path.display()
            )));
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let value = serde_json::from_reader(reader)?;
        debug!("Read JSON document from {:?}", self.path);
        Ok(value)
    }
}
