use std::io::{Cursor, Read};
use std::sync::Arc;

use zip::result::ZipError;
use zip::ZipArchive;

use super::{normalize, StreamProvider};
use crate::error::{Error, Result};

/// Streams stored as entries of a `.zip` container.
#[derive(Clone)]
pub struct ZipStreams {
    archive: ZipArchive<Cursor<Arc<[u8]>>>,
}

impl ZipStreams {
    pub fn new(data: impl Into<Arc<[u8]>>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data.into()))
            .map_err(|e| Error::Archive(format!("ZIP error: {}", e)))?;
        Ok(Self { archive })
    }

    pub fn open_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::new(std::fs::read(path)?)
    }

    /// Number of entries in the container.
    pub fn len(&self) -> usize {
        self.archive.len()
    }
}

impl StreamProvider for ZipStreams {
    fn exists(&self, path: &str) -> bool {
        let name = normalize(path);
        self.archive.file_names().any(|n| n == name)
    }

    fn open(&self, path: &str) -> Result<Vec<u8>> {
        // Entry readers need `&mut`; the clone shares the underlying buffer.
        let mut archive = self.archive.clone();
        let mut file = archive.by_name(normalize(path)).map_err(|e| match e {
            ZipError::FileNotFound => Error::StreamNotFound { path: path.to_string() },
            e => Error::Archive(format!("ZIP error: {}", e)),
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }
}
