//! Named byte streams.
//!
//! Course data lives in container files the decoder never parses itself; it
//! only asks a [`StreamProvider`] whether a path exists and for its bytes.

mod zip_archive;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub use self::zip_archive::ZipStreams;

pub trait StreamProvider {
    fn exists(&self, path: &str) -> bool;

    /// Full contents of the stream at `path`.
    fn open(&self, path: &str) -> Result<Vec<u8>>;
}

/// Paths are archive-absolute; the leading `/` carries no meaning.
pub(crate) fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Streams held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, data: Vec<u8>) {
        self.files.insert(normalize(path).to_string(), data);
    }

    pub fn with(mut self, path: &str, data: Vec<u8>) -> Self {
        self.insert(path, data);
        self
    }
}

impl StreamProvider for MemoryArchive {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(normalize(path))
    }

    fn open(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .get(normalize(path))
            .cloned()
            .ok_or_else(|| Error::StreamNotFound { path: path.to_string() })
    }
}

/// Streams stored as files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryArchive {
    root: PathBuf,
}

impl DirectoryArchive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(normalize(path))
    }
}

impl StreamProvider for DirectoryArchive {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn open(&self, path: &str) -> Result<Vec<u8>> {
        std::fs::read(self.resolve(path)).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::StreamNotFound { path: path.to_string() },
            _ => Error::Io(format!("{}: {}", path, e)),
        })
    }
}
