//! Game data root: resolves tileset names against the `/Unit` directory.

use crate::archive::{DirectoryArchive, StreamProvider};
use crate::course::{Tileset, TilesetResolver};
use crate::error::{Error, Result};

pub const TILESET_DIR: &str = "/Unit/";
pub const ARCHIVE_EXT: &str = ".sarc";

pub struct Game<P: StreamProvider = DirectoryArchive> {
    fs: P,
}

impl Game<DirectoryArchive> {
    /// Game data unpacked on disk at `path`.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DirectoryArchive::new(path))
    }
}

impl<P: StreamProvider> Game<P> {
    pub fn new(fs: P) -> Self {
        Self { fs }
    }

    /// `/Unit/NAME.sarc`; the extension is not doubled if `name` has it.
    pub fn tileset_path(name: &str) -> String {
        let mut path = format!("{TILESET_DIR}{name}");
        if !path.ends_with(ARCHIVE_EXT) {
            path.push_str(ARCHIVE_EXT);
        }
        path
    }
}

impl<P: StreamProvider> TilesetResolver for Game<P> {
    fn resolve_tileset(&self, name: &str) -> Result<Tileset> {
        let path = Self::tileset_path(name);
        if !self.fs.exists(&path) {
            return Err(Error::TilesetNotFound { name: name.to_string() });
        }
        Ok(Tileset { name: name.to_string(), path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::MemoryArchive;

    #[test]
    fn test_tileset_path() {
        assert_eq!(Game::<MemoryArchive>::tileset_path("Pa0_jyotyu"), "/Unit/Pa0_jyotyu.sarc");
        assert_eq!(Game::<MemoryArchive>::tileset_path("Pa0_jyotyu.sarc"), "/Unit/Pa0_jyotyu.sarc");
    }

    #[test]
    fn test_resolve_tileset() {
        let game = Game::new(MemoryArchive::new().with("/Unit/Pa0_jyotyu.sarc", vec![0]));

        let tileset = game.resolve_tileset("Pa0_jyotyu").unwrap();
        assert_eq!(tileset.name, "Pa0_jyotyu");
        assert_eq!(tileset.path, "/Unit/Pa0_jyotyu.sarc");

        assert!(matches!(
            game.resolve_tileset("Pa1_gone"),
            Err(Error::TilesetNotFound { name }) if name == "Pa1_gone"
        ));
    }
}
