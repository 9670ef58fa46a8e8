//! Course file decoder
//!
//! Reads the binary level data of a course area: the block directory, the
//! per-block records it points at, and the background object layers.

pub mod archive;
pub mod codec;
pub mod course;
pub mod error;
pub mod game;

pub use error::{Error, Result};
pub use archive::{DirectoryArchive, MemoryArchive, StreamProvider, ZipStreams};
pub use codec::{to20, ByteCursor, CoordScale, Position, Rect};
pub use course::{
    BgdatObject, CourseDecoder, CourseFile, DecoderConfig, Entrance, Location, Path, ProgressPath,
    Sprite, Tileset, TilesetResolver, TilesetSlot, Zone, ZoneStride,
};
pub use game::Game;
