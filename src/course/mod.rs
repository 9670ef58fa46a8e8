pub mod bgdat;
pub mod blocks;
pub mod directory;
pub mod file;
pub mod paths;
pub mod sprites;
pub mod tileset;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bgdat::{read_bgdat, BgdatObject, BgdatStream};
pub use blocks::{AreaSettings, Background, Entrance, Location, Zone, ZoneBounds, ZoneStride};
pub use directory::{BlockDirectory, BlockEntry};
pub use file::{bgdat_path, header_path, CourseDecoder, CourseFile, DecoderConfig};
pub use paths::{Path, PathNode, ProgressPath, ProgressPathNode};
pub use sprites::{Sprite, SpriteBounds, SpriteSizeMap, SpriteSizeTable, SpriteStream, UniformSpriteSizes};
pub use tileset::{NoTilesets, Tileset, TilesetResolver, TilesetSlot};
