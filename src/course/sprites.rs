//! Sprites (block 7): a record stream ended by an `0xFFFF` type id.

use std::collections::HashMap;

use serde::Serialize;

use crate::codec::{ByteCursor, CoordScale, Position, Rect, INTERNAL_UNITS_PER_TILE};
use crate::course::directory::BlockEntry;
use crate::error::Result;

pub const STREAM_END: u16 = 0xFFFF;

/// Footprint of a sprite type relative to the sprite's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpriteBounds {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
}

impl SpriteBounds {
    pub const TILE: Self = Self {
        offset_x: 0,
        offset_y: 0,
        width: INTERNAL_UNITS_PER_TILE,
        height: INTERNAL_UNITS_PER_TILE,
    };
}

impl Default for SpriteBounds {
    fn default() -> Self {
        Self::TILE
    }
}

/// Size lookup by sprite type id.
pub trait SpriteSizeTable {
    fn bounds(&self, sprite_id: u16) -> SpriteBounds;
}

/// Every sprite type occupies one tile.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSpriteSizes;

impl SpriteSizeTable for UniformSpriteSizes {
    fn bounds(&self, _sprite_id: u16) -> SpriteBounds {
        SpriteBounds::TILE
    }
}

/// Explicit per-type sizes with a fallback for unlisted types.
#[derive(Debug, Clone, Default)]
pub struct SpriteSizeMap {
    sizes: HashMap<u16, SpriteBounds>,
    fallback: SpriteBounds,
}

impl SpriteSizeMap {
    pub fn new(fallback: SpriteBounds) -> Self {
        Self { sizes: HashMap::new(), fallback }
    }

    pub fn insert(&mut self, sprite_id: u16, bounds: SpriteBounds) {
        self.sizes.insert(sprite_id, bounds);
    }

    pub fn with(mut self, sprite_id: u16, bounds: SpriteBounds) -> Self {
        self.insert(sprite_id, bounds);
        self
    }
}

impl SpriteSizeTable for SpriteSizeMap {
    fn bounds(&self, sprite_id: u16) -> SpriteBounds {
        self.sizes.get(&sprite_id).copied().unwrap_or(self.fallback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprite {
    pub id: u16,
    pub position: Position,
    pub settings: [u8; 8],
    /// Absolute footprint derived from the type's [`SpriteBounds`].
    pub rect: Rect,
}

impl Sprite {
    pub const SIZE: usize = 24;

    fn with_bounds(id: u16, position: Position, settings: [u8; 8], bounds: SpriteBounds) -> Self {
        let rect = Rect::new(
            position.x + bounds.offset_x,
            position.y + bounds.offset_y,
            bounds.width,
            bounds.height,
        );
        Self { id, position, settings, rect }
    }
}

/// Lazy walk over a sprite block.
///
/// Yields one sprite per record until the terminating id, then stops for
/// good. A read error is yielded once and also ends the stream.
pub struct SpriteStream<'c, 'a> {
    cursor: &'c mut ByteCursor<'a>,
    scale: CoordScale,
    sizes: &'c dyn SpriteSizeTable,
    done: bool,
}

impl<'c, 'a> SpriteStream<'c, 'a> {
    /// A block with size 0 yields no sprites and the cursor is not moved.
    pub fn new(
        cursor: &'c mut ByteCursor<'a>,
        entry: BlockEntry,
        scale: CoordScale,
        sizes: &'c dyn SpriteSizeTable,
    ) -> Result<Self> {
        let done = entry.is_empty();
        if !done {
            cursor.seek(entry.offset())?;
        }
        Ok(Self { cursor, scale, sizes, done })
    }

    fn read_next(&mut self) -> Result<Option<Sprite>> {
        let id = self.cursor.read_u16_le()?;
        if id == STREAM_END {
            return Ok(None);
        }
        let x = self.cursor.read_u16_le()?;
        let y = self.cursor.read_u16_le()?;
        let mut settings = [0u8; 8];
        settings.copy_from_slice(self.cursor.read_bytes(8)?);
        self.cursor.skip(10)?; // unused sprite data + zone
        let position = Position::scaled(x, y, self.scale);
        Ok(Some(Sprite::with_bounds(id, position, settings, self.sizes.bounds(id))))
    }
}

impl Iterator for SpriteStream<'_, '_> {
    type Item = Result<Sprite>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_next() {
            Ok(Some(sprite)) => Some(Ok(sprite)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

pub fn read_sprites(
    cursor: &mut ByteCursor,
    entry: BlockEntry,
    scale: CoordScale,
    sizes: &dyn SpriteSizeTable,
) -> Result<Vec<Sprite>> {
    SpriteStream::new(cursor, entry, scale, sizes)?.collect()
}
