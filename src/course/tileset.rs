//! Tileset slots (block 0).

use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::ByteCursor;
use crate::course::directory::BlockEntry;
use crate::error::{Error, Result};

pub const TILESET_SLOTS: usize = 4;
pub const TILESET_NAME_LEN: usize = 32;

/// Handle to a tileset that was found by a [`TilesetResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tileset {
    pub name: String,
    /// Location of the tileset archive as reported by the resolver.
    pub path: String,
}

/// Looks up tilesets by the name stored in a course.
pub trait TilesetResolver {
    fn resolve_tileset(&self, name: &str) -> Result<Tileset>;
}

/// Resolver that never finds anything. Every named slot decodes as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTilesets;

impl TilesetResolver for NoTilesets {
    fn resolve_tileset(&self, name: &str) -> Result<Tileset> {
        Err(Error::TilesetNotFound { name: name.to_string() })
    }
}

/// One of the four tileset positions of a course area.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TilesetSlot {
    /// Name stored in the course, `None` when the field is blank.
    pub name: Option<String>,
    pub tileset: Option<Tileset>,
}

impl TilesetSlot {
    /// Named in the course but not found by the resolver.
    pub fn is_unresolved(&self) -> bool {
        self.name.is_some() && self.tileset.is_none()
    }
}

/// Read the four slot names and resolve each one.
///
/// A resolver failure only empties that slot; it never fails the decode.
/// Out-of-range reads of the name table still do.
pub fn read_tileset_slots(
    cursor: &mut ByteCursor,
    entry: BlockEntry,
    resolver: &dyn TilesetResolver,
) -> Result<[TilesetSlot; TILESET_SLOTS]> {
    let mut slots: [TilesetSlot; TILESET_SLOTS] = Default::default();
    if entry.is_empty() {
        return Ok(slots);
    }

    for (index, slot) in slots.iter_mut().enumerate() {
        cursor.seek(entry.record_offset(index, TILESET_NAME_LEN)?)?;
        let name = cursor.read_fixed_ascii(TILESET_NAME_LEN)?;
        if name.is_empty() {
            continue;
        }

        slot.tileset = match resolver.resolve_tileset(&name) {
            Ok(tileset) => {
                debug!(slot = index, %name, "tileset resolved");
                Some(tileset)
            }
            Err(e) => {
                warn!(slot = index, %name, error = %e, "tileset not found");
                None
            }
        };
        slot.name = Some(name);
    }

    Ok(slots)
}
