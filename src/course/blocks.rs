//! Fixed-layout blocks: area settings, zone bounds, background, entrances,
//! zones and locations.

use serde::Serialize;
use tracing::debug;

use crate::codec::{ByteCursor, CoordScale, Position, Rect};
use crate::course::directory::BlockEntry;
use crate::error::Result;

/// Block 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaSettings {
    pub time_limit: u16,
}

impl AreaSettings {
    pub fn read(cursor: &mut ByteCursor, entry: BlockEntry) -> Result<Option<Self>> {
        if entry.is_empty() {
            return Ok(None);
        }
        cursor.seek(entry.offset())?;
        cursor.skip(10)?; // 8 zero bytes + unknown u16
        let time_limit = cursor.read_u16_le()?;
        debug!(time_limit, "area settings");
        Ok(Some(Self { time_limit }))
    }
}

/// Block 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneBounds {
    pub upper: i32,
    pub lower: i32,
    pub unk_upper: i32,
    pub unk_lower: i32,
    pub bounding_id: u16,
    pub unk1: u16,
}

impl ZoneBounds {
    pub fn read(cursor: &mut ByteCursor, entry: BlockEntry) -> Result<Option<Self>> {
        if entry.is_empty() {
            return Ok(None);
        }
        cursor.seek(entry.offset())?;
        let bounds = Self {
            upper: cursor.read_u32_le()? as i32,
            lower: cursor.read_u32_le()? as i32,
            unk_upper: cursor.read_u32_le()? as i32,
            unk_lower: cursor.read_u32_le()? as i32,
            bounding_id: cursor.read_u16_le()?,
            unk1: cursor.read_u16_le()?,
        };
        cursor.skip(8)?;
        debug!(?bounds, "zone bounds");
        Ok(Some(bounds))
    }
}

/// Block 4
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Background {
    pub block_id: u16,
    pub x_scroll_rate: u8,
    pub y_scroll_rate: u8,
    pub x_pos: u8,
    pub y_pos: u8,
    pub name: String,
    pub unk1: u16,
}

impl Background {
    pub const NAME_LEN: usize = 16;

    pub fn read(cursor: &mut ByteCursor, entry: BlockEntry) -> Result<Option<Self>> {
        if entry.is_empty() {
            return Ok(None);
        }
        cursor.seek(entry.offset())?;
        let block_id = cursor.read_u16_le()?;
        let x_scroll_rate = cursor.read_u8()?;
        let y_scroll_rate = cursor.read_u8()?;
        let x_pos = cursor.read_u8()?;
        let y_pos = cursor.read_u8()?;
        cursor.skip(2)?;
        let name = cursor.read_fixed_ascii(Self::NAME_LEN)?;
        let unk1 = cursor.read_u16_le()?;
        cursor.skip(2)?;

        let background = Self { block_id, x_scroll_rate, y_scroll_rate, x_pos, y_pos, name, unk1 };
        debug!(?background, "background");
        Ok(Some(background))
    }
}

/// Block 6 record. The trailing 12 bytes (which hold the game's own entrance
/// id) are skipped; `index` stands in for the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entrance {
    pub index: usize,
    pub position: Position,
    pub unk1: u16,
    pub unk2: u16,
    pub params: [u8; 4],
}

impl Entrance {
    pub const SIZE: usize = 24;

    fn read(cursor: &mut ByteCursor, index: usize, scale: CoordScale) -> Result<Self> {
        let x = cursor.read_u16_le()?;
        let y = cursor.read_u16_le()?;
        let entrance = Self {
            index,
            position: Position::scaled(x, y, scale),
            unk1: cursor.read_u16_le()?,
            unk2: cursor.read_u16_le()?,
            params: [cursor.read_u8()?, cursor.read_u8()?, cursor.read_u8()?, cursor.read_u8()?],
        };
        cursor.skip(12)?;
        Ok(entrance)
    }
}

pub fn read_entrances(
    cursor: &mut ByteCursor,
    entry: BlockEntry,
    scale: CoordScale,
) -> Result<Vec<Entrance>> {
    let count = entry.record_count(Entrance::SIZE);
    if count == 0 {
        return Ok(Vec::new());
    }
    cursor.seek(entry.offset())?;
    let mut entrances = Vec::new();
    for index in 0..count {
        let entrance = Entrance::read(cursor, index, scale)?;
        debug!(index, x = entrance.position.x, y = entrance.position.y, "entrance");
        entrances.push(entrance);
    }
    Ok(entrances)
}

/// How zone records are walked.
///
/// Zone blocks are counted in 24-byte units, but the established decoder
/// consumes 28 bytes per record without re-seeking. Which of the two matches
/// retail data is unconfirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneStride {
    /// `size / 24` records, record `i` read at `offset + i * 28`.
    #[default]
    Sequential,
    /// `size / 24` records, record `i` read at `offset + i * 24`.
    Indexed,
}

impl ZoneStride {
    pub const COUNT_DIVISOR: usize = 24;
    pub const SEQUENTIAL_STRIDE: usize = 28;

    fn record_size(self) -> usize {
        match self {
            ZoneStride::Sequential => Self::SEQUENTIAL_STRIDE,
            ZoneStride::Indexed => Self::COUNT_DIVISOR,
        }
    }
}

/// Block 9 record. `id` is the record's position in the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub id: usize,
    pub rect: Rect,
}

pub fn read_zones(
    cursor: &mut ByteCursor,
    entry: BlockEntry,
    scale: CoordScale,
    stride: ZoneStride,
) -> Result<Vec<Zone>> {
    let count = entry.record_count(ZoneStride::COUNT_DIVISOR);
    if count == 0 {
        return Ok(Vec::new());
    }
    let mut zones = Vec::new();
    for id in 0..count {
        // Only the 8 bytes of fields must be in range; the record tail is never read.
        cursor.seek(entry.record_offset(id, stride.record_size())?)?;
        let rect = read_scaled_rect(cursor, scale)?;
        debug!(id, x = rect.x, y = rect.y, width = rect.width, height = rect.height, "zone");
        zones.push(Zone { id, rect });
    }
    Ok(zones)
}

/// Block 10 record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: u8,
    pub rect: Rect,
}

impl Location {
    pub const SIZE: usize = 12;
}

pub fn read_locations(
    cursor: &mut ByteCursor,
    entry: BlockEntry,
    scale: CoordScale,
) -> Result<Vec<Location>> {
    let count = entry.record_count(Location::SIZE);
    if count == 0 {
        return Ok(Vec::new());
    }
    cursor.seek(entry.offset())?;
    let mut locations = Vec::new();
    for _ in 0..count {
        let rect = read_scaled_rect(cursor, scale)?;
        let id = cursor.read_u8()?;
        cursor.skip(3)?;
        debug!(id, x = rect.x, y = rect.y, width = rect.width, height = rect.height, "location");
        locations.push(Location { id, rect });
    }
    Ok(locations)
}

fn read_scaled_rect(cursor: &mut ByteCursor, scale: CoordScale) -> Result<Rect> {
    Ok(Rect {
        x: scale(cursor.read_u16_le()?),
        y: scale(cursor.read_u16_le()?),
        width: scale(cursor.read_u16_le()?),
        height: scale(cursor.read_u16_le()?),
    })
}
