//! The 17-entry block table at the start of a course header stream.

use serde::Serialize;
use tracing::trace;

use crate::codec::ByteCursor;
use crate::error::{Error, Result};

pub const BLOCK_COUNT: usize = 17;

/// Bytes taken by the directory itself.
pub const DIRECTORY_SIZE: usize = BLOCK_COUNT * 8;

/// Indices of the blocks this crate decodes. The others are carried in the
/// directory but never read.
pub mod block {
    pub const TILESETS: usize = 0;
    pub const AREA_SETTINGS: usize = 1;
    pub const ZONE_BOUNDS: usize = 2;
    pub const BACKGROUND: usize = 4;
    pub const ENTRANCES: usize = 6;
    pub const SPRITES: usize = 7;
    pub const ZONES: usize = 9;
    pub const LOCATIONS: usize = 10;
    pub const PATHS: usize = 13;
    pub const PATH_NODES: usize = 14;
    pub const PROGRESS_PATHS: usize = 15;
    pub const PROGRESS_PATH_NODES: usize = 16;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BlockEntry {
    pub offset: u32,
    pub size: u32,
}

impl BlockEntry {
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn offset(&self) -> usize {
        self.offset as usize
    }

    /// Number of whole `stride`-byte records the block declares.
    pub fn record_count(&self, stride: usize) -> usize {
        self.size as usize / stride
    }

    /// Absolute offset of record `index`, `offset + index * stride`.
    pub fn record_offset(&self, index: usize, stride: usize) -> Result<usize> {
        table_offset(self.offset(), index, stride)
    }
}

/// `base + index * stride`, failing as an out-of-range read when the
/// address does not fit in `usize`.
pub(crate) fn table_offset(base: usize, index: usize, stride: usize) -> Result<usize> {
    index
        .checked_mul(stride)
        .and_then(|rel| rel.checked_add(base))
        .ok_or(Error::TruncatedRead { offset: base, need: stride, size: 0 })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockDirectory {
    entries: [BlockEntry; BLOCK_COUNT],
}

impl BlockDirectory {
    /// Read all 17 `(offset, size)` pairs from the start of the stream.
    /// Offsets are not validated here; each block decoder fails on its own
    /// if it seeks out of range.
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.seek(0)?;
        let mut entries = [BlockEntry::default(); BLOCK_COUNT];
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.offset = cursor.read_u32_le()?;
            entry.size = cursor.read_u32_le()?;
            trace!(index, offset = entry.offset, size = entry.size, "block entry");
        }
        Ok(Self { entries })
    }

    pub fn entry(&self, index: usize) -> BlockEntry {
        self.entries[index]
    }

}
