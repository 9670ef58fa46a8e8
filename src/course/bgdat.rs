//! Placed background objects, one stream per layer.

use serde::Serialize;

use crate::codec::ByteCursor;
use crate::error::Result;

pub const OBJECT_END: u16 = 0xFFFF;

/// Stored object coordinates are multiplied by this, independent of the
/// course coordinate transform.
pub const BGDAT_SCALE: i32 = 20;

/// Layer slots in a course. Only the first two are read from streams.
pub const LAYER_COUNT: usize = 3;
pub const STREAM_LAYERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BgdatObject {
    pub id: u16,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BgdatObject {
    pub const SIZE: usize = 16;
}

/// Lazy walk over one layer stream. Ends at the first `0xFFFF` id or when the
/// cursor reaches the end of the stream, whichever comes first.
pub struct BgdatStream<'a> {
    cursor: ByteCursor<'a>,
    done: bool,
}

impl<'a> BgdatStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { cursor: ByteCursor::new(data), done: false }
    }

    fn read_next(&mut self) -> Result<Option<BgdatObject>> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }
        let id = self.cursor.read_u16_le()?;
        if id == OBJECT_END {
            return Ok(None);
        }
        let object = BgdatObject {
            id,
            x: self.cursor.read_u16_le()? as i32 * BGDAT_SCALE,
            y: self.cursor.read_u16_le()? as i32 * BGDAT_SCALE,
            width: self.cursor.read_u16_le()? as i32 * BGDAT_SCALE,
            height: self.cursor.read_u16_le()? as i32 * BGDAT_SCALE,
        };
        self.cursor.skip(6)?;
        Ok(Some(object))
    }
}

impl Iterator for BgdatStream<'_> {
    type Item = Result<BgdatObject>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.read_next().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

pub fn read_bgdat(data: &[u8]) -> Result<Vec<BgdatObject>> {
    BgdatStream::new(data).collect()
}
