use serde::Serialize;

/// Converts a raw stored grid value into internal coordinate units.
pub type CoordScale = fn(u16) -> i32;

/// Raw course coordinates use 16 units per tile.
pub const GRID_UNITS_PER_TILE: i32 = 16;

/// The editor works with 20 units per tile.
pub const INTERNAL_UNITS_PER_TILE: i32 = 20;

/// Default [`CoordScale`]: 16-unit grid to 20-unit internal space, truncating.
pub fn to20(raw: u16) -> i32 {
    raw as i32 * INTERNAL_UNITS_PER_TILE / GRID_UNITS_PER_TILE
}

/// Position in internal coordinate units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn scaled(x: u16, y: u16, scale: CoordScale) -> Self {
        Self { x: scale(x), y: scale(y) }
    }
}

/// Axis-aligned rectangle in internal coordinate units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

}
