//! Paths (blocks 13/14) and progress paths (blocks 15/16).
//!
//! Both path tables are addressed per index, and every node is addressed
//! absolutely in its node table:
//! `node_table + (node_offset + i) * NODE_SIZE`.

use serde::Serialize;
use tracing::debug;

use crate::codec::{ByteCursor, CoordScale, Position};
use crate::course::directory::{table_offset, BlockEntry};
use crate::error::Result;

pub const PATH_SIZE: usize = 12;
pub const NODE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathNode {
    pub position: Position,
    pub unk1: u32,
    pub unk2: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub id: u8,
    pub node_offset: u16,
    pub nodes: Vec<PathNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressPathNode {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressPath {
    pub id: u16,
    pub node_offset: u16,
    pub nodes: Vec<ProgressPathNode>,
}

fn seek_node(cursor: &mut ByteCursor, node_table: BlockEntry, node_offset: u16, index: usize) -> Result<()> {
    cursor.seek(table_offset(node_table.offset(), index + node_offset as usize, NODE_SIZE)?)
}

pub fn read_paths(
    cursor: &mut ByteCursor,
    paths: BlockEntry,
    nodes: BlockEntry,
    scale: CoordScale,
) -> Result<Vec<Path>> {
    let count = paths.record_count(PATH_SIZE);
    let mut out = Vec::new();
    for p in 0..count {
        cursor.seek(paths.record_offset(p, PATH_SIZE)?)?;
        let id = cursor.read_u8()?;
        cursor.skip(1)?;
        let node_count = cursor.read_u16_le()?;
        let node_offset = cursor.read_u16_le()?;
        debug!(id, node_count, node_offset, "path");

        let mut path_nodes = Vec::new();
        for i in 0..node_count as usize {
            seek_node(cursor, nodes, node_offset, i)?;
            let x = cursor.read_u16_le()?;
            let y = cursor.read_u16_le()?;
            path_nodes.push(PathNode {
                position: Position::scaled(x, y, scale),
                unk1: cursor.read_u32_le()?,
                unk2: cursor.read_u32_le()?,
            });
        }
        out.push(Path { id, node_offset, nodes: path_nodes });
    }
    Ok(out)
}

pub fn read_progress_paths(
    cursor: &mut ByteCursor,
    paths: BlockEntry,
    nodes: BlockEntry,
    scale: CoordScale,
) -> Result<Vec<ProgressPath>> {
    let count = paths.record_count(PATH_SIZE);
    let mut out = Vec::new();
    for p in 0..count {
        cursor.seek(paths.record_offset(p, PATH_SIZE)?)?;
        let id = cursor.read_u16_le()?;
        let node_count = cursor.read_u16_le()?;
        let node_offset = cursor.read_u16_le()?;
        debug!(id, node_count, node_offset, "progress path");

        let mut path_nodes = Vec::new();
        for i in 0..node_count as usize {
            seek_node(cursor, nodes, node_offset, i)?;
            let x = cursor.read_u16_le()?;
            let y = cursor.read_u16_le()?;
            path_nodes.push(ProgressPathNode { position: Position::scaled(x, y, scale) });
        }
        out.push(ProgressPath { id, node_offset, nodes: path_nodes });
    }
    Ok(out)
}
