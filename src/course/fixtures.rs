//! Synthetic course streams for tests.

use crate::codec::BinaryWriter;
use crate::course::directory::{BLOCK_COUNT, DIRECTORY_SIZE};

/// Lays blocks out back to back after the directory, in the order they were
/// added. Blocks never added keep a `(0, 0)` entry.
#[derive(Debug, Default)]
pub struct CourseBuilder {
    blocks: Vec<(usize, Vec<u8>)>,
    declared_sizes: Vec<(usize, u32)>,
}

impl CourseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(mut self, index: usize, bytes: Vec<u8>) -> Self {
        self.blocks.push((index, bytes));
        self
    }

    /// Override the size written to the directory for `index`.
    pub fn declared_size(mut self, index: usize, size: u32) -> Self {
        self.declared_sizes.push((index, size));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        writer.write_zeros(DIRECTORY_SIZE);
        for (index, bytes) in &self.blocks {
            assert!(*index < BLOCK_COUNT);
            let offset = writer.len() as u32;
            writer.patch_u32_le(index * 8, offset);
            writer.patch_u32_le(index * 8 + 4, bytes.len() as u32);
            writer.write_bytes(bytes);
        }
        for (index, size) in &self.declared_sizes {
            writer.patch_u32_le(index * 8 + 4, *size);
        }
        writer.into_vec()
    }
}

pub fn tileset_names(names: [&str; 4]) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    for name in names {
        writer.write_fixed_ascii(name, 32);
    }
    writer.into_vec()
}

pub fn area_settings(time_limit: u16) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.write_bytes(&[0xEE; 10]);
    writer.write_u16_le(time_limit);
    writer.write_zeros(8);
    writer.into_vec()
}

pub fn entrance(x: u16, y: u16, unk1: u16, unk2: u16, params: [u8; 4]) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.write_u16_le(x);
    writer.write_u16_le(y);
    writer.write_u16_le(unk1);
    writer.write_u16_le(unk2);
    writer.write_bytes(&params);
    writer.write_bytes(&[0x5A; 12]);
    writer.into_vec()
}

pub fn sprite(id: u16, x: u16, y: u16, settings: [u8; 8]) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.write_u16_le(id);
    writer.write_u16_le(x);
    writer.write_u16_le(y);
    writer.write_bytes(&settings);
    writer.write_zeros(10);
    writer.into_vec()
}

pub fn sentinel() -> Vec<u8> {
    vec![0xFF, 0xFF]
}

/// `x, y, width, height` followed by `trailing` filler bytes.
pub fn rect_record(rect: [u16; 4], trailing: usize) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    for v in rect {
        writer.write_u16_le(v);
    }
    writer.write_bytes(&vec![0x77; trailing]);
    writer.into_vec()
}

pub fn location(rect: [u16; 4], id: u8) -> Vec<u8> {
    let mut record = rect_record(rect, 0);
    record.push(id);
    record.extend_from_slice(&[0x33; 3]);
    record
}

pub fn path(id: u8, node_count: u16, node_offset: u16) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.write_u8(id);
    writer.write_u8(0);
    writer.write_u16_le(node_count);
    writer.write_u16_le(node_offset);
    writer.write_zeros(6);
    writer.into_vec()
}

pub fn path_node(x: u16, y: u16, unk1: u32, unk2: u32) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.write_u16_le(x);
    writer.write_u16_le(y);
    writer.write_u32_le(unk1);
    writer.write_u32_le(unk2);
    writer.write_zeros(8);
    writer.into_vec()
}

pub fn progress_path(id: u16, node_count: u16, node_offset: u16) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.write_u16_le(id);
    writer.write_u16_le(node_count);
    writer.write_u16_le(node_offset);
    writer.write_zeros(6);
    writer.into_vec()
}

pub fn progress_path_node(x: u16, y: u16) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.write_u16_le(x);
    writer.write_u16_le(y);
    writer.write_zeros(16);
    writer.into_vec()
}

pub fn bgdat_object(id: u16, x: u16, y: u16, width: u16, height: u16) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    for v in [id, x, y, width, height] {
        writer.write_u16_le(v);
    }
    writer.write_zeros(6);
    writer.into_vec()
}
