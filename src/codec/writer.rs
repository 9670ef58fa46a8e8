//! Little-endian stream assembly for building synthetic course data in tests.

use byteorder::{ByteOrder, LittleEndian};

#[derive(Debug, Default)]
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_zeros(&mut self, n: usize) {
        self.data.resize(self.data.len() + n, 0);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    pub fn write_u16_le(&mut self, v: u16) {
        let at = self.grow(2);
        LittleEndian::write_u16(&mut self.data[at..], v);
    }

    pub fn write_u32_le(&mut self, v: u32) {
        let at = self.grow(4);
        LittleEndian::write_u32(&mut self.data[at..], v);
    }

    /// `s` in an `n`-byte NUL-padded field; longer input is cut.
    pub fn write_fixed_ascii(&mut self, s: &str, n: usize) {
        let bytes = &s.as_bytes()[..s.len().min(n)];
        self.write_bytes(bytes);
        self.write_zeros(n - bytes.len());
    }

    /// Overwrite a u32 already written at `offset`, e.g. a directory entry.
    pub fn patch_u32_le(&mut self, offset: usize, v: u32) {
        LittleEndian::write_u32(&mut self.data[offset..offset + 4], v);
    }

    fn grow(&mut self, n: usize) -> usize {
        let at = self.data.len();
        self.write_zeros(n);
        at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::reader::ByteCursor;

    #[test]
    fn test_fixed_ascii_padding() {
        let mut writer = BinaryWriter::new();
        writer.write_fixed_ascii("Pa1_toride", 32);
        writer.write_fixed_ascii("a_name_that_is_far_too_long", 8);
        assert_eq!(writer.len(), 40);

        let data = writer.into_vec();
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_fixed_ascii(32).unwrap(), "Pa1_toride");
        assert_eq!(cursor.read_fixed_ascii(8).unwrap(), "a_name_t");
    }

    #[test]
    fn test_patch_directory_entry() {
        let mut writer = BinaryWriter::new();
        writer.write_zeros(8);
        writer.write_u16_le(0xBEEF);
        writer.patch_u32_le(0, 8);
        writer.patch_u32_le(4, 2);

        assert_eq!(writer.into_vec(), vec![8, 0, 0, 0, 2, 0, 0, 0, 0xEF, 0xBE]);
    }
}
