use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// Positioned little-endian reader over a course stream.
///
/// Every read advances the position by exactly the width consumed. Reads and
/// seeks past the end fail with [`Error::TruncatedRead`]; nothing is clamped.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Move to an absolute offset. Seeking to exactly `size()` is allowed.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.data.len() {
            return Err(self.truncated_at(offset, 0));
        }
        self.pos = offset;
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(self.truncated_at(self.pos, n));
        }
        self.pos += n;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.truncated_at(self.pos, n));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    /// Read an `n`-byte ASCII field. The value ends at the first NUL and
    /// trailing space padding is dropped.
    pub fn read_fixed_ascii(&mut self, n: usize) -> Result<String> {
        let bytes = self.read_bytes(n)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let text: String = bytes[..end].iter().map(|&b| b as char).collect();
        Ok(text.trim_end_matches(' ').to_string())
    }

    fn truncated_at(&self, offset: usize, need: usize) -> Error {
        Error::TruncatedRead { offset, need, size: self.data.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x0302);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x07060504);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn test_read_past_end_fails() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data);
        cursor.skip(2).unwrap();

        let err = cursor.read_u16_le().unwrap_err();
        assert!(matches!(err, Error::TruncatedRead { offset: 2, need: 2, size: 3 }));
        // a failed read leaves the position alone
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_seek_bounds() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data);

        cursor.seek(8).unwrap();
        assert!(cursor.is_at_end());
        assert!(cursor.read_u8().is_err());
        assert!(matches!(cursor.seek(9), Err(Error::TruncatedRead { offset: 9, .. })));
        assert!(cursor.skip(1).is_err());
    }

    #[test]
    fn test_read_fixed_ascii() {
        let mut data = Vec::new();
        data.extend_from_slice(b"Pa0_jyotyu\0\0\0\0\0\0");
        data.extend_from_slice(b"bg   ");
        data.extend_from_slice(&[0u8; 4]);
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_fixed_ascii(16).unwrap(), "Pa0_jyotyu");
        assert_eq!(cursor.read_fixed_ascii(5).unwrap(), "bg");
        assert_eq!(cursor.read_fixed_ascii(4).unwrap(), "");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_fixed_ascii_stops_at_first_nul() {
        let data = *b"ab\0cd";
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_fixed_ascii(5).unwrap(), "ab");
        assert_eq!(cursor.position(), 5);
    }
}
