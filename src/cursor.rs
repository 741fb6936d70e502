//! Sequential little-endian reader over an in-memory buffer.
//!
//! Every parser in the crate reads through a [`ByteCursor`]. Each method
//! reads exactly the bytes it promises or returns [`Error::BufferUnderrun`];
//! there is no partial-read ambiguity and the position is left untouched on
//! failure.

use half::f16;

use crate::{Error, Result};

/// Read cursor borrowing an immutable byte buffer.
///
/// Invariant: `0 <= position <= len`.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current absolute position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left between the position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The whole underlying buffer.
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// Move to an absolute position. Seeking to `len` (end of buffer) is
    /// allowed.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.buf.len() {
            return Err(self.underrun_at(pos, 0));
        }
        self.pos = pos;
        Ok(())
    }

    /// Move relative to the current position.
    pub fn seek_relative(&mut self, delta: i64) -> Result<()> {
        let target = (self.pos as i64)
            .checked_add(delta)
            .filter(|t| *t >= 0)
            .ok_or(Error::InvalidRange("negative seek"))?;
        self.seek(target as usize)
    }

    /// Advance to the next multiple of `n` strictly after the current
    /// position. An already aligned cursor still moves a full `n` bytes.
    pub fn align_to(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidRange("zero alignment"));
        }
        self.seek((self.pos / n) * n + n)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| self.underrun_at(self.pos, n))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read exactly `N` bytes into a fixed-size array.
    #[inline]
    pub fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.bytes(N)?);
        Ok(out)
    }

    #[inline]
    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.array::<1>()?[0])
    }

    #[inline]
    pub fn i8(&mut self) -> Result<i8> {
        Ok(self.u8()? as i8)
    }

    #[inline]
    pub fn u16(&mut self) -> Result<u16> {
        self.array().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn i16(&mut self) -> Result<i16> {
        self.array().map(i16::from_le_bytes)
    }

    #[inline]
    pub fn u32(&mut self) -> Result<u32> {
        self.array().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn i32(&mut self) -> Result<i32> {
        self.array().map(i32::from_le_bytes)
    }

    #[inline]
    pub fn u64(&mut self) -> Result<u64> {
        self.array().map(u64::from_le_bytes)
    }

    /// Read an IEEE half and widen it to `f32`.
    #[inline]
    pub fn f16(&mut self) -> Result<f32> {
        self.array().map(|b| f16::from_le_bytes(b).to_f32())
    }

    #[inline]
    pub fn f32(&mut self) -> Result<f32> {
        self.array().map(f32::from_le_bytes)
    }

    /// Read a `u64` offset field and convert it to a buffer index.
    pub fn offset(&mut self) -> Result<usize> {
        let v = self.u64()?;
        usize::try_from(v).map_err(|_| Error::InvalidRange("offset exceeds address space"))
    }

    /// Read a NUL-terminated narrow string and advance past the terminator.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; an unterminated string
    /// is a [`Error::BufferUnderrun`].
    pub fn cstring(&mut self) -> Result<String> {
        let rest = &self.buf[self.pos..];
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| self.underrun_at(self.pos, rest.len() + 1))?;
        let text = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.pos += len + 1;
        Ok(text)
    }

    /// Read a NUL-terminated narrow string at `offset` without moving.
    pub fn cstring_at(&self, offset: usize) -> Result<String> {
        let mut peek = self.clone();
        peek.seek(offset)?;
        peek.cstring()
    }

    /// Read a NUL-terminated UTF-16LE string and advance past the terminator.
    pub fn wide_cstring(&mut self) -> Result<String> {
        let start = self.pos;
        let mut units = Vec::new();
        loop {
            let unit = match self.u16() {
                Ok(unit) => unit,
                Err(e) => {
                    self.pos = start;
                    return Err(e);
                }
            };
            if unit == 0 {
                break;
            }
            units.push(unit);
        }
        Ok(char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }

    /// Read a NUL-terminated UTF-16LE string at `offset` without moving.
    pub fn wide_cstring_at(&self, offset: usize) -> Result<String> {
        let mut peek = self.clone();
        peek.seek(offset)?;
        peek.wide_cstring()
    }

    fn underrun_at(&self, offset: usize, needed: usize) -> Error {
        Error::BufferUnderrun {
            offset,
            needed,
            len: self.buf.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_primitives() {
        let data = [
            0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF, 0x00, 0x3C,
        ];
        let mut c = ByteCursor::new(&data);
        assert_eq!(c.u8().unwrap(), 1);
        assert_eq!(c.u16().unwrap(), 0x1234);
        assert_eq!(c.u32().unwrap(), 0x1234_5678);
        assert_eq!(c.i16().unwrap(), -1);
        assert_eq!(c.f16().unwrap(), 1.0);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn underrun_leaves_position_untouched() {
        let data = [1, 2, 3];
        let mut c = ByteCursor::new(&data);
        c.u8().unwrap();
        let err = c.u32().unwrap_err();
        assert!(matches!(
            err,
            Error::BufferUnderrun {
                offset: 1,
                needed: 4,
                len: 3
            }
        ));
        assert_eq!(c.position(), 1);
        assert_eq!(c.u16().unwrap(), 0x0302);
    }

    #[test]
    fn align_always_advances() {
        let data = [0u8; 32];
        let mut c = ByteCursor::new(&data);
        c.align_to(16).unwrap();
        assert_eq!(c.position(), 16);
        c.seek(17).unwrap();
        c.align_to(16).unwrap();
        assert_eq!(c.position(), 32);
        assert!(c.align_to(16).is_err());
    }

    #[test]
    fn strings() {
        let data = b"abc\0de\0h\0i\0\0\0";
        let mut c = ByteCursor::new(data);
        assert_eq!(c.cstring().unwrap(), "abc");
        assert_eq!(c.cstring_at(4).unwrap(), "de");
        assert_eq!(c.position(), 4);
        assert_eq!(c.wide_cstring_at(7).unwrap(), "hi");
        c.seek(7).unwrap();
        assert_eq!(c.wide_cstring().unwrap(), "hi");
        assert_eq!(c.position(), 13);
    }

    #[test]
    fn unterminated_string_is_an_underrun() {
        let mut c = ByteCursor::new(b"abc");
        assert!(matches!(c.cstring(), Err(Error::BufferUnderrun { .. })));
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn relative_seek_bounds() {
        let data = [0u8; 8];
        let mut c = ByteCursor::new(&data);
        c.seek_relative(6).unwrap();
        c.seek_relative(-2).unwrap();
        assert_eq!(c.position(), 4);
        assert!(c.seek_relative(-5).is_err());
        assert!(c.seek_relative(5).is_err());
        assert_eq!(c.bytes(4).unwrap().len(), 4);
    }
}
