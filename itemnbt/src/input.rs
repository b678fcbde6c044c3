use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder};

use crate::{
    error::{Error, Result},
    Tag,
};

/// Cursor over an immutable document. Fixed width reads either advance past
/// the bytes they consumed or fail without moving. Length prefixed reads
/// (strings, arrays) can fail after the prefix has been consumed.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
    pos: usize,
}

fn try_size(size: usize, multiplier: usize, offset: usize) -> Result<usize> {
    size.checked_mul(multiplier)
        .ok_or_else(|| Error::bespoke("size too large", Some(offset)))
}

impl<'de> Slice<'de> {
    pub(crate) fn new(data: &'de [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        match self.pos.checked_add(n) {
            Some(end) if end <= self.data.len() => {
                let ret = &self.data[self.pos..end];
                self.pos = end;
                Ok(ret)
            }
            _ => Err(Error::unexpected_eof(n, self.pos)),
        }
    }

    pub(crate) fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub(crate) fn consume_tag(&mut self) -> Result<Tag> {
        let offset = self.pos;
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag, offset))
    }

    pub(crate) fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub(crate) fn consume_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.consume(2)?))
    }

    pub(crate) fn consume_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.consume(2)?))
    }

    pub(crate) fn consume_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.consume(4)?))
    }

    pub(crate) fn consume_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.consume(8)?))
    }

    pub(crate) fn consume_f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.consume(4)?))
    }

    pub(crate) fn consume_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.consume(8)?))
    }

    /// Read the i32 length prefix of an array or list.
    pub(crate) fn consume_len(&mut self) -> Result<usize> {
        let offset = self.pos;
        let len = self.consume_i32()?;
        usize::try_from(len)
            .map_err(|_| Error::bespoke(format!("negative length {}", len), Some(offset)))
    }

    pub(crate) fn consume_str(&mut self) -> Result<String> {
        let len = self.consume_u16()? as usize;
        let offset = self.pos;
        let bytes = self.consume(len)?;
        cesu8::from_java_cesu8(bytes)
            .map(Cow::into_owned)
            .map_err(|_| Error::nonunicode_string(bytes, offset))
    }

    pub(crate) fn consume_bytes(&mut self, n: usize) -> Result<&'de [u8]> {
        self.consume(n)
    }

    /// Consume `n` elements of `width` bytes each. The whole run is bounds
    /// checked before anything is allocated by the caller.
    pub(crate) fn consume_elements(&mut self, n: usize, width: usize) -> Result<&'de [u8]> {
        let size = try_size(n, width, self.pos)?;
        self.consume(size)
    }
}
