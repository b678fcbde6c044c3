//! Decoding of item data into [`Value`] trees.
//!
//! Payloads are parsed by recursive descent. Which function parses a payload
//! is looked up in a table indexed by the tag byte, so supporting a new tag
//! is one new table entry.

use std::io::Read;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use byteorder::{BigEndian, ByteOrder};
use flate2::read::GzDecoder;
use log::{debug, trace};

use crate::{
    error::{Error, Result},
    input::Slice,
    value::{Compound, Value},
    Tag, TAG_COUNT,
};

/// Deepest nesting of lists and compounds accepted before the document is
/// rejected.
pub(crate) const MAX_DEPTH: usize = 512;

type ParseFn = for<'de> fn(&mut Decoder<'de>) -> Result<Value>;

static PARSERS: [ParseFn; TAG_COUNT] = [
    parse_end,
    parse_byte,
    parse_short,
    parse_int,
    parse_long,
    parse_float,
    parse_double,
    parse_byte_array,
    parse_string,
    parse_list,
    parse_compound,
    parse_int_array,
    parse_long_array,
];

struct Decoder<'de> {
    input: Slice<'de>,
    depth: usize,
}

impl<'de> Decoder<'de> {
    fn value(&mut self, tag: Tag) -> Result<Value> {
        PARSERS[u8::from(tag) as usize](self)
    }

    fn nested<F>(&mut self, f: F) -> Result<Value>
    where
        F: FnOnce(&mut Self) -> Result<Value>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(Error::bespoke(
                format!("nesting deeper than {}", MAX_DEPTH),
                Some(self.input.position()),
            ));
        }

        self.depth += 1;
        let value = f(self);
        self.depth -= 1;
        value
    }
}

/// Decode an `item_bytes` blob: base64 text of a gzip compressed NBT
/// document. Returns the root compound as a [`Value::Compound`].
///
/// ```
/// # use itemnbt::error::ErrorKind;
/// let err = itemnbt::decode("not base64!").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Encoding);
/// ```
pub fn decode(blob: impl AsRef<[u8]>) -> Result<Value> {
    let compressed = STANDARD.decode(blob).map_err(Error::encoding)?;
    from_gzip(&compressed)
}

/// Decompress a gzip stream and decode the NBT document inside it.
pub fn from_gzip(data: &[u8]) -> Result<Value> {
    let mut decoder = GzDecoder::new(data);
    let mut buf = vec![];
    decoder
        .read_to_end(&mut buf)
        .map_err(Error::decompression)?;

    debug!(
        "decompressed {} bytes of item data into {}",
        data.len(),
        buf.len()
    );
    from_bytes(&buf)
}

/// Decode an uncompressed NBT document. The document must start with a
/// compound tag; its name is checked and discarded. Bytes after the root
/// compound are ignored.
pub fn from_bytes(data: &[u8]) -> Result<Value> {
    let mut input = Slice::new(data);

    let tag = input.consume_byte()?;
    if tag != u8::from(Tag::Compound) {
        return Err(Error::no_root_compound(tag));
    }

    let name = input.consume_str()?;
    trace!("root compound {:?}", name);

    let mut de = Decoder { input, depth: 0 };
    parse_compound(&mut de)
}

fn parse_end(de: &mut Decoder) -> Result<Value> {
    Err(Error::bespoke(
        "end tag has no payload",
        Some(de.input.position()),
    ))
}

fn parse_byte(de: &mut Decoder) -> Result<Value> {
    Ok(Value::Byte(de.input.consume_i8()?))
}

fn parse_short(de: &mut Decoder) -> Result<Value> {
    Ok(Value::Short(de.input.consume_i16()?))
}

fn parse_int(de: &mut Decoder) -> Result<Value> {
    Ok(Value::Int(de.input.consume_i32()?))
}

fn parse_long(de: &mut Decoder) -> Result<Value> {
    Ok(Value::Long(de.input.consume_i64()?))
}

fn parse_float(de: &mut Decoder) -> Result<Value> {
    Ok(Value::Float(de.input.consume_f32()?))
}

fn parse_double(de: &mut Decoder) -> Result<Value> {
    Ok(Value::Double(de.input.consume_f64()?))
}

fn parse_byte_array(de: &mut Decoder) -> Result<Value> {
    let len = de.input.consume_len()?;
    let bytes = de.input.consume_bytes(len)?;
    Ok(Value::ByteArray(bytes.iter().map(|&b| b as i8).collect()))
}

fn parse_string(de: &mut Decoder) -> Result<Value> {
    Ok(Value::String(de.input.consume_str()?))
}

fn parse_list(de: &mut Decoder) -> Result<Value> {
    let element_tag = de.input.consume_tag()?;
    let offset = de.input.position();
    let len = de.input.consume_len()?;

    if element_tag == Tag::End && len > 0 {
        return Err(Error::bespoke(
            format!("list of end tags with length {}", len),
            Some(offset),
        ));
    }

    de.nested(|de| {
        // Every element takes at least a byte, so this bounds the allocation
        // by the input size rather than the declared length.
        let mut list = Vec::with_capacity(len.min(de.input.remaining()));
        for _ in 0..len {
            list.push(de.value(element_tag)?);
        }
        Ok(Value::List(list))
    })
}

fn parse_compound(de: &mut Decoder) -> Result<Value> {
    de.nested(|de| {
        let mut compound = Compound::new();
        loop {
            let tag = de.input.consume_tag()?;
            if tag == Tag::End {
                return Ok(Value::Compound(compound));
            }

            let key = de.input.consume_str()?;
            let value = de.value(tag)?;

            // Repeated keys replace the earlier value.
            compound.insert(key, value);
        }
    })
}

fn parse_int_array(de: &mut Decoder) -> Result<Value> {
    let len = de.input.consume_len()?;
    let data = de.input.consume_elements(len, std::mem::size_of::<i32>())?;
    Ok(Value::IntArray(
        data.chunks_exact(4).map(BigEndian::read_i32).collect(),
    ))
}

fn parse_long_array(de: &mut Decoder) -> Result<Value> {
    let len = de.input.consume_len()?;
    let data = de.input.consume_elements(len, std::mem::size_of::<i64>())?;
    Ok(Value::LongArray(
        data.chunks_exact(8).map(BigEndian::read_i64).collect(),
    ))
}
