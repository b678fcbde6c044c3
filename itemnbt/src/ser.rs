//! Writing [`Value`] trees back out as NBT documents.

use std::convert::TryInto;
use std::io::Write;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use byteorder::{BigEndian, WriteBytesExt};
use flate2::{write::GzEncoder, Compression};

use crate::error::{Error, Result};
use crate::{Tag, Value};

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len: u16 = key
            .len()
            .try_into()
            .map_err(|_| Error::bespoke("string too long", None))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&key)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::bespoke("len too large", None))?,
        )?;

        Ok(())
    }

    fn write_payload(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.write_i8(*v)?,
            Value::Short(v) => self.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.write_f64::<BigEndian>(*v)?,
            Value::ByteArray(v) => {
                self.write_len(v.len())?;
                for b in v {
                    self.write_i8(*b)?;
                }
            }
            Value::String(v) => self.write_size_prefixed_str(v)?,
            Value::List(v) => {
                // Empty lists are written with an End element tag, as the game does.
                let element_tag = v.first().map_or(Tag::End, Value::tag);
                if v.iter().any(|e| e.tag() != element_tag) {
                    return Err(Error::bespoke(
                        "list elements must all have the same tag",
                        None,
                    ));
                }

                self.write_tag(element_tag)?;
                self.write_len(v.len())?;
                for element in v {
                    self.write_payload(element)?;
                }
            }
            Value::Compound(v) => {
                for (key, member) in v {
                    self.write_tag(member.tag())?;
                    self.write_size_prefixed_str(key)?;
                    self.write_payload(member)?;
                }
                self.write_tag(Tag::End)?;
            }
            Value::IntArray(v) => {
                self.write_len(v.len())?;
                for i in v {
                    self.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.write_len(v.len())?;
                for i in v {
                    self.write_i64::<BigEndian>(*i)?;
                }
            }
        }

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}

/// Write `root` as an uncompressed NBT document whose root compound is named
/// `name`. The root must be a [`Value::Compound`].
pub fn to_bytes(name: &str, root: &Value) -> Result<Vec<u8>> {
    if root.tag() != Tag::Compound {
        return Err(Error::bespoke("document root must be a compound", None));
    }

    let mut buf = vec![];
    buf.write_tag(Tag::Compound)?;
    buf.write_size_prefixed_str(name)?;
    buf.write_payload(root)?;
    Ok(buf)
}

/// The inverse of [`decode`](crate::decode): write `root` as a document,
/// gzip it and base64 the result.
pub fn encode(name: &str, root: &Value) -> Result<String> {
    let raw = to_bytes(name, root)?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw)?;
    let compressed = encoder.finish()?;

    Ok(STANDARD.encode(compressed))
}
