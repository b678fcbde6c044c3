//! itemnbt decodes the item data embedded in Hypixel API responses.
//!
//! Auction listings (and a few other Skyblock endpoints) carry the items they
//! describe as an `item_bytes` string. That string is base64 of a gzip stream,
//! and the decompressed payload is NBT: the binary tag format *Minecraft: Java
//! Edition* uses for inventories.
//!
//! * [`decode`] runs the whole pipeline on an `item_bytes` blob.
//! * [`from_gzip`] and [`from_bytes`] start from the decompressed or raw
//!   document respectively.
//! * [`Value`] is the decoded tree, with compounds kept in wire order.
//! * [`encode`] and [`to_bytes`] write documents back out, mostly useful for
//!   building test data.
//!
//! # Quick example
//!
//! ```
//! use itemnbt::{decode, encode, Compound, Value};
//!
//! let mut tag = Compound::new();
//! tag.insert("id".to_owned(), Value::from("ASPECT_OF_THE_END"));
//! tag.insert("Count".to_owned(), Value::Byte(1));
//!
//! let blob = encode("", &Value::Compound(tag)).unwrap();
//! let item = decode(&blob).unwrap();
//!
//! assert_eq!(item.get("id").and_then(Value::as_str), Some("ASPECT_OF_THE_END"));
//! ```
//!
//! # Errors
//!
//! Decoding is all-or-nothing. Every failure reports which stage rejected the
//! input through [`error::ErrorKind`], and the byte offset into the
//! decompressed document where one applies.

pub mod error;

mod de;
mod input;
mod ser;
mod value;

pub use de::{decode, from_bytes, from_gzip};
pub use ser::{encode, to_bytes};
pub use value::{Compound, Value};

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the kind named in the list header.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

/// Number of distinct tag kinds, including [`Tag::End`].
pub(crate) const TAG_COUNT: usize = 13;

impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
