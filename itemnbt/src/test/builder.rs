use crate::{ser::WriteNbt, Tag, Value};

/// Assembles documents by hand for tests. Named entries are written by the
/// encoder's own [`WriteNbt`]. The `raw_*` and `*_payload` methods write what
/// they are given and nothing else, so headers can lie about what follows.
pub struct Builder {
    buf: Vec<u8>,
}

impl Builder {
    pub fn new() -> Self {
        Builder { buf: Vec::new() }
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.buf.write_tag(tag).unwrap();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.buf.write_size_prefixed_str(name).unwrap();
        self
    }

    fn entry(self, name: &str, value: Value) -> Self {
        let mut b = self.tag(value.tag()).name(name);
        b.buf.write_payload(&value).unwrap();
        b
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.tag(Tag::Compound).name(name)
    }

    pub fn end_compound(self) -> Self {
        self.tag(Tag::End)
    }

    /// List header only. The caller writes `len` payloads after it; elements
    /// that are compounds are closed with [`end_compound`](Self::end_compound).
    pub fn start_list(self, name: &str, element_tag: Tag, len: i32) -> Self {
        self.tag(Tag::List)
            .name(name)
            .tag(element_tag)
            .int_payload(len)
    }

    pub fn byte(self, name: &str, v: i8) -> Self {
        self.entry(name, Value::Byte(v))
    }

    pub fn short(self, name: &str, v: i16) -> Self {
        self.entry(name, Value::Short(v))
    }

    pub fn int(self, name: &str, v: i32) -> Self {
        self.entry(name, Value::Int(v))
    }

    pub fn long(self, name: &str, v: i64) -> Self {
        self.entry(name, Value::Long(v))
    }

    pub fn float(self, name: &str, v: f32) -> Self {
        self.entry(name, Value::Float(v))
    }

    pub fn double(self, name: &str, v: f64) -> Self {
        self.entry(name, Value::Double(v))
    }

    pub fn string(self, name: &str, v: &str) -> Self {
        self.entry(name, v.into())
    }

    pub fn byte_array(self, name: &str, v: &[i8]) -> Self {
        self.entry(name, Value::ByteArray(v.to_vec()))
    }

    pub fn int_array(self, name: &str, v: &[i32]) -> Self {
        self.entry(name, Value::IntArray(v.to_vec()))
    }

    pub fn long_array(self, name: &str, v: &[i64]) -> Self {
        self.entry(name, Value::LongArray(v.to_vec()))
    }

    pub fn string_payload(self, s: &str) -> Self {
        self.name(s)
    }

    pub fn int_payload(self, i: i32) -> Self {
        self.raw_bytes(&i.to_be_bytes())
    }

    /// A string length prefix with no string after it.
    pub fn raw_str_len(self, len: u16) -> Self {
        self.raw_bytes(&len.to_be_bytes())
    }

    pub fn raw_bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
