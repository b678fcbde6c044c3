//! Contains the Error and Result type used by the decoder and encoder.

/// Errors that can occur while decoding or encoding item data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
    offset: Option<usize>,
}

/// The stage of the pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The blob was not valid base64.
    Encoding,

    /// The gzip stream was malformed or cut short.
    Decompression,

    /// The document was in bounds but structurally invalid: an unknown tag
    /// byte, a root that is not a compound, a negative length or a string
    /// that is not valid unicode.
    Format,

    /// The document ended part way through a value.
    Truncated,

    /// Writing an encoded document failed.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Offset into the decompressed document at which the error was found,
    /// if it happened after decompression.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::Truncated)
    }

    pub(crate) fn encoding(e: base64::DecodeError) -> Self {
        Self {
            msg: format!("invalid base64: {}", e),
            kind: ErrorKind::Encoding,
            offset: None,
        }
    }

    pub(crate) fn decompression(e: std::io::Error) -> Self {
        Self {
            msg: format!("invalid gzip stream: {}", e),
            kind: ErrorKind::Decompression,
            offset: None,
        }
    }

    pub(crate) fn invalid_tag(tag: u8, offset: usize) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::Format,
            offset: Some(offset),
        }
    }

    pub(crate) fn no_root_compound(tag: u8) -> Self {
        Self {
            msg: format!(
                "document must begin with a compound tag, found tag value {}",
                tag
            ),
            kind: ErrorKind::Format,
            offset: Some(0),
        }
    }

    pub(crate) fn nonunicode_string(data: &[u8], offset: usize) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Format,
            offset: Some(offset),
        }
    }

    pub(crate) fn unexpected_eof(needed: usize, offset: usize) -> Self {
        Self {
            msg: format!("truncated: needed {} bytes", needed),
            kind: ErrorKind::Truncated,
            offset: Some(offset),
        }
    }

    pub(crate) fn bespoke(msg: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Format,
            offset,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} at offset {}", self.msg, offset),
            None => f.write_str(&self.msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io,
            offset: None,
        }
    }
}
