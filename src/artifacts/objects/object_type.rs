//! Object framing
//!
//! Every stored object starts with a `<kind> <payload length>\0` header, the
//! kind being `blob` or `commit`. The header is part of the hashed bytes, so a
//! blob and a commit with identical payloads still get different IDs.

use anyhow::Context;
use bytes::Bytes;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Prepend this kind's header to a payload
    pub fn frame(self, payload: &[u8]) -> Bytes {
        let header = ObjectHeader::new(self, payload.len()).to_string();

        let mut framed = Vec::with_capacity(header.len() + payload.len());
        framed.extend_from_slice(header.as_bytes());
        framed.extend_from_slice(payload);

        Bytes::from(framed)
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "commit" => Ok(ObjectType::Commit),
            _ => anyhow::bail!("unknown object kind {value:?}"),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded `<kind> <payload length>\0` prefix of a stored object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    pub payload_len: usize,
}

impl ObjectHeader {
    pub fn new(object_type: ObjectType, payload_len: usize) -> Self {
        Self {
            object_type,
            payload_len,
        }
    }

    /// Consume the header, leaving the reader at the first payload byte
    pub fn read(reader: &mut impl BufRead) -> anyhow::Result<Self> {
        let kind = read_field(reader, b' ').context("object header has no kind")?;
        let object_type = ObjectType::try_from(kind.as_str())?;

        let payload_len = read_field(reader, b'\0').context("object header has no length")?;
        let payload_len = payload_len
            .parse::<usize>()
            .with_context(|| format!("object header length {payload_len:?} is not a number"))?;

        Ok(Self::new(object_type, payload_len))
    }
}

impl std::fmt::Display for ObjectHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}\0", self.object_type, self.payload_len)
    }
}

/// Read up to `delimiter`, which must be present, and return the text before it
fn read_field(reader: &mut impl BufRead, delimiter: u8) -> anyhow::Result<String> {
    let mut field = Vec::new();
    reader.read_until(delimiter, &mut field)?;

    if field.pop() != Some(delimiter) {
        anyhow::bail!("missing {:?} delimiter", delimiter as char);
    }

    Ok(String::from_utf8(field)?)
}
