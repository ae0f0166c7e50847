//! Blob object
//!
//! A blob is the snapshot of one file taken when a staged file is folded into a
//! commit. Unlike git, the file name is part of the blob, so the same bytes
//! stored under two different names produce two different blobs.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<name>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Repository-relative file name
    name: String,
    content: Bytes,
}

impl Blob {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut payload = Vec::with_capacity(self.name.len() + 1 + self.content.len());
        payload.extend_from_slice(self.name.as_bytes());
        payload.push(b'\0');
        payload.extend_from_slice(&self.content);

        Ok(self.object_type().frame(&payload))
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut name = Vec::new();
        reader.read_until(b'\0', &mut name)?;
        if name.pop() != Some(b'\0') {
            anyhow::bail!("Invalid blob object: missing name terminator");
        }
        let name = String::from_utf8(name)?;

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(name, Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
