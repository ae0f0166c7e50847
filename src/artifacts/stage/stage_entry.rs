use crate::artifacts::objects::object::Packable;
use crate::artifacts::stage::checksum::Checksum;
use anyhow::anyhow;
use byteorder::{NetworkEndian, WriteBytesExt};
use bytes::Bytes;
use std::io::Write;

const ADDITION_KIND: u8 = b'A';
const REMOVAL_KIND: u8 = b'R';

/// One record of the staging file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEntry {
    /// File staged for addition with the content captured at `add` time
    Addition { name: String, content: Bytes },
    /// File marked for removal
    Removal { name: String },
}

impl StageEntry {
    pub fn name(&self) -> &str {
        match self {
            StageEntry::Addition { name, .. } | StageEntry::Removal { name } => name,
        }
    }

    /// Read the next entry, hashing every byte consumed
    pub(crate) fn read_from(reader: &mut Checksum) -> anyhow::Result<Self> {
        let kind = reader.read_u8()?;

        let name_len = reader.read_u32()? as usize;
        let name = String::from_utf8(reader.read(name_len)?.to_vec())
            .map_err(|_| anyhow!("Invalid file name in staging file"))?;

        match kind {
            ADDITION_KIND => {
                let content_len = reader.read_u32()? as usize;
                let content = reader.read(content_len)?;
                Ok(StageEntry::Addition { name, content })
            }
            REMOVAL_KIND => Ok(StageEntry::Removal { name }),
            other => Err(anyhow!("Invalid staging entry kind: {other:#04x}")),
        }
    }
}

fn length_of(bytes: &[u8]) -> anyhow::Result<u32> {
    u32::try_from(bytes.len())
        .map_err(|_| anyhow!("Staging entry too large: {} bytes", bytes.len()))
}

impl Packable for StageEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::new();

        match self {
            StageEntry::Addition { name, content } => {
                bytes.write_u8(ADDITION_KIND)?;
                bytes.write_u32::<NetworkEndian>(length_of(name.as_bytes())?)?;
                bytes.write_all(name.as_bytes())?;
                bytes.write_u32::<NetworkEndian>(length_of(content)?)?;
                bytes.write_all(content)?;
            }
            StageEntry::Removal { name } => {
                bytes.write_u8(REMOVAL_KIND)?;
                bytes.write_u32::<NetworkEndian>(length_of(name.as_bytes())?)?;
                bytes.write_all(name.as_bytes())?;
            }
        }

        Ok(Bytes::from(bytes))
    }
}
