//! Staging area
//!
//! Pending additions and removals that the next commit will fold in. An
//! addition keeps a snapshot of the file content taken when it was staged, so
//! later edits in the working tree do not leak into the commit.
//!
//! A file is never staged for addition and marked for removal at the same time.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::stage::HEADER_SIZE;
use crate::artifacts::stage::checksum::Checksum;
use crate::artifacts::stage::stage_entry::StageEntry;
use crate::artifacts::stage::stage_header::StageHeader;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct StagingArea {
    /// Path to the staging file (`.gitlet/index`)
    path: Box<Path>,
    additions: BTreeMap<String, Bytes>,
    removals: BTreeSet<String>,
    /// Flag indicating if the staging area has been modified since loading
    changed: bool,
}

impl StagingArea {
    pub fn new(path: Box<Path>) -> Self {
        StagingArea {
            path,
            additions: BTreeMap::new(),
            removals: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the staging area from disk
    ///
    /// A missing or empty file is an empty staging area. The trailing checksum
    /// is verified.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the staging file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut stage_file = std::fs::OpenOptions::new().read(true).open(&self.path)?;
        let mut lock = file_guard::lock(&mut stage_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let entries_count = Self::parse_header(&mut reader)?;

        for _ in 0..entries_count {
            match StageEntry::read_from(&mut reader)? {
                StageEntry::Addition { name, content } => {
                    self.additions.insert(name, content);
                }
                StageEntry::Removal { name } => {
                    self.removals.insert(name);
                }
            }
        }

        reader.verify()
    }

    fn parse_header(reader: &mut Checksum) -> anyhow::Result<u32> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = StageHeader::deserialize(std::io::Cursor::new(header_bytes))?;
        header.validate()?;

        Ok(header.entries_count)
    }

    /// Write the staging area to disk
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the staging file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut stage_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let lock = file_guard::lock(&mut stage_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let entries = self.entries();
        let header = StageHeader::with_count(u32::try_from(entries.len())?);
        writer.write(&header.serialize()?)?;

        for entry in entries {
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()?;
        self.changed = false;

        tracing::debug!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "wrote staging area"
        );

        Ok(())
    }

    fn entries(&self) -> Vec<StageEntry> {
        let additions = self
            .additions
            .iter()
            .map(|(name, content)| StageEntry::Addition {
                name: name.clone(),
                content: content.clone(),
            });
        let removals = self
            .removals
            .iter()
            .map(|name| StageEntry::Removal { name: name.clone() });

        additions.chain(removals).collect()
    }

    /// Stage `content` for addition, dropping any pending removal of the file
    pub fn stage(&mut self, name: &str, content: Bytes) {
        self.removals.remove(name);
        self.additions.insert(name.to_string(), content);
        self.changed = true;
    }

    /// Drop a pending addition; returns whether one existed
    pub fn unstage(&mut self, name: &str) -> bool {
        let removed = self.additions.remove(name).is_some();
        self.changed |= removed;
        removed
    }

    /// Mark a file for removal, dropping any pending addition of it
    pub fn mark_removed(&mut self, name: &str) {
        self.additions.remove(name);
        self.removals.insert(name.to_string());
        self.changed = true;
    }

    /// Drop a pending removal; returns whether one existed
    pub fn unmark_removed(&mut self, name: &str) -> bool {
        let removed = self.removals.remove(name);
        self.changed |= removed;
        removed
    }

    pub fn is_staged(&self, name: &str) -> bool {
        self.additions.contains_key(name)
    }

    pub fn is_removed(&self, name: &str) -> bool {
        self.removals.contains(name)
    }

    pub fn staged_content(&self, name: &str) -> Option<&Bytes> {
        self.additions.get(name)
    }

    pub fn additions(&self) -> &BTreeMap<String, Bytes> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<String> {
        &self.removals
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.changed = true;
        }
        self.additions.clear();
        self.removals.clear();
    }
}
