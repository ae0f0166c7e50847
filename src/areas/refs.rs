//! Branch references and HEAD
//!
//! ## File Format
//!
//! - `.gitlet/HEAD` holds `ref: refs/heads/<active branch>`
//! - `.gitlet/refs/heads/<name>` holds the branch record (see [`Branch`])
//!
//! Ref files are written under an exclusive file lock. Branch names may contain
//! `/`, in which case the record lives in a nested directory that is pruned when
//! its last branch is deleted.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branch_record::Branch;
use crate::artifacts::branch::branch_table::BranchTable;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository state directory (`.gitlet`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the active branch
    pub fn read_head(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let captures = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .with_context(|| format!("HEAD does not name a branch: {content:?}"))?;

        BranchName::try_parse(captures[1].to_string())
    }

    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            format!("ref: refs/heads/{branch_name}\n"),
        )
    }

    pub fn write_branch(&self, branch: &Branch) -> anyhow::Result<()> {
        let branch_path = self.heads_path().join(branch.name().as_ref());
        self.update_ref_file(&branch_path, branch.to_record())
    }

    pub fn read_branch(&self, name: BranchName) -> anyhow::Result<Branch> {
        let branch_path = self.heads_path().join(name.as_ref());
        let record = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;

        Branch::from_record(name, &record)
    }

    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        let branch_path = self.heads_path().join(name.as_ref());
        if !branch_path.exists() {
            return Ok(());
        }

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)
    }

    /// Every branch record under `refs/heads`
    pub fn list_branches(&self) -> anyhow::Result<Vec<Branch>> {
        let heads_path = self.heads_path();
        let mut branches = Vec::new();

        for entry in WalkDir::new(&heads_path).min_depth(1).sort_by_file_name() {
            let entry = entry.context("failed to walk refs/heads")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(&heads_path)
                .with_context(|| format!("{:?} is outside refs/heads", entry.path()))?;
            let name = relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            branches.push(self.read_branch(BranchName::try_parse(name)?)?);
        }

        Ok(branches)
    }

    /// Load the branch table with HEAD naming the active branch
    pub fn load_table(&self) -> anyhow::Result<BranchTable> {
        BranchTable::new(self.list_branches()?, self.read_head()?)
    }

    /// Write every pending change of the table to disk
    pub fn persist(&self, table: &mut BranchTable) -> anyhow::Result<()> {
        for name in table.deleted() {
            self.delete_branch(name)?;
        }
        for branch in table.changed() {
            self.write_branch(branch)?;
        }
        if table.active_changed() {
            self.set_head(table.active_name())?;
        }

        table.mark_clean();
        Ok(())
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
