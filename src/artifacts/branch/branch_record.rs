//! Branch record
//!
//! ## File Format
//!
//! Each branch is stored as `.gitlet/refs/heads/<name>`:
//! ```text
//! head <commit-sha>
//! parent <branch-digest>
//! ```
//!
//! The `parent` line names the branch this one was forked from and is absent
//! for the default branch. It is kept for provenance only.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    name: BranchName,
    head: ObjectId,
    parent_branch: Option<ObjectId>,
}

impl Branch {
    pub fn new(name: BranchName, head: ObjectId, parent_branch: Option<ObjectId>) -> Self {
        Branch {
            name,
            head,
            parent_branch,
        }
    }

    /// Stable identity of a branch name
    pub fn digest_of(name: &BranchName) -> ObjectId {
        ObjectId::hash(format!("branch {name}").as_bytes())
    }

    pub fn digest(&self) -> ObjectId {
        Self::digest_of(&self.name)
    }

    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn head(&self) -> &ObjectId {
        &self.head
    }

    pub fn parent_branch(&self) -> Option<&ObjectId> {
        self.parent_branch.as_ref()
    }

    pub fn set_head(&mut self, head: ObjectId) {
        self.head = head;
    }

    pub fn to_record(&self) -> String {
        let mut record = format!("head {}\n", self.head);
        if let Some(parent_branch) = &self.parent_branch {
            record.push_str(&format!("parent {parent_branch}\n"));
        }

        record
    }

    pub fn from_record(name: BranchName, record: &str) -> anyhow::Result<Self> {
        let mut head = None;
        let mut parent_branch = None;

        for line in record.lines().filter(|line| !line.trim().is_empty()) {
            match line.split_once(' ') {
                Some(("head", oid)) => head = Some(ObjectId::try_parse(oid.trim().to_string())?),
                Some(("parent", oid)) => {
                    parent_branch = Some(ObjectId::try_parse(oid.trim().to_string())?)
                }
                _ => anyhow::bail!("invalid record for branch {name}: {line:?}"),
            }
        }

        let head = head.with_context(|| format!("branch {name} has no head"))?;

        Ok(Branch::new(name, head, parent_branch))
    }
}
