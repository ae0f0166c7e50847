//! In-memory branch table
//!
//! Holds every registered branch and which one is active. Mutations are tracked
//! so that only touched branch records are rewritten when the repository is
//! persisted.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branch_record::Branch;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct BranchTable {
    branches: BTreeMap<BranchName, Branch>,
    active: BranchName,
    changed: BTreeSet<BranchName>,
    deleted: BTreeSet<BranchName>,
    active_changed: bool,
}

impl BranchTable {
    /// Table loaded from disk, nothing pending
    pub fn new(branches: Vec<Branch>, active: BranchName) -> anyhow::Result<Self> {
        let branches = branches
            .into_iter()
            .map(|branch| (branch.name().clone(), branch))
            .collect::<BTreeMap<_, _>>();

        if !branches.contains_key(&active) {
            anyhow::bail!("HEAD points to unknown branch {active}");
        }

        Ok(BranchTable {
            branches,
            active,
            changed: BTreeSet::new(),
            deleted: BTreeSet::new(),
            active_changed: false,
        })
    }

    /// Fresh table holding only the default branch at the root commit
    pub fn initial(root: ObjectId) -> Self {
        let name = BranchName::default_branch();
        let branch = Branch::new(name.clone(), root, None);

        BranchTable {
            branches: BTreeMap::from([(name.clone(), branch)]),
            active: name.clone(),
            changed: BTreeSet::from([name]),
            deleted: BTreeSet::new(),
            active_changed: true,
        }
    }

    /// Register a branch at the active commit, forked from the active branch
    pub fn create(&mut self, name: BranchName) -> anyhow::Result<&Branch> {
        if self.branches.contains_key(&name) {
            return Err(GitletError::BranchExists.into());
        }
        if self.branches.keys().any(|existing| existing.collides_with(&name)) {
            return Err(GitletError::InvalidBranchName(name.to_string()).into());
        }

        let active = self.active()?;
        let branch = Branch::new(name.clone(), active.head().clone(), Some(active.digest()));
        tracing::debug!(branch = %name, head = %branch.head(), "creating branch");

        self.deleted.remove(&name);
        self.changed.insert(name.clone());
        Ok(self.branches.entry(name).or_insert(branch))
    }

    pub fn delete(&mut self, name: &BranchName) -> anyhow::Result<Branch> {
        if name == &self.active {
            return Err(GitletError::CannotDeleteActiveBranch.into());
        }

        let branch = self
            .branches
            .remove(name)
            .ok_or(GitletError::BranchNotFound)?;
        tracing::debug!(branch = %name, "deleting branch");

        self.changed.remove(name);
        self.deleted.insert(name.clone());
        Ok(branch)
    }

    /// Move a branch pointer
    pub fn set_head(&mut self, name: &BranchName, head: ObjectId) -> anyhow::Result<()> {
        let branch = self
            .branches
            .get_mut(name)
            .ok_or(GitletError::BranchNotFound)?;
        tracing::debug!(branch = %name, from = %branch.head(), to = %head, "moving branch head");

        branch.set_head(head);
        self.changed.insert(name.clone());
        Ok(())
    }

    /// Make `name` the active branch
    pub fn activate(&mut self, name: &BranchName) -> anyhow::Result<()> {
        if !self.branches.contains_key(name) {
            return Err(GitletError::BranchNotFound.into());
        }

        if name != &self.active {
            self.active = name.clone();
            self.active_changed = true;
        }
        Ok(())
    }

    pub fn get(&self, name: &BranchName) -> Option<&Branch> {
        self.branches.get(name)
    }

    pub fn contains(&self, name: &BranchName) -> bool {
        self.branches.contains_key(name)
    }

    pub fn active_name(&self) -> &BranchName {
        &self.active
    }

    pub fn active(&self) -> anyhow::Result<&Branch> {
        self.branches
            .get(&self.active)
            .with_context(|| format!("active branch {} is not registered", self.active))
    }

    pub fn is_active(&self, name: &BranchName) -> bool {
        &self.active == name
    }

    /// Branch names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &BranchName> {
        self.branches.keys()
    }

    /// Branch records that must be rewritten
    pub fn changed(&self) -> impl Iterator<Item = &Branch> {
        self.changed
            .iter()
            .filter_map(|name| self.branches.get(name))
    }

    /// Branch records that must be removed
    pub fn deleted(&self) -> impl Iterator<Item = &BranchName> {
        self.deleted.iter()
    }

    pub fn active_changed(&self) -> bool {
        self.active_changed
    }

    pub fn mark_clean(&mut self) {
        self.changed.clear();
        self.deleted.clear();
        self.active_changed = false;
    }
}
