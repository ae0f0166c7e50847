//! Working tree migration
//!
//! A migration is the plan for turning the working tree of one snapshot into
//! another. It is computed up front from the two file maps, so every
//! precondition can be checked before the first file is touched.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create new file
    Add,
    /// Delete file
    Delete,
    /// Overwrite a file tracked by both snapshots
    Modify,
}

/// Planned actions grouped by type, with the blob to write for additions and modifications
pub type ActionsSet = HashMap<ActionType, Vec<(String, Option<ObjectId>)>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    actions: ActionsSet,
}

impl Default for Migration {
    fn default() -> Self {
        Self {
            actions: HashMap::from([
                (ActionType::Add, Vec::new()),
                (ActionType::Delete, Vec::new()),
                (ActionType::Modify, Vec::new()),
            ]),
        }
    }
}

impl Migration {
    /// Plan the move from the `old` snapshot to the `new` one
    ///
    /// Every file of `new` is written, even when its blob is unchanged, so local
    /// edits of tracked files are overwritten.
    pub fn between(old: &BTreeMap<String, ObjectId>, new: &BTreeMap<String, ObjectId>) -> Self {
        let mut migration = Migration::default();

        for (name, oid) in new {
            let action = if old.contains_key(name) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            migration.push(action, name.clone(), Some(oid.clone()));
        }

        for name in old.keys().filter(|name| !new.contains_key(*name)) {
            migration.push(ActionType::Delete, name.clone(), None);
        }

        migration
    }

    /// Also delete `name`, unless the plan already writes or deletes it
    pub fn add_delete(&mut self, name: String) {
        if !self.touches(&name) {
            self.push(ActionType::Delete, name, None);
        }
    }

    fn push(&mut self, action: ActionType, name: String, oid: Option<ObjectId>) {
        self.actions.entry(action).or_default().push((name, oid));
    }

    pub fn actions_of(&self, action: ActionType) -> &[(String, Option<ObjectId>)] {
        self.actions.get(&action).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn touches(&self, name: &str) -> bool {
        self.actions
            .values()
            .flatten()
            .any(|(planned, _)| planned == name)
    }

    /// Whether applying the plan would overwrite or remove `name`, directly
    /// or by replacing a directory that holds it
    pub fn collides_with(&self, name: &str) -> bool {
        self.touched_paths()
            .into_iter()
            .any(|planned| paths_overlap(planned, name))
    }

    /// Every path the plan writes or deletes
    pub fn touched_paths(&self) -> BTreeSet<&str> {
        self.actions
            .values()
            .flatten()
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Two working tree paths overlap when they are equal or one names a directory holding the other
pub fn paths_overlap(a: &str, b: &str) -> bool {
    fn nested(inner: &str, outer: &str) -> bool {
        inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    a == b || nested(a, b) || nested(b, a)
}
