//! Three-way merge resolution
//!
//! Every file tracked by the split point, the active head or the given branch
//! head is classified by comparing blob IDs against the split point:
//!
//! | split   | head        | other       | action      |
//! |---------|-------------|-------------|-------------|
//! | X       | X           | Y           | take other  |
//! | X       | Y           | X           | keep head   |
//! | X       | Y           | Z           | conflict    |
//! | X       | Y           | absent      | conflict    |
//! | X       | absent      | Y           | conflict    |
//! | absent  | absent      | Y           | take other  |
//! | X       | absent      | X           | remove      |
//! | X       | X           | absent      | remove      |
//!
//! Files that end up identical on both sides are left alone.

use crate::artifacts::checkout::migration::paths_overlap;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};

pub const CONFLICT_HEAD_MARKER: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_END_MARKER: &str = ">>>>>>>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Write the given branch's blob and stage it
    TakeOther(ObjectId),
    /// Delete the file and stage its removal
    Remove,
    /// Write conflict markers around both versions and stage the result
    Conflict {
        head: Option<ObjectId>,
        other: Option<ObjectId>,
    },
}

impl MergeAction {
    /// Classify one file from its blob IDs at the split point and both heads
    ///
    /// Returns `None` when the head version is kept as is.
    pub fn classify(
        split: Option<&ObjectId>,
        head: Option<&ObjectId>,
        other: Option<&ObjectId>,
    ) -> Option<Self> {
        if head == other {
            return None;
        }

        if split == head {
            return Some(match other {
                Some(other) => MergeAction::TakeOther(other.clone()),
                None => MergeAction::Remove,
            });
        }

        if split == other {
            return match (split, head) {
                (Some(_), None) => Some(MergeAction::Remove),
                _ => None,
            };
        }

        Some(MergeAction::Conflict {
            head: head.cloned(),
            other: other.cloned(),
        })
    }
}

/// Actions to apply for a merge, keyed by file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    actions: BTreeMap<String, MergeAction>,
}

impl MergePlan {
    pub fn resolve(
        split: &BTreeMap<String, ObjectId>,
        head: &BTreeMap<String, ObjectId>,
        other: &BTreeMap<String, ObjectId>,
    ) -> Self {
        let names = split
            .keys()
            .chain(head.keys())
            .chain(other.keys())
            .collect::<BTreeSet<_>>();

        let actions = names
            .into_iter()
            .filter_map(|name| {
                MergeAction::classify(split.get(name), head.get(name), other.get(name))
                    .map(|action| (name.clone(), action))
            })
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(
            files = actions.len(),
            conflicts = actions
                .values()
                .filter(|action| matches!(action, MergeAction::Conflict { .. }))
                .count(),
            "resolved merge plan"
        );

        MergePlan { actions }
    }

    pub fn actions(&self) -> &BTreeMap<String, MergeAction> {
        &self.actions
    }

    pub fn has_conflicts(&self) -> bool {
        self.actions
            .values()
            .any(|action| matches!(action, MergeAction::Conflict { .. }))
    }

    /// Whether applying the plan would overwrite or remove `name`, directly
    /// or by replacing a directory that holds it
    pub fn collides_with(&self, name: &str) -> bool {
        self.actions.keys().any(|planned| paths_overlap(planned, name))
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// File content recording both sides of a conflict
///
/// A missing side contributes no bytes.
pub fn conflict_content(head: &[u8], other: &[u8]) -> Vec<u8> {
    [
        CONFLICT_HEAD_MARKER.as_bytes(),
        head,
        CONFLICT_SEPARATOR.as_bytes(),
        other,
        CONFLICT_END_MARKER.as_bytes(),
    ]
    .concat()
}
