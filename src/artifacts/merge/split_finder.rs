//! Split point search
//!
//! The split point of two branch tips is a commit reachable from both of them,
//! used as the base of a three-way merge.
//!
//! ## Algorithm
//!
//! 1. Collect every ancestor of the *given* tip (the tip itself included),
//!    following first and second parents.
//! 2. Walk back from the *active* tip one generation at a time. The next
//!    generation lists the first parents of every commit in the current one,
//!    in order, followed by their second parents.
//! 3. The first commit of the walk that belongs to the ancestor set of step 1
//!    is the split point.
//!
//! In histories with several criss-crossing merges the result is a common
//! ancestor, but not necessarily the unique lowest one.
//!
//! The finder is generic over how commits are loaded, so it runs against the
//! object database as well as against an in-memory graph.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

pub struct SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    /// Function to load the lineage of any given commit
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    /// Creates a new finder with the given commit loader function
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let finder = SplitPointFinder::new(|oid| database.load_commit(oid)?.to_slim());
    /// ```
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Every commit reachable from `tip`, `tip` included
    pub fn ancestors(&self, tip: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut ancestors = HashSet::new();
        let mut pending = vec![tip.clone()];

        while let Some(oid) = pending.pop() {
            if !ancestors.insert(oid.clone()) {
                continue;
            }

            let commit = (self.commit_loader)(&oid)?;
            pending.extend(
                commit
                    .parents
                    .into_iter()
                    .filter(|parent| !ancestors.contains(parent)),
            );
        }

        Ok(ancestors)
    }

    /// Split point of the active tip and the given tip
    pub fn find_split_point(
        &self,
        active_tip: &ObjectId,
        given_tip: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let given_ancestors = self.ancestors(given_tip)?;

        let mut visited = HashSet::from([active_tip.clone()]);
        let mut frontier = vec![active_tip.clone()];
        let mut generation = 0usize;

        while !frontier.is_empty() {
            if let Some(split) = frontier.iter().find(|oid| given_ancestors.contains(*oid)) {
                tracing::debug!(
                    split = %split.to_short_oid(),
                    generation,
                    "found split point"
                );
                return Ok(Some(split.clone()));
            }

            let mut first_parents = Vec::new();
            let mut second_parents = Vec::new();
            for oid in &frontier {
                let mut parents = (self.commit_loader)(oid)?.parents.into_iter();
                first_parents.extend(parents.next());
                second_parents.extend(parents);
            }

            frontier = first_parents
                .into_iter()
                .chain(second_parents)
                .filter(|parent| visited.insert(parent.clone()))
                .collect();
            generation += 1;
        }

        Ok(None)
    }
}
