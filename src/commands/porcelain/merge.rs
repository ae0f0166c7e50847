use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::merge::resolution::{MergeAction, MergePlan, conflict_content};
use crate::artifacts::merge::split_finder::SplitPointFinder;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use bytes::Bytes;
use std::io::Write;

pub const FAST_FORWARD_NOTICE: &str = "Current branch fast-forwarded.";
pub const CONFLICT_NOTICE: &str = "Encountered a merge conflict.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The active branch moved to the given branch's head, no commit was made
    FastForward(ObjectId),
    /// A merge commit was recorded
    Merged { commit: ObjectId, conflicts: bool },
}

impl Repository {
    /// Merge the head of `branch_name` into the active branch
    ///
    /// Every precondition is checked before the working tree is touched.
    pub fn merge(&mut self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        if !self.stage().is_empty() {
            return Err(GitletError::UncommittedChanges.into());
        }

        let branch_name = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| GitletError::BranchNotFound)?;
        let other_id = self
            .branches()
            .get(&branch_name)
            .map(|branch| branch.head().clone())
            .ok_or(GitletError::BranchNotFound)?;

        if self.branches().is_active(&branch_name) {
            return Err(GitletError::CannotMergeSelf.into());
        }

        let head_id = self.head_commit_id()?;
        let split_id = self.find_split_point(&head_id, &other_id)?;

        if split_id == other_id {
            return Err(GitletError::AlreadyUpToDate.into());
        }

        let head = self.database().load_commit(&head_id)?;
        let other = self.database().load_commit(&other_id)?;

        if split_id == head_id {
            return self.fast_forward(&head, &other, other_id);
        }

        let split = self.database().load_commit(&split_id)?;
        let plan = MergePlan::resolve(split.files(), head.files(), other.files());

        let inspector = Inspector::new(self);
        let in_the_way = inspector.files_in_the_way(&head)?;
        if in_the_way.iter().any(|name| plan.collides_with(name)) {
            return Err(GitletError::UntrackedFileConflict.into());
        }

        self.apply_merge_plan(&plan)?;

        let active_name = self.branches().active_name().clone();
        let message = format!("Merged {} into {}.", branch_name, active_name);
        let commit = self.write_commit(&message, Some(other_id))?;

        let conflicts = plan.has_conflicts();
        if conflicts {
            writeln!(self.writer(), "{}", CONFLICT_NOTICE)?;
        }

        tracing::info!(
            given = %branch_name,
            split = %split_id.to_short_oid(),
            commit = %commit.to_short_oid(),
            conflicts,
            "merged branch"
        );

        Ok(MergeOutcome::Merged { commit, conflicts })
    }

    fn find_split_point(
        &self,
        head_id: &ObjectId,
        other_id: &ObjectId,
    ) -> anyhow::Result<ObjectId> {
        let finder = SplitPointFinder::new(|oid| self.database().load_commit(oid)?.to_slim());

        finder
            .find_split_point(head_id, other_id)?
            .ok_or_else(|| anyhow::anyhow!("{head_id} and {other_id} share no ancestor"))
    }

    fn fast_forward(
        &mut self,
        head: &Commit,
        other: &Commit,
        other_id: ObjectId,
    ) -> anyhow::Result<MergeOutcome> {
        let migration = Migration::between(head.files(), other.files());

        let in_the_way = Inspector::new(self).files_in_the_way(head)?;
        if in_the_way.iter().any(|name| migration.collides_with(name)) {
            return Err(GitletError::UntrackedFileConflict.into());
        }

        self.migrate_working_tree(migration)?;
        let active_name = self.branches().active_name().clone();
        self.branches_mut().set_head(&active_name, other_id.clone())?;

        writeln!(self.writer(), "{}", FAST_FORWARD_NOTICE)?;
        tracing::info!(
            branch = %active_name,
            head = %other_id.to_short_oid(),
            "fast-forwarded branch"
        );

        Ok(MergeOutcome::FastForward(other_id))
    }

    fn apply_merge_plan(&mut self, plan: &MergePlan) -> anyhow::Result<()> {
        for (name, action) in plan.actions() {
            match action {
                MergeAction::TakeOther(blob_id) => {
                    let content = self.database().load_blob(blob_id)?.into_content();
                    self.workspace().write_file(name, &content)?;
                    self.stage_mut().stage(name, content);
                }
                MergeAction::Remove => {
                    self.workspace().remove_file(name)?;
                    self.stage_mut().mark_removed(name);
                }
                MergeAction::Conflict { head, other } => {
                    let content = Bytes::from(conflict_content(
                        &self.blob_content(head.as_ref())?,
                        &self.blob_content(other.as_ref())?,
                    ));
                    self.workspace().write_file(name, &content)?;
                    self.stage_mut().stage(name, content);
                    tracing::debug!(file = %name, "conflicting changes");
                }
            }
        }

        Ok(())
    }

    fn blob_content(&self, blob_id: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match blob_id {
            Some(blob_id) => Ok(self.database().load_blob(blob_id)?.into_content()),
            None => Ok(Bytes::new()),
        }
    }
}
