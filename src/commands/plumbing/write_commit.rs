use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Create a commit on the active branch from its head and the staging area
    ///
    /// The new commit carries every file of its parent that is not marked for
    /// removal, with staged additions taking precedence. Merge commits pass the
    /// given branch's head as `second_parent` and may stage nothing.
    pub fn write_commit(
        &mut self,
        message: &str,
        second_parent: Option<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        if message.trim().is_empty() {
            return Err(GitletError::EmptyCommitMessage.into());
        }
        if self.stage().is_empty() && second_parent.is_none() {
            return Err(GitletError::NothingToCommit.into());
        }

        let parent_id = self.head_commit_id()?;
        let parent = self.database().load_commit(&parent_id)?;

        let mut files = parent.files().clone();
        for name in self.stage().removals() {
            files.remove(name);
        }
        for (name, content) in self.stage().additions() {
            let blob_id = self
                .database()
                .store(&Blob::new(name.clone(), content.clone()))?;
            files.insert(name.clone(), blob_id);
        }

        let branch = self.branches().active_name().clone();
        let commit = Commit::new(
            Some(parent_id),
            second_parent,
            branch.clone(),
            Commit::timestamp_from_env(),
            files,
            message.to_string(),
        );
        let commit_id = self.database().store(&commit)?;

        self.branches_mut().set_head(&branch, commit_id.clone())?;
        self.stage_mut().clear();

        tracing::info!(
            oid = %commit_id.to_short_oid(),
            branch = %branch,
            files = commit.files().len(),
            merge = commit.is_merge(),
            "created commit"
        );

        Ok(commit_id)
    }
}
