use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::inspector::Inspector;

impl Repository {
    /// Switch to `branch_name`, rewriting the working tree to its head commit
    pub fn checkout_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| GitletError::NoSuchBranch)?;
        let target_id = self
            .branches()
            .get(&branch_name)
            .map(|branch| branch.head().clone())
            .ok_or(GitletError::NoSuchBranch)?;

        if self.branches().is_active(&branch_name) {
            return Err(GitletError::SameBranch.into());
        }

        let head = self.head_commit()?;
        self.ensure_nothing_in_the_way(&head)?;

        let target = self.database().load_commit(&target_id)?;
        self.migrate_working_tree(Migration::between(head.files(), target.files()))?;
        self.branches_mut().activate(&branch_name)?;

        tracing::info!(
            branch = %branch_name,
            head = %target_id.to_short_oid(),
            "switched branch"
        );

        Ok(())
    }

    /// Restore `path` from a commit, the head commit when none is given
    ///
    /// The staging area is left untouched.
    pub fn checkout_file(&mut self, commit_id: Option<&str>, path: &str) -> anyhow::Result<()> {
        let commit = match commit_id {
            Some(prefix) => {
                let commit_id = self.database().resolve_commit(prefix)?;
                self.database().load_commit(&commit_id)?
            }
            None => self.head_commit()?,
        };

        let name = self
            .workspace()
            .normalize_path(path)
            .ok_or(GitletError::FileNotInCommit)?;
        let blob_id = commit
            .blob_oid(&name)
            .ok_or(GitletError::FileNotInCommit)?;

        let blob = self.database().load_blob(blob_id)?;
        self.workspace().write_file(&name, blob.content())?;

        tracing::debug!(file = %name, blob = %blob_id.to_short_oid(), "restored file");

        Ok(())
    }

    /// Fail when a working tree file is neither tracked by `head` nor staged
    pub(crate) fn ensure_nothing_in_the_way(&self, head: &Commit) -> anyhow::Result<()> {
        let in_the_way = Inspector::new(self).files_in_the_way(head)?;

        if let Some(file) = in_the_way.first() {
            tracing::debug!(file = %file, "untracked file in the way");
            return Err(GitletError::UntrackedFileConflict.into());
        }

        Ok(())
    }

    /// Apply a migration to the working tree and clear the staging area
    pub(crate) fn migrate_working_tree(&mut self, migration: Migration) -> anyhow::Result<()> {
        self.workspace().apply_migration(&migration, self.database())?;
        self.stage_mut().clear();

        Ok(())
    }
}
