use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::{Migration, paths_overlap};
use crate::artifacts::core::error::GitletError;
use crate::artifacts::status::inspector::Inspector;

impl Repository {
    /// Check out an arbitrary commit and move its branch's head there
    ///
    /// The commit's own branch becomes active when it still exists, otherwise
    /// the active branch is moved. Staged files the commit does not track are
    /// deleted along with files tracked only by the old head. Untracked files
    /// are deleted too, unless the commit would write over them.
    pub fn reset(&mut self, commit_id: &str) -> anyhow::Result<()> {
        let target_id = self.database().resolve_commit(commit_id)?;
        let target = self.database().load_commit(&target_id)?;

        let head = self.head_commit()?;
        let in_the_way = Inspector::new(self).files_in_the_way(&head)?;
        let overwritten = |name: &str| {
            target
                .files()
                .keys()
                .any(|tracked| paths_overlap(tracked, name))
        };
        if let Some(file) = in_the_way.iter().find(|name| overwritten(name.as_str())) {
            tracing::debug!(file = %file, "untracked file blocks reset");
            return Err(GitletError::UntrackedFileConflict.into());
        }

        let mut migration = Migration::between(head.files(), target.files());
        let staged_only = self
            .stage()
            .additions()
            .keys()
            .filter(|name| !target.tracks(name))
            .cloned()
            .collect::<Vec<_>>();
        for name in staged_only.into_iter().chain(in_the_way) {
            migration.add_delete(name);
        }
        self.migrate_working_tree(migration)?;

        let branch_name = if self.branches().contains(target.branch()) {
            target.branch().clone()
        } else {
            self.branches().active_name().clone()
        };
        self.branches_mut().activate(&branch_name)?;
        self.branches_mut().set_head(&branch_name, target_id.clone())?;

        tracing::info!(
            branch = %branch_name,
            head = %target_id.to_short_oid(),
            "reset branch"
        );

        Ok(())
    }
}
