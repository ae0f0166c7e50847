use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;

impl Repository {
    /// Unstage `path`, and mark it for removal if the head commit tracks it
    ///
    /// A file marked for removal is also deleted from the working tree.
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let name = self
            .workspace()
            .normalize_path(path)
            .ok_or(GitletError::NothingToRemove)?;

        let unstaged = self.stage_mut().unstage(&name);
        let tracked = self.head_commit()?.tracks(&name);

        if tracked {
            self.stage_mut().mark_removed(&name);
            self.workspace().remove_file(&name)?;
        }

        if !unstaged && !tracked {
            return Err(GitletError::NothingToRemove.into());
        }

        tracing::debug!(file = %name, unstaged, tracked, "removed file");

        Ok(())
    }
}
