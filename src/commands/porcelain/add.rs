use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Stage the working copy of `path`
    ///
    /// Adding a file marked for removal only cancels the removal. Adding a file
    /// whose content matches the head commit drops any staged copy instead.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let name = self
            .workspace()
            .normalize_path(path)
            .filter(|name| self.workspace().exists(name))
            .ok_or(GitletError::FileNotFound)?;

        if self.stage_mut().unmark_removed(&name) {
            tracing::debug!(file = %name, "cancelled pending removal");
            return Ok(());
        }

        let blob = self.workspace().parse_blob(&name)?;
        let head = self.head_commit()?;

        if head.blob_oid(&name) == Some(&blob.object_id()?) {
            self.stage_mut().unstage(&name);
            tracing::debug!(file = %name, "content matches head, nothing to stage");
        } else {
            self.stage_mut().stage(&name, blob.into_content());
            tracing::debug!(file = %name, "staged file");
        }

        Ok(())
    }
}
