use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;

impl Repository {
    /// Create a branch pointing at the active commit
    ///
    /// The new branch is not checked out.
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let branch = self.branches_mut().create(branch_name)?;
        tracing::info!(
            branch = %branch.name(),
            head = %branch.head().to_short_oid(),
            "created branch"
        );

        Ok(())
    }

    /// Delete a branch; commits it pointed to stay in the store
    pub fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| GitletError::BranchNotFound)?;

        let branch = self.branches_mut().delete(&branch_name)?;
        tracing::info!(branch = %branch.name(), "deleted branch");

        Ok(())
    }
}
