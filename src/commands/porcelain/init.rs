use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branch_table::BranchTable;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::fs;
use std::path::Path;

impl Repository {
    /// Create a repository at `path` holding only the root commit on `master`
    pub fn init(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if Self::is_initialized(path) {
            return Err(GitletError::AlreadyInitialized.into());
        }

        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;

        let root = Commit::root(BranchName::default_branch());
        let branches = BranchTable::initial(root.object_id()?);
        let mut repository = Self::assemble(&path, writer, branches);

        fs::create_dir_all(repository.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;
        fs::create_dir_all(repository.refs().heads_path())
            .context("Failed to create .gitlet/refs/heads directory")?;

        repository.database().store(&root)?;
        repository.persist()?;

        tracing::info!(path = %repository.path().display(), "initialized repository");

        Ok(repository)
    }
}
