use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::stage::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_table::BranchTable;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Directory holding all repository state
pub const GITLET_DIR: &str = ".gitlet";

/// Repository context
///
/// Loaded once per command, passed to every operation, and persisted once at
/// the end of a successful command.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    stage: StagingArea,
    branches: BranchTable,
}

impl Repository {
    pub(crate) fn assemble(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        branches: BranchTable,
    ) -> Self {
        let gitlet_path = path.join(GITLET_DIR);

        Repository {
            path: path.to_path_buf().into_boxed_path(),
            writer: RefCell::new(writer),
            database: Database::new(gitlet_path.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.to_path_buf().into_boxed_path()),
            refs: Refs::new(gitlet_path.clone().into_boxed_path()),
            stage: StagingArea::new(gitlet_path.join("index").into_boxed_path()),
            branches,
        }
    }

    /// Load the repository rooted at `path`
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;

        if !Self::is_initialized(&path) {
            return Err(GitletError::NotInitialized.into());
        }

        let refs = Refs::new(path.join(GITLET_DIR).into_boxed_path());
        let branches = refs.load_table()?;

        let mut repository = Self::assemble(&path, writer, branches);
        repository.stage.rehydrate()?;

        tracing::debug!(
            path = %repository.path.display(),
            branch = %repository.branches.active_name(),
            "opened repository"
        );

        Ok(repository)
    }

    pub fn is_initialized(path: &Path) -> bool {
        path.join(GITLET_DIR).is_dir()
    }

    /// Write the branch table, HEAD and staging area back to disk
    pub fn persist(&mut self) -> anyhow::Result<()> {
        self.refs.persist(&mut self.branches)?;

        if self.stage.is_changed() {
            self.stage.write_updates()?;
        }

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn stage(&self) -> &StagingArea {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut StagingArea {
        &mut self.stage
    }

    pub fn branches(&self) -> &BranchTable {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut BranchTable {
        &mut self.branches
    }

    /// ID of the active branch's head commit
    pub fn head_commit_id(&self) -> anyhow::Result<ObjectId> {
        Ok(self.branches.active()?.head().clone())
    }

    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        self.database.load_commit(&self.head_commit_id()?)
    }
}
