use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::ModificationKind;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type ChangeSet = BTreeMap<String, ModificationKind>;
pub type FileSet = BTreeSet<String>;

/// Snapshot of the repository state reported by `status`
///
/// Every section is sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branches: Vec<BranchName>,
    pub(crate) active_branch: BranchName,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) modified_files: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.repository);
        let head = self.repository.head_commit()?;
        let workspace_files = self.repository.workspace().list_files()?;
        let stage = self.repository.stage();
        let branches = self.repository.branches();

        Ok(StatusInfo {
            branches: branches.names().cloned().collect(),
            active_branch: branches.active_name().clone(),
            staged_files: stage.additions().keys().cloned().collect(),
            removed_files: stage.removals().clone(),
            modified_files: inspector.modifications(&workspace_files, &head)?,
            untracked_files: inspector.untracked_files(&workspace_files, &head),
        })
    }
}

impl StatusInfo {
    fn write_section(
        f: &mut std::fmt::Formatter<'_>,
        title: &str,
        lines: impl Iterator<Item = String>,
    ) -> std::fmt::Result {
        writeln!(f, "=== {} ===", title)?;
        for line in lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::write_section(
            f,
            "Branches",
            self.branches.iter().map(|branch| {
                if branch == &self.active_branch {
                    format!("*{}", branch)
                } else {
                    branch.to_string()
                }
            }),
        )?;
        Self::write_section(f, "Staged Files", self.staged_files.iter().cloned())?;
        Self::write_section(f, "Removed Files", self.removed_files.iter().cloned())?;
        Self::write_section(
            f,
            "Modifications Not Staged For Commit",
            self.modified_files
                .iter()
                .map(|(name, change)| format!("{} {}", name, change)),
        )?;
        Self::write_section(f, "Untracked Files", self.untracked_files.iter().cloned())
    }
}
