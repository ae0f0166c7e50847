use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::ModificationKind;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

// Terminology:
// - untracked files: files in the workspace that are neither staged nor carried by the head
//   commit (a file marked for removal is no longer carried)
// - files in the way: files in the workspace that are neither staged nor tracked by the head
//   commit; checkout, reset and merge refuse to overwrite them
// - modified files: files the next commit would carry whose workspace content differs
// - deleted files: files the next commit would carry that are missing from the workspace
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Check the workspace copy of `name` against a blob ID
    pub fn is_content_changed(&self, name: &str, oid: &ObjectId) -> anyhow::Result<bool> {
        let blob = self.repository.workspace().parse_blob(name)?;

        Ok(&blob.object_id()? != oid)
    }

    fn is_staged_content_changed(&self, name: &str) -> anyhow::Result<bool> {
        let stage = self.repository.stage();
        let content = self.repository.workspace().read_file(name)?;

        Ok(stage.staged_content(name) != Some(&content))
    }

    pub fn is_untracked(&self, name: &str, head: &Commit) -> bool {
        let stage = self.repository.stage();

        !stage.is_staged(name) && (!head.tracks(name) || stage.is_removed(name))
    }

    pub fn is_in_the_way(&self, name: &str, head: &Commit) -> bool {
        !self.repository.stage().is_staged(name) && !head.tracks(name)
    }

    pub fn untracked_files(
        &self,
        workspace_files: &[String],
        head: &Commit,
    ) -> BTreeSet<String> {
        workspace_files
            .iter()
            .filter(|name| self.is_untracked(name, head))
            .cloned()
            .collect()
    }

    pub fn files_in_the_way(&self, head: &Commit) -> anyhow::Result<Vec<String>> {
        Ok(self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|name| self.is_in_the_way(name, head))
            .collect())
    }

    /// Unstaged changes to files the next commit would carry
    pub fn modifications(
        &self,
        workspace_files: &[String],
        head: &Commit,
    ) -> anyhow::Result<BTreeMap<String, ModificationKind>> {
        let stage = self.repository.stage();
        let mut changes = BTreeMap::new();

        for name in workspace_files {
            let modified = if stage.is_staged(name) {
                self.is_staged_content_changed(name)?
            } else if let Some(oid) = head.blob_oid(name)
                && !stage.is_removed(name)
            {
                self.is_content_changed(name, oid)?
            } else {
                false
            };

            if modified {
                changes.insert(name.clone(), ModificationKind::Modified);
            }
        }

        let present = workspace_files
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>();
        let carried = stage.additions().keys().chain(
            head.files()
                .keys()
                .filter(|name| !stage.is_removed(name.as_str())),
        );
        for name in carried {
            if !present.contains(name.as_str()) {
                changes.insert(name.clone(), ModificationKind::Deleted);
            }
        }

        Ok(changes)
    }
}
