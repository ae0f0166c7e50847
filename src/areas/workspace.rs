use crate::areas::database::Database;
use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".gitlet"];

/// The working tree, addressed by repository-relative `/`-separated file names
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user-supplied path into a repository-relative file name
    ///
    /// Returns `None` for paths that leave the repository or point into `.gitlet`.
    pub fn normalize_path(&self, raw: &str) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        for component in Path::new(raw).components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().to_string()),
                Component::CurDir => {}
                Component::ParentDir => {
                    parts.pop()?;
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        match parts.first() {
            None => None,
            Some(first) if Self::is_ignored(first) => None,
            Some(_) => Some(parts.join("/")),
        }
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Every regular file in the working tree, outside `.gitlet`
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() != 1 || !Self::is_ignored(&entry.file_name().to_string_lossy())
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.context("Unable to walk the working directory")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(self.path.as_ref())
                .with_context(|| format!("{:?} is outside the workspace", entry.path()))?;
            let name = relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            files.push(name);
        }

        files.sort();
        Ok(files)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.full_path(name).is_file()
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.full_path(name))
            .with_context(|| format!("Failed to read file: {name}"))?;

        Ok(Bytes::from(content))
    }

    pub fn parse_blob(&self, name: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(name.to_string(), self.read_file(name)?))
    }

    /// Write a file, creating missing parent directories
    pub fn write_file(&self, name: &str, content: &[u8]) -> anyhow::Result<()> {
        let path = self.full_path(name);

        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove existing directory: {name}"))?;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create parent directories of {name}"))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {name}"))?;
        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {name}"))?;

        Ok(())
    }

    /// Delete a file if present and prune directories it leaves empty
    pub fn remove_file(&self, name: &str) -> anyhow::Result<()> {
        let path = self.full_path(name);
        if !path.is_file() {
            return Ok(());
        }

        std::fs::remove_file(&path).with_context(|| format!("Failed to remove file: {name}"))?;
        self.prune_empty_parent_dirs(&path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    // deletions first: a directory they leave empty may be replaced by a file
    pub fn apply_migration(
        &self,
        migration: &Migration,
        database: &Database,
    ) -> anyhow::Result<()> {
        for (name, _) in migration.actions_of(ActionType::Delete) {
            self.remove_file(name)?;
        }

        for action in [ActionType::Modify, ActionType::Add] {
            for (name, oid) in migration.actions_of(action) {
                let oid = oid
                    .as_ref()
                    .with_context(|| format!("No blob planned for {name}"))?;
                let blob = database.load_blob(oid)?;
                self.write_file(name, blob.content())?;
            }
        }

        tracing::debug!(
            files = migration.touched_paths().len(),
            "applied working tree migration"
        );

        Ok(())
    }
}
