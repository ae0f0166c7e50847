/// Unstaged change of a file the next commit would otherwise carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModificationKind {
    Modified,
    Deleted,
}

impl From<&ModificationKind> for &str {
    fn from(change: &ModificationKind) -> Self {
        match change {
            ModificationKind::Modified => "(modified)",
            ModificationKind::Deleted => "(deleted)",
        }
    }
}

impl std::fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label)
    }
}
