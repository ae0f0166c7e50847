use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// One commit as shown by `log`
///
/// ```text
/// ===
/// commit <oid>
/// Merge: <parent7> <second-parent7>
/// Date: Thu Jan 1 00:00:00 1970 -0800
/// <message>
///
/// ```
///
/// The `Merge:` line is only present for merge commits.
#[derive(Debug, new)]
pub struct LogEntry<'c> {
    oid: &'c ObjectId,
    commit: &'c Commit,
}

impl std::fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===")?;
        writeln!(f, "commit {}", self.oid)?;
        if let (Some(parent), Some(second_parent)) =
            (self.commit.parent(), self.commit.second_parent())
        {
            writeln!(
                f,
                "Merge: {} {}",
                parent.to_short_oid(),
                second_parent.to_short_oid()
            )?;
        }
        writeln!(f, "Date: {}", self.commit.readable_timestamp())?;
        writeln!(f, "{}", self.commit.message())?;
        writeln!(f)
    }
}
