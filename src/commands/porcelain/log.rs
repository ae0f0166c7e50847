use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::log::rev_list::{RevList, sort_newest_first};
use std::io::Write;

impl Repository {
    /// Show the first-parent history of the active branch
    pub fn log(&self) -> anyhow::Result<()> {
        let history = RevList::new(self.database(), self.head_commit_id()?);

        for entry in history {
            let (oid, commit) = entry?;
            write!(self.writer(), "{}", LogEntry::new(&oid, &commit))?;
        }

        Ok(())
    }

    /// Show every commit ever made, newest first
    pub fn global_log(&self) -> anyhow::Result<()> {
        let mut commits = self.database().all_commits()?;
        sort_newest_first(&mut commits);

        for (oid, commit) in &commits {
            write!(self.writer(), "{}", LogEntry::new(oid, commit))?;
        }

        Ok(())
    }

    /// Print the ID of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let mut commits = self.database().all_commits()?;
        sort_newest_first(&mut commits);

        let matches = commits
            .iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(GitletError::NoCommitWithMessage.into());
        }

        for oid in matches {
            writeln!(self.writer(), "{}", oid)?;
        }

        Ok(())
    }
}
