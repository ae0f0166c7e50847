//! Commit object
//!
//! A commit is a snapshot of the whole tracked file set. It records:
//! - Zero, one or two parent commit IDs (two only for merge commits)
//! - The branch it was authored on
//! - A timestamp
//! - One blob ID per tracked file
//! - The commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! parent <second-parent-sha>
//! branch <branch-name>
//! date <unix-seconds> <timezone>
//! file <blob-sha> <file-name>
//! file <blob-sha> <file-name>
//!
//! <commit message>
//! ```
//!
//! The root commit has no parent lines and is always dated at the Unix epoch,
//! so every repository starts from the same root commit ID.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Environment variable overriding the commit timestamp
pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";

/// Message of the commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Offset label every log date carries
const DISPLAY_UTC_OFFSET: &str = "-0800";

/// Slim representation of a commit
///
/// Contains only the lineage, which is all the split-point search needs.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    /// The commit's object ID
    pub oid: ObjectId,
    /// First parent, then second parent for merge commits
    pub parents: Vec<ObjectId>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parent: Option<ObjectId>,
    second_parent: Option<ObjectId>,
    branch: BranchName,
    timestamp: DateTime<FixedOffset>,
    /// File name to blob ID, one entry per tracked file
    files: BTreeMap<String, ObjectId>,
    message: String,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        second_parent: Option<ObjectId>,
        branch: BranchName,
        timestamp: DateTime<FixedOffset>,
        files: BTreeMap<String, ObjectId>,
        message: String,
    ) -> Self {
        Commit {
            parent,
            second_parent,
            branch,
            timestamp,
            files,
            message,
        }
    }

    /// The parentless commit every repository starts from
    pub fn root(branch: BranchName) -> Self {
        Commit::new(
            None,
            None,
            branch,
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            BTreeMap::new(),
            ROOT_COMMIT_MESSAGE.to_string(),
        )
    }

    /// Timestamp for a new commit
    ///
    /// Reads `GITLET_COMMIT_DATE` (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`) and falls
    /// back to the current local time.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    /// Format timestamp the way log entries show it
    ///
    /// Wall-clock fields at the commit's own offset followed by a fixed `-0800`
    /// label, so the root commit reads "Thu Jan 1 00:00:00 1970 -0800"
    pub fn readable_timestamp(&self) -> String {
        format!(
            "{} {DISPLAY_UTC_OFFSET}",
            self.timestamp.format("%a %b %-d %H:%M:%S %Y")
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn second_parent(&self) -> Option<&ObjectId> {
        self.second_parent.as_ref()
    }

    pub fn parents(&self) -> Vec<ObjectId> {
        self.parent
            .iter()
            .chain(self.second_parent.iter())
            .cloned()
            .collect()
    }

    pub fn is_merge(&self) -> bool {
        self.second_parent.is_some()
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn files(&self) -> &BTreeMap<String, ObjectId> {
        &self.files
    }

    pub fn tracks(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn blob_oid(&self, name: &str) -> Option<&ObjectId> {
        self.files.get(name)
    }

    pub fn to_slim(&self) -> anyhow::Result<SlimCommit> {
        Ok(SlimCommit {
            oid: self.object_id()?,
            parents: self.parents(),
        })
    }
}

fn format_offset(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;

    format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
}

fn parse_offset(raw: &str) -> anyhow::Result<FixedOffset> {
    let invalid = || anyhow::anyhow!("Invalid timezone: {raw}");

    let (sign, digits) = match raw.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => return Err(invalid()),
    };
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[..2].parse()?;
    let minutes: i32 = digits[2..].parse()?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        for parent in self.parents() {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!("branch {}", self.branch));
        object_content.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            format_offset(self.timestamp.offset())
        ));
        for (name, oid) in &self.files {
            object_content.push(format!("file {} {}", oid.as_ref(), name));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        Ok(self.object_type().frame(object_content.as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let (headers, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut branch = None;
        let mut timestamp = None;
        let mut files = BTreeMap::new();

        for line in headers.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {line:?}"))?;

            match key {
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "branch" => branch = Some(BranchName::try_parse(value.to_string())?),
                "date" => {
                    let (seconds, offset) = value
                        .split_once(' ')
                        .context("Invalid commit object: invalid date line")?;
                    let offset = parse_offset(offset)?;
                    let seconds = seconds
                        .parse::<i64>()
                        .context("Invalid commit object: invalid timestamp")?;
                    let datetime = offset
                        .timestamp_opt(seconds, 0)
                        .single()
                        .context("Invalid commit object: timestamp out of range")?;
                    timestamp = Some(datetime);
                }
                "file" => {
                    let (oid, name) = value
                        .split_once(' ')
                        .context("Invalid commit object: invalid file line")?;
                    files.insert(name.to_string(), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown header {key:?}"),
            }
        }

        if parents.len() > 2 {
            anyhow::bail!("Invalid commit object: too many parents");
        }
        let mut parents = parents.into_iter();

        Ok(Commit::new(
            parents.next(),
            parents.next(),
            branch.context("Invalid commit object: missing branch line")?,
            timestamp.context("Invalid commit object: missing date line")?,
            files,
            message.to_string(),
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
