//! Point-in-time view of a single commit

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

/// Identifier, author, message and timestamp of one commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSnapshot {
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl CommitSnapshot {
    pub fn from_commit(commit: &git2::Commit<'_>) -> Self {
        let author = commit.author();
        let time = commit.time();

        let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or(Utc.fix());
        let timestamp = DateTime::from_timestamp(time.seconds(), 0)
            .unwrap_or_default()
            .with_timezone(&offset);

        Self {
            id: commit.id().to_string(),
            author_name: String::from_utf8_lossy(author.name_bytes()).into_owned(),
            author_email: String::from_utf8_lossy(author.email_bytes()).into_owned(),
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            timestamp,
        }
    }

    /// Abbreviated object id
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }
}

/// Formatted like `git show -s`
impl std::fmt::Display for CommitSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "commit {}", self.id)?;
        writeln!(f, "Author: {} <{}>", self.author_name, self.author_email)?;
        writeln!(f, "Date:   {}", self.timestamp.format("%a %b %e %H:%M:%S %Y %z"))?;
        writeln!(f)?;
        for line in self.message.lines() {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }
}
