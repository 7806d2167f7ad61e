use crate::error::FormatError;
use chrono::{
    DateTime, Local, LocalResult, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Active,
    Completed,
    Archived,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Completed => "completed",
            Status::Archived => "archived",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "completed" => Ok(Status::Completed),
            "archived" => Ok(Status::Archived),
            other => Err(FormatError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(FormatError::UnknownPriority(other.to_string())),
        }
    }
}

/// Current time at the precision the notes file stores.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// `None` until the note is inserted into a collection.
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    pub status: Status,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now();
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            status: Status::default(),
            priority: Priority::default(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Changes the status and refreshes `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = now().max(self.updated_at);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match against title, content and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    pub fn to_record(&self) -> NoteRecord {
        NoteRecord {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            status: self.status.as_str().to_string(),
            priority: self.priority.as_str().to_string(),
            tags: self.tags.clone(),
            created_at: format_timestamp(&self.created_at),
            updated_at: format_timestamp(&self.updated_at),
        }
    }

    pub fn from_record(record: NoteRecord) -> Result<Self, FormatError> {
        if record.title.trim().is_empty() {
            return Err(FormatError::EmptyTitle);
        }
        let status = record.status.parse()?;
        let priority = record.priority.parse()?;
        let created_at = parse_timestamp("created_at", &record.created_at)?;
        let updated_at = parse_timestamp("updated_at", &record.updated_at)?;
        if updated_at < created_at {
            return Err(FormatError::TimestampOrder {
                created_at: record.created_at,
                updated_at: record.updated_at,
            });
        }

        Ok(Self {
            id: record.id,
            title: record.title,
            content: record.content,
            status,
            priority,
            tags: record.tags,
            created_at,
            updated_at,
        })
    }
}

/// The persisted shape of a note: one object in the notes file array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    pub status: String,
    pub priority: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Microsecond precision, or nanoseconds when a loaded timestamp carries them.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    let precision = if ts.timestamp_subsec_nanos() % 1_000 == 0 {
        SecondsFormat::Micros
    } else {
        SecondsFormat::Nanos
    };
    ts.to_rfc3339_opts(precision, true)
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, FormatError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    // Files written by earlier versions carry naive local times
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| resolve_local(Local.from_local_datetime(&naive), &naive))
        .ok_or_else(|| FormatError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

/// Ambiguous local times take the earlier instant. Times skipped by a DST
/// transition have no local instant and are read as UTC.
fn resolve_local<Tz: TimeZone>(
    local: LocalResult<DateTime<Tz>>,
    naive: &NaiveDateTime,
) -> DateTime<Utc> {
    local
        .earliest()
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}
