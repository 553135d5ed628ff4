//! PRD entity type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::core::entity::{Priority, Status};
use crate::core::identity::PrdId;

/// Upper bound of the completion percentage
pub const MAX_COMPLETION: u8 = 100;

/// A Product Requirements Document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prd {
    /// Unique identifier
    pub id: PrdId,

    /// Short title
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Author (person or team)
    pub author: String,

    /// Current lifecycle status
    #[serde(default)]
    pub status: Status,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,

    /// Completion, always within 0..=100
    #[serde(default, deserialize_with = "deserialize_completion")]
    pub completion_percentage: u8,

    /// Normalized tags in insertion order, no duplicates
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Prd {
    /// Create a new PRD in Draft with Medium priority and a fresh id
    pub fn new(title: impl Into<String>, description: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_id(PrdId::generate(), title, description, author)
    }

    /// Create a new PRD with a caller-chosen id
    pub fn with_id(
        id: PrdId,
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            author: author.into(),
            status: Status::default(),
            priority: Priority::default(),
            created_at: now,
            updated_at: now,
            completion_percentage: 0,
            tags: Vec::new(),
        }
    }

    /// Change the status; any status may follow any other
    pub fn update_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.touch();
    }

    /// Set completion, silently clamping into 0..=100
    pub fn set_completion_percentage(&mut self, value: i64) {
        self.completion_percentage = value.clamp(0, MAX_COMPLETION as i64) as u8;
        self.touch();
    }

    /// Add a tag after trimming and lowercasing it
    ///
    /// Returns `false` (and leaves the record untouched) when the normalized
    /// tag is empty or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        if tag.is_empty() || self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.touch();
        true
    }

    /// Check for a tag (normalized comparison)
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        self.tags.iter().any(|t| *t == tag)
    }

    /// Case-insensitive substring match on title, description or any tag
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.tags.iter().any(|t| t.contains(&term))
    }

    /// Why this PRD looks stalled or neglected, if it does
    ///
    /// Flags work in development below 50%, work in testing below 80%,
    /// and critical PRDs still sitting in draft.
    pub fn attention_reason(&self) -> Option<&'static str> {
        match (self.status, self.priority) {
            (Status::InDevelopment, _) if self.completion_percentage < 50 => {
                Some("in development below 50%")
            }
            (Status::Testing, _) if self.completion_percentage < 80 => Some("in testing below 80%"),
            (Status::Draft, Priority::Critical) => Some("critical priority still in draft"),
            _ => None,
        }
    }

    /// e.g. "65% complete"
    pub fn progress_description(&self) -> String {
        format!("{}% complete", self.completion_percentage)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Prd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PRD{{ID='{}', Title='{}', Status={}, Completion={}%}}",
            self.id, self.title, self.status, self.completion_percentage
        )
    }
}

/// Clamp any integer completion into 0..=100 while deserializing
fn deserialize_completion<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(0, MAX_COMPLETION as i64) as u8)
}

/// Trim and lowercase a tag
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}
