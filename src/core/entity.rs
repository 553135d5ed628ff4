//! Lifecycle status and priority values for PRDs

use serde::{Deserialize, Serialize};

/// Lifecycle status of a PRD
///
/// Any status may follow any other; no transition rules are enforced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Status {
    #[default]
    Draft,
    InReview,
    Approved,
    InDevelopment,
    Testing,
    Implemented,
    Archived,
}

impl Status {
    /// All statuses in lifecycle order
    pub fn all() -> &'static [Status] {
        &[
            Status::Draft,
            Status::InReview,
            Status::Approved,
            Status::InDevelopment,
            Status::Testing,
            Status::Implemented,
            Status::Archived,
        ]
    }

    /// Stable name used in exports and analytics keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::InReview => "InReview",
            Status::Approved => "Approved",
            Status::InDevelopment => "InDevelopment",
            Status::Testing => "Testing",
            Status::Implemented => "Implemented",
            Status::Archived => "Archived",
        }
    }

    /// Single-glyph marker for dashboards
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Draft => "📝",
            Status::InReview => "👁",
            Status::Approved => "✅",
            Status::InDevelopment => "🔨",
            Status::Testing => "🧪",
            Status::Implemented => "⭐",
            Status::Archived => "📦",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "draft" => Ok(Status::Draft),
            "inreview" | "review" => Ok(Status::InReview),
            "approved" => Ok(Status::Approved),
            "indevelopment" | "development" => Ok(Status::InDevelopment),
            "testing" => Ok(Status::Testing),
            "implemented" => Ok(Status::Implemented),
            "archived" => Ok(Status::Archived),
            _ => Err(format!(
                "Unknown status: {} (valid: draft, in-review, approved, in-development, testing, implemented, archived)",
                s
            )),
        }
    }
}

/// Priority of a PRD
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities from lowest to highest
    pub fn all() -> &'static [Priority] {
        &[
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(format!(
                "Unknown priority: {} (valid: low, medium, high, critical)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_loose_spellings() {
        assert_eq!("in-review".parse::<Status>().unwrap(), Status::InReview);
        assert_eq!("InDevelopment".parse::<Status>().unwrap(), Status::InDevelopment);
        assert_eq!("in_development".parse::<Status>().unwrap(), Status::InDevelopment);
        assert_eq!("ARCHIVED".parse::<Status>().unwrap(), Status::Archived);
        assert!("shipped".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_display_matches_serde_name() {
        for status in Status::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(" High ".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Low < Priority::Medium);
    }
}
