//! Aggregate statistics recomputed from the full record set

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::prd::Prd;

/// Summary statistics over a set of PRDs
///
/// Derived data: rebuilt from scratch on every request, never updated
/// incrementally. Count maps only contain keys that actually occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_count: usize,
    pub status_counts: BTreeMap<String, usize>,
    pub priority_counts: BTreeMap<String, usize>,
    pub average_completion: f64,
    /// Records per author, untruncated
    pub top_authors: BTreeMap<String, usize>,
    /// Records carrying each tag
    pub tag_frequency: BTreeMap<String, usize>,
    pub last_updated: DateTime<Utc>,
}

impl Analytics {
    /// Single pass over `records`
    pub fn compute(records: &[Prd]) -> Self {
        let mut status_counts = BTreeMap::new();
        let mut priority_counts = BTreeMap::new();
        let mut top_authors = BTreeMap::new();
        let mut tag_frequency = BTreeMap::new();
        let mut total_completion: u64 = 0;

        for prd in records {
            *status_counts.entry(prd.status.to_string()).or_insert(0) += 1;
            *priority_counts.entry(prd.priority.to_string()).or_insert(0) += 1;
            *top_authors.entry(prd.author.clone()).or_insert(0) += 1;
            for tag in &prd.tags {
                *tag_frequency.entry(tag.clone()).or_insert(0) += 1;
            }
            total_completion += u64::from(prd.completion_percentage);
        }

        let average_completion = if records.is_empty() {
            0.0
        } else {
            total_completion as f64 / records.len() as f64
        };

        tracing::debug!(records = records.len(), "recomputed analytics");

        Self {
            total_count: records.len(),
            status_counts,
            priority_counts,
            average_completion,
            top_authors,
            tag_frequency,
            last_updated: Utc::now(),
        }
    }

    /// Authors by record count, highest first, ties alphabetical
    pub fn ranked_authors(&self, limit: usize) -> Vec<(&str, usize)> {
        rank(&self.top_authors, limit)
    }

    /// Tags by frequency, highest first, ties alphabetical
    pub fn ranked_tags(&self, limit: usize) -> Vec<(&str, usize)> {
        rank(&self.tag_frequency, limit)
    }
}

fn rank(counts: &BTreeMap<String, usize>, limit: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    // Stable sort keeps the alphabetical order of the map for equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Minimum, maximum and mean completion
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionStats {
    pub min: u8,
    pub max: u8,
    pub average: f64,
}

impl CompletionStats {
    /// All zero for an empty slice
    pub fn compute(records: &[Prd]) -> Self {
        let mut values = records.iter().map(|p| p.completion_percentage);
        let Some(first) = values.next() else {
            return Self::default();
        };

        let (min, max, sum) = values.fold(
            (first, first, u64::from(first)),
            |(min, max, sum), v| (min.min(v), max.max(v), sum + u64::from(v)),
        );

        Self {
            min,
            max,
            average: sum as f64 / records.len() as f64,
        }
    }
}
