//! PRD collection manager
//!
//! Owns every PRD in creation order plus an id index for O(1) lookup.
//! The collection is append-only: there is no delete, and `Archived` is
//! just another status.

use std::collections::HashMap;
use thiserror::Error;

use crate::core::analytics::{Analytics, CompletionStats};
use crate::core::entity::{Priority, Status};
use crate::core::identity::PrdId;
use crate::entities::prd::{normalize_tag, Prd};

/// Errors reported by [`PrdManager`] operations
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("no PRD found with id '{0}'")]
    NotFound(String),

    #[error("duplicate PRD id '{0}' in snapshot")]
    DuplicateId(String),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// In-memory PRD store
///
/// Not synchronized; wrap in a mutex if it has to be shared across threads.
#[derive(Debug, Default)]
pub struct PrdManager {
    records: Vec<Prd>,
    /// id -> position in `records`
    index: HashMap<PrdId, usize>,
}

impl PrdManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a Draft/Medium PRD and return its id
    pub fn create_record(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> PrdId {
        let id = self.fresh_id();
        let prd = Prd::with_id(id.clone(), title, description, author);
        tracing::info!(id = %id, title = %prd.title, "PRD created");
        self.insert(prd);
        id
    }

    /// Look up a PRD by id
    ///
    /// The `PRD-` prefix is matched case-insensitively, like [`PrdId::parse`].
    pub fn get(&self, id: &str) -> Option<&Prd> {
        self.position(id).map(|pos| &self.records[pos])
    }

    /// All PRDs in creation order
    pub fn records(&self) -> &[Prd] {
        &self.records
    }

    /// Owned copy of all PRDs in creation order
    pub fn all(&self) -> Vec<Prd> {
        self.records.clone()
    }

    pub fn by_status(&self, status: Status) -> Vec<&Prd> {
        self.records.iter().filter(|p| p.status == status).collect()
    }

    pub fn by_priority(&self, priority: Priority) -> Vec<&Prd> {
        self.records.iter().filter(|p| p.priority == priority).collect()
    }

    /// Case-insensitive substring search over title, description and tags
    ///
    /// An empty term matches every record.
    pub fn search(&self, term: &str) -> Vec<&Prd> {
        self.records.iter().filter(|p| p.matches(term)).collect()
    }

    pub fn update_status(&mut self, id: &str, status: Status) -> Result<(), ManagerError> {
        let prd = self.get_mut(id)?;
        prd.update_status(status);
        tracing::info!(id = %id, status = %status, "PRD status updated");
        Ok(())
    }

    pub fn update_priority(&mut self, id: &str, priority: Priority) -> Result<(), ManagerError> {
        self.get_mut(id)?.set_priority(priority);
        tracing::debug!(id = %id, priority = %priority, "PRD priority updated");
        Ok(())
    }

    /// Set completion by id; out-of-range values are clamped
    pub fn update_completion(&mut self, id: &str, value: i64) -> Result<(), ManagerError> {
        self.get_mut(id)?.set_completion_percentage(value);
        Ok(())
    }

    /// Add a tag by id; `Ok(false)` when the tag was empty or already present
    pub fn add_tag(&mut self, id: &str, tag: &str) -> Result<bool, ManagerError> {
        Ok(self.get_mut(id)?.add_tag(tag))
    }

    /// Recompute analytics from the current records
    pub fn analytics(&self) -> Analytics {
        Analytics::compute(&self.records)
    }

    pub fn completion_stats(&self) -> CompletionStats {
        CompletionStats::compute(&self.records)
    }

    /// Most recently updated first; equal timestamps keep creation order
    pub fn recently_updated(&self, limit: usize) -> Vec<&Prd> {
        let mut recent: Vec<&Prd> = self.records.iter().collect();
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent.truncate(limit);
        recent
    }

    /// PRDs that look stalled or neglected
    pub fn needing_attention(&self) -> Vec<&Prd> {
        self.records
            .iter()
            .filter(|p| p.attention_reason().is_some())
            .collect()
    }

    /// Average completion per status, every status included
    pub fn status_progress(&self) -> Vec<(Status, f64)> {
        Status::all()
            .iter()
            .map(|&status| {
                let matching = self.by_status(status);
                let avg = if matching.is_empty() {
                    0.0
                } else {
                    matching
                        .iter()
                        .map(|p| f64::from(p.completion_percentage))
                        .sum::<f64>()
                        / matching.len() as f64
                };
                (status, avg)
            })
            .collect()
    }

    /// Serialize all PRDs, in creation order, as pretty JSON
    pub fn export_json(&self) -> Result<String, ManagerError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Replace the collection with the PRDs of an exported snapshot
    ///
    /// Completion values are clamped while parsing and tags re-normalized.
    /// The manager is unchanged if the snapshot is rejected.
    pub fn import_json(&mut self, json: &str) -> Result<usize, ManagerError> {
        let incoming: Vec<Prd> = serde_json::from_str(json)?;

        let mut records = Vec::with_capacity(incoming.len());
        let mut index = HashMap::with_capacity(incoming.len());
        for mut prd in incoming {
            if index.contains_key(&prd.id) {
                return Err(ManagerError::DuplicateId(prd.id.to_string()));
            }
            prd.tags = dedupe_tags(&prd.tags);
            index.insert(prd.id.clone(), records.len());
            records.push(prd);
        }

        tracing::debug!(count = records.len(), "imported PRD snapshot");
        self.records = records;
        self.index = index;
        Ok(self.records.len())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Prd, ManagerError> {
        match self.position(id) {
            Some(pos) => Ok(&mut self.records[pos]),
            None => Err(ManagerError::NotFound(id.to_string())),
        }
    }

    /// Exact match first, then the canonical form of a parseable id
    fn position(&self, id: &str) -> Option<usize> {
        if let Some(&pos) = self.index.get(id) {
            return Some(pos);
        }
        let canonical = PrdId::parse(id).ok()?;
        self.index.get(&canonical).copied()
    }

    fn insert(&mut self, prd: Prd) {
        self.index.insert(prd.id.clone(), self.records.len());
        self.records.push(prd);
    }

    fn fresh_id(&self) -> PrdId {
        let mut id = PrdId::generate();
        while self.index.contains_key(&id) {
            tracing::warn!(id = %id, "PRD id collision, drawing a new suffix");
            id = PrdId::generate();
        }
        id
    }
}

fn dedupe_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags.iter().map(|t| normalize_tag(t)) {
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
