//! Persisted progress record.
//!
//! The record is a flat JSON object: problem titles map to `true` once solved,
//! and the reserved `skill_level` key holds a free-text label. Every mutation
//! rewrites the whole file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ProgressError;

/// Reserved key holding the user's self-assessed skill level.
pub const SKILL_LEVEL_KEY: &str = "skill_level";

/// A single value in the progress record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressEntry {
    /// Solved flag for a problem title.
    Flag(bool),
    /// Free-text label (used for the skill level).
    Label(String),
}

/// Progress record backed by a JSON file.
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    entries: BTreeMap<String, ProgressEntry>,
}

impl ProgressStore {
    /// Load the record at `path`. A missing file yields an empty record; a
    /// file that does not parse is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProgressError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| ProgressError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| ProgressError::Corrupt {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "loaded progress");
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole record back to disk, overwriting the previous file.
    pub fn save(&self) -> Result<(), ProgressError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ProgressError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| ProgressError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "saved progress");
        Ok(())
    }

    /// Record `title` as solved and persist.
    ///
    /// A title equal to the reserved skill-level key is not recorded.
    pub fn mark_solved(&mut self, title: &str) -> Result<(), ProgressError> {
        if title == SKILL_LEVEL_KEY {
            warn!(title, "problem title collides with a reserved progress key, not recorded");
            return Ok(());
        }
        self.entries
            .insert(title.to_string(), ProgressEntry::Flag(true));
        self.save()
    }

    /// Record the skill level unless one is already stored, then persist.
    pub fn set_skill_level(&mut self, level: &str) -> Result<(), ProgressError> {
        self.entries
            .entry(SKILL_LEVEL_KEY.to_string())
            .or_insert_with(|| ProgressEntry::Label(level.to_string()));
        self.save()
    }

    /// The stored skill level, if any.
    pub fn skill_level(&self) -> Option<&str> {
        match self.entries.get(SKILL_LEVEL_KEY) {
            Some(ProgressEntry::Label(level)) => Some(level),
            _ => None,
        }
    }

    pub fn is_solved(&self, title: &str) -> bool {
        matches!(self.entries.get(title), Some(ProgressEntry::Flag(true)))
    }

    /// Titles whose stored value is exactly `true`, in key order.
    pub fn solved_titles(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, v)| matches!(v, ProgressEntry::Flag(true)))
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Raw entries, for inspection and round-trip checks.
    pub fn entries(&self) -> &BTreeMap<String, ProgressEntry> {
        &self.entries
    }
}
