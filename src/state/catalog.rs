use std::collections::HashSet;

use super::data::{Entry, EntryId, Status};
use crate::error::CatalogError;

/// Catalog data compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// The Catalog is the fixed, ordered list of archive entries.
///
/// It is validated once at startup and never mutated afterwards.
/// Insertion order is display order; entries are never re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

/// Summary counters derived from a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub found: usize,
    pub lost: usize,
    pub possible_lost: usize,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank titles.
    pub fn new(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if entry.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { id: entry.id });
            }
        }

        Ok(Self { entries })
    }

    /// Parse a JSON array of entries and validate it
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load the catalog embedded at build time
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All entries in display order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its identity key
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of entries with the given status
    pub fn count(&self, status: Status) -> usize {
        self.entries.iter().filter(|entry| entry.status == status).count()
    }

    /// Recompute the summary counters.
    ///
    /// Counters are never cached so they stay correct if the catalog
    /// ever stops being a compile-time constant.
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.len(),
            found: self.count(Status::Found),
            lost: self.count(Status::Lost),
            possible_lost: self.count(Status::PossibleLost),
        }
    }
}

impl Summary {
    /// Counter for a single status
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Found => self.found,
            Status::Lost => self.lost,
            Status::PossibleLost => self.possible_lost,
        }
    }
}
