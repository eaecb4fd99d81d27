/// Error types for the archive viewer
///
/// Nothing in normal operation can fail once the window is up: the catalog
/// is validated before the first frame and every status lookup is an
/// exhaustive match. These errors cover startup only.

use std::path::PathBuf;
use thiserror::Error;

use crate::state::data::EntryId;

/// Data-integrity violations in a catalog definition
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share the same identity key
    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),

    /// An entry has no displayable title
    #[error("entry {id} has an empty title")]
    EmptyTitle { id: EntryId },

    /// The embedded catalog is not valid JSON for the entry model
    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Problems reading the optional settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level startup failure
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("window runtime failed: {0}")]
    Ui(#[from] iced::Error),
}
