/// State management module
///
/// This module holds everything the view reads from, including:
/// - The entry model and status taxonomy (data.rs)
/// - The immutable, validated catalog and its counters (catalog.rs)
/// - The status filter selection (filter.rs)
/// - Per-card expand/collapse state (expansion.rs)

pub mod data;
pub mod catalog;
pub mod filter;
pub mod expansion;

pub use catalog::{Catalog, Summary};
pub use data::{Entry, EntryId, Status};
pub use expansion::ExpansionState;
pub use filter::{Filter, FilterController};
