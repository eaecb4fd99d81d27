/// Per-card expand/collapse state
///
/// Kept apart from `Entry` so the catalog stays immutable. A card that
/// is filtered out is unmounted and forgets its state; it comes back
/// collapsed.

use std::collections::HashMap;

use super::data::EntryId;

#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashMap<EntryId, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards start collapsed
    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    /// Flip one card and return its new state
    pub fn toggle(&mut self, id: EntryId) -> bool {
        let slot = self.expanded.entry(id).or_insert(false);
        *slot = !*slot;
        *slot
    }

    /// Drop state for every card that is no longer rendered
    pub fn retain_mounted(&mut self, mounted: impl IntoIterator<Item = EntryId>) {
        let mounted: Vec<EntryId> = mounted.into_iter().collect();
        self.expanded.retain(|id, _| mounted.contains(id));
    }
}
