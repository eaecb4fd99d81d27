/// Status filter selection
///
/// The selection starts at `All`, changes only on an explicit user
/// choice and is never persisted.

use super::catalog::Catalog;
use super::data::{Entry, Status};

/// One filter control: everything, or a single status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Status),
}

impl Filter {
    /// Filter controls in display order
    pub const OPTIONS: [Filter; 4] = [
        Filter::All,
        Filter::Only(Status::Found),
        Filter::Only(Status::Lost),
        Filter::Only(Status::PossibleLost),
    ];

    /// Whether an entry passes this filter
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(status) => entry.status == status,
        }
    }
}

/// Holds the current selection and derives the visible subset
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    selection: Filter,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Filter {
        self.selection
    }

    /// Replace the selection. Returns true if it actually changed.
    pub fn set_filter(&mut self, selection: Filter) -> bool {
        let changed = self.selection != selection;
        self.selection = selection;
        changed
    }

    /// Entries passing the current selection, in catalog order
    pub fn visible_entries<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Entry> {
        catalog
            .entries()
            .iter()
            .filter(|entry| self.selection.matches(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::tests::{catalog_from_statuses, sample_catalog, status_strategy};
    use proptest::prelude::*;

    fn titles<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_starts_at_all() {
        assert_eq!(FilterController::new().selection(), Filter::All);
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let catalog = sample_catalog();
        let controller = FilterController::new();

        let visible = controller.visible_entries(&catalog);
        assert_eq!(titles(&visible), ["Theme Park Tycoon 2", "Paintball Frenzy"]);
    }

    #[test]
    fn test_found_filter() {
        let catalog = sample_catalog();
        let mut controller = FilterController::new();
        controller.set_filter(Filter::Only(Status::Found));

        let visible = controller.visible_entries(&catalog);
        assert_eq!(titles(&visible), ["Theme Park Tycoon 2"]);
    }

    #[test]
    fn test_lost_filter_is_empty() {
        let catalog = sample_catalog();
        let mut controller = FilterController::new();
        controller.set_filter(Filter::Only(Status::Lost));

        assert!(controller.visible_entries(&catalog).is_empty());
    }

    #[test]
    fn test_set_filter_reports_change() {
        let mut controller = FilterController::new();

        assert!(!controller.set_filter(Filter::All));
        assert!(controller.set_filter(Filter::Only(Status::Lost)));
        assert!(!controller.set_filter(Filter::Only(Status::Lost)));
        assert!(controller.set_filter(Filter::All));
        assert_eq!(controller.selection(), Filter::All);
    }

    #[test]
    fn test_options_cover_every_status() {
        for status in Status::ALL {
            assert!(Filter::OPTIONS.contains(&Filter::Only(status)));
        }
        assert_eq!(Filter::OPTIONS[0], Filter::All);
    }

    proptest! {
        /// A status filter yields exactly the matching entries, in catalog order.
        #[test]
        fn status_filter_is_ordered_subset(
            statuses in proptest::collection::vec(status_strategy(), 0..48),
            selected in status_strategy(),
        ) {
            let catalog = catalog_from_statuses(&statuses);
            let mut controller = FilterController::new();
            controller.set_filter(Filter::Only(selected));

            let visible: Vec<_> = controller.visible_entries(&catalog).into_iter().cloned().collect();
            let expected: Vec<_> = catalog
                .entries()
                .iter()
                .filter(|entry| entry.status == selected)
                .cloned()
                .collect();

            prop_assert_eq!(visible, expected);
        }

        /// `All` is the identity view of the catalog.
        #[test]
        fn all_filter_is_identity(statuses in proptest::collection::vec(status_strategy(), 0..48)) {
            let catalog = catalog_from_statuses(&statuses);
            let controller = FilterController::new();

            let visible: Vec<_> = controller.visible_entries(&catalog).into_iter().cloned().collect();
            prop_assert_eq!(visible.as_slice(), catalog.entries());
        }
    }
}
