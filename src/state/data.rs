/// Shared data structures for the application state
///
/// These structs represent the data model that flows from the
/// embedded catalog into the UI layer.

use serde::Deserialize;

/// Stable identity key of a catalog entry
pub type EntryId = u32;

/// Preservation state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Still playable or successfully archived
    Found,
    /// Confirmed lost and no longer accessible
    Lost,
    /// May be lost; needs further investigation
    PossibleLost,
}

impl Status {
    /// Every status, in canonical order
    pub const ALL: [Status; 3] = [Status::Found, Status::Lost, Status::PossibleLost];
}

/// Represents a single game in the archive
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    /// Unique identity key, also the card key in the view
    pub id: EntryId,
    /// Display title (never blank once validated)
    pub title: String,
    pub status: Status,
    /// Free text, shown only when the card is expanded
    pub description: String,
    /// Release year as text; may be "Unknown"
    #[serde(default)]
    pub year: Option<String>,
    /// Reserved for cover art, not rendered yet
    #[serde(default)]
    #[allow(dead_code)]
    pub image: Option<String>,
}

#[cfg(test)]
impl Entry {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        status: Status,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            description: description.into(),
            year: None,
            image: None,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let parsed: Vec<Status> =
            serde_json::from_str(r#"["found", "lost", "possible-lost"]"#).unwrap();
        assert_eq!(parsed, Status::ALL.to_vec());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let parsed = serde_json::from_str::<Status>(r#""archived""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let entry: Entry = serde_json::from_str(
            r#"{"id": 7, "title": "Work at a Pizza Place", "status": "found", "description": "Deliver pizzas."}"#,
        )
        .unwrap();

        assert_eq!(entry.year, None);
        assert_eq!(entry.image, None);
        assert_eq!(entry, Entry::new(7, "Work at a Pizza Place", Status::Found, "Deliver pizzas."));
    }
}
