use serde::{Deserialize, Serialize};

use super::category::Category;
use super::club::Club;

/// Event - a scheduled gathering with an attendee list
///
/// `clubs` holds snapshots taken when each club was attached. Later
/// deletions from the club collection never reach these copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_name: String,

    /// Free text, not validated as a calendar date
    pub event_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub clubs: Vec<Club>,
}

impl Event {
    /// Check whether a club with this name is already attached
    pub fn has_club(&self, club_name: &str) -> bool {
        self.clubs.iter().any(|c| c.name == club_name)
    }

    pub fn club_count(&self) -> usize {
        self.clubs.len()
    }

    /// Comma-separated category labels
    pub fn category_labels(&self) -> String {
        self.categories
            .iter()
            .map(Category::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// User input for a new event
///
/// `clubs` is the initial selection; each entry is stored as a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub event_name: String,
    pub event_date: String,
    pub event_description: Option<String>,
    pub categories: Vec<Category>,
    pub clubs: Vec<Club>,
}

impl EventDraft {
    pub fn new(event_name: impl Into<String>, event_date: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            event_date: event_date.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.event_description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_club(mut self, club: Club) -> Self {
        self.clubs.push(club);
        self
    }
}
