use crate::model::{Club, Event};

use super::club_queries::name_matches;

/// Clubs attending `event` whose name contains `query` (case-insensitive)
///
/// A blank query returns every attached club in attachment order.
pub fn attendance<'a>(event: &'a Event, query: &str) -> Vec<&'a Club> {
    event
        .clubs
        .iter()
        .filter(|club| name_matches(club, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ClubDraft};

    #[test]
    fn test_attendance_filters_attached_clubs() {
        let event = Event {
            event_name: "Camp".to_string(),
            event_date: "2024-01-01".to_string(),
            event_description: None,
            categories: vec![Category::Zona],
            clubs: vec![
                Club::from_draft(ClubDraft::new("Alpha", "1. Central")),
                Club::from_draft(ClubDraft::new("Beta", "2. Filipinas")),
            ],
        };

        assert_eq!(attendance(&event, "").len(), 2);
        let found = attendance(&event, "bet");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Beta");
        assert!(attendance(&event, "gamma").is_empty());
    }
}
