use crate::errors::{ClubRegError, Result};
use crate::model::{Category, Club, Event, EventDraft};

use super::store::Store;

/// Result of attaching a club to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// A copy of the club was appended
    Attached,
    /// A club with the same name was already attached; nothing changed
    AlreadyAttached,
}

/// Create an event and append it to the collection
///
/// Categories are deduplicated keeping first-occurrence order. The initial
/// club selection is stored as copies, one per club name. A blank description is stored as
/// absent.
///
/// # Returns
/// A copy of the stored event
///
/// # Errors
/// * `InvalidEvent` - If the name or date is blank or no category was chosen
pub fn create_event(store: &mut Store, draft: EventDraft) -> Result<Event> {
    if draft.event_name.trim().is_empty() {
        return Err(ClubRegError::InvalidEvent {
            reason: "Event name cannot be blank".to_string(),
        });
    }
    if draft.event_date.trim().is_empty() {
        return Err(ClubRegError::InvalidEvent {
            reason: "Event date cannot be blank".to_string(),
        });
    }
    if draft.categories.is_empty() {
        return Err(ClubRegError::InvalidEvent {
            reason: "At least one category is required".to_string(),
        });
    }

    let mut categories: Vec<Category> = Vec::with_capacity(draft.categories.len());
    for category in draft.categories {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    let mut clubs: Vec<Club> = Vec::with_capacity(draft.clubs.len());
    for club in draft.clubs {
        if !clubs.iter().any(|c| c.name == club.name) {
            clubs.push(club);
        }
    }

    let event = Event {
        event_name: draft.event_name.trim().to_string(),
        event_date: draft.event_date.trim().to_string(),
        event_description: draft
            .event_description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        categories,
        clubs,
    };
    store.events.push(event.clone());

    Ok(event)
}

/// Remove every event whose name equals `event_name`
///
/// # Returns
/// Number of events removed
pub fn delete_events_by_name(store: &mut Store, event_name: &str) -> usize {
    let before = store.events.len();
    store.events.retain(|e| e.event_name != event_name);
    before - store.events.len()
}

/// Remove all events
///
/// # Returns
/// Number of events removed
pub fn clear_events(store: &mut Store) -> usize {
    let removed = store.events.len();
    store.events.clear();
    removed
}

/// Attach a snapshot of `club` to every event named `event_name`
///
/// The duplicate check looks at the first event with that name only; when
/// it already lists the club nothing is changed.
///
/// # Errors
/// * `EventNotFound` - If no event has that name
pub fn attach_club(store: &mut Store, event_name: &str, club: &Club) -> Result<AttachOutcome> {
    if store.get_event(event_name)?.has_club(&club.name) {
        return Ok(AttachOutcome::AlreadyAttached);
    }

    for event in events_named(store, event_name) {
        event.clubs.push(club.clone());
    }
    Ok(AttachOutcome::Attached)
}

/// Remove every attached club named `club_name` from every event named
/// `event_name`
///
/// # Returns
/// Number of club entries removed, summed over those events
///
/// # Errors
/// * `EventNotFound` - If no event has that name
pub fn detach_club(store: &mut Store, event_name: &str, club_name: &str) -> Result<usize> {
    store.get_event(event_name)?;

    let mut removed = 0;
    for event in events_named(store, event_name) {
        let before = event.clubs.len();
        event.clubs.retain(|c| c.name != club_name);
        removed += before - event.clubs.len();
    }
    Ok(removed)
}

fn events_named<'a>(
    store: &'a mut Store,
    event_name: &'a str,
) -> impl Iterator<Item = &'a mut Event> {
    store
        .events
        .iter_mut()
        .filter(move |e| e.event_name == event_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClubDraft;

    fn camp() -> EventDraft {
        EventDraft::new("Camp", "2024-01-01").with_category(Category::Zona)
    }

    #[test]
    fn test_create_event_dedupes_categories() {
        let mut store = Store::new();
        let draft = camp()
            .with_category(Category::Guias)
            .with_category(Category::Zona);

        let event = create_event(&mut store, draft).unwrap();
        assert_eq!(event.categories, vec![Category::Zona, Category::Guias]);
    }

    #[test]
    fn test_create_event_keeps_one_snapshot_per_club_name() {
        let mut store = Store::new();
        let alpha = Club::from_draft(ClubDraft::new("Alpha", "1. Central"));
        let other_alpha = Club::from_draft(ClubDraft::new("Alpha", "2. Filipinas"));
        let beta = Club::from_draft(ClubDraft::new("Beta", "1. Central"));

        let event = create_event(
            &mut store,
            camp()
                .with_club(alpha.clone())
                .with_club(beta)
                .with_club(alpha)
                .with_club(other_alpha),
        )
        .unwrap();

        let names: Vec<&str> = event.clubs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(event.clubs[0].district, "1. Central");
    }

    #[test]
    fn test_blank_description_is_dropped() {
        let mut store = Store::new();
        let event = create_event(&mut store, camp().with_description("  ")).unwrap();
        assert_eq!(event.event_description, None);
    }

    #[test]
    fn test_attach_to_missing_event() {
        let mut store = Store::new();
        let club = Club::from_draft(ClubDraft::new("Alpha", "1. Central"));

        let result = attach_club(&mut store, "Camp", &club);
        assert!(matches!(result, Err(ClubRegError::EventNotFound { .. })));
    }

    #[test]
    fn test_detach_reports_count() {
        let mut store = Store::new();
        let club = Club::from_draft(ClubDraft::new("Alpha", "1. Central"));
        create_event(&mut store, camp().with_club(club)).unwrap();

        assert_eq!(detach_club(&mut store, "Camp", "Alpha").unwrap(), 1);
        assert_eq!(detach_club(&mut store, "Camp", "Alpha").unwrap(), 0);
        assert!(store.get_event("Camp").unwrap().clubs.is_empty());
    }

    #[test]
    fn test_clear_events() {
        let mut store = Store::new();
        create_event(&mut store, camp()).unwrap();
        create_event(&mut store, camp()).unwrap();

        assert_eq!(clear_events(&mut store), 2);
        assert!(store.events().is_empty());
    }
}
