use clubreg_core::ops::{club_ops, event_ops};
use clubreg_core::{Category, Club, ClubDraft, EventDraft, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Add a club with only name and district set
#[allow(dead_code)]
pub fn add_club(store: &mut Store, name: &str, district: &str) -> Club {
    club_ops::create_club(store, ClubDraft::new(name, district)).unwrap()
}

/// Add an event in the Zona category with no clubs
#[allow(dead_code)]
pub fn add_event(store: &mut Store, name: &str) {
    event_ops::create_event(
        store,
        EventDraft::new(name, "2024-01-01").with_category(Category::Zona),
    )
    .unwrap();
}

/// Names of a club view, in order
#[allow(dead_code)]
pub fn names<'a>(clubs: impl IntoIterator<Item = &'a Club>) -> Vec<String> {
    clubs.into_iter().map(|c| c.name.clone()).collect()
}
