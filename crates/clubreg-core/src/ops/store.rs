use crate::errors::{ClubRegError, Result};
use crate::model::{Club, Event};

/// In-memory state of both collections
///
/// Ordered vectors, mirroring the persisted layout. Single-threaded;
/// all mutation goes through `club_ops` / `event_ops`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub(crate) clubs: Vec<Club>,
    pub(crate) events: Vec<Event>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-loaded collections
    pub fn from_parts(clubs: Vec<Club>, events: Vec<Event>) -> Self {
        Self { clubs, events }
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// First club with this exact name
    ///
    /// # Errors
    ///
    /// Returns `ClubNotFound` if no club has that name.
    pub fn get_club(&self, name: &str) -> Result<&Club> {
        self.clubs
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ClubRegError::ClubNotFound {
                club_name: name.to_string(),
            })
    }

    /// First event with this exact name
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if no event has that name.
    pub fn get_event(&self, event_name: &str) -> Result<&Event> {
        self.events
            .iter()
            .find(|e| e.event_name == event_name)
            .ok_or_else(|| ClubRegError::EventNotFound {
                event_name: event_name.to_string(),
            })
    }

}
