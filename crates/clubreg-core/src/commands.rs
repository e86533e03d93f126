//! Command inventory
//!
//! Every mutation of the registry, as data. Processed by `apply()`.

use crate::model::{Club, ClubDraft, EventDraft};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new club
    ClubCreate { draft: ClubDraft },

    /// Delete every club with this name (confirmation required)
    ClubDelete { name: String },

    /// Register a new event
    EventCreate { draft: EventDraft },

    /// Delete every event with this name (no confirmation)
    EventDelete { event_name: String },

    /// Attach a snapshot of `club` to an event
    EventAttachClub { event_name: String, club: Club },

    /// Remove a club, by name, from an event's attendee list
    EventDetachClub {
        event_name: String,
        club_name: String,
    },

    /// Delete all events
    EventsClear,
}

impl Command {
    /// Stable operation name used in logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::ClubCreate { .. } => "create_club",
            Command::ClubDelete { .. } => "delete_club",
            Command::EventCreate { .. } => "create_event",
            Command::EventDelete { .. } => "delete_event",
            Command::EventAttachClub { .. } => "attach_club",
            Command::EventDetachClub { .. } => "detach_club",
            Command::EventsClear => "clear_events",
        }
    }
}
