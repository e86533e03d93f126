//! Functional-boundary apply function
//!
//! `apply()` is the single entry point for mutating a `Store`.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: on `Ok` the returned store reflects the whole
//!   command; on `Err` nothing was changed and the caller keeps its state
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use clubreg_core::{apply, AlwaysConfirm, ClubDraft, Command, Outcome, Store};
//!
//! let cmd = Command::ClubCreate {
//!     draft: ClubDraft::new("Alpha", "1. Central"),
//! };
//! let (store, outcome) = apply(Store::new(), cmd, &AlwaysConfirm).unwrap();
//!
//! assert_eq!(store.clubs().len(), 1);
//! assert!(matches!(outcome, Outcome::ClubCreated(_)));
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::{Club, Event};
use crate::ops::{club_ops, event_ops, AttachOutcome, Store};
use crate::policy::DeletionConfirmer;

/// Which persisted collection a command changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Changed {
    Nothing,
    Clubs,
    Events,
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ClubCreated(Club),
    ClubsDeleted(usize),
    /// The confirmer declined; nothing was removed
    DeletionDeclined,
    EventCreated(Event),
    EventsDeleted(usize),
    ClubAttached,
    /// Warning: the club was already attached; nothing changed
    ClubAlreadyAttached,
    ClubsDetached(usize),
    EventsCleared(usize),
}

impl Outcome {
    /// Collection that needs to be written back
    ///
    /// Deletions that matched nothing still rewrite their collection, like
    /// every other confirmed mutation.
    pub fn changed(&self) -> Changed {
        match self {
            Outcome::ClubCreated(_) | Outcome::ClubsDeleted(_) => Changed::Clubs,
            Outcome::EventCreated(_)
            | Outcome::EventsDeleted(_)
            | Outcome::ClubAttached
            | Outcome::ClubsDetached(_)
            | Outcome::EventsCleared(_) => Changed::Events,
            Outcome::DeletionDeclined | Outcome::ClubAlreadyAttached => Changed::Nothing,
        }
    }

    /// True for outcomes the user should be warned about
    pub fn is_warning(&self) -> bool {
        matches!(self, Outcome::ClubAlreadyAttached)
    }
}

/// Apply a command to a store, returning the new state and what happened
///
/// # Errors
///
/// Returns the validation or lookup error of the underlying operation; the
/// store passed in is dropped unchanged in that case, so callers that need
/// to keep their state pass a clone.
pub fn apply(
    mut state: Store,
    cmd: Command,
    confirmer: &dyn DeletionConfirmer,
) -> Result<(Store, Outcome)> {
    let outcome = match cmd {
        Command::ClubCreate { draft } => {
            Outcome::ClubCreated(club_ops::create_club(&mut state, draft)?)
        }

        Command::ClubDelete { name } => {
            if confirmer.confirm_club_deletion(&name) {
                Outcome::ClubsDeleted(club_ops::delete_clubs_by_name(&mut state, &name))
            } else {
                Outcome::DeletionDeclined
            }
        }

        Command::EventCreate { draft } => {
            Outcome::EventCreated(event_ops::create_event(&mut state, draft)?)
        }

        Command::EventDelete { event_name } => {
            Outcome::EventsDeleted(event_ops::delete_events_by_name(&mut state, &event_name))
        }

        Command::EventAttachClub { event_name, club } => {
            match event_ops::attach_club(&mut state, &event_name, &club)? {
                AttachOutcome::Attached => Outcome::ClubAttached,
                AttachOutcome::AlreadyAttached => Outcome::ClubAlreadyAttached,
            }
        }

        Command::EventDetachClub {
            event_name,
            club_name,
        } => Outcome::ClubsDetached(event_ops::detach_club(
            &mut state,
            &event_name,
            &club_name,
        )?),

        Command::EventsClear => Outcome::EventsCleared(event_ops::clear_events(&mut state)),
    };

    Ok((state, outcome))
}
