//! Registry mutations.
//!
//! Each mutation follows the same pipeline:
//! 1. `log_op_start!` (lookups a wrapper needs run after this)
//! 2. `apply()` against a copy of the in-memory store (validation errors stop here)
//! 3. Swap the new store in
//! 4. Write the changed collection back (`Outcome::changed`)
//! 5. `log_op_end!`, or `log_op_error!` if any step failed
//!
//! A write failure after step 3 is returned as an error, but the in-memory
//! store keeps the new state.

use std::time::Instant;

use clubreg_core::errors::{ExError, ExErrorKind};
use clubreg_core::{
    apply, AlwaysConfirm, Changed, Club, ClubDraft, Command, DeletionConfirmer, Event,
    EventDraft, Outcome,
};
use clubreg_core::{log_op_end, log_op_error, log_op_start};
use clubreg_store::errors::Result;
use clubreg_store::repo::{remove_events, save_clubs, save_events};
use clubreg_store::KvStore;

use crate::registry::Registry;

impl<K: KvStore> Registry<K> {
    /// Apply `cmd` and persist whatever it changed
    ///
    /// # Errors
    ///
    /// Validation and lookup errors leave the registry untouched. Backend
    /// write errors are returned after the in-memory state was updated.
    pub fn execute(&mut self, cmd: Command, confirmer: &dyn DeletionConfirmer) -> Result<Outcome> {
        let op = cmd.op_name();
        self.bracketed(op, |registry| registry.execute_impl(cmd, confirmer))
    }

    /// Run `f` between the start and end (or end_error) log events of `op`
    fn bracketed<F>(&mut self, op: &'static str, f: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Self) -> Result<Outcome>,
    {
        log_op_start!(op);
        let start = Instant::now();

        let outcome = f(self).map_err(|e| {
            let e = self.contextualize(e, op);
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            club_count = self.store.clubs().len() as u64,
            event_count = self.store.events().len() as u64
        );

        Ok(outcome)
    }

    fn execute_impl(&mut self, cmd: Command, confirmer: &dyn DeletionConfirmer) -> Result<Outcome> {
        let op = cmd.op_name();
        let (next, outcome) = apply(self.store.clone(), cmd, confirmer)?;
        self.store = next;

        match &outcome {
            Outcome::ClubAlreadyAttached => {
                tracing::warn!(op, "club already attached to the event, nothing changed");
            }
            Outcome::DeletionDeclined => {
                tracing::info!(op, "deletion declined, nothing removed");
            }
            _ => {}
        }

        self.persist(&outcome)?;
        Ok(outcome)
    }

    fn persist(&mut self, outcome: &Outcome) -> Result<()> {
        if let Outcome::EventsCleared(_) = outcome {
            return remove_events(&mut self.kv);
        }
        match outcome.changed() {
            Changed::Nothing => Ok(()),
            Changed::Clubs => save_clubs(&mut self.kv, self.store.clubs()),
            Changed::Events => save_events(&mut self.kv, self.store.events()),
        }
    }

    /// Register a club
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank name or district; write errors as `execute`.
    pub fn add_club(&mut self, draft: ClubDraft) -> Result<Club> {
        match self.execute(Command::ClubCreate { draft }, &AlwaysConfirm)? {
            Outcome::ClubCreated(club) => Ok(club),
            other => Err(unexpected("create_club", &other)),
        }
    }

    /// Delete every club named `name` once `confirmer` agrees
    ///
    /// Returns `ClubsDeleted(n)` or `DeletionDeclined`. Events keep their
    /// snapshots of deleted clubs.
    ///
    /// # Errors
    ///
    /// Write errors as `execute`.
    pub fn remove_club(&mut self, name: &str, confirmer: &dyn DeletionConfirmer) -> Result<Outcome> {
        self.execute(
            Command::ClubDelete {
                name: name.to_string(),
            },
            confirmer,
        )
    }

    /// Register an event
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank name or date or no categories; write
    /// errors as `execute`.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<Event> {
        match self.execute(Command::EventCreate { draft }, &AlwaysConfirm)? {
            Outcome::EventCreated(event) => Ok(event),
            other => Err(unexpected("create_event", &other)),
        }
    }

    /// Delete every event named `event_name`; returns how many were removed
    ///
    /// # Errors
    ///
    /// Write errors as `execute`.
    pub fn remove_event(&mut self, event_name: &str) -> Result<usize> {
        match self.execute(
            Command::EventDelete {
                event_name: event_name.to_string(),
            },
            &AlwaysConfirm,
        )? {
            Outcome::EventsDeleted(count) => Ok(count),
            other => Err(unexpected("delete_event", &other)),
        }
    }

    /// Attach a snapshot of the first club named `club_name` to every event
    /// named `event_name`
    ///
    /// Returns `ClubAttached`, or `ClubAlreadyAttached` when the first such
    /// event already lists the club (a warning, nothing written).
    ///
    /// # Errors
    ///
    /// `NotFound` when the event or the club does not exist; write errors
    /// as `execute`.
    pub fn attach_club(&mut self, event_name: &str, club_name: &str) -> Result<Outcome> {
        let op = "attach_club";
        self.bracketed(op, |registry| {
            registry
                .find_event(event_name)
                .map_err(|e| e.with_op(op))?;
            let club = registry
                .find_club(club_name)
                .map_err(|e| e.with_op(op))?
                .clone();
            registry.execute_impl(
                Command::EventAttachClub {
                    event_name: event_name.to_string(),
                    club,
                },
                &AlwaysConfirm,
            )
        })
    }

    /// Remove every club named `club_name` from every event named
    /// `event_name`; returns the count
    ///
    /// # Errors
    ///
    /// `NotFound` when the event does not exist; write errors as `execute`.
    pub fn detach_club(&mut self, event_name: &str, club_name: &str) -> Result<usize> {
        match self.execute(
            Command::EventDetachClub {
                event_name: event_name.to_string(),
                club_name: club_name.to_string(),
            },
            &AlwaysConfirm,
        )? {
            Outcome::ClubsDetached(count) => Ok(count),
            other => Err(unexpected("detach_club", &other)),
        }
    }

    /// Delete all events and drop the stored collection; returns the count
    ///
    /// # Errors
    ///
    /// Write errors as `execute`.
    pub fn clear_events(&mut self) -> Result<usize> {
        match self.execute(Command::EventsClear, &AlwaysConfirm)? {
            Outcome::EventsCleared(count) => Ok(count),
            other => Err(unexpected("clear_events", &other)),
        }
    }
}

fn unexpected(op: &str, outcome: &Outcome) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message(format!("unexpected outcome {:?}", outcome))
}
