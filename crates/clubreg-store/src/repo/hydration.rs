//! Hydration layer - rebuilds an in-memory `Store` from the key-value backend
//!
//! Undecodable values yield empty collections (see `codec`); only backend
//! read failures are errors.

use crate::codec::decode_collection;
use crate::errors::Result;
use crate::kv::KvStore;
use crate::repo::{CLUBS_KEY, EVENTS_KEY};
use clubreg_core::{Club, Event, Store};

/// Load the club collection
///
/// # Errors
///
/// Fails when the backend cannot be read.
pub fn load_clubs<K: KvStore + ?Sized>(kv: &K) -> Result<Vec<Club>> {
    let raw = kv.get(CLUBS_KEY)?;
    Ok(decode_collection(CLUBS_KEY, raw.as_deref()).records)
}

/// Load the event collection
///
/// # Errors
///
/// Fails when the backend cannot be read.
pub fn load_events<K: KvStore + ?Sized>(kv: &K) -> Result<Vec<Event>> {
    let raw = kv.get(EVENTS_KEY)?;
    Ok(decode_collection(EVENTS_KEY, raw.as_deref()).records)
}

/// Load both collections into a fresh `Store`
///
/// # Errors
///
/// Fails when the backend cannot be read.
pub fn load_store<K: KvStore + ?Sized>(kv: &K) -> Result<Store> {
    let clubs = load_clubs(kv)?;
    let events = load_events(kv)?;
    tracing::debug!(clubs = clubs.len(), events = events.len(), "hydrated store");
    Ok(Store::from_parts(clubs, events))
}
