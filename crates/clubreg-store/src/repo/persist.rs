//! Whole-collection writes

use crate::codec::encode_collection;
use crate::errors::Result;
use crate::kv::KvStore;
use crate::repo::{CLUBS_KEY, EVENTS_KEY};
use clubreg_core::{Club, Event};

/// Replace the stored club collection
///
/// # Errors
///
/// Fails when encoding or the backend write fails.
pub fn save_clubs<K: KvStore + ?Sized>(kv: &mut K, clubs: &[Club]) -> Result<()> {
    let value = encode_collection(CLUBS_KEY, clubs)?;
    kv.set(CLUBS_KEY, &value)
}

/// Replace the stored event collection
///
/// # Errors
///
/// Fails when encoding or the backend write fails.
pub fn save_events<K: KvStore + ?Sized>(kv: &mut K, events: &[Event]) -> Result<()> {
    let value = encode_collection(EVENTS_KEY, events)?;
    kv.set(EVENTS_KEY, &value)
}

/// Drop the stored event collection entirely
///
/// # Errors
///
/// Fails when the backend write fails.
pub fn remove_events<K: KvStore + ?Sized>(kv: &mut K) -> Result<()> {
    kv.remove(EVENTS_KEY)
}
