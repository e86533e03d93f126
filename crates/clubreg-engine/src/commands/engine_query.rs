//! Read-only views over the registry.
//!
//! Nothing here touches the backend; views borrow from the in-memory store.

use clubreg_core::queries::{self, ClubStats, SortKey};
use clubreg_core::Club;
use clubreg_store::errors::Result;
use clubreg_store::KvStore;

use crate::registry::Registry;

impl<K: KvStore> Registry<K> {
    /// Clubs whose name contains `query` (case-insensitive), optionally sorted
    ///
    /// A blank query returns every club in stored order.
    pub fn search_clubs(&self, query: &str, sort: Option<SortKey>) -> Vec<&Club> {
        let mut view = queries::search_clubs(self.store.clubs(), query);
        if let Some(key) = sort {
            queries::sort_clubs(&mut view, key);
        }
        view
    }

    /// Sub-group counts over the clubs matching `query`
    pub fn club_stats(&self, query: &str) -> ClubStats {
        queries::club_stats(queries::search_clubs(self.store.clubs(), query))
    }

    /// Clubs attached to the first event named `event_name` matching `query`
    ///
    /// # Errors
    ///
    /// `NotFound` when no event has that name.
    pub fn attendance(&self, event_name: &str, query: &str) -> Result<Vec<&Club>> {
        let event = self
            .store
            .get_event(event_name)
            .map_err(|e| self.contextualize(e.into(), "attendance"))?;
        Ok(queries::attendance(event, query))
    }
}
