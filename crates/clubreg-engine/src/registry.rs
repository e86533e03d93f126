//! Application-root registry object

use clubreg_core::errors::ExError;
use clubreg_core::{Club, Event, Store};
use clubreg_core_types::RequestId;
use clubreg_store::errors::Result;
use clubreg_store::repo::load_store;
use clubreg_store::KvStore;

/// Owns both collections and the backend they are persisted to
///
/// Reads are served from memory. Every mutation is applied in memory first
/// and then written through to `kv`; a failed write is reported but the
/// in-memory change is kept.
pub struct Registry<K: KvStore> {
    pub(crate) kv: K,
    pub(crate) store: Store,
    pub(crate) request_id: Option<RequestId>,
}

impl<K: KvStore> Registry<K> {
    /// Hydrate a registry from `kv`
    ///
    /// # Errors
    ///
    /// Fails when the backend cannot be read. Unreadable values load as
    /// empty collections instead.
    pub fn open(kv: K) -> Result<Self> {
        let store = load_store(&kv)?;
        tracing::debug!(
            club_count = store.clubs().len() as u64,
            event_count = store.events().len() as u64,
            "registry opened"
        );
        Ok(Self {
            kv,
            store,
            request_id: None,
        })
    }

    /// Tag errors raised by this registry with `request_id`
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Reload both collections from the backend, discarding in-memory state
    ///
    /// # Errors
    ///
    /// Fails when the backend cannot be read; the in-memory state is then
    /// left as it was.
    pub fn refresh(&mut self) -> Result<()> {
        self.store = load_store(&self.kv).map_err(|e| self.contextualize(e, "refresh"))?;
        Ok(())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn clubs(&self) -> &[Club] {
        self.store.clubs()
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// First club named `name`
    ///
    /// # Errors
    ///
    /// `NotFound` when no club has that name.
    pub fn find_club(&self, name: &str) -> Result<&Club> {
        self.store
            .get_club(name)
            .map_err(|e| self.contextualize(e.into(), "find_club"))
    }

    /// First event named `event_name`
    ///
    /// # Errors
    ///
    /// `NotFound` when no event has that name.
    pub fn find_event(&self, event_name: &str) -> Result<&Event> {
        self.store
            .get_event(event_name)
            .map_err(|e| self.contextualize(e.into(), "find_event"))
    }

    /// Fill in the operation (unless already set) and the request id
    pub(crate) fn contextualize(&self, err: ExError, op: &str) -> ExError {
        let err = if err.op().is_none() {
            err.with_op(op)
        } else {
            err
        };
        match &self.request_id {
            Some(request_id) => err.with_request_id(request_id.clone()),
            None => err,
        }
    }
}
