//! clubreg core - in-memory domain kernel
//!
//! This crate provides the data structures and operations behind the club
//! and event registry:
//! - Club and Event models, with events holding club snapshots by value
//! - CRUD operations over an in-memory `Store`
//! - Read-only queries: search, locale-aware sort, attendance, statistics
//! - A `Command` inventory and the `apply()` functional boundary
//! - The error facility (`ExError`) and structured logging facility
//!
//! Persistence lives in `clubreg-store`; orchestration in `clubreg-engine`.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod queries;

// Re-export commonly used types
pub use apply::{apply, Changed, Outcome};
pub use commands::Command;
pub use errors::{ClubRegError, ExError, ExErrorKind, Result};
pub use model::{Category, Club, ClubDraft, Event, EventDraft, NO_SUBGROUP};
pub use ops::Store;
pub use policy::{AlwaysConfirm, DeletionConfirmer, NeverConfirm};
