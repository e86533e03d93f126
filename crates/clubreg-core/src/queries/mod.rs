//! Read-only views over the collections
//!
//! Nothing here mutates or persists; results borrow from the store.

pub mod attendance;
pub mod club_queries;
pub mod collate;
pub mod stats;

pub use attendance::attendance;
pub use club_queries::{search_clubs, sort_clubs, SortKey};
pub use stats::{club_stats, ClubStats};
