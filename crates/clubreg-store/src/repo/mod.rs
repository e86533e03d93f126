//! Loading and saving the registry's collections through a `KvStore`

mod hydration;
mod persist;

pub use hydration::{load_clubs, load_events, load_store};
pub use persist::{remove_events, save_clubs, save_events};

/// Key holding the club collection
pub const CLUBS_KEY: &str = "clubs";

/// Key holding the event collection
pub const EVENTS_KEY: &str = "events";
