pub mod club_ops;
pub mod event_ops;
pub mod store;

pub use event_ops::AttachOutcome;
pub use store::Store;
