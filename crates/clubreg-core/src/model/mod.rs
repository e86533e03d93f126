pub mod category;
pub mod club;
pub mod district;
pub mod event;

pub use category::Category;
pub use club::{Club, ClubDraft, NO_SUBGROUP};
pub use district::{resolve_district, DISTRICTS};
pub use event::{Event, EventDraft};
