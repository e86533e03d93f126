use crate::errors::{ClubRegError, Result};
use crate::model::{Club, ClubDraft};

use super::store::Store;

/// Create a club and append it to the collection
///
/// Blank sub-group fields are stored as `NO_SUBGROUP`. Duplicate names are
/// accepted.
///
/// # Returns
/// A copy of the stored club
///
/// # Errors
/// * `InvalidClub` - If name or district is blank; the store is unchanged
pub fn create_club(store: &mut Store, draft: ClubDraft) -> Result<Club> {
    if draft.name.trim().is_empty() {
        return Err(ClubRegError::InvalidClub {
            reason: "Club name cannot be blank".to_string(),
        });
    }
    if draft.district.trim().is_empty() {
        return Err(ClubRegError::InvalidClub {
            reason: "Club district cannot be blank".to_string(),
        });
    }

    let club = Club::from_draft(draft);
    store.clubs.push(club.clone());

    Ok(club)
}

/// Remove every club whose name equals `name`
///
/// Confirmation is the caller's concern (see `policy::DeletionConfirmer`).
///
/// # Returns
/// Number of clubs removed (zero when none matched)
pub fn delete_clubs_by_name(store: &mut Store, name: &str) -> usize {
    let before = store.clubs.len();
    store.clubs.retain(|c| c.name != name);
    before - store.clubs.len()
}
