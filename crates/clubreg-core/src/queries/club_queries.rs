use std::str::FromStr;

use crate::errors::ClubRegError;
use crate::model::Club;

use super::collate::locale_cmp;

/// Sort criteria for club lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    District,
}

impl FromStr for SortKey {
    type Err = ClubRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "district" => Ok(SortKey::District),
            _ => Err(ClubRegError::UnknownSortKey {
                input: s.to_string(),
            }),
        }
    }
}

/// Case-insensitive substring match on a club name
pub(crate) fn name_matches(club: &Club, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || club.name.to_lowercase().contains(&query.to_lowercase())
}

/// Filter clubs by name; a blank query keeps every club
///
/// Accepts any view (`&[Club]`, or `view.iter().copied()` over `Vec<&Club>`),
/// preserving its order.
pub fn search_clubs<'a>(clubs: impl IntoIterator<Item = &'a Club>, query: &str) -> Vec<&'a Club> {
    clubs
        .into_iter()
        .filter(|club| name_matches(club, query))
        .collect()
}

/// Sort a club view in place
///
/// Stable, so equal keys keep their previous relative order.
pub fn sort_clubs(view: &mut [&Club], key: SortKey) {
    match key {
        SortKey::Name => view.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::District => view.sort_by(|a, b| locale_cmp(&a.district, &b.district)),
    }
}
