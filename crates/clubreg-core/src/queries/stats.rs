use crate::model::Club;

/// Sub-group counts over a club view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClubStats {
    pub total: usize,
    pub aventureros: usize,
    pub conquistadores: usize,
    pub guias: usize,
}

/// Count clubs that have each sub-group
///
/// A sub-group counts when its field is non-empty and not `NO_SUBGROUP`.
pub fn club_stats<'a>(clubs: impl IntoIterator<Item = &'a Club>) -> ClubStats {
    clubs.into_iter().fold(ClubStats::default(), |mut acc, club| {
        acc.total += 1;
        acc.aventureros += usize::from(club.has_aventureros());
        acc.conquistadores += usize::from(club.has_conquistadores());
        acc.guias += usize::from(club.has_guias());
        acc
    })
}
