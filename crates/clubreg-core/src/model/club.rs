use serde::{Deserialize, Serialize};

/// Stored value of a sub-group field that was left blank
pub const NO_SUBGROUP: &str = "No tiene";

fn no_subgroup() -> String {
    NO_SUBGROUP.to_string()
}

/// Club - a registered youth-group unit
///
/// A club is identified by its `name` only; names are free text and are not
/// required to be unique. The three sub-group fields hold the user's text for
/// the Aventureros, Conquistadores and Guías units, or `NO_SUBGROUP`.
///
/// Events embed clubs by value, so `Clone` is the snapshot operation.
///
/// Older data may hold a club as a bare name string; it decodes as a club
/// with that name, no district and every sub-group set to `NO_SUBGROUP`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredClub")]
pub struct Club {
    pub name: String,

    /// One of the labels in `DISTRICTS`
    pub district: String,

    /// Aventureros sub-group
    pub aventu: String,

    /// Conquistadores sub-group
    pub conquis: String,

    /// Guías sub-group
    pub guia: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredClub {
    Name(String),
    Record(ClubRecord),
}

#[derive(Deserialize)]
struct ClubRecord {
    name: String,
    #[serde(default)]
    district: String,
    #[serde(default = "no_subgroup")]
    aventu: String,
    #[serde(default = "no_subgroup")]
    conquis: String,
    #[serde(default = "no_subgroup")]
    guia: String,
}

impl From<StoredClub> for Club {
    fn from(stored: StoredClub) -> Self {
        match stored {
            StoredClub::Name(name) => Self {
                name,
                district: String::new(),
                aventu: no_subgroup(),
                conquis: no_subgroup(),
                guia: no_subgroup(),
            },
            StoredClub::Record(record) => Self {
                name: record.name,
                district: record.district,
                aventu: record.aventu,
                conquis: record.conquis,
                guia: record.guia,
            },
        }
    }
}

impl Club {
    /// Build a club from a draft, normalizing blank sub-groups to `NO_SUBGROUP`
    ///
    /// Does not validate; see `club_ops::create_club`.
    pub fn from_draft(draft: ClubDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            district: draft.district.trim().to_string(),
            aventu: normalize_subgroup(draft.aventureros),
            conquis: normalize_subgroup(draft.conquistadores),
            guia: normalize_subgroup(draft.guias),
        }
    }

    pub fn has_aventureros(&self) -> bool {
        subgroup_present(&self.aventu)
    }

    pub fn has_conquistadores(&self) -> bool {
        subgroup_present(&self.conquis)
    }

    pub fn has_guias(&self) -> bool {
        subgroup_present(&self.guia)
    }
}

fn normalize_subgroup(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => no_subgroup(),
    }
}

fn subgroup_present(value: &str) -> bool {
    !value.is_empty() && value != NO_SUBGROUP
}

/// User input for a new club, before validation and normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubDraft {
    pub name: String,
    pub district: String,
    pub aventureros: Option<String>,
    pub conquistadores: Option<String>,
    pub guias: Option<String>,
}

impl ClubDraft {
    pub fn new(name: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            district: district.into(),
            ..Self::default()
        }
    }

    pub fn with_aventureros(mut self, value: impl Into<String>) -> Self {
        self.aventureros = Some(value.into());
        self
    }

    pub fn with_conquistadores(mut self, value: impl Into<String>) -> Self {
        self.conquistadores = Some(value.into());
        self
    }

    pub fn with_guias(mut self, value: impl Into<String>) -> Self {
        self.guias = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_fills_sentinel_for_blank_subgroups() {
        let club = Club::from_draft(ClubDraft::new("Alpha", "1. Central").with_guias("   "));

        assert_eq!(club.aventu, NO_SUBGROUP);
        assert_eq!(club.conquis, NO_SUBGROUP);
        assert_eq!(club.guia, NO_SUBGROUP);
        assert!(!club.has_aventureros());
        assert!(!club.has_guias());
    }

    #[test]
    fn test_from_draft_trims_values() {
        let club = Club::from_draft(
            ClubDraft::new("  Alpha ", " 1. Central").with_conquistadores(" 25 "),
        );

        assert_eq!(club.name, "Alpha");
        assert_eq!(club.district, "1. Central");
        assert_eq!(club.conquis, "25");
        assert!(club.has_conquistadores());
    }

    #[test]
    fn test_serialized_field_names() {
        let club = Club::from_draft(ClubDraft::new("Alpha", "1. Central").with_aventureros("12"));
        let value = serde_json::to_value(&club).unwrap();

        assert_eq!(value["name"], "Alpha");
        assert_eq!(value["district"], "1. Central");
        assert_eq!(value["aventu"], "12");
        assert_eq!(value["conquis"], NO_SUBGROUP);
        assert_eq!(value["guia"], NO_SUBGROUP);
    }

    #[test]
    fn test_legacy_record_without_subgroups_decodes_with_sentinel() {
        let club: Club = serde_json::from_str(r#"{"name":"Beta"}"#).unwrap();

        assert_eq!(club.name, "Beta");
        assert_eq!(club.district, "");
        assert_eq!(club.aventu, NO_SUBGROUP);
        assert!(!club.has_conquistadores());
    }

    #[test]
    fn test_bare_name_decodes_as_club() {
        let clubs: Vec<Club> =
            serde_json::from_str(r#"["Alpha", {"name":"Beta","district":"2. Filipinas"}]"#)
                .unwrap();

        assert_eq!(clubs[0].name, "Alpha");
        assert_eq!(clubs[0].district, "");
        assert_eq!(clubs[0].guia, NO_SUBGROUP);
        assert!(!clubs[0].has_aventureros());
        assert_eq!(clubs[1].district, "2. Filipinas");
    }

    #[test]
    fn test_record_without_name_is_rejected() {
        let result: std::result::Result<Club, _> = serde_json::from_str(r#"{"district":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_subgroup_counts_as_absent() {
        let mut club = Club::from_draft(ClubDraft::new("Alpha", "1. Central"));
        club.guia = String::new();
        assert!(!club.has_guias());
    }
}
