//! Fixed district list
//!
//! Clubs store the full label. Input may be the number (`"3"`), the full
//! label, or the label without its number prefix, compared case-insensitively.

use crate::errors::{ClubRegError, Result};

pub const DISTRICTS: [&str; 10] = [
    "1. Central",
    "2. Filipinas",
    "3. Villa Magdalena",
    "4. Restauracion",
    "5. Barrio Mexico",
    "6. Quisqueya",
    "7. Villa Progreso",
    "8. Sendero de Esperanza",
    "9. Sarmiento",
    "10. Placer Bonito",
];

/// Resolve user input to one of the district labels
///
/// # Errors
/// * `UnknownDistrict` - If the input matches no district
pub fn resolve_district(input: &str) -> Result<&'static str> {
    let needle = input.trim();

    if let Ok(number) = needle.parse::<usize>() {
        if (1..=DISTRICTS.len()).contains(&number) {
            return Ok(DISTRICTS[number - 1]);
        }
    }

    DISTRICTS
        .iter()
        .copied()
        .find(|label| {
            label.eq_ignore_ascii_case(needle)
                || label
                    .split_once(". ")
                    .is_some_and(|(_, bare)| bare.eq_ignore_ascii_case(needle))
        })
        .ok_or_else(|| ClubRegError::UnknownDistrict {
            input: input.to_string(),
        })
}
