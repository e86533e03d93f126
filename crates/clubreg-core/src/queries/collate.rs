//! Locale-aware string ordering
//!
//! Approximates a root-locale collation for the Latin text stored in club
//! and district names: accents and case are ignored at the first level,
//! accents break ties next, then case with lowercase first.

use std::cmp::Ordering;

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(strip_accent)
}

/// Compare two strings the way a user-facing list should order them
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        // Lowercase sorts before uppercase at the last level
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_ignored_first() {
        assert_eq!(locale_cmp("alpha", "Beta"), Ordering::Less);
        assert_eq!(locale_cmp("Zeta", "beta"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(locale_cmp("Ángeles", "Bravo"), Ordering::Less);
        assert_eq!(locale_cmp("Guías", "Guiz"), Ordering::Less);
        assert_eq!(locale_cmp("Peña", "Pena"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_first_on_case_tie() {
        assert_eq!(locale_cmp("alpha", "Alpha"), Ordering::Less);
        assert_eq!(locale_cmp("Alpha", "Alpha"), Ordering::Equal);
    }

    #[test]
    fn test_digits_compare_as_text() {
        assert_eq!(locale_cmp("10. Placer Bonito", "2. Filipinas"), Ordering::Less);
    }
}
