// crates/atlas-core/src/alias.rs

//! Country spellings that differ between the curated pages and the geo
//! dataset.
//!
//! Only the United States is known to be spelled differently today. This is
//! an explicit table, not a general normalization: a new variant needs a new
//! row here.

use crate::text::equals_ignore_case;

/// Groups of interchangeable country spellings; the first entry is canonical.
pub const COUNTRY_ALIASES: &[&[&str]] = &[&["United States", "USA", "U.S.A."]];

/// Canonical spelling of `country` if it belongs to an alias group.
pub fn canonical_country(country: &str) -> Option<&'static str> {
    COUNTRY_ALIASES
        .iter()
        .find(|group| group.iter().any(|alias| equals_ignore_case(alias, country)))
        .map(|group| group[0])
}

/// Case-insensitive country comparison that honours [`COUNTRY_ALIASES`].
///
/// ```rust
/// use atlas_core::alias::country_matches;
///
/// assert!(country_matches("United States", "USA"));
/// assert!(country_matches("japan", "Japan"));
/// assert!(!country_matches("Japan", "Japan Trench"));
/// ```
pub fn country_matches(query: &str, stored: &str) -> bool {
    if equals_ignore_case(query, stored) {
        return true;
    }
    match (canonical_country(query), canonical_country(stored)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_variants_match_each_other() {
        for a in ["United States", "united states", "USA", "U.S.A."] {
            for b in ["United States", "USA", "u.s.a."] {
                assert!(country_matches(a, b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn other_countries_need_equal_names() {
        assert!(country_matches("Italy", " italy "));
        assert!(!country_matches("Italy", "Italia"));
        assert!(!country_matches("USA", "Mexico"));
        assert_eq!(canonical_country("Chile"), None);
    }
}
