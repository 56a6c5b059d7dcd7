// crates/atlas-core/src/text.rs

//! Name folding, slugs and number formatting shared by every module that
//! joins or displays volcano names.

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Ruíz` -> `Ruiz`)
/// 2\) Normalize to lowercase
/// 3\) Collapse runs of whitespace to a single space and trim
///
/// # Examples
///
/// ```rust
/// use atlas_core::text::fold_key;
///
/// assert_eq!(fold_key("  Nevado del   Ruíz "), "nevado del ruiz");
/// assert_eq!(fold_key("Eyjafjallajökull"), "eyjafjallajokull");
/// ```
pub fn fold_key(s: &str) -> String {
    let ascii = deunicode::deunicode(s).to_lowercase();
    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// ```rust
/// use atlas_core::text::equals_folded;
///
/// assert!(equals_folded("Kīlauea", "kilauea"));
/// assert!(!equals_folded("Etna", "Vesuvius"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Plain case-insensitive equality after trimming, without transliteration.
///
/// This is the matching rule of the geo dataset lookups: exact spelling,
/// any case.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Lowercase, hyphen-separated slug as used in page URLs
/// (`"Mount St. Helens"` -> `"mount-st.-helens"`).
///
/// Only whitespace is replaced, matching how the site builds links for
/// volcanoes and countries that have no curated page.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Inverse of the URL convention used for fallback pages: every `-` becomes
/// a space.
pub fn slug_to_name(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Groups the integer part of `n` with commas (`12345` -> `"12,345"`).
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders an elevation as `"3,776 m (12,388 ft)"`.
pub fn format_elevation(meters: f64) -> String {
    let m = meters.round() as i64;
    let ft = (meters * 3.28084).round() as i64;
    format!("{} m ({} ft)", group_thousands(m), group_thousands(ft))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_strips_accents_and_whitespace() {
        assert_eq!(fold_key("Cerro  Azul\t"), "cerro azul");
        assert_eq!(fold_key("Piton de la Fournaise"), "piton de la fournaise");
        assert_eq!(fold_key("Popocatépetl"), "popocatepetl");
    }

    #[test]
    fn slug_helpers() {
        assert_eq!(slugify("Mount Rainier"), "mount-rainier");
        assert_eq!(slugify("  Mauna   Loa "), "mauna-loa");
        assert_eq!(slug_to_name("mount-rainier"), "mount rainier");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn elevation_formatting() {
        assert_eq!(format_elevation(3776.0), "3,776 m (12,388 ft)");
        assert_eq!(format_elevation(0.0), "0 m (0 ft)");
    }

    #[test]
    fn ignore_case_is_not_accent_folding() {
        assert!(equals_ignore_case(" Etna", "ETNA "));
        assert!(!equals_ignore_case("Kīlauea", "kilauea"));
    }
}
