// crates/atlas-core/src/traits.rs
use crate::text::{equals_ignore_case, fold_key};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Curated pages and geo features are maintained independently and only
/// share the volcano name, so every cross-dataset join goes through this
/// trait. Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: case-insensitive equality (dataset lookups)
/// - [`NameMatch::name_key`]: folded key used for merging
/// - [`NameMatch::name_contains`]: folded substring match
///
/// # Examples
/// ```rust
/// use atlas_core::traits::NameMatch;
///
/// struct Peak(&'static str);
/// impl NameMatch for Peak {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Peak("Fujisan").is_named("fujisan"));
/// assert_eq!(Peak("Nevado del  Ruíz").name_key(), "nevado del ruiz");
/// assert!(Peak("Eyjafjallajökull").name_contains("jokull"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive exact comparison (no transliteration).
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_ignore_case(self.name_str(), q)
    }

    /// Folded form of the name (accents stripped, lowercase, single spaces).
    #[inline]
    fn name_key(&self) -> String {
        fold_key(self.name_str())
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
