//! Name normalization for sort ordering.
//!
//! Producer and wine names in the source data mix accented and plain spellings
//! ("Clos d'Été" vs "Clos d'Ete") and three apostrophe variants (straight `'`,
//! curly `’`, backtick `` ` ``). [`sort_key`] folds these differences away so
//! that such names compare as equals; ties fall back to stable original order
//! at the call site.
//!
//! The key is used *only* for ordering. Filtering and display always work on
//! the original text.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Derive a locale-stable comparison key from a display name.
///
/// Pipeline: NFD-decompose, drop combining marks, collapse apostrophe variants
/// to `'`, lowercase.
///
/// # Example
/// ```
/// use cantina::sort_key;
///
/// assert_eq!(sort_key("Clos d’Été"), "clos d'ete");
/// assert_eq!(sort_key("Clos d'Ete"), sort_key("Clos d’Été"));
/// ```
pub fn sort_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if matches!(c, '\u{2019}' | '`') { '\'' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}
