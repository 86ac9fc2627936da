//! Multi-criterion filtering over the catalog.
//!
//! Two entry points with overlapping semantics that must stay consistent:
//!
//! - [`quick_filter_with`]: one free-text box plus a field scope. Under scope
//!   `All` the text matches name OR producer; `Name`/`Producer` restrict it to
//!   one field.
//! - [`advanced_filter_with`]: independent substring filters on `name` and
//!   `producer`, ANDed together. The AND-vs-OR difference from quick search is
//!   intentional: advanced search narrows on multiple fields simultaneously.
//!
//! Shared semantics: text matches are case-insensitive substrings; country is
//! an exact, case-sensitive match on `origin`; the vegan toggle defers to the
//! classifier; all active criteria are ANDed, and application order does not
//! affect the result. Both functions are total and preserve catalog order
//! (stable filter, no re-sort). Zero matches is a valid output, not an error.

use super::criteria::{self, CriteriaMask};
use crate::classify::VeganClassifier;
use crate::{AdvancedQuery, Catalog, FilteredView, QuickQuery, SearchScope};

/// Case-insensitive substring test. `needle` must already be lowercased.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Apply a quick-search query to `catalog`, producing a new view.
pub fn quick_filter_with(catalog: &Catalog, query: &QuickQuery, classifier: &dyn VeganClassifier) -> FilteredView {
    let mask = criteria::scan_quick(query);
    let debug = std::env::var_os("CANTINA_DEBUG_FILTER").is_some();
    if debug {
        eprintln!("[quick_filter] criteria={mask:?} scope={:?}", query.scope);
    }

    let needle = query.search.to_lowercase();
    let kept: Vec<_> = catalog
        .iter()
        .filter(|record| {
            if mask.contains(CriteriaMask::SEARCH_TEXT) {
                let hit = match query.scope {
                    SearchScope::Name => contains_ci(&record.name, &needle),
                    SearchScope::Producer => contains_ci(&record.producer, &needle),
                    SearchScope::All => {
                        contains_ci(&record.name, &needle) || contains_ci(&record.producer, &needle)
                    }
                };
                if !hit {
                    return false;
                }
            }
            if mask.contains(CriteriaMask::COUNTRY) && record.origin != query.country {
                return false;
            }
            if mask.contains(CriteriaMask::VEGAN_ONLY) && !classifier.is_vegan(&record.label) {
                return false;
            }
            true
        })
        .cloned()
        .collect();

    if debug {
        eprintln!("[quick_filter] kept {}/{} records", kept.len(), catalog.len());
    }
    FilteredView::new(kept)
}

/// Apply an advanced query to `catalog`, producing a new view.
pub fn advanced_filter_with(
    catalog: &Catalog,
    query: &AdvancedQuery,
    classifier: &dyn VeganClassifier,
) -> FilteredView {
    let mask = criteria::scan_advanced(query);
    let debug = std::env::var_os("CANTINA_DEBUG_FILTER").is_some();
    if debug {
        eprintln!("[advanced_filter] criteria={mask:?}");
    }

    let name_needle = query.name.to_lowercase();
    let producer_needle = query.producer.to_lowercase();
    let kept: Vec<_> = catalog
        .iter()
        .filter(|record| {
            if mask.contains(CriteriaMask::NAME) && !contains_ci(&record.name, &name_needle) {
                return false;
            }
            if mask.contains(CriteriaMask::PRODUCER) && !contains_ci(&record.producer, &producer_needle) {
                return false;
            }
            if mask.contains(CriteriaMask::COUNTRY) && record.origin != query.country {
                return false;
            }
            if mask.contains(CriteriaMask::VEGAN_ONLY) && !classifier.is_vegan(&record.label) {
                return false;
            }
            true
        })
        .cloned()
        .collect();

    if debug {
        eprintln!("[advanced_filter] kept {}/{} records", kept.len(), catalog.len());
    }
    FilteredView::new(kept)
}
