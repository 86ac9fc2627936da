use crate::classify::{VeganClassifier, default_classifier};
use crate::engine;
use crate::engine::{CountryStat, ProducerEntry, ViewSummary};
use crate::{Catalog, FilteredView};

/// Which fields the quick-search text is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Match `name` OR `producer` (the default).
    #[default]
    All,
    /// Match `name` only.
    Name,
    /// Match `producer` only.
    Producer,
}

impl std::str::FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchScope::All),
            "name" => Ok(SearchScope::Name),
            "producer" => Ok(SearchScope::Producer),
            other => Err(format!("unknown search scope '{other}' (expected all, name or producer)")),
        }
    }
}

/// Criteria for the quick-search entry point.
///
/// Empty text fields and an unset toggle contribute no constraint; a default
/// query keeps every record.
#[derive(Debug, Clone, Default)]
pub struct QuickQuery {
    /// Case-insensitive substring matched per [`scope`](QuickQuery::scope).
    pub search: String,
    pub scope: SearchScope,
    /// Exact (case-sensitive) match on `origin` when non-empty.
    pub country: String,
    /// Require classifier approval when set.
    pub vegan_only: bool,
}

/// Criteria for the advanced-search entry point.
///
/// `name` and `producer` are *independent* substring filters, ANDed together,
/// intentionally different from quick search's OR under [`SearchScope::All`].
#[derive(Debug, Clone, Default)]
pub struct AdvancedQuery {
    pub name: String,
    pub producer: String,
    pub country: String,
    pub vegan: bool,
}

/// Filter `catalog` with a quick-search query using the default classifier.
///
/// Stable: the result preserves the catalog's original relative order.
///
/// # Example
/// ```
/// use cantina::{Catalog, QuickQuery, WineRecord, quick_filter};
///
/// let catalog = Catalog::new(vec![WineRecord::new("Barolo", "Ca' Rossa", "Italy", "Vegan Friendly")]);
/// let view = quick_filter(&catalog, &QuickQuery::default());
/// assert_eq!(view.len(), 1);
/// ```
pub fn quick_filter(catalog: &Catalog, query: &QuickQuery) -> FilteredView {
    engine::quick_filter_with(catalog, query, default_classifier())
}

/// [`quick_filter`] with a caller-supplied classifier.
pub fn quick_filter_with(catalog: &Catalog, query: &QuickQuery, classifier: &dyn VeganClassifier) -> FilteredView {
    engine::quick_filter_with(catalog, query, classifier)
}

/// Filter `catalog` with an advanced query using the default classifier.
pub fn advanced_filter(catalog: &Catalog, query: &AdvancedQuery) -> FilteredView {
    engine::advanced_filter_with(catalog, query, default_classifier())
}

/// [`advanced_filter`] with a caller-supplied classifier.
pub fn advanced_filter_with(
    catalog: &Catalog,
    query: &AdvancedQuery,
    classifier: &dyn VeganClassifier,
) -> FilteredView {
    engine::advanced_filter_with(catalog, query, classifier)
}

/// Per-country vegan statistics over the full catalog, ordered by group size
/// descending (stable ties). Recomputed on every call.
pub fn global_stats(catalog: &Catalog) -> Vec<CountryStat> {
    engine::global_stats_with(catalog, default_classifier())
}

/// [`global_stats`] with a caller-supplied classifier.
pub fn global_stats_with(catalog: &Catalog, classifier: &dyn VeganClassifier) -> Vec<CountryStat> {
    engine::global_stats_with(catalog, classifier)
}

/// Producers with at least two records, all vegan-classified, sorted by
/// normalized name. Recomputed on every call.
pub fn vegan_only_producers(catalog: &Catalog) -> Vec<ProducerEntry> {
    engine::vegan_only_producers_with(catalog, default_classifier())
}

/// [`vegan_only_producers`] with a caller-supplied classifier.
pub fn vegan_only_producers_with(catalog: &Catalog, classifier: &dyn VeganClassifier) -> Vec<ProducerEntry> {
    engine::vegan_only_producers_with(catalog, classifier)
}

/// Headline numbers for a filtered view (size, vegan count, uniform origin).
pub fn summarize(view: &FilteredView) -> ViewSummary {
    engine::summarize_with(view, default_classifier())
}

/// [`summarize`] with a caller-supplied classifier.
pub fn summarize_with(view: &FilteredView, classifier: &dyn VeganClassifier) -> ViewSummary {
    engine::summarize_with(view, classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WineRecord;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            WineRecord::new("Rosso di Sera", "Ca' Rossa", "Italy", "Vegan Friendly"),
            WineRecord::new("Barolo Riserva", "Ca' Rossa", "Italy", "Not Vegan (finings)"),
            WineRecord::new("Rosé d'Anjou", "Clos d'Été", "France", "Vegan Friendly"),
        ])
    }

    #[test]
    fn scope_parses_from_cli_strings() {
        assert_eq!("all".parse::<SearchScope>().unwrap(), SearchScope::All);
        assert_eq!("name".parse::<SearchScope>().unwrap(), SearchScope::Name);
        assert_eq!("producer".parse::<SearchScope>().unwrap(), SearchScope::Producer);
        assert!("vineyard".parse::<SearchScope>().is_err());
    }

    #[test]
    fn default_query_is_the_identity_filter() {
        let catalog = catalog();
        let view = quick_filter(&catalog, &QuickQuery::default());
        assert_eq!(view.records(), catalog.records());
    }

    #[test]
    fn aggregates_agree_with_the_classifier() {
        let catalog = catalog();
        let stats = global_stats(&catalog);
        let total_vegan: usize = stats.iter().map(|s| s.vegan_count).sum();
        assert_eq!(total_vegan, 2);
    }

    #[test]
    fn classifier_variants_share_semantics_with_the_defaults() {
        struct EverythingVegan;
        impl VeganClassifier for EverythingVegan {
            fn is_vegan(&self, _label: &str) -> bool {
                true
            }
        }

        let catalog = catalog();
        let query = QuickQuery { vegan_only: true, ..QuickQuery::default() };
        assert_eq!(quick_filter(&catalog, &query).len(), 2);
        assert_eq!(quick_filter_with(&catalog, &query, &EverythingVegan).len(), 3);

        let producers = vegan_only_producers_with(&catalog, &EverythingVegan);
        assert_eq!(producers.len(), 1);
        assert_eq!(producers[0].producer_name, "Ca' Rossa");
    }
}
