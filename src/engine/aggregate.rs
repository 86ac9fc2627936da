//! Derived reports over the catalog.
//!
//! Two reports are computed from the *full* catalog: per-country vegan
//! statistics ([`global_stats_with`]) and the list of producers whose entire
//! output is vegan ([`vegan_only_producers_with`]). A third, lighter summary
//! ([`summarize_with`]) describes the *current view* for headline display.
//!
//! All three are stateless pure functions, recomputed on demand. Nothing here
//! caches across catalog changes; outputs are deterministic for a given
//! catalog and classifier, so callers may memoize if they want to.

use std::collections::HashMap;

use crate::classify::VeganClassifier;
use crate::normalize::sort_key;
use crate::{Catalog, FilteredView};

/// Per-country vegan statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryStat {
    pub country: String,
    /// Number of records with this origin.
    pub total: usize,
    /// Number of those records classified vegan.
    pub vegan_count: usize,
    /// `vegan_count / total * 100`, rounded half-up to one decimal place.
    pub vegan_percentage: f64,
}

/// A producer whose every record is vegan-classified, with at least 2 records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerEntry {
    pub producer_name: String,
    /// Origin of the record first associated with this producer. When a
    /// producer's records disagree on origin this is whichever came first,
    /// a quirk inherited from the source data model, kept deliberately.
    pub country: String,
    pub wine_count: usize,
}

/// Headline numbers for the current filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSummary {
    pub total: usize,
    pub vegan: usize,
    /// The single origin shared by every record in the view, if uniform.
    pub country: Option<String>,
}

/// Round half-up to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Group records by origin and compute vegan counts and percentages.
///
/// Output is ordered by `total` descending; ties keep the order in which the
/// country group was first discovered in the catalog (the sort is stable).
/// A group always holds at least one record, so the percentage division is
/// safe.
pub fn global_stats_with(catalog: &Catalog, classifier: &dyn VeganClassifier) -> Vec<CountryStat> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, usize, usize)> = Vec::new();

    for record in catalog.iter() {
        let slot = *slots.entry(record.origin.as_str()).or_insert_with(|| {
            groups.push((record.origin.clone(), 0, 0));
            groups.len() - 1
        });
        groups[slot].1 += 1;
        if classifier.is_vegan(&record.label) {
            groups[slot].2 += 1;
        }
    }

    let mut stats: Vec<CountryStat> = groups
        .into_iter()
        .map(|(country, total, vegan_count)| CountryStat {
            country,
            total,
            vegan_count,
            vegan_percentage: round_tenth(vegan_count as f64 / total as f64 * 100.0),
        })
        .collect();

    stats.sort_by(|a, b| b.total.cmp(&a.total));
    stats
}

/// Producers with at least 2 records, all of them vegan-classified.
///
/// Grouping follows first-seen order; output is sorted by the normalized
/// producer name ([`sort_key`]), ties broken by first-seen order (stable
/// sort). A producer with a single record is excluded even if that record is
/// vegan.
pub fn vegan_only_producers_with(catalog: &Catalog, classifier: &dyn VeganClassifier) -> Vec<ProducerEntry> {
    struct Group {
        producer: String,
        country: String,
        count: usize,
        all_vegan: bool,
    }

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for record in catalog.iter() {
        let slot = *slots.entry(record.producer.as_str()).or_insert_with(|| {
            groups.push(Group {
                producer: record.producer.clone(),
                // First-encountered origin wins; see ProducerEntry::country.
                country: record.origin.clone(),
                count: 0,
                all_vegan: true,
            });
            groups.len() - 1
        });
        groups[slot].count += 1;
        if !classifier.is_vegan(&record.label) {
            groups[slot].all_vegan = false;
        }
    }

    let mut entries: Vec<ProducerEntry> = groups
        .into_iter()
        .filter(|g| g.all_vegan && g.count >= 2)
        .map(|g| ProducerEntry { producer_name: g.producer, country: g.country, wine_count: g.count })
        .collect();

    entries.sort_by_cached_key(|e| sort_key(&e.producer_name));
    entries
}

/// Summarize the current view: size, vegan count, and the uniform origin (if
/// every record in the view shares one).
pub fn summarize_with(view: &FilteredView, classifier: &dyn VeganClassifier) -> ViewSummary {
    let total = view.len();
    let vegan = view.iter().filter(|r| classifier.is_vegan(&r.label)).count();

    let mut origins = view.iter().map(|r| r.origin.as_str());
    let country = match origins.next() {
        Some(first) if origins.all(|origin| origin == first) => Some(first.to_string()),
        _ => None,
    };

    ViewSummary { total, vegan, country }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WineRecord;
    use crate::classify::{default_classifier, is_vegan};

    fn wine(name: &str, producer: &str, origin: &str, label: &str) -> WineRecord {
        WineRecord::new(name, producer, origin, label)
    }

    #[test]
    fn stats_group_in_discovery_order_and_sort_by_total_desc() {
        let catalog = Catalog::new(vec![
            wine("A", "P1", "Spain", "Vegan Friendly"),
            wine("B", "P1", "Italy", "Vegan Friendly"),
            wine("C", "P2", "Italy", "Not Vegan"),
            wine("D", "P3", "Italy", "Vegan Friendly"),
            wine("E", "P4", "France", "Not Vegan"),
            wine("F", "P4", "France", "Vegan Friendly"),
        ]);

        let stats = global_stats_with(&catalog, default_classifier());
        let countries: Vec<&str> = stats.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(countries, vec!["Italy", "France", "Spain"]);

        assert_eq!(stats[0].total, 3);
        assert_eq!(stats[0].vegan_count, 2);
        assert_eq!(stats[0].vegan_percentage, 66.7);
        assert_eq!(stats[1].vegan_percentage, 50.0);
        assert_eq!(stats[2].vegan_percentage, 100.0);
    }

    #[test]
    fn equal_totals_keep_discovery_order() {
        let catalog = Catalog::new(vec![
            wine("A", "P1", "Italy", "Vegan Friendly"),
            wine("B", "P2", "France", "Vegan Friendly"),
            wine("C", "P3", "Italy", "Not Vegan"),
            wine("D", "P4", "France", "Not Vegan"),
        ]);

        let stats = global_stats_with(&catalog, default_classifier());
        let countries: Vec<&str> = stats.iter().map(|s| s.country.as_str()).collect();
        // Both totals are 2; Italy was discovered first.
        assert_eq!(countries, vec!["Italy", "France"]);
    }

    #[test]
    fn vegan_counts_sum_to_the_catalog_wide_vegan_count() {
        let catalog = Catalog::new(vec![
            wine("A", "P1", "Italy", "Vegan Friendly"),
            wine("B", "P2", "France", "Not Vegan"),
            wine("C", "P3", "Spain", "Vegan Friendly"),
            wine("D", "P4", "Italy", "Vegan Friendly, Not Vegan (finings)"),
            wine("E", "P5", "France", "Organic"),
        ]);

        let stats = global_stats_with(&catalog, default_classifier());
        let grouped: usize = stats.iter().map(|s| s.vegan_count).sum();
        let direct = catalog.iter().filter(|r| is_vegan(&r.label)).count();
        assert_eq!(grouped, direct);
    }

    #[test]
    fn percentage_rounds_half_up_to_one_decimal() {
        // 1/8 = 12.5%; 1/3 = 33.333...%; 5/8 = 62.5%.
        let mut records = vec![wine("V", "P", "Italy", "Vegan Friendly")];
        records.extend((0..7).map(|i| wine(&format!("N{i}"), "P", "Italy", "Not Vegan")));
        let stats = global_stats_with(&Catalog::new(records), default_classifier());
        assert_eq!(stats[0].vegan_percentage, 12.5);

        let catalog = Catalog::new(vec![
            wine("A", "P", "France", "Vegan Friendly"),
            wine("B", "P", "France", "Not Vegan"),
            wine("C", "P", "France", "Not Vegan"),
        ]);
        let stats = global_stats_with(&catalog, default_classifier());
        assert_eq!(stats[0].vegan_percentage, 33.3);
    }

    #[test]
    fn single_record_producer_is_excluded_even_if_vegan() {
        let catalog = Catalog::new(vec![
            wine("A", "Solo", "Italy", "Vegan Friendly"),
            wine("B", "Duo", "France", "Vegan Friendly"),
            wine("C", "Duo", "France", "Vegan Friendly"),
        ]);

        let producers = vegan_only_producers_with(&catalog, default_classifier());
        assert_eq!(producers.len(), 1);
        assert_eq!(producers[0].producer_name, "Duo");
        assert_eq!(producers[0].wine_count, 2);
    }

    #[test]
    fn one_non_vegan_record_disqualifies_the_producer() {
        let catalog = Catalog::new(vec![
            wine("A", "Château Thérèse", "France", "Vegan Friendly"),
            wine("B", "Château Thérèse", "France", "Vegan Friendly"),
            wine("C", "Château Thérèse", "France", "Vegan Friendly, Not Vegan (finings)"),
        ]);

        assert!(vegan_only_producers_with(&catalog, default_classifier()).is_empty());
    }

    #[test]
    fn all_vegan_producer_with_two_records_qualifies() {
        let catalog = Catalog::new(vec![
            wine("Rosé d'Anjou", "Clos d'Été", "France", "Vegan Friendly"),
            wine("Blanc de Blancs", "Clos d'Été", "France", "Vegan Friendly"),
        ]);

        let producers = vegan_only_producers_with(&catalog, default_classifier());
        assert_eq!(
            producers,
            vec![ProducerEntry {
                producer_name: "Clos d'Été".to_string(),
                country: "France".to_string(),
                wine_count: 2,
            }]
        );
    }

    #[test]
    fn producers_sort_by_normalized_name() {
        let catalog = Catalog::new(vec![
            wine("A", "Étoile", "France", "Vegan Friendly"),
            wine("B", "Étoile", "France", "Vegan Friendly"),
            wine("C", "Amber", "Spain", "Vegan Friendly"),
            wine("D", "Amber", "Spain", "Vegan Friendly"),
            wine("E", "Zéphyr", "France", "Vegan Friendly"),
            wine("F", "Zéphyr", "France", "Vegan Friendly"),
        ]);

        let names: Vec<String> =
            vegan_only_producers_with(&catalog, default_classifier()).into_iter().map(|p| p.producer_name).collect();
        // "Étoile" folds to "etoile" and sorts between "amber" and "zephyr".
        assert_eq!(names, vec!["Amber", "Étoile", "Zéphyr"]);
    }

    #[test]
    fn producer_country_is_the_first_encountered_origin() {
        let catalog = Catalog::new(vec![
            wine("A", "Borderline", "Italy", "Vegan Friendly"),
            wine("B", "Borderline", "France", "Vegan Friendly"),
        ]);

        let producers = vegan_only_producers_with(&catalog, default_classifier());
        assert_eq!(producers[0].country, "Italy");
    }

    #[test]
    fn summary_reports_totals_and_uniform_country() {
        let uniform = FilteredView::new(vec![
            wine("A", "P1", "Italy", "Vegan Friendly"),
            wine("B", "P2", "Italy", "Not Vegan"),
        ]);
        let summary = summarize_with(&uniform, default_classifier());
        assert_eq!(summary, ViewSummary { total: 2, vegan: 1, country: Some("Italy".to_string()) });

        let mixed = FilteredView::new(vec![
            wine("A", "P1", "Italy", "Vegan Friendly"),
            wine("B", "P2", "France", "Vegan Friendly"),
        ]);
        assert_eq!(summarize_with(&mixed, default_classifier()).country, None);

        let empty = FilteredView::new(Vec::new());
        assert_eq!(summarize_with(&empty, default_classifier()), ViewSummary { total: 0, vegan: 0, country: None });
    }
}
