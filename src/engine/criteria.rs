//! Query pre-classification.
//!
//! Before filtering, the engine scans the query to decide which constraints
//! are actually active: an empty search box, an unselected country, or an
//! unchecked vegan toggle each contribute *no* constraint, never a fault.
//! The result is a [`CriteriaMask`], which the filter loop uses to skip
//! inactive predicates and the debug trace prints to show what fired.

use crate::{AdvancedQuery, QuickQuery};

bitflags::bitflags! {
    /// Active constraints derived from a query.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CriteriaMask: u8 {
        /// Quick search: free text against name/producer per scope.
        const SEARCH_TEXT = 1 << 0;
        /// Advanced search: substring on `name`.
        const NAME        = 1 << 1;
        /// Advanced search: substring on `producer`.
        const PRODUCER    = 1 << 2;
        /// Exact (case-sensitive) match on `origin`.
        const COUNTRY     = 1 << 3;
        /// Classifier approval required.
        const VEGAN_ONLY  = 1 << 4;
    }
}

/// Scan a quick-search query for active criteria.
pub(crate) fn scan_quick(query: &QuickQuery) -> CriteriaMask {
    let mut mask = CriteriaMask::empty();
    if !query.search.is_empty() {
        mask |= CriteriaMask::SEARCH_TEXT;
    }
    if !query.country.is_empty() {
        mask |= CriteriaMask::COUNTRY;
    }
    if query.vegan_only {
        mask |= CriteriaMask::VEGAN_ONLY;
    }
    mask
}

/// Scan an advanced query for active criteria.
pub(crate) fn scan_advanced(query: &AdvancedQuery) -> CriteriaMask {
    let mut mask = CriteriaMask::empty();
    if !query.name.is_empty() {
        mask |= CriteriaMask::NAME;
    }
    if !query.producer.is_empty() {
        mask |= CriteriaMask::PRODUCER;
    }
    if !query.country.is_empty() {
        mask |= CriteriaMask::COUNTRY;
    }
    if query.vegan {
        mask |= CriteriaMask::VEGAN_ONLY;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchScope;

    #[test]
    fn default_queries_activate_nothing() {
        assert_eq!(scan_quick(&QuickQuery::default()), CriteriaMask::empty());
        assert_eq!(scan_advanced(&AdvancedQuery::default()), CriteriaMask::empty());
    }

    #[test]
    fn quick_scan_maps_fields_to_bits() {
        let query = QuickQuery {
            search: "rosso".into(),
            scope: SearchScope::Name,
            country: "Italy".into(),
            vegan_only: true,
        };
        let mask = scan_quick(&query);
        assert_eq!(mask, CriteriaMask::SEARCH_TEXT | CriteriaMask::COUNTRY | CriteriaMask::VEGAN_ONLY);
    }

    #[test]
    fn advanced_scan_keeps_name_and_producer_independent() {
        let query = AdvancedQuery { name: "Ros".into(), producer: "Ca".into(), ..AdvancedQuery::default() };
        assert_eq!(scan_advanced(&query), CriteriaMask::NAME | CriteriaMask::PRODUCER);
    }
}
