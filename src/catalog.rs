//! Record model and the session catalog store.
//!
//! A [`Catalog`] is the full, immutable set of records loaded for a session:
//! insertion order is preserved from the source and nothing mutates it after
//! load. A [`FilteredView`] is an ordered subsequence of the catalog produced
//! by the filter engine; it is replaced wholesale on every filter invocation
//! and never patched in place.
//!
//! [`CatalogStore`] is the only shared state in the crate: it owns the base
//! catalog, the current view, and the pagination cursor. The filter engine is
//! the view's single writer (via the `apply_*` methods); everything else
//! reads. The store is synchronous and single-threaded; if an embedder ever
//! issues overlapping filter requests, the contract is last-write-wins on the
//! view with no partial-result visibility.

use serde::{Deserialize, Serialize};

use crate::classify::{VeganClassifier, default_classifier};
use crate::engine::{advanced_filter_with, quick_filter_with};
use crate::{AdvancedQuery, QuickQuery};

/// One wine record. Immutable once loaded; all four fields are non-empty
/// (the loader excludes partial records before the engine sees them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineRecord {
    /// Wine product name.
    pub name: String,
    /// Producing entity.
    pub producer: String,
    /// Country/region of origin.
    pub origin: String,
    /// Free-text certification/label description; source of the vegan signal.
    pub label: String,
}

impl WineRecord {
    pub fn new(
        name: impl Into<String>,
        producer: impl Into<String>,
        origin: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), producer: producer.into(), origin: origin.into(), label: label.into() }
    }
}

/// The full ordered record set for a session. Read-only snapshot after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<WineRecord>,
}

impl Catalog {
    pub fn new(records: Vec<WineRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WineRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[WineRecord] {
        &self.records
    }
}

impl From<Vec<WineRecord>> for Catalog {
    fn from(records: Vec<WineRecord>) -> Self {
        Self::new(records)
    }
}

/// An ordered subsequence of the catalog matching the active query criteria.
///
/// Owns its records: readers stay valid while the store swaps in a new view.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    records: Vec<WineRecord>,
}

impl FilteredView {
    pub(crate) fn new(records: Vec<WineRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WineRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[WineRecord] {
        &self.records
    }

    /// The records on page `index` when showing `per_page` rows per page.
    ///
    /// Out-of-range pages yield an empty slice; `per_page == 0` is treated as
    /// "everything on one page".
    pub fn page(&self, index: usize, per_page: usize) -> &[WineRecord] {
        if per_page == 0 {
            return if index == 0 { &self.records } else { &[] };
        }
        let start = index.saturating_mul(per_page);
        if start >= self.records.len() {
            return &[];
        }
        let end = (start + per_page).min(self.records.len());
        &self.records[start..end]
    }
}

/// Base catalog plus the current filtered view and pagination cursor.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    base: Catalog,
    view: FilteredView,
    page: usize,
}

impl CatalogStore {
    /// Create a store over `base`. The initial view is the full catalog.
    pub fn new(base: Catalog) -> Self {
        let view = FilteredView::new(base.records.clone());
        Self { base, view, page: 0 }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.base
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Current zero-based page cursor.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Sorted, deduplicated list of origins present in the base catalog.
    ///
    /// The presentation layer uses this to populate its country selector.
    pub fn countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self.base.iter().map(|r| r.origin.clone()).collect();
        countries.sort();
        countries.dedup();
        countries
    }

    /// Run a quick-search query and install the result as the current view.
    ///
    /// The result-set size may have changed, so the page cursor resets to the
    /// first page. This reset is part of the filter contract, not a UI nicety.
    pub fn apply_quick(&mut self, query: &QuickQuery) {
        self.apply_quick_with(query, default_classifier());
    }

    pub fn apply_quick_with(&mut self, query: &QuickQuery, classifier: &dyn VeganClassifier) {
        self.view = quick_filter_with(&self.base, query, classifier);
        self.page = 0;
    }

    /// Run an advanced query (independent ANDed field filters) and install the
    /// result as the current view. Resets the page cursor like [`apply_quick`].
    ///
    /// [`apply_quick`]: CatalogStore::apply_quick
    pub fn apply_advanced(&mut self, query: &AdvancedQuery) {
        self.apply_advanced_with(query, default_classifier());
    }

    pub fn apply_advanced_with(&mut self, query: &AdvancedQuery, classifier: &dyn VeganClassifier) {
        self.view = advanced_filter_with(&self.base, query, classifier);
        self.page = 0;
    }
}
