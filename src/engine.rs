//! Filtering and aggregation engine.
//!
//! This module is the *operational core* of the crate: everything with real
//! logic lives in its submodules, split the same way on disk while keeping
//! public paths stable (for example `crate::engine::quick_filter_with`).
//!
//! ## How the parts work together
//!
//! At a high level, answering a query is a short pipeline:
//!
//! ```text
//! query ── criteria::scan_* ──┐   (criteria.rs: which constraints are active)
//!                             │
//! catalog ────────────────────┼── filter::quick/advanced ── FilteredView
//!                             │   (filter.rs: ANDed predicates, stable order)
//!                             │
//!                             └── aggregate::* ─────────── CountryStat / ProducerEntry
//!                                 (aggregate.rs: grouped, recomputed on demand)
//! ```
//!
//! The engine is deliberately dumb about state: every function here is a pure
//! computation over an in-memory sequence. No I/O, no locking, no caching.
//! The only mutable derived state (the current view) lives in
//! [`crate::CatalogStore`], which calls into this module.
//!
//! ## Responsibilities by module
//!
//! - `criteria.rs`: derives a [`CriteriaMask`] from a query, so the filter loop
//!   can skip inactive predicates and the debug trace can show what fired.
//! - `filter.rs`: applies the active predicates over the catalog. Quick search
//!   ORs name/producer under scope `All`; advanced search ANDs independent
//!   field filters. Both preserve catalog order (stable filter, no re-sort).
//! - `aggregate.rs`: the two derived reports (per-country vegan statistics,
//!   all-vegan producers) plus the current-view summary.
//!
//! ## Debugging
//!
//! Set `CANTINA_DEBUG_FILTER=1` to print criteria activation and result counts.

#[path = "engine/aggregate.rs"]
mod aggregate;
#[path = "engine/criteria.rs"]
mod criteria;
#[path = "engine/filter.rs"]
mod filter;

pub use aggregate::{
    CountryStat, ProducerEntry, ViewSummary, global_stats_with, summarize_with, vegan_only_producers_with,
};
pub use criteria::CriteriaMask;
pub use filter::{advanced_filter_with, quick_filter_with};
