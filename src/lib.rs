extern crate self as cantina;

#[macro_use]
mod macros;
mod api;
mod catalog;
mod classify;
mod engine;
mod loader;
mod normalize;

pub use api::{
    AdvancedQuery, QuickQuery, SearchScope, advanced_filter, advanced_filter_with, global_stats, global_stats_with,
    quick_filter, quick_filter_with, summarize, summarize_with, vegan_only_producers, vegan_only_producers_with,
};
pub use catalog::{Catalog, CatalogStore, FilteredView, WineRecord};
pub use classify::{PhraseClassifier, VeganClassifier, is_vegan};
pub use engine::{CountryStat, CriteriaMask, ProducerEntry, ViewSummary};
pub use loader::{LoadError, LoadOutcome, load_catalog, parse_catalog};
pub use normalize::sort_key;
