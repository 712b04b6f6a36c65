// Transfer market subsystem
//
// The catalog is the read path, the listing manager handles single-row
// guarded updates, and the trade engine owns the one operation that needs
// multi-row atomicity.

pub mod catalog;
pub mod engine;
mod history;
pub mod listings;
pub mod valuation;

// Re-export main types
pub use catalog::{ListedPlayer, MarketCatalog, MarketFilters};
pub use engine::TradeEngine;
pub use listings::ListingManager;
pub use valuation::{FixedAppreciation, RandomAppreciation, ValuationPolicy};
