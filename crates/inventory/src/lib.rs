//! Inventory read-side domain.
//!
//! Pure, deterministic logic over snapshots of stocked parts (no IO, no HTTP,
//! no storage): the item model, the filter predicate used by list views, the
//! summary statistics shown above them, and a reorder policy helper.
//! Items are created and mutated by an external CRUD collaborator; nothing in
//! this crate mutates an item it is given.

pub mod filter;
pub mod item;
pub mod reorder;
pub mod stats;

pub use filter::{
    FilterAxis, FilterCode, FilterState, FilterValue, Selection, StockAlert, filter_items, matches,
};
pub use item::{Category, InventoryItem, InventoryItemBuilder, ItemRecord, StockLevel, StockStatus};
pub use reorder::ReorderPolicy;
pub use stats::{StatsSnapshot, aggregate};
