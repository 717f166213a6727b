//! Inventory domain module.
//!
//! This crate contains the warehouse rules: record identity, merge-on-insert
//! aggregation, query predicates and the canonical report ordering. The core
//! (`item`, `warehouse`, `report`) is deterministic and does no IO; `loader`
//! is the only module that touches the filesystem.

pub mod item;
pub mod loader;
pub mod report;
pub mod warehouse;

pub use item::Item;
pub use loader::{LoadError, load_inventory, read_inventory};
pub use report::{
    ALL_ITEMS_CAPTION, INSUFFICIENT_QUANTITY_CAPTION, NO_SUCH_ITEMS, not_expired_caption, render,
};
pub use warehouse::{Inventory, StockLevel};
