//! Text projection of query results.

use core::fmt::Write as _;

use chrono::NaiveDate;

use crate::item::DATE_FORMAT;
use crate::warehouse::StockLevel;

pub const ALL_ITEMS_CAPTION: &str = "Items in Warehouse";
pub const INSUFFICIENT_QUANTITY_CAPTION: &str = "Items with insufficient quantities";
pub const NO_SUCH_ITEMS: &str = "There are no such items in warehouse.";

/// Caption shared by both expiration queries.
pub fn not_expired_caption(due_date: NaiveDate) -> String {
    format!("Items that are not expired by {}", due_date.format(DATE_FORMAT))
}

/// Render `entries` under `caption`, one line per entry, in the given order.
pub fn render(entries: &[StockLevel], caption: &str) -> String {
    let mut out = format!("\n{caption}:\n");

    if entries.is_empty() {
        out.push_str(NO_SUCH_ITEMS);
        return out;
    }

    for level in entries {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}, Quantity: {}", level.item, level.quantity);
    }
    out
}
