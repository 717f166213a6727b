use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// One query result row: an item and its aggregated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub item: Item,
    pub quantity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stock {
    quantity: u64,
    /// Position of the item's first insertion into this inventory.
    first_seen: u64,
}

/// Aggregate root: the items of one loaded source file with their quantities.
///
/// Entries are keyed by the item itself, so the map holds at most one entry
/// per `(code, name, expiration date)` triple and iterates in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<Item, Stock>,
    inserted: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Aggregated quantity stored for `item`, if present.
    pub fn quantity_of(&self, item: &Item) -> Option<u64> {
        self.items.get(item).map(|stock| stock.quantity)
    }

    /// Insert-or-merge.
    ///
    /// An absent item counts as quantity 0, so a repeated identity adds to the
    /// stored quantity instead of replacing it. The sum saturates at `u64::MAX`.
    pub fn add_item(&mut self, item: Item, quantity: u64) {
        let first_seen = self.inserted;
        let stock = self.items.entry(item).or_insert(Stock {
            quantity: 0,
            first_seen,
        });

        if stock.first_seen == first_seen {
            self.inserted += 1;
        } else {
            tracing::debug!(
                previous = stock.quantity,
                added = quantity,
                "merging duplicate item"
            );
        }

        stock.quantity = stock.quantity.saturating_add(quantity);
    }

    /// Remove the entry for `item`; no-op if absent.
    pub fn remove_item(&mut self, item: &Item) {
        self.items.remove(item);
    }

    /// All entries in canonical order.
    pub fn list(&self) -> Vec<StockLevel> {
        self.select(|_, _| true)
    }

    /// Entries whose quantity is strictly below `threshold`.
    pub fn filter_by_minimum_quantity(&self, threshold: i64) -> Vec<StockLevel> {
        match u64::try_from(threshold) {
            Ok(threshold) => self.select(|_, quantity| quantity < threshold),
            // Nothing is below a non-positive threshold.
            Err(_) => Vec::new(),
        }
    }

    /// Entries expiring on or before `due_date`.
    pub fn filter_expired_by(&self, due_date: NaiveDate) -> Vec<StockLevel> {
        self.select(|item, _| item.expiration_date() <= due_date)
    }

    /// Entries expiring strictly after `due_date`.
    pub fn filter_soon_to_expire(&self, due_date: NaiveDate) -> Vec<StockLevel> {
        self.select(|item, _| item.expiration_date() > due_date)
    }

    /// Items in first-insertion order.
    pub fn insertion_order(&self) -> Vec<&Item> {
        let mut items: Vec<(&Item, u64)> = self
            .items
            .iter()
            .map(|(item, stock)| (item, stock.first_seen))
            .collect();
        items.sort_by_key(|(_, first_seen)| *first_seen);
        items.into_iter().map(|(item, _)| item).collect()
    }

    fn select(&self, keep: impl Fn(&Item, u64) -> bool) -> Vec<StockLevel> {
        self.items
            .iter()
            .filter(|(item, stock)| keep(item, stock.quantity))
            .map(|(item, stock)| StockLevel {
                item: item.clone(),
                quantity: stock.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milk() -> Item {
        Item::new("A1", "Milk", date(2024, 1, 1))
    }

    fn bread() -> Item {
        Item::new("B2", "Bread", date(2024, 2, 1))
    }

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_item(milk(), 10);
        inventory.add_item(milk(), 5);
        inventory.add_item(bread(), 3);
        inventory
    }

    #[test]
    fn duplicate_identity_merges_quantities() {
        let inventory = sample();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.quantity_of(&milk()), Some(15));
        assert_eq!(inventory.quantity_of(&bread()), Some(3));
    }

    #[test]
    fn same_code_with_different_date_is_a_separate_entry() {
        let mut inventory = Inventory::new();
        inventory.add_item(milk(), 1);
        inventory.add_item(Item::new("A1", "Milk", date(2024, 1, 2)), 1);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn merge_saturates_instead_of_overflowing() {
        let mut inventory = Inventory::new();
        inventory.add_item(milk(), u64::MAX - 1);
        inventory.add_item(milk(), 10);
        assert_eq!(inventory.quantity_of(&milk()), Some(u64::MAX));
    }

    #[test]
    fn list_is_in_canonical_order() {
        let levels = sample().list();
        let names: Vec<&str> = levels.iter().map(|l| l.item.name()).collect();
        assert_eq!(names, vec!["Bread", "Milk"]);
    }

    #[test]
    fn insertion_order_is_retained_separately() {
        let inventory = sample();
        assert_eq!(inventory.insertion_order(), vec![&milk(), &bread()]);
    }

    #[test]
    fn remove_item_deletes_entry_and_ignores_absent() {
        let mut inventory = sample();
        inventory.remove_item(&milk());
        assert_eq!(inventory.quantity_of(&milk()), None);
        assert_eq!(inventory.len(), 1);

        inventory.remove_item(&milk());
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn removed_item_starts_fresh_when_added_again() {
        let mut inventory = sample();
        inventory.remove_item(&milk());
        inventory.add_item(milk(), 2);
        assert_eq!(inventory.quantity_of(&milk()), Some(2));
        assert_eq!(inventory.insertion_order(), vec![&bread(), &milk()]);
    }

    #[test]
    fn minimum_quantity_filter_is_strict() {
        let inventory = sample();

        let below_five = inventory.filter_by_minimum_quantity(5);
        assert_eq!(below_five.len(), 1);
        assert_eq!(below_five[0].item, bread());

        assert!(inventory.filter_by_minimum_quantity(3).is_empty());
        assert_eq!(inventory.filter_by_minimum_quantity(4).len(), 1);
        assert!(inventory.filter_by_minimum_quantity(0).is_empty());
        assert!(inventory.filter_by_minimum_quantity(-7).is_empty());
        assert_eq!(inventory.filter_by_minimum_quantity(i64::MAX).len(), 2);
    }

    #[test]
    fn expiration_filters_split_at_due_date() {
        let inventory = sample();
        let due = date(2024, 1, 1);

        let expired = inventory.filter_expired_by(due);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].item, milk());
        assert_eq!(expired[0].quantity, 15);

        let fresh = inventory.filter_soon_to_expire(due);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].item, bread());
    }

    #[test]
    fn queries_on_empty_inventory_return_nothing() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert!(inventory.list().is_empty());
        assert!(inventory.filter_by_minimum_quantity(100).is_empty());
        assert!(inventory.filter_expired_by(date(2100, 1, 1)).is_empty());
        assert!(inventory.filter_soon_to_expire(date(1990, 1, 1)).is_empty());
    }

    fn arb_rows() -> impl Strategy<Value = Vec<(String, String, u32, u64)>> {
        prop::collection::vec(("[A-C]", "[a-c]", 1u32..28, 1u64..1_000), 0..40)
    }

    fn build(rows: &[(String, String, u32, u64)]) -> Inventory {
        let mut inventory = Inventory::new();
        for (code, name, day, quantity) in rows {
            let item = Item::new(code.clone(), name.clone(), date(2024, 6, *day));
            inventory.add_item(item, *quantity);
        }
        inventory
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: each identity holds the sum of every quantity inserted for it.
        #[test]
        fn merged_quantity_is_sum_of_inserts(rows in arb_rows()) {
            let inventory = build(&rows);
            for level in inventory.list() {
                let expected: u64 = rows
                    .iter()
                    .filter(|(code, name, day, _)| {
                        Item::new(code.clone(), name.clone(), date(2024, 6, *day)) == level.item
                    })
                    .map(|(_, _, _, quantity)| quantity)
                    .sum();
                prop_assert_eq!(level.quantity, expected);
            }
        }

        /// Property: list is sorted and unique regardless of insertion order.
        #[test]
        fn list_is_sorted_and_unique(rows in arb_rows()) {
            let levels = build(&rows).list();
            for pair in levels.windows(2) {
                prop_assert_eq!(
                    Item::compare(&pair[0].item, &pair[1].item),
                    core::cmp::Ordering::Less
                );
            }
        }

        /// Property: the quantity filter keeps exactly the entries below the threshold.
        #[test]
        fn quantity_filter_matches_predicate(rows in arb_rows(), threshold in -5i64..1_200) {
            let inventory = build(&rows);
            let expected: Vec<StockLevel> = inventory
                .list()
                .into_iter()
                .filter(|level| (level.quantity as i128) < threshold as i128)
                .collect();
            prop_assert_eq!(inventory.filter_by_minimum_quantity(threshold), expected);
        }

        /// Property: expired-by and soon-to-expire partition the inventory.
        #[test]
        fn expiration_filters_partition_inventory(rows in arb_rows(), due_day in 1u32..28) {
            let inventory = build(&rows);
            let due = date(2024, 6, due_day);

            let expired = inventory.filter_expired_by(due);
            let fresh = inventory.filter_soon_to_expire(due);

            prop_assert_eq!(expired.len() + fresh.len(), inventory.len());
            for level in &expired {
                prop_assert!(!fresh.contains(level));
            }

            let mut union: Vec<StockLevel> = expired.into_iter().chain(fresh).collect();
            union.sort_by(|a, b| Item::compare(&a.item, &b.item));
            prop_assert_eq!(union, inventory.list());
        }
    }
}
