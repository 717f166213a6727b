use core::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use warehouse_core::ValueObject;

/// Date format used for expiration dates in source files and reports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inventory record: one product batch identified by code, name and
/// expiration date.
///
/// All three fields together form the identity; two records that differ only
/// in expiration date are different items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    code: String,
    name: String,
    expiration_date: NaiveDate,
}

impl Item {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            expiration_date,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// Structural equality over the identity triple.
    pub fn equals(a: &Item, b: &Item) -> bool {
        a.code == b.code && a.name == b.name && a.expiration_date == b.expiration_date
    }

    /// Canonical order: name, then code, then expiration date (earliest first).
    pub fn compare(a: &Item, b: &Item) -> Ordering {
        a.name
            .cmp(&b.name)
            .then_with(|| a.code.cmp(&b.code))
            .then_with(|| a.expiration_date.cmp(&b.expiration_date))
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        Item::equals(self, other)
    }
}

impl Eq for Item {}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        Item::compare(self, other)
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Name='{}', Code='{}', ExpirationDate={}",
            self.name,
            self.code,
            self.expiration_date.format(DATE_FORMAT)
        )
    }
}
