//! Source file loader.
//!
//! Reads a comma-delimited table (header row first) with the columns
//! `name, code, quantity, expiration date` and aggregates every data row into
//! a fresh [`Inventory`]. Any bad row aborts the whole load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

use crate::item::{DATE_FORMAT, Item};
use crate::warehouse::Inventory;

const NAME_INDEX: usize = 0;
const CODE_INDEX: usize = 1;
const QUANTITY_INDEX: usize = 2;
const EXPIRATION_DATE_INDEX: usize = 3;
const FIELD_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} could not be opened: {source}", path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Negative value specified for item. Name: {name}, code: {code}")]
    NonPositiveQuantity {
        line: usize,
        name: String,
        code: String,
        quantity: i64,
    },

    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        let line = line_of(err.position());
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io(source),
            _ => Self::MalformedRow { line, reason },
        }
    }
}

/// Open `path` and load it into a new inventory.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<Inventory, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::MissingSource {
        path: path.to_path_buf(),
        source,
    })?;

    let inventory = read_inventory(file).inspect_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "inventory load rejected");
    })?;

    tracing::info!(
        path = %path.display(),
        items = inventory.len(),
        "inventory loaded"
    );
    Ok(inventory)
}

/// Load an inventory from any byte source. The first row is a header.
pub fn read_inventory(reader: impl Read) -> Result<Inventory, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut inventory = Inventory::new();

    for result in csv.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let (item, quantity) = parse_record(&record)?;
        inventory.add_item(item, quantity);
    }

    Ok(inventory)
}

/// 1-based line in the source; 0 when the reader reports no position.
fn line_of(position: Option<&csv::Position>) -> usize {
    position
        .and_then(|p| usize::try_from(p.line()).ok())
        .unwrap_or(0)
}

fn parse_record(record: &StringRecord) -> Result<(Item, u64), LoadError> {
    let line_no = line_of(record.position());
    let malformed = |reason: String| LoadError::MalformedRow {
        line: line_no,
        reason,
    };

    if record.len() < FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FIELD_COUNT} fields, found {}",
            record.len()
        )));
    }

    let name = &record[NAME_INDEX];
    let code = &record[CODE_INDEX];
    if name.is_empty() {
        return Err(malformed("item name is empty".to_string()));
    }
    if code.is_empty() {
        return Err(malformed("item code is empty".to_string()));
    }

    let raw_quantity = &record[QUANTITY_INDEX];
    let quantity: i64 = raw_quantity
        .parse()
        .map_err(|_| malformed(format!("quantity '{raw_quantity}' is not an integer")))?;

    let raw_date = &record[EXPIRATION_DATE_INDEX];
    let expiration_date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
        .map_err(|e| malformed(format!("expiration date '{raw_date}': {e}")))?;

    let quantity = match u64::try_from(quantity) {
        Ok(q) if q > 0 => q,
        _ => {
            return Err(LoadError::NonPositiveQuantity {
                line: line_no,
                name: name.to_string(),
                code: code.to_string(),
                quantity,
            });
        }
    };

    Ok((Item::new(code, name, expiration_date), quantity))
}
