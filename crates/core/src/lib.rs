//! `warehouse-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error model,
//! the value object marker, and validation of bounded user input.

pub mod error;
pub mod input;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use input::{MAX_YEAR, MIN_YEAR, due_date, last_day_of_month, parse_bounded_int, parse_long};
pub use value_object::ValueObject;
