// src/extract/mod.rs
//! Tolerant tabular extraction.
//!
//! A report format is described as a fixed array of [`Column`] parsers, one per
//! table column and aligned by position. [`extract_row`] applies them to one
//! row's cells and folds the fragments into a typed record through a
//! [`RecordBuilder`]; a row that does not fit is dropped, never raised.
//! [`collect_records`] does this for a whole table.
//!
//! Cells are read only through the [`Cell`] trait, so the same schema runs
//! against a parsed page (`scraper::ElementRef`) or in-memory fixtures.

pub mod cell;
pub mod column;
pub mod record;
pub mod row;

pub use cell::Cell;
pub use column::{Column, ColumnError, FieldValue, Fragment};
pub use record::{RaceTime, ResultBuilder, ResultField, ResultValue, SwimmerResult};
pub use row::{collect_records, extract_row, RecordBuilder, RowError};
