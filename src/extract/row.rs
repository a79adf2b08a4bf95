// src/extract/row.rs
//
// Row extraction is all-or-nothing: parser *i* reads cell *i*; any column
// failure, or a row with the wrong number of cells, drops the whole row.
// Dropped rows come back as `RowError` values and never abort a batch.

use thiserror::Error;
use tracing::debug;

use super::cell::Cell;
use super::column::{Column, ColumnError, FieldValue};

/// Assembles a typed record from field values, one field at a time.
/// A later value for the same field overwrites the earlier one.
pub trait RecordBuilder: Default {
    type Value: FieldValue;
    type Record;

    fn set(&mut self, value: Self::Value);

    /// Fails with the name of the first missing field.
    fn build(self) -> Result<Self::Record, &'static str>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {expected} cells, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("column {index} ({column}): {source}")]
    Column {
        index: usize,
        column: &'static str,
        #[source]
        source: ColumnError,
    },

    #[error("record is missing `{0}`")]
    Incomplete(&'static str),
}

pub fn extract_row<B, C, const N: usize>(
    columns: &[Column<B::Value>; N],
    cells: &[C],
) -> Result<B::Record, RowError>
where
    B: RecordBuilder,
    C: Cell,
{
    if cells.len() != N {
        return Err(RowError::Arity { expected: N, found: cells.len() });
    }

    let mut builder = B::default();
    for (index, (column, cell)) in columns.iter().zip(cells).enumerate() {
        let fragment = (column.parse)(cell)
            .map_err(|source| RowError::Column { index, column: column.name, source })?;
        for value in fragment {
            builder.set(value);
        }
    }
    builder.build().map_err(RowError::Incomplete)
}

/// Run `extract_row` over every row and keep the survivors, in input order.
pub fn collect_records<B, C, R, const N: usize>(
    columns: &[Column<B::Value>; N],
    rows: impl IntoIterator<Item = R>,
) -> Vec<B::Record>
where
    B: RecordBuilder,
    C: Cell,
    R: AsRef<[C]>,
{
    let mut out = Vec::new();
    let mut dropped = 0usize;

    for (i, row) in rows.into_iter().enumerate() {
        match extract_row::<B, C, N>(columns, row.as_ref()) {
            Ok(record) => out.push(record),
            Err(e) => {
                dropped += 1;
                debug!(row = i, error = %e, "row dropped");
            }
        }
    }

    debug!(kept = out.len(), dropped, "rows extracted");
    out
}
