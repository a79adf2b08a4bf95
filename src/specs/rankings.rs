// src/specs/rankings.rs
//
// All-time rankings report (alltime1.php).
//
// Table layout, one row per swim:
//   rank | name | birth year (age) | club | time | points | date | venue
//
// Only name, age and time carry data we keep; the rest are ignored columns.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::core::sanitize::strip_parens;
use crate::extract::cell::{child_elements, row_cells};
use crate::extract::column::{required_attr, required_text};
use crate::extract::{
    collect_records, Cell, Column, ColumnError, Fragment, RaceTime, ResultBuilder, ResultField,
    ResultValue, SwimmerResult,
};

pub const COLUMN_COUNT: usize = 8;

pub const COLUMNS: [Column<ResultValue>; COLUMN_COUNT] = [
    Column::ignore("rank"),
    Column::new("name", &[ResultField::SwimmerId, ResultField::SwimmerName], parse_name),
    Column::new("age", &[ResultField::SwimmerAge], parse_age),
    Column::ignore("club"),
    Column::new("time", &[ResultField::Time], parse_time),
    Column::ignore("points"),
    Column::ignore("date"),
    Column::ignore("venue"),
];

static TBODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody").expect("static selector"));

/// Parse a whole report page into records. Rows that do not fit the column
/// schema are skipped.
pub fn parse_doc(html_doc: &str) -> Vec<SwimmerResult> {
    let doc = Html::parse_document(html_doc);
    let rows = table_rows(&doc);
    collect_records::<ResultBuilder, ElementRef<'_>, _, COLUMN_COUNT>(&COLUMNS, rows)
}

/// Cells of every data row of the first `<tbody>`; the first row is the header.
fn table_rows(doc: &Html) -> Vec<Vec<ElementRef<'_>>> {
    let Some(tbody) = doc.select(&TBODY).next() else {
        warn!("Rankings: no <tbody> on page");
        return Vec::new();
    };

    let rows: Vec<_> = child_elements(tbody, "tr")
        .into_iter()
        .skip(1)
        .map(row_cells)
        .collect();
    debug!(rows = rows.len(), "Rankings: table rows");
    rows
}

/* ---------- column parsers ---------- */

/// `<p><a href="…">Name</a></p>` → id (link target) + display name.
pub fn parse_name(cell: &dyn Cell) -> Result<Fragment<ResultValue>, ColumnError> {
    let id = required_attr(cell, "p a", "href")?;
    let name = required_text(cell, "p a")?;
    if name.is_empty() {
        return Err(ColumnError::Empty("p a"));
    }
    Ok(vec![ResultValue::SwimmerId(id), ResultValue::SwimmerName(name)])
}

/// `<p>1999 <small>(19)</small></p>` → age.
pub fn parse_age(cell: &dyn Cell) -> Result<Fragment<ResultValue>, ColumnError> {
    let text = required_text(cell, "p small")?;
    let age = strip_parens(&text)
        .parse::<u32>()
        .map_err(|_| ColumnError::Pattern { expected: "age", text: text.clone() })?;
    Ok(vec![ResultValue::SwimmerAge(age)])
}

/// `<p>1:02,50</p>` → time; anything else fails the column.
pub fn parse_time(cell: &dyn Cell) -> Result<Fragment<ResultValue>, ColumnError> {
    let text = required_text(cell, "p")?;
    let time = text
        .parse::<RaceTime>()
        .map_err(|_| ColumnError::Pattern { expected: "M:SS,FF time", text })?;
    Ok(vec![ResultValue::Time(time)])
}
