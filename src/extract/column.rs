// src/extract/column.rs
//
// One parser per table column. A parser reads its own cell only and either
// yields a fragment (zero or more typed field values) or fails.

use std::fmt::Debug;

use thiserror::Error;

use super::cell::Cell;

/// A typed value for one named field of a record.
pub trait FieldValue {
    type Field: Copy + Eq + Debug + 'static;
    fn field(&self) -> Self::Field;
}

/// Values produced by one column. Empty for ignored columns.
pub type Fragment<V> = Vec<V>;

pub type ParseFn<V> = fn(&dyn Cell) -> Result<Fragment<V>, ColumnError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    #[error("no element matches `{0}`")]
    Missing(&'static str),

    #[error("`{selector}` has no `{attr}` attribute")]
    MissingAttr { selector: &'static str, attr: &'static str },

    #[error("`{0}` is empty")]
    Empty(&'static str),

    #[error("unexpected {expected} text: {text:?}")]
    Pattern { expected: &'static str, text: String },
}

/// Position-bound column parser. `targets` lists every field the parser may
/// write; columns of one schema must not share targets.
pub struct Column<V: FieldValue> {
    pub name: &'static str,
    pub targets: &'static [V::Field],
    pub parse: ParseFn<V>,
}

impl<V: FieldValue> Column<V> {
    pub const fn new(name: &'static str, targets: &'static [V::Field], parse: ParseFn<V>) -> Self {
        Self { name, targets, parse }
    }

    /// Column with nothing of interest: always an empty fragment.
    pub const fn ignore(name: &'static str) -> Self {
        Self { name, targets: &[], parse: ignore::<V> }
    }

    pub fn is_ignored(&self) -> bool {
        self.targets.is_empty()
    }
}

pub fn ignore<V>(_cell: &dyn Cell) -> Result<Fragment<V>, ColumnError> {
    Ok(Vec::new())
}

/// First pair of columns (by position) that claim the same field, if any.
pub fn overlapping_targets<V: FieldValue>(columns: &[Column<V>]) -> Option<(usize, usize, V::Field)> {
    for (i, a) in columns.iter().enumerate() {
        for (j, b) in columns.iter().enumerate().skip(i + 1) {
            if let Some(f) = a.targets.iter().find(|f| b.targets.contains(f)) {
                return Some((i, j, *f));
            }
        }
    }
    None
}

/* ---------- shared cell readers ---------- */

pub fn required_text(cell: &dyn Cell, selector: &'static str) -> Result<String, ColumnError> {
    cell.select_text(selector).ok_or(ColumnError::Missing(selector))
}

pub fn required_attr(
    cell: &dyn Cell,
    selector: &'static str,
    attr: &'static str,
) -> Result<String, ColumnError> {
    cell.select_attr(selector, attr)
        .ok_or(ColumnError::MissingAttr { selector, attr })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct V(u8);

    impl FieldValue for V {
        type Field = u8;
        fn field(&self) -> u8 { self.0 }
    }

    fn never(_: &dyn Cell) -> Result<Fragment<V>, ColumnError> {
        Err(ColumnError::Missing("never"))
    }

    struct Blank;
    impl Cell for Blank {
        fn select_text(&self, _: &str) -> Option<String> { None }
        fn select_attr(&self, _: &str, _: &str) -> Option<String> { None }
    }

    #[test]
    fn ignore_yields_empty_fragment() {
        let col = Column::<V>::ignore("rank");
        assert!(col.is_ignored());
        assert_eq!((col.parse)(&Blank), Ok(vec![]));
    }

    #[test]
    fn overlap_detection() {
        let cols = [
            Column::<V>::new("a", &[1, 2], never),
            Column::<V>::ignore("b"),
            Column::<V>::new("c", &[3], never),
        ];
        assert_eq!(overlapping_targets(&cols), None);

        let cols = [
            Column::<V>::new("a", &[1, 2], never),
            Column::<V>::new("c", &[2], never),
        ];
        assert_eq!(overlapping_targets(&cols), Some((0, 1, 2)));
    }

    #[test]
    fn required_readers_name_the_selector() {
        assert_eq!(required_text(&Blank, "p"), Err(ColumnError::Missing("p")));
        assert_eq!(
            required_attr(&Blank, "p a", "href"),
            Err(ColumnError::MissingAttr { selector: "p a", attr: "href" })
        );
    }
}
