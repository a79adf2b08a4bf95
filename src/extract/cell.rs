// src/extract/cell.rs
//
// Read-only view of one table cell. Column parsers only ever see a cell
// through this trait, so they run the same against a live DOM or a fixture.

use scraper::{ElementRef, Selector};

use crate::core::sanitize::normalize_ws;

pub trait Cell {
    /// Whitespace-normalized text of the first element matching `selector`.
    fn select_text(&self, selector: &str) -> Option<String>;

    /// Attribute `name` of the first element matching `selector`.
    fn select_attr(&self, selector: &str, name: &str) -> Option<String>;
}

impl Cell for ElementRef<'_> {
    fn select_text(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let el = self.select(&sel).next()?;
        Some(normalize_ws(&el.text().collect::<String>()))
    }

    fn select_attr(&self, selector: &str, name: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let el = self.select(&sel).next()?;
        el.value().attr(name).map(|v| s!(v))
    }
}

/// Direct `<td>` children of a `<tr>`, in order.
pub fn row_cells<'a>(tr: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(tr, "td")
}

pub fn child_elements<'a>(parent: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_row(html: &str) -> Html {
        Html::parse_document(&format!("<table><tbody>{html}</tbody></table>"))
    }

    fn with_cells<F: FnOnce(Vec<ElementRef<'_>>)>(doc: &Html, f: F) {
        let tr = doc.select(&Selector::parse("tr").unwrap()).next().unwrap();
        f(row_cells(tr));
    }

    #[test]
    fn text_and_attr_through_selectors() {
        let doc = first_row(r#"<tr><td><p><a href="plavalec.php?id=7">Jure   Novak</a></p></td><td><p>1:02,50</p></td></tr>"#);
        with_cells(&doc, |cells| {
            assert_eq!(cells.len(), 2);
            assert_eq!(cells[0].select_text("p a").as_deref(), Some("Jure Novak"));
            assert_eq!(cells[0].select_attr("p a", "href").as_deref(), Some("plavalec.php?id=7"));
            assert_eq!(cells[1].select_text("p").as_deref(), Some("1:02,50"));
            assert_eq!(cells[1].select_text("p a"), None);
        });
    }

    #[test]
    fn entities_are_decoded() {
        let doc = first_row("<tr><td><p><a href=x>Ga&#353;per &amp; co</a></p></td></tr>");
        with_cells(&doc, |cells| {
            assert_eq!(cells[0].select_text("a").as_deref(), Some("Gašper & co"));
        });
    }

    #[test]
    fn bad_selector_is_none() {
        let doc = first_row("<tr><td><p>x</p></td></tr>");
        with_cells(&doc, |cells| assert_eq!(cells[0].select_text("p[["), None));
    }
}
