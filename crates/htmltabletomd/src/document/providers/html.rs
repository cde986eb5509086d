use crate::document::model::*;
use crate::document::providers::markup::{Element, HtmlTree};
use crate::error::TableError;

/// Builds a [`Table`] from the rows and cells of an HTML fragment.
#[derive(Debug, Default)]
pub struct HtmlProvider;

impl HtmlProvider {
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ok(None)` when the input has no markup at all.
    pub fn parse_table(&self, html: &str) -> Result<Option<Table>, TableError> {
        let tree = HtmlTree::parse(html);
        if !tree.has_elements() {
            return Ok(None);
        }

        let mut rows = tree.find_all("tr").into_iter();
        let first = rows.next().ok_or_else(|| TableError::missing_tag("tr"))?;

        let mut table = Table::default();
        let headings = self.collect_cells(&first, "th");
        if headings.is_empty() {
            // No header row: the first row is body content like the rest
            self.parse_table_row(&first, TableRowKind::Body, &mut table.rows);
        } else {
            table.rows.push(TableRow {
                cells: headings,
                kind: TableRowKind::Header,
            });
        }

        for row in rows {
            self.parse_table_row(&row, TableRowKind::Body, &mut table.rows);
        }

        Ok(Some(table))
    }

    fn parse_table_row(&self, row: &Element, kind: TableRowKind, rows: &mut Vec<TableRow>) {
        rows.push(TableRow {
            cells: self.collect_cells(row, "td"),
            kind,
        });
    }

    fn collect_cells(&self, row: &Element, tag: &str) -> Vec<String> {
        row.find_all(tag).iter().map(Element::inner_html).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_with_th_becomes_header() {
        let table = HtmlProvider::new()
            .parse_table("<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>")
            .unwrap()
            .unwrap();
        assert_eq!(table.header().unwrap().cells, vec!["A", "B"]);
        let body: Vec<_> = table.body().collect();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].cells, vec!["1", "2"]);
    }

    #[test]
    fn first_row_without_th_stays_in_body() {
        let table = HtmlProvider::new()
            .parse_table("<table><tr><td>1</td></tr><tr><td>2</td><td>3</td></tr></table>")
            .unwrap()
            .unwrap();
        assert!(table.header().is_none());
        let widths: Vec<usize> = table.body().map(|r| r.cells.len()).collect();
        assert_eq!(widths, vec![1, 2]);
    }

    #[test]
    fn plain_text_yields_no_table() {
        assert_eq!(HtmlProvider::new().parse_table("just words").unwrap(), None);
    }

    #[test]
    fn markup_without_rows_is_an_error() {
        let err = HtmlProvider::new()
            .parse_table("Here is <i>some text</i>")
            .unwrap_err();
        assert_eq!(err, TableError::Structural { tag: "tr" });
    }
}
