use crate::document::model::*;
use crate::document::renderers::inline::InlineConverter;
use crate::options::Alignment;

const CELL_ESCAPES: [(char, &str); 2] = [('|', "&#124;"), ('\n', "<br>")];

/// Renders a [`Table`] as a Markdown pipe table.
pub struct MarkdownRenderer {
    alignment: Alignment,
}

impl MarkdownRenderer {
    pub fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    /// `inline` is applied to every non-empty cell before escaping.
    pub fn render(&self, table: &Table, inline: Option<&dyn InlineConverter>) -> String {
        let mut out = String::new();

        let heading: Vec<String> = match table.header() {
            Some(header) => self.render_cells(header, inline),
            // Placeholder heading sized after the first body row
            None => {
                let columns = table.body().next().map_or(0, |row| row.cells.len());
                vec![" ".to_string(); columns]
            }
        };

        self.render_table_row(&heading, &mut out);
        self.render_table_row(&vec![self.alignment.token(); heading.len()], &mut out);

        for row in table.body() {
            let cells = self.render_cells(row, inline);
            self.render_table_row(&cells, &mut out);
        }

        out
    }

    fn render_cells(&self, row: &TableRow, inline: Option<&dyn InlineConverter>) -> Vec<String> {
        row.cells
            .iter()
            .map(|cell| self.render_cell(cell, inline))
            .collect()
    }

    fn render_cell(&self, raw: &str, inline: Option<&dyn InlineConverter>) -> String {
        let content = match inline {
            Some(converter) if !raw.is_empty() => converter.convert(raw),
            _ => raw.to_string(),
        };
        format!(" {} ", escape_cell(&content))
    }

    fn render_table_row<S: AsRef<str>>(&self, cells: &[S], out: &mut String) {
        out.push('|');
        for cell in cells {
            out.push_str(cell.as_ref());
            out.push('|');
        }
        out.push('\n');
    }
}

/// Escapes characters that would break a pipe-table row.
pub fn escape_cell(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match CELL_ESCAPES.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
