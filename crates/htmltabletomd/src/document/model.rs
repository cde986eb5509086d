#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRowKind {
    Header,
    Body,
}

/// One row of raw cells. Cells hold the inner HTML exactly as parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub kind: TableRowKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn header(&self) -> Option<&TableRow> {
        self.rows
            .iter()
            .find(|r| matches!(r.kind, TableRowKind::Header))
    }

    pub fn body(&self) -> impl Iterator<Item = &TableRow> {
        self.rows
            .iter()
            .filter(|r| matches!(r.kind, TableRowKind::Body))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Markup with no Markdown equivalent, kept as serialized HTML.
    Raw(String),
    LineBreak,
    Link { href: String, children: Vec<Inline> },
    Image { src: String, alt: String },
    Strong(Vec<Inline>),
    Em(Vec<Inline>),
    Code(String),
}
