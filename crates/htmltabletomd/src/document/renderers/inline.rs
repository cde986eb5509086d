use crate::document::model::Inline;
use crate::document::providers::markup::parse_fragment_in;
use kuchikiki::{NodeData, NodeRef};

/// Rewrites a fragment of inline HTML as Markdown.
pub trait InlineConverter {
    fn convert(&self, html: &str) -> String;
}

impl<F> InlineConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, html: &str) -> String {
        self(html)
    }
}

/// Default inline converter: `__bold__`, `_italic_`, code spans, links and
/// images. Anything else is left as HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineMarkdown;

impl InlineMarkdown {
    pub fn new() -> Self {
        Self
    }

    fn collect_inlines(&self, node: &NodeRef) -> Vec<Inline> {
        let mut inlines = Vec::new();
        for child in node.children() {
            self.parse_inlines(&child, &mut inlines);
        }
        inlines
    }

    fn parse_inlines(&self, node: &NodeRef, inlines: &mut Vec<Inline>) {
        match node.data() {
            // Serializing re-escapes the text the same way cell inner HTML is
            NodeData::Text(_) => inlines.push(Inline::Text(node.to_string())),
            NodeData::Element(data) => {
                let tag_name = data.name.local.as_ref();
                match tag_name {
                    "br" => inlines.push(Inline::LineBreak),
                    "a" => {
                        let href = data.attributes.borrow().get("href").unwrap_or("").to_string();
                        let children = self.collect_inlines(node);
                        inlines.push(Inline::Link { href, children });
                    }
                    "img" => {
                        let attrs = data.attributes.borrow();
                        let src = attrs.get("src").unwrap_or("").to_string();
                        let alt = attrs.get("alt").unwrap_or("").to_string();
                        inlines.push(Inline::Image { src, alt });
                    }
                    "strong" | "b" => {
                        let children = self.collect_inlines(node);
                        inlines.push(Inline::Strong(children));
                    }
                    "em" | "i" => {
                        let children = self.collect_inlines(node);
                        inlines.push(Inline::Em(children));
                    }
                    "code" => inlines.push(Inline::Code(node.text_contents())),
                    _ => inlines.push(Inline::Raw(node.to_string())),
                }
            }
            _ => {}
        }
    }

    fn render_inlines(&self, inlines: &[Inline], out: &mut String) {
        for inline in inlines {
            self.render_inline(inline, out);
        }
    }

    fn render_inline(&self, inline: &Inline, out: &mut String) {
        match inline {
            Inline::Text(t) | Inline::Raw(t) => out.push_str(t),
            Inline::LineBreak => out.push_str("  \n"),
            Inline::Link { href, children } => {
                out.push('[');
                self.render_inlines(children, out);
                out.push_str(&format!("]({})", href));
            }
            Inline::Image { src, alt } => {
                out.push_str(&format!("![{}]({})", alt, src));
            }
            Inline::Strong(children) => {
                out.push_str("__");
                self.render_inlines(children, out);
                out.push_str("__");
            }
            Inline::Em(children) => {
                out.push('_');
                self.render_inlines(children, out);
                out.push('_');
            }
            Inline::Code(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
        }
    }
}

impl InlineConverter for InlineMarkdown {
    fn convert(&self, html: &str) -> String {
        // Body context keeps leading whitespace of the fragment
        let root = parse_fragment_in("body", html);

        let inlines = self.collect_inlines(&root);
        tracing::trace!("Converted {} inline nodes", inlines.len());

        let mut out = String::new();
        self.render_inlines(&inlines, &mut out);
        out
    }
}
