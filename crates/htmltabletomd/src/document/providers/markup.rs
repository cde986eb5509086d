use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::{LocalName, Namespace, QualName};
use kuchikiki::traits::*;
use kuchikiki::{parse_fragment, NodeRef};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parses `html` as the children of a `context` element and returns the
/// fragment root, whose children are the parsed nodes.
pub fn parse_fragment_in(context: &str, html: &str) -> NodeRef {
    let ctx_name = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(context),
    );
    let document = parse_fragment(ctx_name, vec![]).one(html);
    document.first_child().unwrap_or(document)
}

/// Parsed HTML input, queried by tag name.
pub struct HtmlTree {
    root: NodeRef,
    has_tags: bool,
}

impl HtmlTree {
    pub fn parse(html: &str) -> Self {
        // Inside <template> bare rows, sections and cells are kept
        Self {
            root: parse_fragment_in("template", html),
            has_tags: contains_start_tag(html),
        }
    }

    /// Whether the input contained any markup of its own, even markup the
    /// tree builder dropped.
    pub fn has_elements(&self) -> bool {
        self.has_tags
    }

    pub fn find_all(&self, tag: &str) -> Vec<Element> {
        find_all(&self.root, tag)
    }
}

/// Handle to a single element of an [`HtmlTree`].
#[derive(Debug, Clone)]
pub struct Element {
    node: NodeRef,
}

impl Element {
    pub fn find_all(&self, tag: &str) -> Vec<Element> {
        find_all(&self.node, tag)
    }

    pub fn inner_html(&self) -> String {
        self.node.children().map(|child| child.to_string()).collect()
    }
}

fn find_all(node: &NodeRef, tag: &str) -> Vec<Element> {
    node.descendants()
        .elements()
        .filter(|el| el.name.local.as_ref() == tag)
        .map(|el| Element {
            node: el.as_node().clone(),
        })
        .collect()
}

#[derive(Default)]
struct StartTagScan {
    found: bool,
}

impl TokenSink for StartTagScan {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(Tag {
            kind: TagKind::StartTag,
            ..
        }) = token
        {
            self.found = true;
        }
        TokenSinkResult::Continue
    }
}

fn contains_start_tag(html: &str) -> bool {
    let mut tokenizer = Tokenizer::new(StartTagScan::default(), TokenizerOpts::default());
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_has_no_elements() {
        assert!(!HtmlTree::parse("This is a plain text with no html").has_elements());
        assert!(!HtmlTree::parse("").has_elements());
        assert!(!HtmlTree::parse("   \n ").has_elements());
        assert!(!HtmlTree::parse("a < b and c > d").has_elements());
    }

    #[test]
    fn inline_markup_counts_as_elements() {
        assert!(HtmlTree::parse("Here is <i>some text</i>").has_elements());
    }

    #[test]
    fn document_wrappers_count_as_elements() {
        let tree = HtmlTree::parse("<body>hello</body>");
        assert!(tree.has_elements());
        assert!(tree.find_all("tr").is_empty());
    }

    #[test]
    fn find_all_keeps_document_order() {
        let tree = HtmlTree::parse("<table><tr><td>a</td></tr><tr><td>b</td><td>c</td></tr></table>");
        let rows = tree.find_all("tr");
        assert_eq!(rows.len(), 2);
        let cells: Vec<String> = rows[1]
            .find_all("td")
            .iter()
            .map(Element::inner_html)
            .collect();
        assert_eq!(cells, vec!["b", "c"]);
    }

    #[test]
    fn bare_rows_survive_parsing() {
        let tree = HtmlTree::parse("<tr><th>H</th></tr><tr><td>x</td></tr>");
        assert!(tree.has_elements());
        assert_eq!(tree.find_all("tr").len(), 2);
        assert_eq!(tree.find_all("th")[0].inner_html(), "H");
    }

    #[test]
    fn inner_html_keeps_markup_and_whitespace() {
        let tree = HtmlTree::parse("<table><tr><td>column <b>12</b>\n  next</td></tr></table>");
        let cell = &tree.find_all("td")[0];
        assert_eq!(cell.inner_html(), "column <b>12</b>\n  next");
    }
}
