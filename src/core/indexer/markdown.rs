//! Markdown to plain text normalization.
//!
//! Normalization runs in three stages:
//!
//! 1. **parse** - `pulldown-cmark` events are folded into a [`Node`]
//!    tree with one variant per construct
//! 2. **strip** - formatting is unwrapped to bare text, markup-only
//!    nodes (code blocks, raw HTML, tables, footnotes, rules) are
//!    dropped, links and images keep their display text
//! 3. **serialize** - a [`Visitor`] writes the stripped tree out with
//!    blank lines between blocks
//!
//! The serialized text then has every whitespace run collapsed to a
//! single space. CommonMark parsing never fails, so malformed input
//! simply comes through as literal text.

use pulldown_cmark::{Event, Options, Parser, Tag};

/// Controls which markup-only constructs keep their text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOptions {
    /// Keep the contents of fenced and indented code blocks
    pub keep_code: bool,

    /// Keep the text of table cells
    pub keep_tables: bool,
}

/// Markdown document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root(Vec<Node>),
    Paragraph(Vec<Node>),
    Heading(Vec<Node>),
    BlockQuote(Vec<Node>),
    List(Vec<Node>),
    ListItem(Vec<Node>),
    Emphasis(Vec<Node>),
    Strong(Vec<Node>),
    Delete(Vec<Node>),
    Link { url: String, children: Vec<Node> },
    Image { url: String, title: String, alt: Vec<Node> },
    Table(Vec<Node>),
    TableRow(Vec<Node>),
    TableCell(Vec<Node>),
    FootnoteDefinition(Vec<Node>),
    FootnoteReference(String),
    CodeBlock(String),
    InlineCode(String),
    Html(String),
    TaskMarker(bool),
    Break,
    ThematicBreak,
    Text(String),
}

/// Receives the literal text of a tree, block by block
pub trait Visitor {
    fn visit_text(&mut self, text: &str);

    fn enter_block(&mut self) {}

    fn leave_block(&mut self) {}
}

impl Node {
    /// Walk the tree, reporting literal text and block boundaries
    ///
    /// Markup-only leaves (raw HTML, footnote references, task
    /// markers, rules) contribute nothing.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Node::Root(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::Delete(children)
            | Node::Link { children, .. }
            | Node::Image { alt: children, .. } => {
                for child in children {
                    child.accept(visitor);
                }
            }
            Node::Paragraph(children)
            | Node::Heading(children)
            | Node::BlockQuote(children)
            | Node::List(children)
            | Node::ListItem(children)
            | Node::Table(children)
            | Node::TableRow(children)
            | Node::TableCell(children)
            | Node::FootnoteDefinition(children) => {
                visitor.enter_block();
                for child in children {
                    child.accept(visitor);
                }
                visitor.leave_block();
            }
            Node::CodeBlock(code) => {
                visitor.enter_block();
                visitor.visit_text(code);
                visitor.leave_block();
            }
            Node::Text(text) | Node::InlineCode(text) => visitor.visit_text(text),
            Node::Break => visitor.visit_text("\n"),
            Node::FootnoteReference(_)
            | Node::Html(_)
            | Node::TaskMarker(_)
            | Node::ThematicBreak => {}
        }
    }

    /// Reduce the tree to paragraphs of bare text
    pub fn strip(self, options: &StripOptions) -> Vec<Node> {
        match self {
            Node::Root(children) => vec![Node::Root(strip_all(children, options))],
            Node::Paragraph(children) | Node::Heading(children) | Node::ListItem(children) => {
                vec![Node::Paragraph(strip_all(children, options))]
            }
            Node::BlockQuote(children)
            | Node::List(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::Delete(children)
            | Node::Link { children, .. } => strip_all(children, options),
            Node::Image { title, alt, .. } => {
                let alt = literal_text(&alt);
                let text = if alt.trim().is_empty() { title } else { alt };
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Node::Text(text)]
                }
            }
            Node::Table(children) | Node::TableRow(children) if options.keep_tables => {
                strip_all(children, options)
            }
            Node::TableCell(children) if options.keep_tables => {
                vec![Node::Paragraph(strip_all(children, options))]
            }
            Node::CodeBlock(code) if options.keep_code => {
                vec![Node::Paragraph(vec![Node::Text(code)])]
            }
            Node::InlineCode(code) => vec![Node::Text(code)],
            Node::Break => vec![Node::Text("\n".to_string())],
            Node::Text(text) => vec![Node::Text(text)],
            Node::Table(_)
            | Node::TableRow(_)
            | Node::TableCell(_)
            | Node::CodeBlock(_)
            | Node::FootnoteDefinition(_)
            | Node::FootnoteReference(_)
            | Node::Html(_)
            | Node::TaskMarker(_)
            | Node::ThematicBreak => Vec::new(),
        }
    }
}

fn strip_all(nodes: Vec<Node>, options: &StripOptions) -> Vec<Node> {
    nodes
        .into_iter()
        .flat_map(|node| node.strip(options))
        .collect()
}

/// Concatenated text of a node list, without block separators
fn literal_text(nodes: &[Node]) -> String {
    struct Inline(String);

    impl Visitor for Inline {
        fn visit_text(&mut self, text: &str) {
            self.0.push_str(text);
        }
    }

    let mut inline = Inline(String::new());
    for node in nodes {
        node.accept(&mut inline);
    }
    inline.0
}

/// Serializes a tree with a blank line around every block
#[derive(Debug, Default)]
pub struct PlainTextWriter {
    out: String,
}

impl PlainTextWriter {
    pub fn finish(self) -> String {
        self.out
    }
}

impl Visitor for PlainTextWriter {
    fn visit_text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn enter_block(&mut self) {
        self.out.push_str("\n\n");
    }

    fn leave_block(&mut self) {
        self.out.push_str("\n\n");
    }
}

/// Parse Markdown into a [`Node::Root`] tree
pub fn parse(markdown: &str) -> Node {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(markdown, parser_options()) {
        builder.handle_event(event);
    }
    builder.finish()
}

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_FOOTNOTES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    opts
}

/// Kind of an element still being filled with children
enum FrameKind {
    Paragraph,
    Heading,
    BlockQuote,
    List,
    ListItem,
    Emphasis,
    Strong,
    Delete,
    Link { url: String },
    Image { url: String, title: String },
    Table,
    TableRow,
    TableCell,
    FootnoteDefinition,
    CodeBlock,
    HtmlBlock,
}

impl FrameKind {
    fn from_tag(tag: Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => FrameKind::Paragraph,
            Tag::Heading { .. } => FrameKind::Heading,
            Tag::BlockQuote(_) => FrameKind::BlockQuote,
            Tag::CodeBlock(_) => FrameKind::CodeBlock,
            Tag::HtmlBlock => FrameKind::HtmlBlock,
            Tag::List(_) => FrameKind::List,
            Tag::Item => FrameKind::ListItem,
            Tag::FootnoteDefinition(_) => FrameKind::FootnoteDefinition,
            Tag::Table(_) => FrameKind::Table,
            Tag::TableHead | Tag::TableRow => FrameKind::TableRow,
            Tag::TableCell => FrameKind::TableCell,
            Tag::Emphasis => FrameKind::Emphasis,
            Tag::Strong => FrameKind::Strong,
            Tag::Strikethrough => FrameKind::Delete,
            Tag::Link { dest_url, .. } => FrameKind::Link {
                url: dest_url.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => FrameKind::Image {
                url: dest_url.into_string(),
                title: title.into_string(),
            },
            // Extensions that are not enabled; kept as plain blocks
            _ => FrameKind::Paragraph,
        }
    }
}

struct Frame {
    kind: FrameKind,
    children: Vec<Node>,
}

impl Frame {
    fn into_node(self) -> Node {
        let children = self.children;
        match self.kind {
            FrameKind::Paragraph => Node::Paragraph(children),
            FrameKind::Heading => Node::Heading(children),
            FrameKind::BlockQuote => Node::BlockQuote(children),
            FrameKind::List => Node::List(children),
            FrameKind::ListItem => Node::ListItem(children),
            FrameKind::Emphasis => Node::Emphasis(children),
            FrameKind::Strong => Node::Strong(children),
            FrameKind::Delete => Node::Delete(children),
            FrameKind::Link { url } => Node::Link { url, children },
            FrameKind::Image { url, title } => Node::Image {
                url,
                title,
                alt: children,
            },
            FrameKind::Table => Node::Table(children),
            FrameKind::TableRow => Node::TableRow(children),
            FrameKind::TableCell => Node::TableCell(children),
            FrameKind::FootnoteDefinition => Node::FootnoteDefinition(children),
            FrameKind::CodeBlock => Node::CodeBlock(concat_leaves(children)),
            FrameKind::HtmlBlock => Node::Html(concat_leaves(children)),
        }
    }
}

/// Join the raw strings of text-like leaves
fn concat_leaves(children: Vec<Node>) -> String {
    children
        .into_iter()
        .filter_map(|node| match node {
            Node::Text(s) | Node::Html(s) | Node::InlineCode(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Folds the flat event stream into a tree
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    root: Vec<Node>,
}

impl TreeBuilder {
    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.stack.push(Frame {
                kind: FrameKind::from_tag(tag),
                children: Vec::new(),
            }),
            Event::End(_) => self.close(),
            Event::Text(text) => self.push(Node::Text(text.into_string())),
            Event::Code(code) => self.push(Node::InlineCode(code.into_string())),
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.push(Node::InlineCode(math.into_string()))
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push(Node::Html(html.into_string()))
            }
            Event::FootnoteReference(name) => {
                self.push(Node::FootnoteReference(name.into_string()))
            }
            Event::SoftBreak => self.push(Node::Text("\n".to_string())),
            Event::HardBreak => self.push(Node::Break),
            Event::Rule => self.push(Node::ThematicBreak),
            Event::TaskListMarker(checked) => self.push(Node::TaskMarker(checked)),
        }
    }

    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.root.push(node),
        }
    }

    fn close(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let node = frame.into_node();
            self.push(node);
        }
    }

    fn finish(mut self) -> Node {
        while !self.stack.is_empty() {
            self.close();
        }
        Node::Root(self.root)
    }
}

/// Replace every whitespace run with one space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Markdown to plain text converter
#[derive(Debug, Clone, Default)]
pub struct MarkdownNormalizer {
    options: StripOptions,
}

impl MarkdownNormalizer {
    pub fn new(options: StripOptions) -> Self {
        Self { options }
    }

    /// Convert a Markdown body to collapsed plain text
    pub fn normalize(&self, body: &str) -> String {
        if body.trim().is_empty() {
            return String::new();
        }

        let mut writer = PlainTextWriter::default();
        for node in parse(body).strip(&self.options) {
            node.accept(&mut writer);
        }

        collapse_whitespace(&writer.finish())
    }
}

/// Convert Markdown to plain text with default options
///
/// Absent input is treated like an empty document.
///
/// # Example
///
/// ```
/// use mdindex::core::indexer::markdown::normalize;
///
/// assert_eq!(
///     normalize(Some("# Hello\n\nThis is **bold** text.")),
///     "Hello This is bold text."
/// );
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(body: Option<&str>) -> String {
    MarkdownNormalizer::default().normalize(body.unwrap_or_default())
}
