//! Markdown to node tree conversion using pulldown-cmark.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

use super::tree::{BlockKind, Element, Excluded, InlineKind, Node};

/// Stack frame for tracking nested elements
enum Frame {
    Block(Element<BlockKind>),
    Inline(Element<InlineKind>),
    /// Raw HTML block, filled by `Html` events
    Html(String),
    Image { url: String, alt: Vec<Node> },
}

impl Frame {
    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Block(e) => Some(&mut e.children),
            Self::Inline(e) => Some(&mut e.children),
            Self::Image { alt, .. } => Some(alt),
            Self::Html(_) => None,
        }
    }

    fn into_node(self) -> Node {
        match self {
            Self::Block(e) => Node::Block(e),
            Self::Inline(e) => Node::Inline(e),
            Self::Html(html) => Node::Excluded(Excluded::HtmlBlock(html)),
            Self::Image { url, alt } => Node::Excluded(Excluded::Image { url, alt }),
        }
    }
}

/// Markdown to node tree converter
struct MarkdownConverter {
    /// Stack of open elements (for nested structures)
    stack: Vec<Frame>,
    /// Document children (collected when stack is empty)
    root_children: Vec<Node>,
    /// Last node added came from a text event
    last_was_text: bool,
}

impl MarkdownConverter {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root_children: Vec::new(),
            last_was_text: false,
        }
    }

    /// Convert markdown string to a document node
    fn convert(mut self, markdown: &str) -> Node {
        for event in Parser::new(markdown) {
            self.handle_event(event);
        }

        // pulldown-cmark balances its tags; anything left open is closed here
        while let Some(frame) = self.stack.pop() {
            self.add_node(frame.into_node());
        }

        Node::Block(Element {
            kind: BlockKind::Document,
            children: self.root_children,
        })
    }

    /// Handle a single pulldown-cmark event
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.stack.push(frame_for(tag)),
            Event::End(_) => self.end_tag(),
            Event::Text(text) => self.add_text(&text),
            Event::Code(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text)
            | Event::FootnoteReference(text) => self.add_node(Node::Text(text.into_string())),
            Event::Html(html) => self.add_html(&html),
            Event::InlineHtml(html) => {
                self.add_node(Node::Excluded(Excluded::InlineHtml(html.into_string())));
            }
            Event::SoftBreak | Event::HardBreak => {
                self.add_node(Node::Inline(Element::new(InlineKind::LineBreak)));
            }
            Event::Rule => self.add_node(Node::Block(Element::new(BlockKind::ThematicBreak))),
            // Checkbox state carries no text
            Event::TaskListMarker(_) => {}
        }
    }

    /// End a tag (pop from stack)
    fn end_tag(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.add_node(frame.into_node());
        }
    }

    /// Add text content, joining runs the parser split (escapes, entities).
    ///
    /// Only consecutive text events are joined; code spans stay their own leaf.
    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.last_was_text
            && let Some(Node::Text(last)) = self.current_children().and_then(|c| c.last_mut())
        {
            last.push_str(text);
            return;
        }
        self.add_node(Node::Text(text.to_string()));
        self.last_was_text = true;
    }

    /// Add raw HTML, appending to an open HTML block when there is one
    fn add_html(&mut self, html: &str) {
        if let Some(Frame::Html(buf)) = self.stack.last_mut() {
            buf.push_str(html);
        } else {
            self.add_node(Node::Excluded(Excluded::HtmlBlock(html.to_string())));
        }
    }

    /// Children list of the current context (top of stack or root)
    fn current_children(&mut self) -> Option<&mut Vec<Node>> {
        match self.stack.last_mut() {
            Some(frame) => frame.children_mut(),
            None => Some(&mut self.root_children),
        }
    }

    /// Add a node to current context (top of stack or root)
    fn add_node(&mut self, node: Node) {
        self.last_was_text = false;
        if let Some(children) = self.current_children() {
            children.push(node);
        }
    }
}

/// Open a frame for a pulldown-cmark tag
fn frame_for(tag: Tag) -> Frame {
    let block = |kind| Frame::Block(Element::new(kind));
    let inline = |kind| Frame::Inline(Element::new(kind));

    match tag {
        // Block elements
        Tag::Paragraph => block(BlockKind::Paragraph),
        Tag::Heading { level, .. } => block(BlockKind::Heading(heading_level(level))),
        Tag::BlockQuote(_) => block(BlockKind::BlockQuote),
        Tag::CodeBlock(_) => block(BlockKind::CodeBlock),
        Tag::HtmlBlock => Frame::Html(String::new()),
        Tag::List(_) => block(BlockKind::List),
        Tag::Item => block(BlockKind::ListItem),
        Tag::FootnoteDefinition(_) => block(BlockKind::FootnoteDefinition),
        Tag::MetadataBlock(_) => block(BlockKind::Metadata),

        // Table elements
        Tag::Table(_) => block(BlockKind::Table),
        Tag::TableHead => block(BlockKind::TableHead),
        Tag::TableRow => block(BlockKind::TableRow),
        Tag::TableCell => block(BlockKind::TableCell),

        // Definition list (extended syntax)
        Tag::DefinitionList => block(BlockKind::DefinitionList),
        Tag::DefinitionListTitle => block(BlockKind::DefinitionTitle),
        Tag::DefinitionListDefinition => block(BlockKind::DefinitionDetails),

        // Inline elements
        Tag::Emphasis => inline(InlineKind::Emphasis),
        Tag::Strong => inline(InlineKind::Strong),
        Tag::Strikethrough => inline(InlineKind::Strikethrough),
        Tag::Superscript => inline(InlineKind::Superscript),
        Tag::Subscript => inline(InlineKind::Subscript),
        Tag::Link { .. } => inline(InlineKind::Link),
        Tag::Image { dest_url, .. } => Frame::Image {
            url: dest_url.into_string(),
            alt: Vec::new(),
        },
    }
}

/// Convert heading level to its number
fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Parse a markdown body (CommonMark, no extensions) into a document node
pub fn parse(markdown: &str) -> Node {
    MarkdownConverter::new().convert(markdown)
}
