//! Owned markdown node tree.

/// A parsed markdown node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Block-level container (document, paragraph, heading, list, ...)
    Block(Element<BlockKind>),
    /// Inline container (emphasis, link, line break, ...)
    Inline(Element<InlineKind>),
    /// Direct string payload
    Text(String),
    /// Non-textual content, kept for inspection but never extracted
    Excluded(Excluded),
}

/// A container node with its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<K> {
    pub kind: K,
    pub children: Vec<Node>,
}

impl<K> Element<K> {
    pub const fn new(kind: K) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Document,
    Paragraph,
    Heading(u8),
    BlockQuote,
    CodeBlock,
    List,
    ListItem,
    ThematicBreak,
    Table,
    TableHead,
    TableRow,
    TableCell,
    FootnoteDefinition,
    DefinitionList,
    DefinitionTitle,
    DefinitionDetails,
    Metadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Emphasis,
    Strong,
    Strikethrough,
    Superscript,
    Subscript,
    Link,
    LineBreak,
}

/// Node kinds whose content must not reach the search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Excluded {
    /// Raw HTML block
    HtmlBlock(String),
    /// Inline image with its alt content
    Image { url: String, alt: Vec<Node> },
    /// Raw inline HTML
    InlineHtml(String),
}

impl Node {
    /// Children of a container node, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Block(e) => &e.children,
            Self::Inline(e) => &e.children,
            Self::Text(_) | Self::Excluded(_) => &[],
        }
    }

    #[inline]
    pub fn is_paragraph(&self) -> bool {
        matches!(
            self,
            Self::Block(Element {
                kind: BlockKind::Paragraph,
                ..
            })
        )
    }

    /// Whether a direct child is a paragraph (nested ones are not searched).
    pub fn has_paragraph_child(&self) -> bool {
        self.children().iter().any(Node::is_paragraph)
    }
}
