//! Typed document tree.
//!
//! The tree follows the shape of a markdown syntax tree but only models the
//! node kinds the diagram transform reads or writes. Everything else is kept
//! as opaque [`Node::Markdown`] text.

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Document root.
    Root(Vec<Node>),
    /// Opaque markdown content kept verbatim.
    Markdown(String),
    /// Fenced code block.
    Code(Code),
    /// Paragraph wrapping inline children.
    Paragraph(Vec<Node>),
    /// Image reference.
    Image(Image),
}

/// Fenced code block contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// Language tag (first word of the fence info string).
    pub lang: String,
    /// Remainder of the info string after the language tag.
    pub meta: String,
    /// Block text without the final line ending.
    pub value: String,
    /// Original markdown text of the block, written back verbatim on render.
    pub raw: Option<String>,
}

impl Code {
    /// Create a code block with no original markdown text.
    pub fn new(
        lang: impl Into<String>,
        meta: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            lang: lang.into(),
            meta: meta.into(),
            value: value.into(),
            raw: None,
        }
    }
}

/// Image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub alt: String,
}

/// Handle to a node: child indices walked from the root.
///
/// Handles stay valid as long as no siblings are inserted or removed along
/// the path. Replacing a node in place keeps every handle valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Handle to the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Handle to the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Child indices from the root.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl Node {
    /// Node kind name (`root`, `markdown`, `code`, `paragraph`, `image`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Root(_) => "root",
            Self::Markdown(_) => "markdown",
            Self::Code(_) => "code",
            Self::Paragraph(_) => "paragraph",
            Self::Image(_) => "image",
        }
    }

    /// Child nodes (empty for leaves).
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Root(children) | Self::Paragraph(children) => children,
            Self::Markdown(_) | Self::Code(_) | Self::Image(_) => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Root(children) | Self::Paragraph(children) => Some(children),
            Self::Markdown(_) | Self::Code(_) | Self::Image(_) => None,
        }
    }

    /// Every code node with its handle, in document order.
    ///
    /// Depth-first, pre-order: each code node is visited exactly once.
    pub fn code_nodes(&self) -> Vec<(NodePath, &Code)> {
        let mut found = Vec::new();
        collect_code(self, &NodePath::root(), &mut found);
        found
    }

    /// Resolve a handle.
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    /// Resolve a handle for mutation.
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut node = self;
        for &index in path.indices() {
            node = node.children_mut()?.get_mut(index)?;
        }
        Some(node)
    }

    /// Turn this node into a paragraph holding a single image.
    pub fn replace_with_image(&mut self, image: Image) {
        *self = Self::Paragraph(vec![Self::Image(image)]);
    }
}

fn collect_code<'a>(node: &'a Node, path: &NodePath, found: &mut Vec<(NodePath, &'a Code)>) {
    if let Node::Code(code) = node {
        found.push((path.clone(), code));
    }
    for (index, child) in node.children().iter().enumerate() {
        collect_code(child, &path.child(index), found);
    }
}
