/// A node in a parsed XML document.
///
/// Either a tag node (a label, ordered attributes, ordered children) or a
/// text node (literal character content). The tree is immutable once built;
/// consumers hold it as a read-only view.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Tag {
        label: String,
        attributes: Vec<(String, String)>,
        children: Vec<Element>,
    },
    Text(String),
}

impl Element {
    /// Creates an empty tag node with the given label.
    pub fn tag(label: impl Into<String>) -> Self {
        Element::Tag {
            label: label.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(content.into())
    }

    /// Appends an attribute; no-op on text nodes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Element::Tag { attributes, .. } = &mut self {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    /// Appends a child; no-op on text nodes.
    pub fn with_child(mut self, child: Element) -> Self {
        if let Element::Tag { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// The tag name for tag nodes, the literal text for text nodes.
    pub fn label(&self) -> &str {
        match self {
            Element::Tag { label, .. } => label,
            Element::Text(content) => content,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Element::Tag { .. })
    }

    /// The node's direct children, in document order. Empty for text nodes.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Tag { children, .. } => children,
            Element::Text(_) => &[],
        }
    }

    /// Looks up an attribute by exact name. Text nodes have no attributes.
    ///
    /// Lookup is a linear scan; XML elements carry a handful of attributes
    /// at most.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        match self {
            Element::Tag { attributes, .. } => attributes
                .iter()
                .find(|(attr_name, _)| attr_name == name)
                .map(|(_, value)| value.as_str()),
            Element::Text(_) => None,
        }
    }
}
