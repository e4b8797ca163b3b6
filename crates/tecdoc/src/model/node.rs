//! Raw response tree as handed over by a transport.

use serde::{Deserialize, Serialize};

/// Name of the element that wraps every operation's result set.
pub const RESULT_ELEMENT: &str = "data";

/// Name of the grouping wrapper and of each grouped item.
///
/// The service encodes a collection as `<field><array><array>..</array>..</array></field>`:
/// the outer `array` is the wrapper, every inner `array` is one record.
pub const GROUP_ELEMENT: &str = "array";

/// One element of a response tree: a name, optional text and ordered children.
///
/// Text-only content is carried in `text`; transports strip whitespace-only
/// text between elements before building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Creates an element with no text and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Creates a text leaf.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// Creates one grouped item (`<array>`) holding the given fields.
    pub fn item(fields: impl IntoIterator<Item = RawNode>) -> Self {
        Self::new(GROUP_ELEMENT).with_children(fields)
    }

    /// Creates `<name><array>items..</array></name>`.
    pub fn collection(name: impl Into<String>, items: impl IntoIterator<Item = RawNode>) -> Self {
        Self::new(name).with_child(Self::new(GROUP_ELEMENT).with_children(items))
    }

    /// Sets the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child elements.
    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns true if this element is a grouping wrapper or grouped item.
    pub fn is_group(&self) -> bool {
        self.name == GROUP_ELEMENT
    }

    /// Returns true if this is a grouping wrapper holding at least one item.
    pub fn is_wrapper(&self) -> bool {
        self.is_group() && self.children.iter().any(RawNode::is_group)
    }

    /// Returns the text content, treating an empty string as absent.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns the first child with the given name.
    pub fn child(&self, name: &str) -> Option<&RawNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Removes and returns the first element named `name`, searching breadth-first.
    ///
    /// The tree is consumed; the returned subtree is all that survives.
    pub fn into_descendant(self, name: &str) -> Option<RawNode> {
        let mut queue = std::collections::VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            if node.name == name {
                return Some(node);
            }
            queue.extend(node.children);
        }
        None
    }
}
