//! TLV data objects.
//!
//! A [`DataObject`] is one EMVCo tag-length-value field. Its [`Content`] is either
//! a [`Content::Leaf`] holding literal text, or a [`Content::Branch`] holding an
//! ordered list of nested data objects (merchant account information and
//! additional data fields are branches).
//!
//! ## Usage Patterns
//!
//! ### Creating Objects
//!
//! ```rust
//! use sgqr::DataObject;
//!
//! let currency = DataObject::leaf("53", "Transaction Currency", 3, "702");
//! let additional = DataObject::branch("62", "Additional Data Fields", 99)
//!     .with_child(DataObject::leaf("01", "Reference Number", 25, "REF123"));
//!
//! assert!(currency.is_leaf());
//! assert_eq!(additional.children().map(|c| c.len()), Some(1));
//! ```
//!
//! ### Using the data_object! macro
//!
//! ```rust
//! use sgqr::data_object;
//!
//! let additional = data_object!("62", "Additional Data Fields", 99, [
//!     ("01", "Reference Number", 25, "REF123"),
//! ]);
//! assert!(additional.is_branch());
//! ```
//!
//! The `label` is for diagnostics only; it is never encoded.

use std::fmt;

/// The value carried by a [`DataObject`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Literal text encoded verbatim.
    Leaf(String),
    /// Nested data objects, serialized in order and concatenated.
    Branch(Vec<DataObject>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Leaf(String::new())
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Leaf(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Leaf(s)
    }
}

impl From<Vec<DataObject>> for Content {
    fn from(children: Vec<DataObject>) -> Self {
        Content::Branch(children)
    }
}

/// A single EMVCo TLV field.
///
/// `max_length` bounds the encoded value only, not the tag and length prefix.
/// For a branch it bounds the concatenation of its serialized children.
///
/// # Examples
///
/// ```rust
/// use sgqr::{Content, DataObject};
///
/// let name = DataObject::leaf("59", "Merchant Name", 25, "Kopi Stall");
/// assert_eq!(name.tag, "59");
/// assert_eq!(name.as_str(), Some("Kopi Stall"));
/// assert_eq!(name.content, Content::Leaf("Kopi Stall".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DataObject {
    pub tag: String,
    pub label: String,
    pub max_length: usize,
    pub content: Content,
}

impl DataObject {
    /// Creates a data object from its parts.
    #[must_use]
    pub fn new(tag: &str, label: &str, max_length: usize, content: impl Into<Content>) -> Self {
        DataObject {
            tag: tag.to_string(),
            label: label.to_string(),
            max_length,
            content: content.into(),
        }
    }

    /// Creates a leaf holding literal text.
    #[must_use]
    pub fn leaf(tag: &str, label: &str, max_length: usize, value: impl Into<String>) -> Self {
        DataObject::new(tag, label, max_length, Content::Leaf(value.into()))
    }

    /// Creates an empty branch. Children are added with [`DataObject::with_child`]
    /// or [`DataObject::push`].
    #[must_use]
    pub fn branch(tag: &str, label: &str, max_length: usize) -> Self {
        DataObject::new(tag, label, max_length, Content::Branch(Vec::new()))
    }

    /// Appends a child, turning a leaf into a branch if needed.
    #[must_use]
    pub fn with_child(mut self, child: DataObject) -> Self {
        self.push(child);
        self
    }

    /// Appends a child in place.
    ///
    /// A leaf's text is discarded when it becomes a branch.
    pub fn push(&mut self, child: DataObject) {
        match &mut self.content {
            Content::Branch(children) => children.push(child),
            Content::Leaf(_) => self.content = Content::Branch(vec![child]),
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    #[must_use]
    pub fn is_branch(&self) -> bool {
        matches!(self.content, Content::Branch(_))
    }

    /// Returns the literal text of a leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.content {
            Content::Leaf(s) => Some(s),
            Content::Branch(_) => None,
        }
    }

    /// Returns the children of a branch.
    #[must_use]
    pub fn children(&self) -> Option<&[DataObject]> {
        match &self.content {
            Content::Leaf(_) => None,
            Content::Branch(children) => Some(children),
        }
    }

    /// Finds a direct child by tag.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&DataObject> {
        self.children()?.iter().find(|c| c.tag == tag)
    }

    /// Returns `true` if the tag is exactly two ASCII digits.
    #[must_use]
    pub fn has_valid_tag(&self) -> bool {
        is_valid_tag(&self.tag)
    }
}

impl fmt::Display for DataObject {
    /// Diagnostic rendering, e.g. `59 (Merchant Name)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tag, self.label)
    }
}

pub(crate) fn is_valid_tag(tag: &str) -> bool {
    tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit())
}
