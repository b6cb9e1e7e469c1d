//! Root payload: the ordered top-level data objects of a QR string.
//!
//! Order is part of the wire contract. The CRC tag (`63`) must come last and
//! is rendered by the root walker in [`crate::ser`], not by the generic
//! leaf/branch path.

use crate::DataObject;

/// Tag of the CRC data object that terminates every payload.
pub const CHECKSUM_TAG: &str = "63";

/// Reserved length field of the CRC data object (four hex digits).
pub const CHECKSUM_LENGTH: &str = "04";

/// An ordered sequence of top-level data objects.
///
/// # Examples
///
/// ```rust
/// use sgqr::{DataObject, Payload};
///
/// let mut payload = Payload::new();
/// payload.push(DataObject::leaf("00", "Payload Format Indicator", 2, "01"));
/// payload.push_checksum();
///
/// assert_eq!(payload.len(), 2);
/// assert!(payload.ends_with_checksum());
/// assert_eq!(sgqr::to_string(&payload).unwrap(), "0002016304AAE6");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Payload {
    objects: Vec<DataObject>,
}

impl Payload {
    #[must_use]
    pub fn new() -> Self {
        Payload {
            objects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Payload {
            objects: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, object: DataObject) {
        self.objects.push(object);
    }

    /// Appends the CRC placeholder. Its value is computed at serialization time.
    pub fn push_checksum(&mut self) {
        self.objects.push(checksum_object());
    }

    #[must_use]
    pub fn objects(&self) -> &[DataObject] {
        &self.objects
    }

    /// Finds a top-level data object by tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&DataObject> {
        self.objects.iter().find(|o| o.tag == tag)
    }

    /// Mutable lookup, used to override assembled fields before encoding.
    pub fn get_mut(&mut self, tag: &str) -> Option<&mut DataObject> {
        self.objects.iter_mut().find(|o| o.tag == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[must_use]
    pub fn ends_with_checksum(&self) -> bool {
        self.objects
            .last()
            .map_or(false, |o| o.tag == CHECKSUM_TAG)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataObject> {
        self.objects.iter()
    }
}

pub(crate) fn checksum_object() -> DataObject {
    DataObject::leaf(CHECKSUM_TAG, "CRC", 4, "")
}

impl<'a> IntoIterator for &'a Payload {
    type Item = &'a DataObject;
    type IntoIter = std::slice::Iter<'a, DataObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl IntoIterator for Payload {
    type Item = DataObject;
    type IntoIter = std::vec::IntoIter<DataObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl FromIterator<DataObject> for Payload {
    fn from_iter<T: IntoIterator<Item = DataObject>>(iter: T) -> Self {
        Payload {
            objects: Vec::from_iter(iter),
        }
    }
}

impl From<Vec<DataObject>> for Payload {
    fn from(objects: Vec<DataObject>) -> Self {
        Payload { objects }
    }
}
