//! Framework documents handed to an indexing session.

use crate::field::{Boost, Field};
use crate::FieldValue;

/// One field of a document together with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEntry {
    pub field: Field,
    pub value: FieldValue,
}

/// An ordered set of field values plus an optional document boost.
///
/// Every entry carries its `Field` descriptor, so each field id present in
/// the document always resolves. Setting a value for an id that is already
/// present replaces the value and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameworkDocument {
    entries: Vec<DocumentEntry>,
    boost: Option<Boost>,
}

impl FrameworkDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a field.
    pub fn set(&mut self, field: &Field, value: impl Into<FieldValue>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.field.id == field.id) {
            Some(entry) => {
                entry.field = field.clone();
                entry.value = value;
            }
            None => self.entries.push(DocumentEntry {
                field: field.clone(),
                value,
            }),
        }
        self
    }

    /// Builder-style variant of [`FrameworkDocument::set`].
    pub fn with(mut self, field: &Field, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Set the document-level boost.
    pub fn set_boost(&mut self, boost: Option<Boost>) -> &mut Self {
        self.boost = boost;
        self
    }

    /// Builder-style variant of [`FrameworkDocument::set_boost`].
    pub fn with_boost(mut self, boost: Boost) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn boost(&self) -> Option<Boost> {
        self.boost
    }

    /// Look up the value of a field by id.
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|e| e.field.id == id)
            .map(|e| &e.value)
    }

    /// Iterate over entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &DocumentEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
