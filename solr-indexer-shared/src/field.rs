//! Field descriptors and relevance boosts.

use serde::{Deserialize, Serialize};

use crate::errors::DocumentError;

/// Semantic type of a field, used to pick a value normalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    String,
    Integer,
    Float,
    Boolean,
    Date,
}

/// An index-time relevance multiplier.
///
/// A boost is always finite and strictly positive. An absent boost
/// (`Option::None`) means the backend default applies, which is not the
/// same thing as a boost of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Boost(f32);

impl Boost {
    /// Create a boost, rejecting zero, negative and non-finite values.
    pub fn new(value: f32) -> Result<Self, DocumentError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DocumentError::InvalidBoost(value))
        }
    }

    /// The multiplier value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Boost {
    type Error = DocumentError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Describes one field of a framework document.
///
/// `id` is the internal identifier documents use to set values; `name` is
/// the attribute name written to the engine and may differ from the id.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Internal field identifier.
    pub id: String,
    /// Destination (wire-level) attribute name.
    pub name: String,
    /// Semantic type of the field.
    pub field_type: FieldType,
    /// Optional field-level boost.
    pub boost: Option<Boost>,
}

impl Field {
    /// Create a field whose destination name equals its id.
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            field_type,
            boost: None,
        }
    }

    /// Set the destination name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the field boost.
    pub fn with_boost(mut self, boost: Boost) -> Self {
        self.boost = Some(boost);
        self
    }
}
