//! Value normalizers.
//!
//! A normalizer maps a raw field value to the representation the engine
//! expects for the field's semantic type. Normalizers never fail: a value
//! that cannot be normalized is returned unchanged.

mod date_normalizer;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use solr_indexer_shared::{FieldType, FieldValue};

pub use date_normalizer::DateNormalizer;

/// Maps a raw field value to an engine-compatible one.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, value: FieldValue) -> FieldValue;
}

/// Normalizers keyed by field type.
///
/// The default registry normalizes `FieldType::Date` with [`DateNormalizer`].
#[derive(Clone)]
pub struct NormalizerRegistry {
    normalizers: HashMap<FieldType, Arc<dyn Normalizer>>,
}

impl NormalizerRegistry {
    /// Create a registry with no normalizers.
    pub fn empty() -> Self {
        Self {
            normalizers: HashMap::new(),
        }
    }

    /// Register (or replace) the normalizer for a field type.
    pub fn register<N>(&mut self, field_type: FieldType, normalizer: N) -> &mut Self
    where
        N: Normalizer + 'static,
    {
        self.normalizers.insert(field_type, Arc::new(normalizer));
        self
    }

    pub fn get(&self, field_type: FieldType) -> Option<&Arc<dyn Normalizer>> {
        self.normalizers.get(&field_type)
    }

    /// Normalize a value for the given field type.
    ///
    /// Types without a registered normalizer pass through unchanged.
    pub fn normalize(&self, field_type: FieldType, value: FieldValue) -> FieldValue {
        match self.normalizers.get(&field_type) {
            Some(normalizer) => normalizer.normalize(value),
            None => value,
        }
    }
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(FieldType::Date, DateNormalizer);
        registry
    }
}

impl fmt::Debug for NormalizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizerRegistry")
            .field("field_types", &self.normalizers.keys().collect::<Vec<_>>())
            .finish()
    }
}
