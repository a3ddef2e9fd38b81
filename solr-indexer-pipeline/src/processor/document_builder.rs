//! Native document builder.
//!
//! Converts a `FrameworkDocument` into a `NativeDocument` for the update
//! request that is currently open.

use tracing::trace;

use crate::normalizer::NormalizerRegistry;
use solr_indexer_repository::NativeDocument;
use solr_indexer_shared::FrameworkDocument;

/// Builds native documents, normalizing values and applying boosts.
///
/// Values are written in document order under each field's destination
/// name. When two fields share a destination name the later value wins.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    normalizers: NormalizerRegistry,
}

impl DocumentBuilder {
    /// Create a builder using the given normalizers.
    pub fn new(normalizers: NormalizerRegistry) -> Self {
        Self { normalizers }
    }

    /// Fill `shell` from `document`.
    ///
    /// `shell` must be an empty document created by the open update request.
    /// The document boost and each field boost are applied independently,
    /// and only when set.
    pub fn build(&self, document: &FrameworkDocument, mut shell: NativeDocument) -> NativeDocument {
        if let Some(boost) = document.boost() {
            shell.set_boost(boost);
        }

        for entry in document.entries() {
            let field = &entry.field;
            let value = self.normalizers.normalize(field.field_type, entry.value.clone());
            shell.set_field(field.name.clone(), value);

            if let Some(boost) = field.boost {
                shell.set_field_boost(field.name.clone(), boost);
            }
        }

        trace!(fields = shell.fields().len(), "Built native document");
        shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use solr_indexer_repository::UpdateRequest;
    use solr_indexer_shared::{Boost, Field, FieldType};

    fn boost(value: f32) -> Boost {
        Boost::new(value).unwrap()
    }

    #[test]
    fn test_build_writes_destination_names() {
        let request = UpdateRequest::new();
        let title = Field::new("title", FieldType::Text).with_name("title_t");
        let doc = FrameworkDocument::new().with(&title, "Rust in Action");

        let native = DocumentBuilder::default().build(&doc, request.create_document());

        assert_eq!(native.field("title_t"), Some(&json!("Rust in Action")));
        assert!(native.field("title").is_none());
        assert_eq!(native.request_id(), request.id());
    }

    #[test]
    fn test_build_normalizes_dates() {
        let request = UpdateRequest::new();
        let created = Field::new("created", FieldType::Date).with_name("created_dt");
        let label = Field::new("label", FieldType::String);
        let doc = FrameworkDocument::new()
            .with(&created, 1705314600)
            .with(&label, "1705314600");

        let native = DocumentBuilder::default().build(&doc, request.create_document());

        assert_eq!(native.field("created_dt"), Some(&json!("2024-01-15T10:30:00Z")));
        assert_eq!(native.field("label"), Some(&json!("1705314600")));
    }

    #[test]
    fn test_document_boost_only() {
        let request = UpdateRequest::new();
        let title = Field::new("title", FieldType::Text);
        let doc = FrameworkDocument::new()
            .with(&title, "Boosted")
            .with_boost(boost(2.0));

        let native = DocumentBuilder::default().build(&doc, request.create_document());

        assert_eq!(native.boost().map(Boost::value), Some(2.0));
        assert_eq!(native.field_boost_count(), 0);
    }

    #[test]
    fn test_field_boost_only() {
        let request = UpdateRequest::new();
        let title = Field::new("title", FieldType::Text).with_boost(boost(3.0));
        let body = Field::new("body", FieldType::Text);
        let doc = FrameworkDocument::new()
            .with(&title, "Title")
            .with(&body, "Body");

        let native = DocumentBuilder::default().build(&doc, request.create_document());

        assert!(native.boost().is_none());
        assert_eq!(native.field_boost("title").map(Boost::value), Some(3.0));
        assert!(native.field_boost("body").is_none());
        assert_eq!(native.field_boost_count(), 1);
    }

    #[test]
    fn test_document_and_field_boosts() {
        let request = UpdateRequest::new();
        let title = Field::new("title", FieldType::Text).with_boost(boost(1.5));
        let doc = FrameworkDocument::new()
            .with(&title, "Both")
            .with_boost(boost(2.0));

        let native = DocumentBuilder::default().build(&doc, request.create_document());

        assert_eq!(native.boost().map(Boost::value), Some(2.0));
        assert_eq!(native.field_boost("title").map(Boost::value), Some(1.5));
    }

    #[test]
    fn test_destination_collision_last_value_wins() {
        let request = UpdateRequest::new();
        let short = Field::new("short_title", FieldType::Text).with_name("title");
        let long = Field::new("long_title", FieldType::Text).with_name("title");
        let doc = FrameworkDocument::new()
            .with(&short, "Short")
            .with(&long, "A much longer title");

        let native = DocumentBuilder::default().build(&doc, request.create_document());

        assert_eq!(native.field("title"), Some(&json!("A much longer title")));
        assert_eq!(native.fields().len(), 1);
    }

    #[test]
    fn test_empty_registry_skips_normalization() {
        let request = UpdateRequest::new();
        let created = Field::new("created", FieldType::Date);
        let doc = FrameworkDocument::new().with(&created, "2024-01-15 10:30:00");

        let builder = DocumentBuilder::new(NormalizerRegistry::empty());
        let native = builder.build(&doc, request.create_document());

        assert_eq!(native.field("created"), Some(&json!("2024-01-15 10:30:00")));
    }
}
