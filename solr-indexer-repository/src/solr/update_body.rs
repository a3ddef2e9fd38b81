//! Solr JSON update body rendering.
//!
//! Solr's JSON update handler accepts an object whose keys repeat, one
//! `"add"` per document, which `serde_json::Map` cannot represent. The body
//! is therefore assembled from individually serialized commands.

use serde_json::{json, Map, Value};

use crate::types::{NativeDocument, UpdateCommand, UpdateRequest};

/// Render an update request as a Solr JSON update body.
///
/// Commands are emitted in request order, for example:
///
/// ```text
/// {"add":{"doc":{"id":"1"},"boost":2.0},"delete":{"query":"*:*"},"commit":{}}
/// ```
pub fn render_update_body(request: &UpdateRequest) -> String {
    let mut parts: Vec<String> = Vec::new();

    for command in request.commands() {
        match command {
            UpdateCommand::Add(documents) => {
                for document in documents {
                    parts.push(format!("\"add\":{}", build_add_command(document)));
                }
            }
            UpdateCommand::DeleteQuery(query) => {
                parts.push(format!("\"delete\":{}", json!({ "query": query })));
            }
            UpdateCommand::Commit => parts.push("\"commit\":{}".to_string()),
        }
    }

    format!("{{{}}}", parts.join(","))
}

/// Build the `add` command for one document.
///
/// Boosted fields are written in the `{"value": v, "boost": b}` form.
fn build_add_command(document: &NativeDocument) -> Value {
    let mut doc = Map::new();
    for (name, value) in document.fields() {
        let rendered = match document.field_boost(name) {
            Some(boost) => json!({ "value": value, "boost": boost.value() }),
            None => value.clone(),
        };
        doc.insert(name.clone(), rendered);
    }

    let mut command = json!({ "doc": doc });
    if let Some(boost) = document.boost() {
        command["boost"] = json!(boost.value());
    }
    command
}
