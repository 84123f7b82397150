//! Portfolio document model, partial updates and linear edit history.

pub mod collection;
pub mod history;
pub mod model;
pub mod patch;
pub mod presets;
pub mod store;

use thiserror::Error;

pub use history::EditHistory;
pub use model::Document;
pub use patch::{Branch, PartialDocument};
pub use presets::TemplatePreset;
pub use store::DocumentStore;

pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse stored document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a stored document.
pub fn load_json(json: &str) -> DocumentResult<Document> {
    serde_json::from_str(json).map_err(|err| {
        tracing::warn!(error = %err, "stored document rejected");
        DocumentError::Parse(err)
    })
}

/// Parses a partial update as sent by an editing surface.
pub fn parse_partial(json: &str) -> DocumentResult<PartialDocument> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_document_round_trips_through_json() {
        let document = TemplatePreset::Innovate.document();
        let json = serde_json::to_string(&document).expect("serialize");
        assert_eq!(load_json(&json).expect("load"), document);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = load_json("{\"hero\": 3}").expect_err("not a document");
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn partial_json_parses_nested_branches() {
        let partial = parse_partial(r#"{"seo": {"metaTitle": "New"}}"#).expect("partial");
        assert_eq!(partial.branches(), vec![Branch::Seo]);
    }
}
