// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! Raw node-link dataset as loaded from JSON, before it becomes canvas entities.
//!
//! Everything beyond the structural fields (`id`, `source`, `target`) is opaque
//! metadata and is carried verbatim as a JSON object. Well-known metadata keys
//! are consulted through [`text_field`] with an explicit ordered candidate list;
//! nothing in the crate relies on duck-typed field presence.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Arbitrary per-entity metadata, keyed by the source dataset's field names.
pub type Metadata = Map<String, Value>;

/// Display-text candidates, highest priority first.
pub const NAME_KEYS: &[&str] = &["label", "title", "name"];
/// Category-tag candidates.
pub const TYPE_KEYS: &[&str] = &["type", "kind"];
/// Static-media candidates.
pub const IMAGE_KEYS: &[&str] = &["imageUrl", "image", "thumbnail", "portrait"];
/// Motion-media candidates.
pub const VIDEO_KEYS: &[&str] = &["videoUrl", "video"];
/// Free-text description candidates.
pub const DESCRIPTION_KEYS: &[&str] = &["description"];

/// The dataset the canvas is built from: ordered node and link sequences.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphDataset {
    #[serde(default)]
    pub nodes: Vec<DatasetNode>,
    #[serde(default)]
    pub links: Vec<DatasetLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetNode {
    pub id: RawId,
    #[serde(flatten)]
    pub meta: Metadata,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetLink {
    #[serde(default)]
    pub id: Option<RawId>,
    pub source: RawId,
    pub target: RawId,
    #[serde(flatten)]
    pub meta: Metadata,
}

/// A dataset identifier, which source data may spell as a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Looks up the first candidate key holding displayable text.
///
/// Mirrors the source dataset's loose-typing rules: a non-empty string counts,
/// a number is stringified, everything else (null, objects, arrays, booleans,
/// empty strings) falls through to the next candidate.
pub fn text_field(meta: &Metadata, keys: &[&str]) -> Option<String> {
    for key in keys {
        match meta.get(*key) {
            Some(Value::String(text)) if !text.is_empty() => return Some(text.clone()),
            Some(Value::Number(number)) => return Some(number.to_string()),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{text_field, GraphDataset, RawId, IMAGE_KEYS, NAME_KEYS};
    use serde_json::json;

    fn meta(value: serde_json::Value) -> super::Metadata {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn text_field_respects_candidate_order() {
        let meta = meta(json!({ "name": "Plato", "title": "The Republic" }));
        assert_eq!(text_field(&meta, NAME_KEYS), Some("The Republic".to_owned()));
    }

    #[test]
    fn text_field_skips_empty_strings_and_non_text() {
        let meta = meta(json!({
            "imageUrl": "",
            "image": null,
            "thumbnail": ["not", "a", "url"],
            "portrait": "/portraits/plato.jpg"
        }));
        assert_eq!(
            text_field(&meta, IMAGE_KEYS),
            Some("/portraits/plato.jpg".to_owned())
        );
    }

    #[test]
    fn text_field_stringifies_numbers() {
        let meta = meta(json!({ "label": 7 }));
        assert_eq!(text_field(&meta, NAME_KEYS), Some("7".to_owned()));
    }

    #[test]
    fn dataset_parses_numeric_ids_and_keeps_extra_fields() {
        let dataset: GraphDataset = serde_json::from_value(json!({
            "nodes": [
                { "id": 1, "label": "Plato", "era": "ancient" },
                { "id": "kant", "label": "Immanuel Kant" }
            ],
            "links": [
                { "source": 1, "target": "kant", "relation": "influenced" }
            ]
        }))
        .expect("dataset");

        assert_eq!(dataset.nodes.len(), 2);
        assert_eq!(dataset.links.len(), 1);
        assert_eq!(dataset.nodes[0].id, RawId::Number(1.into()));
        assert_eq!(dataset.nodes[0].meta.get("era"), Some(&json!("ancient")));
        assert_eq!(dataset.links[0].id, None);
        assert_eq!(
            dataset.links[0].meta.get("relation"),
            Some(&json!("influenced"))
        );
    }
}
