// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

use serde_json::Value;

use crate::model::{
    text_field, CanvasNode, NodeId, DESCRIPTION_KEYS, NAME_KEYS, TYPE_KEYS,
};

/// The derived view model for the side inspector: title, tag, description,
/// then whatever other metadata the dataset carried, rendered generically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorCard {
    pub node_id: NodeId,
    pub title: String,
    pub type_tag: Option<String>,
    pub description: Option<String>,
    pub rows: Vec<InspectorRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorRow {
    pub key: String,
    pub value: String,
}

/// Derives the inspector card for a node. The title falls back to the node id
/// when no display-text field is present.
pub fn inspector_card(node: &CanvasNode) -> InspectorCard {
    let meta = node.meta();

    let title = text_field(meta, NAME_KEYS)
        .unwrap_or_else(|| node.node_id().as_str().to_owned());
    let type_tag = text_field(meta, TYPE_KEYS);
    let description = text_field(meta, DESCRIPTION_KEYS);

    let rows = meta
        .iter()
        .filter(|(key, _)| {
            let key = key.as_str();
            !NAME_KEYS.contains(&key)
                && !TYPE_KEYS.contains(&key)
                && !DESCRIPTION_KEYS.contains(&key)
        })
        .map(|(key, value)| InspectorRow {
            key: key.clone(),
            value: render_value(value),
        })
        .collect();

    InspectorCard {
        node_id: node.node_id().clone(),
        title,
        type_tag,
        description,
        rows,
    }
}

/// Strings and numbers render bare; everything else renders as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
