// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! One-shot conversion of a raw dataset into the initial canvas entity set.
//!
//! Placement is a deterministic grid keyed on input order; it is a placeholder
//! layout with no optimization objective. Runs once at mount; everything after
//! that goes through surface events.

use std::fmt;

use crate::model::{
    Canvas, CanvasEdge, CanvasNode, Connection, EdgeId, EdgeStyle, GraphDataset, IdError, NodeId,
};

use super::{grid_slot, PLACEHOLDER_SIZE};

/// Builds the initial canvas from a dataset.
///
/// Nodes keep their dataset order for placement. Each link becomes a `step`
/// edge; links without an id are assigned `e-<index>` from their position in
/// the input sequence. A link whose id (given or synthesized) is already taken
/// is skipped rather than overwriting the earlier edge, so edge ids stay
/// unique even against source data that reuses the synthesized scheme.
pub fn map_dataset(dataset: &GraphDataset) -> Result<Canvas, MapError> {
    let mut canvas = Canvas::new();

    for (index, raw) in dataset.nodes.iter().enumerate() {
        let node_id = NodeId::new(raw.id.to_string())
            .map_err(|reason| MapError::InvalidNodeId { index, reason })?;
        if canvas.nodes().contains_key(&node_id) {
            return Err(MapError::DuplicateNodeId { node_id });
        }

        let node = CanvasNode::new(
            node_id.clone(),
            raw.meta.clone(),
            grid_slot(index),
            PLACEHOLDER_SIZE,
        );
        canvas.nodes_mut().insert(node_id, node);
    }

    for (index, raw) in dataset.links.iter().enumerate() {
        let edge_id = match &raw.id {
            Some(given) => EdgeId::new(given.to_string())
                .map_err(|reason| MapError::InvalidLinkId { index, reason })?,
            None => EdgeId::new(format!("e-{index}")).expect("synthesized edge id"),
        };
        if canvas.edges().contains_key(&edge_id) {
            continue;
        }

        let source = resolve_endpoint(&canvas, &raw.source.to_string(), index)?;
        let target = resolve_endpoint(&canvas, &raw.target.to_string(), index)?;

        let edge = CanvasEdge::new(
            edge_id.clone(),
            Connection::new(source, target),
            EdgeStyle::Step,
            raw.meta.clone(),
        );
        canvas.edges_mut().insert(edge_id, edge);
    }

    Ok(canvas)
}

fn resolve_endpoint(canvas: &Canvas, endpoint: &str, index: usize) -> Result<NodeId, MapError> {
    let Some((node_id, _)) = canvas.nodes().get_key_value(endpoint) else {
        return Err(MapError::UnknownEndpoint {
            index,
            endpoint: endpoint.to_owned(),
        });
    };
    Ok(node_id.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    InvalidNodeId { index: usize, reason: IdError },
    DuplicateNodeId { node_id: NodeId },
    InvalidLinkId { index: usize, reason: IdError },
    UnknownEndpoint { index: usize, endpoint: String },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNodeId { index, reason } => {
                write!(f, "node {index} has an invalid id: {reason}")
            }
            Self::DuplicateNodeId { node_id } => {
                write!(f, "duplicate node id '{node_id}'")
            }
            Self::InvalidLinkId { index, reason } => {
                write!(f, "link {index} has an invalid id: {reason}")
            }
            Self::UnknownEndpoint { index, endpoint } => {
                write!(f, "link {index} references unknown node '{endpoint}'")
            }
        }
    }
}

impl std::error::Error for MapError {}
