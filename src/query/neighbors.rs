// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

use std::collections::BTreeSet;

use crate::model::{Canvas, EdgeId, NodeId};

/// A node's immediate surroundings: incident edges in collection order and
/// the distinct neighbor ids in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Neighborhood {
    pub incident_edges: Vec<EdgeId>,
    pub neighbors: Vec<NodeId>,
}

/// Collects the neighborhood of `node_id`. A self-loop contributes its edge
/// but does not list the node as its own neighbor. Unknown ids yield an empty
/// neighborhood.
pub fn neighborhood(canvas: &Canvas, node_id: &NodeId) -> Neighborhood {
    let mut incident_edges = Vec::new();
    let mut neighbors = BTreeSet::new();

    for (edge_id, edge) in canvas.edges() {
        if !edge.touches(node_id) {
            continue;
        }
        incident_edges.push(edge_id.clone());

        for endpoint in [edge.source(), edge.target()] {
            if endpoint != node_id {
                neighbors.insert(endpoint.clone());
            }
        }
    }

    Neighborhood {
        incident_edges,
        neighbors: neighbors.into_iter().collect(),
    }
}
