// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

use std::collections::BTreeMap;

use super::edge::CanvasEdge;
use super::ids::{EdgeId, NodeId};
use super::node::CanvasNode;

/// The single selected element, if any. Selecting a node clears any edge
/// selection and vice versa; exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Edge(EdgeId),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The in-flight reconnection gesture, if any. At most one edge drags at a
/// time; `committed` is the success flag that decides between commit and
/// delete when the drop event arrives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { edge_id: EdgeId, committed: bool },
}

/// The live entity set the diagram surface renders and mutates through events.
///
/// Drag state and selection are deliberately independent: selecting another
/// element while a reconnection is pending does not cancel the drag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Canvas {
    nodes: BTreeMap<NodeId, CanvasNode>,
    edges: BTreeMap<EdgeId, CanvasEdge>,
    selection: Selection,
    drag: DragState,
    hovered_node: Option<NodeId>,
    user_edge_seq: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, CanvasNode> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, CanvasNode> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, CanvasEdge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeId, CanvasEdge> {
        &mut self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&CanvasNode> {
        self.nodes.get(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&CanvasEdge> {
        self.edges.get(edge_id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub(crate) fn set_drag(&mut self, drag: DragState) {
        self.drag = drag;
    }

    /// Hover state for the surface's cursor styling. Owned here so the core
    /// never reaches into global presentation state.
    pub fn hovered_node(&self) -> Option<&NodeId> {
        self.hovered_node.as_ref()
    }

    pub fn set_hovered_node(&mut self, node_id: Option<NodeId>) {
        self.hovered_node = node_id;
    }

    /// Selects a node, clearing any edge selection. Returns whether the
    /// selection changed. Unknown ids leave the selection untouched.
    pub fn select_node(&mut self, node_id: &NodeId) -> bool {
        if !self.nodes.contains_key(node_id) {
            return false;
        }
        let next = Selection::Node(node_id.clone());
        if self.selection == next {
            return false;
        }
        self.selection = next;
        true
    }

    /// Selects an edge, clearing any node selection. Returns whether the
    /// selection changed.
    pub fn select_edge(&mut self, edge_id: &EdgeId) -> bool {
        if !self.edges.contains_key(edge_id) {
            return false;
        }
        let next = Selection::Edge(edge_id.clone());
        if self.selection == next {
            return false;
        }
        self.selection = next;
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        if self.selection.is_none() {
            return false;
        }
        self.selection = Selection::None;
        true
    }

    /// Generates an id for a user-created edge.
    ///
    /// User-created edges use a `c-<n>` namespace distinct from the mapper's
    /// `e-<index>` scheme; the counter additionally skips over any id already
    /// present in the collection, so uniqueness holds even against colliding
    /// source data.
    pub fn fresh_edge_id(&mut self) -> EdgeId {
        loop {
            let candidate = format!("c-{}", self.user_edge_seq);
            self.user_edge_seq = self.user_edge_seq.saturating_add(1);
            if !self.edges.contains_key(candidate.as_str()) {
                return EdgeId::new(candidate).expect("generated edge id is a valid segment");
            }
        }
    }
}
