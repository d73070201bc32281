// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! Surface-event application: the edge lifecycle state machine, selection,
//! and one-time media sizing.
//!
//! Events arrive one at a time from the diagram surface; application is total
//! (unknown ids and stale gestures degrade to no-ops) and each event returns a
//! coarse [`Effect`] the surface can use to refresh derived state minimally.

use crate::model::{
    Canvas, CanvasEdge, Connection, DragState, EdgeId, EdgeStyle, Metadata, NodeId, Selection, Size,
};

/// An interaction event delivered by the diagram surface, plus the
/// asynchronous media-loaded signal from media elements.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A drag from one handle to another completed as a new connection.
    Connect { connection: Connection },
    /// The user grabbed an existing edge's endpoint.
    ReconnectStart { edge_id: EdgeId },
    /// The dragged endpoint was dropped on a valid handle; `connection` is the
    /// edge's replacement wiring.
    Reconnect {
        edge_id: EdgeId,
        connection: Connection,
    },
    /// The reconnection drag ended. `over_handle` reports whether the pointer
    /// was above a valid handle; the committed flag, not this report, decides
    /// whether the edge survives.
    ReconnectEnd { edge_id: EdgeId, over_handle: bool },
    /// Style picked from the inspector for an edge.
    SetEdgeStyle { edge_id: EdgeId, style: EdgeStyle },
    NodeClick { node_id: NodeId },
    EdgeClick { edge_id: EdgeId },
    /// Click on empty canvas.
    PaneClick,
    /// A media element reported its natural dimensions.
    MediaLoaded { node_id: NodeId, natural: Size },
}

/// Coarse summary of what an event changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effect {
    pub edges_added: Vec<EdgeId>,
    pub edges_removed: Vec<EdgeId>,
    pub edges_updated: Vec<EdgeId>,
    pub nodes_updated: Vec<NodeId>,
    pub selection_changed: bool,
}

impl Effect {
    pub fn is_empty(&self) -> bool {
        self.edges_added.is_empty()
            && self.edges_removed.is_empty()
            && self.edges_updated.is_empty()
            && self.nodes_updated.is_empty()
            && !self.selection_changed
    }
}

/// Applies one surface event to the canvas.
pub fn apply_event(canvas: &mut Canvas, event: SurfaceEvent) -> Effect {
    let mut effect = Effect::default();

    match event {
        SurfaceEvent::Connect { connection } => {
            apply_connect(canvas, connection, &mut effect);
        }
        SurfaceEvent::ReconnectStart { edge_id } => {
            apply_reconnect_start(canvas, edge_id);
        }
        SurfaceEvent::Reconnect {
            edge_id,
            connection,
        } => {
            apply_reconnect(canvas, edge_id, connection, &mut effect);
        }
        SurfaceEvent::ReconnectEnd { edge_id, .. } => {
            apply_reconnect_end(canvas, edge_id, &mut effect);
        }
        SurfaceEvent::SetEdgeStyle { edge_id, style } => {
            if let Some(edge) = canvas.edges_mut().get_mut(&edge_id) {
                if edge.style() != style {
                    edge.set_style(style);
                    effect.edges_updated.push(edge_id);
                }
            }
        }
        SurfaceEvent::NodeClick { node_id } => {
            effect.selection_changed = canvas.select_node(&node_id);
        }
        SurfaceEvent::EdgeClick { edge_id } => {
            effect.selection_changed = canvas.select_edge(&edge_id);
        }
        SurfaceEvent::PaneClick => {
            effect.selection_changed = canvas.clear_selection();
        }
        SurfaceEvent::MediaLoaded { node_id, natural } => {
            if let Some(node) = canvas.nodes_mut().get_mut(&node_id) {
                if node.apply_media_size(natural) {
                    effect.nodes_updated.push(node_id);
                }
            }
        }
    }

    effect
}

/// New edges are always accepted: duplicate parallel edges and self-loops are
/// allowed. The only guard is that both endpoints still exist.
fn apply_connect(canvas: &mut Canvas, connection: Connection, effect: &mut Effect) {
    if !canvas.nodes().contains_key(&connection.source)
        || !canvas.nodes().contains_key(&connection.target)
    {
        return;
    }

    let edge_id = canvas.fresh_edge_id();
    let edge = CanvasEdge::new(
        edge_id.clone(),
        connection,
        EdgeStyle::Step,
        Metadata::new(),
    );
    canvas.edges_mut().insert(edge_id.clone(), edge);
    effect.edges_added.push(edge_id);
}

/// Only one reconnection drags at a time; a start while another drag is in
/// flight, or for an edge that no longer exists, is ignored.
fn apply_reconnect_start(canvas: &mut Canvas, edge_id: EdgeId) {
    if !matches!(canvas.drag(), DragState::Idle) {
        return;
    }
    if !canvas.edges().contains_key(&edge_id) {
        return;
    }
    canvas.set_drag(DragState::Dragging {
        edge_id,
        committed: false,
    });
}

/// Commit of the in-flight drag. A commit naming a since-deleted node leaves
/// the committed flag false, so the drop event falls back to deletion.
fn apply_reconnect(
    canvas: &mut Canvas,
    edge_id: EdgeId,
    connection: Connection,
    effect: &mut Effect,
) {
    let DragState::Dragging {
        edge_id: dragged, ..
    } = canvas.drag()
    else {
        return;
    };
    if dragged != &edge_id {
        return;
    }

    if !canvas.nodes().contains_key(&connection.source)
        || !canvas.nodes().contains_key(&connection.target)
    {
        return;
    }

    let Some(edge) = canvas.edges_mut().get_mut(&edge_id) else {
        return;
    };
    edge.reconnect(connection);
    canvas.set_drag(DragState::Dragging {
        edge_id: edge_id.clone(),
        committed: true,
    });
    effect.edges_updated.push(edge_id);
}

/// Drop of the in-flight drag. Without a prior commit the gesture means
/// "delete": the edge is removed outright rather than left dangling, and a
/// selection pointing at it is cleared.
fn apply_reconnect_end(canvas: &mut Canvas, edge_id: EdgeId, effect: &mut Effect) {
    let DragState::Dragging {
        edge_id: dragged,
        committed,
    } = canvas.drag()
    else {
        return;
    };
    if dragged != &edge_id {
        return;
    }
    let committed = *committed;
    canvas.set_drag(DragState::Idle);

    if committed {
        return;
    }

    if canvas.edges_mut().remove(&edge_id).is_some() {
        if canvas.selection() == &Selection::Edge(edge_id.clone()) {
            effect.selection_changed = canvas.clear_selection();
        }
        effect.edges_removed.push(edge_id);
    }
}
