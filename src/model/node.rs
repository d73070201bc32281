// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

use super::dataset::Metadata;
use super::ids::NodeId;
use crate::layout;

/// A point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Extent in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A node as it lives on the canvas: dataset metadata plus layout state.
///
/// `sized` is the one-time auto-size guard. Media elements can fire load and
/// metadata events more than once and at arbitrary times; the first event with
/// real dimensions wins and every later one is a no-op. The flag lives on the
/// entity itself so the guard survives re-renders of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasNode {
    node_id: NodeId,
    meta: Metadata,
    position: Position,
    size: Size,
    sized: bool,
}

impl CanvasNode {
    pub fn new(node_id: NodeId, meta: Metadata, position: Position, size: Size) -> Self {
        Self {
            node_id,
            meta,
            position,
            size,
            sized: false,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn sized(&self) -> bool {
        self.sized
    }

    /// Applies the natural media dimensions to this node, at most once.
    ///
    /// Returns `true` when the node's footprint actually changed. Zero or
    /// unknown dimensions are ignored without consuming the one application:
    /// a later event with real dimensions may still size the node.
    pub fn apply_media_size(&mut self, natural: Size) -> bool {
        if self.sized {
            return false;
        }
        let Some(fitted) = layout::fit_media(natural) else {
            return false;
        };

        self.size = fitted;
        self.position = layout::snap_position(self.position);
        self.sized = true;
        true
    }
}
