// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

use std::fmt;
use std::str::FromStr;

use super::dataset::Metadata;
use super::ids::{EdgeId, NodeId};

/// Number of attachment slots on each side of a node (at 25/50/75%).
pub const SLOTS_PER_SIDE: u8 = 3;

/// The side of a node a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// A named attachment point on a node's border: a side plus a slot index.
///
/// Wire form is `<side>-<slot>` (e.g. `right-1`), matching the handle ids the
/// diagram surface reports in its connect/reconnect callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    side: Side,
    slot: u8,
}

impl Handle {
    pub fn new(side: Side, slot: u8) -> Result<Self, ParseHandleError> {
        if slot >= SLOTS_PER_SIDE {
            return Err(ParseHandleError::SlotOutOfRange { slot });
        }
        Ok(Self { side, slot })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.side.as_str(), self.slot)
    }
}

impl FromStr for Handle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((side, slot)) = s.split_once('-') else {
            return Err(ParseHandleError::MissingSeparator);
        };

        let side = match side {
            "left" => Side::Left,
            "right" => Side::Right,
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            other => {
                return Err(ParseHandleError::UnknownSide {
                    side: other.to_owned(),
                })
            }
        };

        let slot: u8 = slot
            .parse()
            .map_err(|_| ParseHandleError::InvalidSlot {
                slot: slot.to_owned(),
            })?;

        Self::new(side, slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHandleError {
    MissingSeparator,
    UnknownSide { side: String },
    InvalidSlot { slot: String },
    SlotOutOfRange { slot: u8 },
}

impl fmt::Display for ParseHandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => f.write_str("handle must be '<side>-<slot>'"),
            Self::UnknownSide { side } => write!(f, "unknown handle side '{side}'"),
            Self::InvalidSlot { slot } => write!(f, "handle slot '{slot}' is not a number"),
            Self::SlotOutOfRange { slot } => {
                write!(f, "handle slot {slot} out of range (max {})", SLOTS_PER_SIDE - 1)
            }
        }
    }
}

impl std::error::Error for ParseHandleError {}

/// The visual routing tag of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    Default,
    Step,
    SmoothStep,
    Straight,
}

impl EdgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Step => "step",
            Self::SmoothStep => "smoothstep",
            Self::Straight => "straight",
        }
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeStyle {
    type Err = ParseEdgeStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "step" => Ok(Self::Step),
            "smoothstep" => Ok(Self::SmoothStep),
            "straight" => Ok(Self::Straight),
            other => Err(ParseEdgeStyleError {
                style: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEdgeStyleError {
    style: String,
}

impl fmt::Display for ParseEdgeStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown edge style '{}' (expected default|step|smoothstep|straight)",
            self.style
        )
    }
}

impl std::error::Error for ParseEdgeStyleError {}

/// The endpoint description carried by connect and reconnect gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
    pub source_handle: Option<Handle>,
    pub target_handle: Option<Handle>,
}

impl Connection {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn with_handles(
        source: NodeId,
        source_handle: Handle,
        target: NodeId,
        target_handle: Handle,
    ) -> Self {
        Self {
            source,
            target,
            source_handle: Some(source_handle),
            target_handle: Some(target_handle),
        }
    }
}

/// A committed edge in the canvas collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasEdge {
    edge_id: EdgeId,
    source: NodeId,
    target: NodeId,
    source_handle: Option<Handle>,
    target_handle: Option<Handle>,
    style: EdgeStyle,
    meta: Metadata,
}

impl CanvasEdge {
    pub fn new(edge_id: EdgeId, connection: Connection, style: EdgeStyle, meta: Metadata) -> Self {
        Self {
            edge_id,
            source: connection.source,
            target: connection.target,
            source_handle: connection.source_handle,
            target_handle: connection.target_handle,
            style,
            meta,
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn source_handle(&self) -> Option<Handle> {
        self.source_handle
    }

    pub fn target_handle(&self) -> Option<Handle> {
        self.target_handle
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }

    pub fn set_style(&mut self, style: EdgeStyle) {
        self.style = style;
    }

    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    /// Rewrites the endpoints from a reconnection gesture.
    ///
    /// Id, style tag, and metadata are preserved; only the connection changes.
    pub fn reconnect(&mut self, connection: Connection) {
        self.source = connection.source;
        self.target = connection.target;
        self.source_handle = connection.source_handle;
        self.target_handle = connection.target_handle;
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }
}
