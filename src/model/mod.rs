// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! Core data model: the raw dataset, canvas entities, and the live canvas.

pub mod canvas;
pub mod dataset;
pub mod edge;
pub mod ids;
pub mod node;

pub use canvas::{Canvas, DragState, Selection};
pub use dataset::{
    text_field, DatasetLink, DatasetNode, GraphDataset, Metadata, RawId, DESCRIPTION_KEYS,
    IMAGE_KEYS, NAME_KEYS, TYPE_KEYS, VIDEO_KEYS,
};
pub use edge::{
    CanvasEdge, Connection, EdgeStyle, Handle, ParseEdgeStyleError, ParseHandleError, Side,
    SLOTS_PER_SIDE,
};
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use node::{CanvasNode, Position, Size};
