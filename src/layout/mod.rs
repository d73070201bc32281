// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! Grid geometry: snapping, media fitting, and initial node placement.
//!
//! Everything here is pure math over positions and sizes. The at-most-once
//! application of a media fit to a node lives on
//! [`CanvasNode::apply_media_size`](crate::model::CanvasNode::apply_media_size).

use crate::model::{Position, Size};

pub mod mapper;

/// Pixel stride node sizes and positions snap to. The diagram surface reads
/// this constant for its visual snap grid as well.
pub const GRID_UNIT: f64 = 24.0;

/// Upper bound for the larger dimension of an auto-sized node.
pub const MAX_MEDIA_DIMENSION: f64 = 420.0;

/// Placeholder footprint for nodes whose media has not loaded (and for nodes
/// that never load any).
pub const PLACEHOLDER_SIZE: Size = Size {
    width: 200.0,
    height: 140.0,
};

/// Columns in the initial placement grid.
pub const GRID_COLUMNS: usize = 5;

/// Horizontal stride between initial placement cells.
pub const COLUMN_STRIDE: f64 = 300.0;

/// Vertical stride between initial placement rows.
pub const ROW_STRIDE: f64 = 200.0;

/// Snaps a dimension to the nearest grid multiple, flooring at one grid unit
/// so a footprint never collapses to zero.
pub fn snap_dimension(value: f64) -> f64 {
    let snapped = (value / GRID_UNIT).round() * GRID_UNIT;
    snapped.max(GRID_UNIT)
}

/// Snaps a coordinate to the nearest grid multiple (round to nearest, no floor).
pub fn snap_coordinate(value: f64) -> f64 {
    (value / GRID_UNIT).round() * GRID_UNIT
}

pub fn snap_position(position: Position) -> Position {
    Position::new(snap_coordinate(position.x), snap_coordinate(position.y))
}

/// Computes the grid-aligned footprint for media with the given natural
/// dimensions: uniform downscale so the larger dimension stays within
/// [`MAX_MEDIA_DIMENSION`] (never upscaling), then snap each dimension.
///
/// Returns `None` when either dimension is zero or not a real length, which
/// callers treat as "dimensions not known yet".
pub fn fit_media(natural: Size) -> Option<Size> {
    if !natural.width.is_finite() || !natural.height.is_finite() {
        return None;
    }
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return None;
    }

    let scale = (MAX_MEDIA_DIMENSION / natural.width.max(natural.height)).min(1.0);
    Some(Size::new(
        snap_dimension(natural.width * scale),
        snap_dimension(natural.height * scale),
    ))
}

/// Deterministic initial placement: cell `index` goes to column
/// `index % GRID_COLUMNS`, row `index / GRID_COLUMNS`.
pub fn grid_slot(index: usize) -> Position {
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    Position::new(column as f64 * COLUMN_STRIDE, row as f64 * ROW_STRIDE)
}
