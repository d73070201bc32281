// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! AetherGraph — interactive graph-canvas core.
//!
//! Maps a node-link dataset with arbitrary metadata into a live diagram
//! entity set, then drives that set through interaction events delivered by an
//! external diagram surface (which owns rendering, hit-testing, pan/zoom, and
//! drag mechanics). The core owns the edge lifecycle, selection, media
//! resolution, and one-time grid sizing.

pub mod layout;
pub mod media;
pub mod model;
pub mod ops;
pub mod query;
