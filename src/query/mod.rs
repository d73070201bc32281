// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! Read-only derivations over the canvas for inspector panels and detail
//! pages. Nothing here mutates entity state.

pub mod inspect;
pub mod neighbors;

pub use inspect::{inspector_card, InspectorCard, InspectorRow};
pub use neighbors::{neighborhood, Neighborhood};
