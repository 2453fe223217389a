// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graph data model.
//!
//! A diagram becomes a [`Graph`]: an arena of [`Node`]s in scan order plus the directed [`Edge`]s
//! discovered between them.

pub mod graph;
pub mod ids;

pub use graph::{Edge, Graph, Node, Position, START_MARKER};
pub use ids::{EdgeId, Id, IdKind, NodeId};
