// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Asciigraph — directed graphs from ASCII-art diagrams.
//!
//! Nodes are written `(label)`, the single start node `(*label)`, and edges are runs of `-`,
//! `|`, `/` or `\` between them. [`extract::extract_graph`] turns such text into a
//! [`model::Graph`]; [`format`] exports it for layout and rendering tools.

pub mod diagnostics;
pub mod extract;
pub mod format;
pub mod model;

pub use extract::{extract_graph, extract_graph_with, ExtractError};
pub use model::Graph;
