// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! ASCII diagram extraction.
//!
//! Diagrams are drawn with node tokens `(label)` joined by link glyphs:
//!
//! ```text
//! (*Start)-(Next)
//!    |   \
//!  (Down) (Diag)
//! ```
//!
//! The pipeline is [`CharGrid`] -> [`scan_nodes`] -> [`GraphBuilder`], which expands nodes
//! breadth-first from the `(*...)` start node using an [`EdgeTracer`] per direction.

mod build;
mod grid;
mod scan;
mod trace;

pub use build::GraphBuilder;
pub use grid::{CharGrid, BLANK};
pub use scan::scan_nodes;
pub use trace::{Direction, EdgeTracer};

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::model::Graph;

/// Extraction failed on an internal consistency check.
///
/// Malformed diagrams never produce this; they shrink the graph instead. An error here means the
/// tracer and the token scanner disagree about what a node looks like, and the partial result
/// must not be mistaken for an empty diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("node glyph at row {row}, column {column} has no '(' to its left")]
    UnanchoredNodeGlyph { row: usize, column: usize },
}

/// Extracts a graph, reporting notices through `tracing`.
pub fn extract_graph(text: &str) -> Result<Graph, ExtractError> {
    extract_graph_with(text, &mut TracingDiagnostics)
}

/// Extracts a graph, reporting notices to `diagnostics`.
pub fn extract_graph_with(
    text: &str,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Graph, ExtractError> {
    GraphBuilder::new(text).build(diagnostics)
}
