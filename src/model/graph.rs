// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::Serialize;
use smol_str::SmolStr;

use super::ids::{EdgeId, NodeId};

/// Marks the start node: its label opens with `(*`.
pub const START_MARKER: &str = "(*";

/// A `(row, column)` cell coordinate in the source text.
///
/// Row 0 is the first line, column 0 the first character of a line. Columns count characters,
/// not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, JsonSchema)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Node {
    #[schemars(with = "u64")]
    id: NodeId,
    #[schemars(with = "String")]
    label: SmolStr,
    position: Position,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<SmolStr>, position: Position) -> Self {
        Self {
            id,
            label: label.into(),
            position,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The literal token text, including parentheses and the optional `*`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position of the opening `(`.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Token width in grid columns.
    pub fn width(&self) -> usize {
        self.label.chars().count()
    }

    pub fn is_start(&self) -> bool {
        self.label.starts_with(START_MARKER)
    }

    /// The label without its parentheses and start marker, e.g. `A` for `(*A)`.
    pub fn name(&self) -> &str {
        self.label
            .trim_start_matches('(')
            .trim_start_matches('*')
            .trim_end_matches(')')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Edge {
    #[schemars(with = "u64")]
    id: EdgeId,
    #[schemars(with = "u64")]
    source: NodeId,
    #[schemars(with = "u64")]
    target: NodeId,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }
}

/// Nodes and edges extracted from one diagram.
///
/// `nodes` holds every token the scanner found, reachable or not; `edges` only holds edges that
/// were discovered while walking out from the start node. Node ids index into `nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, JsonSchema)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|node| node.is_start())
    }

    /// Targets of the edges leaving `id`, in discovery order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .iter()
            .filter(move |edge| edge.source == id)
            .map(|edge| edge.target)
    }

    /// Edges as `(source label, target label)` pairs, in discovery order.
    ///
    /// Ids are arena positions, so this is the form to compare when checking topology.
    pub fn edge_labels(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let source = self.node(edge.source)?;
                let target = self.node(edge.target)?;
                Some((source.label(), target.label()))
            })
            .collect()
    }
}
