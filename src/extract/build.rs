// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashSet, VecDeque};

use super::grid::CharGrid;
use super::scan::scan_nodes;
use super::trace::EdgeTracer;
use super::ExtractError;
use crate::diagnostics::{Diagnostics, Notice};
use crate::model::{Edge, EdgeId, Graph, NodeId};

/// Builds a [`Graph`] from diagram text by walking breadth-first out of the start node.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder<'t> {
    text: &'t str,
}

impl<'t> GraphBuilder<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    /// Extracts the graph.
    ///
    /// Text without node tokens yields an empty graph. Text without a start node also yields an
    /// empty graph and reports [`Notice::MissingStartNode`]. Every scanned node is kept, but edges
    /// are only collected from nodes reachable from the start node.
    pub fn build(self, diagnostics: &mut dyn Diagnostics) -> Result<Graph, ExtractError> {
        let grid = CharGrid::new(self.text);
        let nodes = scan_nodes(&grid);
        if nodes.is_empty() {
            return Ok(Graph::default());
        }

        let Some(start) = nodes.iter().find(|node| node.is_start()) else {
            diagnostics.notice(Notice::MissingStartNode {
                node_count: nodes.len(),
            });
            return Ok(Graph::default());
        };

        let tracer = EdgeTracer::new(&grid, &nodes);
        let mut enqueued = vec![false; nodes.len()];
        let mut queue = VecDeque::from([start.id()]);
        enqueued[start.id().index()] = true;

        let mut edges = Vec::<Edge>::new();
        let mut edge_keys = HashSet::<(NodeId, NodeId)>::new();

        while let Some(current) = queue.pop_front() {
            let targets = tracer.trace_all(&nodes[current.index()])?;

            for target in targets {
                if target == current {
                    continue;
                }

                if edge_keys.insert(undirected_key(current, target)) {
                    edges.push(Edge::new(EdgeId::from_index(edges.len()), current, target));
                }

                if !enqueued[target.index()] {
                    enqueued[target.index()] = true;
                    queue.push_back(target);
                }
            }
        }

        Ok(Graph::from_parts(nodes, edges))
    }
}

fn undirected_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
