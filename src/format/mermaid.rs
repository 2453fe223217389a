// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use crate::model::{Graph, NodeId};

/// Rank direction written into the flowchart header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowDirection {
    /// Top to bottom.
    #[default]
    TopDown,
    /// Left to right.
    LeftRight,
}

impl FlowDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopDown => "TD",
            Self::LeftRight => "LR",
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flowchart direction: {0} (expected TD/TB/LR)")]
pub struct ParseFlowDirectionError(String);

impl FromStr for FlowDirection {
    type Err = ParseFlowDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TD" | "TB" => Ok(Self::TopDown),
            "LR" => Ok(Self::LeftRight),
            _ => Err(ParseFlowDirectionError(s.to_owned())),
        }
    }
}

/// Writes `graph` as a Mermaid flowchart.
///
/// Every node is declared, including nodes no edge reaches, so the node list survives the
/// export unchanged. Node identifiers are `n<index>`; labels are quoted verbatim.
pub fn export_flowchart(graph: &Graph, direction: FlowDirection) -> String {
    let mut out = String::new();
    out.push_str("flowchart ");
    out.push_str(direction.as_str());
    out.push('\n');

    let mut ids = itoa::Buffer::new();
    for node in graph.nodes() {
        out.push_str("    ");
        push_node_ident(&mut out, &mut ids, node.id());
        out.push_str("[\"");
        push_escaped_label(&mut out, node.label());
        out.push_str("\"]\n");
    }

    for edge in graph.edges() {
        out.push_str("    ");
        push_node_ident(&mut out, &mut ids, edge.source());
        out.push_str(" --> ");
        push_node_ident(&mut out, &mut ids, edge.target());
        out.push('\n');
    }

    out
}

fn push_node_ident(out: &mut String, ids: &mut itoa::Buffer, id: NodeId) {
    out.push('n');
    out.push_str(ids.format(id.index()));
}

fn push_escaped_label(out: &mut String, label: &str) {
    for ch in label.chars() {
        match ch {
            '"' => out.push_str("#quot;"),
            '\n' | '\r' => out.push(' '),
            _ => out.push(ch),
        }
    }
}
