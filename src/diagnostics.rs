// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Advisory notices raised while extracting a graph.
//!
//! Notices describe input that produced a smaller graph than the author probably intended. They
//! are never errors; extraction still returns a graph.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Node tokens were found but none starts with `(*`, so nothing was traversed.
    MissingStartNode { node_count: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartNode { node_count } => write!(
                f,
                "expected graph to have a starting node ({node_count} nodes found); starting nodes begin with a '*' character"
            ),
        }
    }
}

/// Receives advisory notices from the extractor.
pub trait Diagnostics {
    fn notice(&mut self, notice: Notice);
}

/// Forwards notices to `tracing` as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn notice(&mut self, notice: Notice) {
        match &notice {
            Notice::MissingStartNode { node_count } => {
                tracing::warn!(node_count = *node_count, "{notice}");
            }
        }
    }
}

impl Diagnostics for Vec<Notice> {
    fn notice(&mut self, notice: Notice) {
        self.push(notice);
    }
}
