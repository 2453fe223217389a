// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graph exporters.
//!
//! These are the hand-off formats for layout and rendering tools: a JSON document mirroring
//! [`crate::model::Graph`] and a Mermaid flowchart.

pub mod json;
pub mod mermaid;

pub use json::{export_json, graph_schema, JsonExportError};
pub use mermaid::{export_flowchart, FlowDirection, ParseFlowDirectionError};
