// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Graph;

#[derive(Debug, thiserror::Error)]
pub enum JsonExportError {
    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serializes `graph` as `{ "nodes": [...], "edges": [...] }`.
pub fn export_json(graph: &Graph, pretty: bool) -> Result<String, JsonExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(graph)?
    } else {
        serde_json::to_string(graph)?
    };
    Ok(json)
}

/// JSON schema for the document produced by [`export_json`].
pub fn graph_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(Graph)).unwrap_or_default()
}
