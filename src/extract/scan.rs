// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use super::grid::CharGrid;
use crate::model::{Node, NodeId, Position};

/// `(`, optional `*`, one or more ASCII word characters, `)`.
const NODE_TOKEN_PATTERN: &str = r"\(\*?[A-Za-z0-9_]+\)";

fn node_token_regex() -> &'static Regex {
    static NODE_TOKEN: OnceLock<Regex> = OnceLock::new();
    NODE_TOKEN.get_or_init(|| Regex::new(NODE_TOKEN_PATTERN).expect("valid node token pattern"))
}

/// Characters that can only belong to a node token.
pub(crate) fn is_node_glyph(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '(' | ')' | '*')
}

/// Finds every node token in the grid, row by row and left to right within a row.
///
/// Matches within a row never overlap. Ids are assigned in the returned order, so `nodes[i].id()`
/// has index `i`.
pub fn scan_nodes(grid: &CharGrid) -> Vec<Node> {
    let regex = node_token_regex();
    let mut nodes = Vec::new();

    for row in 0..grid.height() {
        let line = grid.row(row).iter().collect::<String>();
        let mut column = 0usize;
        let mut byte_cursor = 0usize;

        for found in regex.find_iter(&line) {
            column += line[byte_cursor..found.start()].chars().count();
            byte_cursor = found.start();

            let id = NodeId::from_index(nodes.len());
            nodes.push(Node::new(id, found.as_str(), Position::new(row, column)));
        }
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::{is_node_glyph, scan_nodes};
    use crate::extract::grid::CharGrid;
    use crate::model::{Node, Position};

    fn scan(text: &str) -> Vec<Node> {
        scan_nodes(&CharGrid::new(text))
    }

    fn summary(nodes: &[Node]) -> Vec<(usize, &str, usize, usize)> {
        nodes
            .iter()
            .map(|node| {
                let Position { row, column } = node.position();
                (node.id().index(), node.label(), row, column)
            })
            .collect()
    }

    #[test]
    fn finds_tokens_in_row_then_column_order() {
        let nodes = scan("(*A)-(B)\n     |\n    (C) (D_2)");
        assert_eq!(
            summary(&nodes),
            vec![
                (0, "(*A)", 0, 0),
                (1, "(B)", 0, 5),
                (2, "(C)", 2, 4),
                (3, "(D_2)", 2, 8),
            ]
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(scan("() (**A) (A B) (-)").is_empty());
        assert!(scan("").is_empty());
        assert_eq!(summary(&scan("((A))")), vec![(0, "(A)", 0, 1)]);
        assert_eq!(summary(&scan("x(*y)z")), vec![(0, "(*y)", 0, 1)]);
    }

    #[test]
    fn only_ascii_word_characters_form_labels() {
        assert!(scan("(é)").is_empty());
        let nodes = scan("é(A)");
        assert_eq!(summary(&nodes), vec![(0, "(A)", 0, 1)]);
    }

    #[test]
    fn adjacent_tokens_do_not_overlap() {
        let nodes = scan("(A)(B)");
        assert_eq!(summary(&nodes), vec![(0, "(A)", 0, 0), (1, "(B)", 0, 3)]);
    }

    #[test]
    fn node_glyphs_cover_token_characters_only() {
        for ch in ['a', 'Z', '7', '_', '(', ')', '*'] {
            assert!(is_node_glyph(ch), "{ch:?} should be a node glyph");
        }
        for ch in ['-', '|', '/', '\\', ' ', 'é'] {
            assert!(!is_node_glyph(ch), "{ch:?} should not be a node glyph");
        }
    }
}
