// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::grid::CharGrid;
use super::scan::is_node_glyph;
use super::ExtractError;
use crate::model::{Node, NodeId, Position};

/// The five directions an edge may leave a node in.
///
/// Horizontal edges only run rightwards and both diagonals only run towards higher columns, so a
/// link drawn in the opposite sense is found from its other endpoint instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `-` glyphs leaving the right side of the label.
    Right,
    /// `|` glyphs above the label.
    Up,
    /// `|` glyphs below the label.
    Down,
    /// `/` glyphs above the label, climbing one row per column.
    DiagonalUp,
    /// `\` glyphs below the label, descending one row per column.
    DiagonalDown,
}

impl Direction {
    /// Trace order used when expanding a node.
    pub const ALL: [Self; 5] = [
        Self::Right,
        Self::Up,
        Self::Down,
        Self::DiagonalUp,
        Self::DiagonalDown,
    ];

    /// The link glyph expected along the whole path.
    pub fn glyph(self) -> char {
        match self {
            Self::Right => '-',
            Self::Up | Self::Down => '|',
            Self::DiagonalUp => '/',
            Self::DiagonalDown => '\\',
        }
    }

    /// Advances one cell; `None` once the walk would leave the first row or column.
    fn step(self, position: Position) -> Option<Position> {
        let Position { row, column } = position;
        match self {
            Self::Right => Some(Position::new(row, column.checked_add(1)?)),
            Self::Up => Some(Position::new(row.checked_sub(1)?, column)),
            Self::Down => Some(Position::new(row.checked_add(1)?, column)),
            Self::DiagonalUp => Some(Position::new(row.checked_sub(1)?, column.checked_add(1)?)),
            Self::DiagonalDown => Some(Position::new(row.checked_add(1)?, column.checked_add(1)?)),
        }
    }

    /// The first cell the walk inspects, or `None` if no link leaves `from` this way.
    ///
    /// Vertical and diagonal links must start with the direction's glyph on the adjacent row,
    /// somewhere under/over the label's own columns; the leftmost such glyph wins.
    fn first_position(self, grid: &CharGrid, from: &Node) -> Option<Position> {
        let Position { row, column } = from.position();
        let end = column + from.width();

        let adjacent_row = match self {
            Self::Right => return Some(Position::new(row, end)),
            Self::Up | Self::DiagonalUp => row.checked_sub(1)?,
            Self::Down => {
                if row + 1 >= grid.height() {
                    return None;
                }
                row + 1
            }
            Self::DiagonalDown => row + 1,
        };

        let glyph = self.glyph();
        let glyph_column = (column..end).find(|&c| grid.get(adjacent_row, c) == glyph)?;
        Some(Position::new(adjacent_row, glyph_column))
    }
}

/// Walks link glyphs out of a node until another node token is reached.
///
/// Walks are confined to the grid's `height x width` area; leaving it, or meeting any character
/// that is neither the expected glyph nor part of a node token, ends the walk without an edge.
#[derive(Debug)]
pub struct EdgeTracer<'a> {
    grid: &'a CharGrid,
    anchors: HashMap<Position, NodeId>,
}

impl<'a> EdgeTracer<'a> {
    pub fn new(grid: &'a CharGrid, nodes: &[Node]) -> Self {
        let anchors = nodes.iter().map(|node| (node.position(), node.id())).collect();
        Self { grid, anchors }
    }

    /// Follows the link leaving `from` in `direction`.
    ///
    /// Returns the node the link ends on, or `None` for a missing or broken link. A link may end
    /// on `from` itself; filtering self-edges is left to the caller.
    pub fn trace(&self, from: &Node, direction: Direction) -> Result<Option<NodeId>, ExtractError> {
        let Some(mut cursor) = direction.first_position(self.grid, from) else {
            return Ok(None);
        };
        let glyph = direction.glyph();

        while self.grid.contains(cursor) {
            let ch = self.grid.at(cursor);
            if is_node_glyph(ch) {
                return self.node_at_glyph(cursor);
            }
            if ch != glyph {
                return Ok(None);
            }
            let Some(next) = direction.step(cursor) else {
                return Ok(None);
            };
            cursor = next;
        }

        Ok(None)
    }

    /// Traces every direction in [`Direction::ALL`] order, keeping the hits.
    pub fn trace_all(&self, from: &Node) -> Result<SmallVec<[NodeId; 5]>, ExtractError> {
        let mut found = SmallVec::new();
        for direction in Direction::ALL {
            if let Some(target) = self.trace(from, direction)? {
                found.push(target);
            }
        }
        Ok(found)
    }

    fn node_at_glyph(&self, glyph: Position) -> Result<Option<NodeId>, ExtractError> {
        let column = self.grid.anchor_column(glyph.row, glyph.column).ok_or(
            ExtractError::UnanchoredNodeGlyph {
                row: glyph.row,
                column: glyph.column,
            },
        )?;
        Ok(self.anchors.get(&Position::new(glyph.row, column)).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, EdgeTracer};
    use crate::extract::grid::CharGrid;
    use crate::extract::scan::scan_nodes;
    use crate::extract::ExtractError;
    use crate::model::Node;

    struct Fixture {
        grid: CharGrid,
        nodes: Vec<Node>,
    }

    impl Fixture {
        fn new(text: &str) -> Self {
            let grid = CharGrid::new(text);
            let nodes = scan_nodes(&grid);
            Self { grid, nodes }
        }

        fn node(&self, label: &str) -> &Node {
            self.nodes
                .iter()
                .find(|node| node.label() == label)
                .unwrap_or_else(|| panic!("missing node {label}"))
        }

        fn trace(&self, from: &str, direction: Direction) -> Option<&str> {
            let tracer = EdgeTracer::new(&self.grid, &self.nodes);
            tracer
                .trace(self.node(from), direction)
                .expect("trace")
                .map(|id| self.nodes[id.index()].label())
        }
    }

    #[test]
    fn right_follows_dashes() {
        let fx = Fixture::new("(*A)---(B)");
        assert_eq!(fx.trace("(*A)", Direction::Right), Some("(B)"));
        assert_eq!(fx.trace("(B)", Direction::Right), None);
    }

    #[test]
    fn right_stops_on_broken_path() {
        let fx = Fixture::new("(*A)- -(B)");
        assert_eq!(fx.trace("(*A)", Direction::Right), None);

        let fx = Fixture::new("(*A)-|-(B)");
        assert_eq!(fx.trace("(*A)", Direction::Right), None);
    }

    #[test]
    fn right_reaches_a_directly_adjacent_token() {
        let fx = Fixture::new("(A)(B)");
        assert_eq!(fx.trace("(A)", Direction::Right), Some("(B)"));
    }

    #[test]
    fn right_hitting_label_text_resolves_the_nearest_anchor() {
        // `Bee)` has no `(` of its own, so the nearest anchor to its left is `(A)`.
        let fx = Fixture::new("(A)-Bee)");
        assert_eq!(fx.trace("(A)", Direction::Right), Some("(A)"));
    }

    #[test]
    fn down_and_up_follow_pipes_under_the_label_span() {
        let fx = Fixture::new("(*Top)\n   |\n   |\n (Bot)");
        assert_eq!(fx.trace("(*Top)", Direction::Down), Some("(Bot)"));
        assert_eq!(fx.trace("(Bot)", Direction::Up), Some("(*Top)"));
        assert_eq!(fx.trace("(*Top)", Direction::Up), None);
        assert_eq!(fx.trace("(Bot)", Direction::Down), None);
    }

    #[test]
    fn vertical_link_outside_the_label_span_is_ignored() {
        let fx = Fixture::new("(*A)\n    |\n(B)");
        assert_eq!(fx.trace("(*A)", Direction::Down), None);
    }

    #[test]
    fn vertical_walk_off_the_grid_finds_nothing() {
        let fx = Fixture::new("(*A)\n |\n |");
        assert_eq!(fx.trace("(*A)", Direction::Down), None);
    }

    #[test]
    fn diagonal_up_climbs_rightwards() {
        let fx = Fixture::new("    (B)\n   /\n  /\n(*A)");
        assert_eq!(fx.trace("(*A)", Direction::DiagonalUp), Some("(B)"));
        assert_eq!(fx.trace("(*A)", Direction::Up), None);
    }

    #[test]
    fn diagonal_down_descends_rightwards() {
        let fx = Fixture::new("(*A)\n  \\\n   \\\n    (B)");
        assert_eq!(fx.trace("(*A)", Direction::DiagonalDown), Some("(B)"));
        assert_eq!(fx.trace("(*A)", Direction::Down), None);
    }

    #[test]
    fn diagonal_from_last_row_finds_nothing() {
        let fx = Fixture::new("(*A)");
        assert_eq!(fx.trace("(*A)", Direction::DiagonalDown), None);
        assert_eq!(fx.trace("(*A)", Direction::DiagonalUp), None);
    }

    #[test]
    fn glyph_inside_a_non_token_is_noise() {
        // `(x y)` is not a token, so the walk lands on an unregistered anchor.
        let fx = Fixture::new("(*A)-(x y)");
        assert_eq!(fx.trace("(*A)", Direction::Right), None);
    }

    #[test]
    fn stray_word_character_without_open_paren_is_an_internal_error() {
        let fx = Fixture::new("(*A)\n |\n x");
        let tracer = EdgeTracer::new(&fx.grid, &fx.nodes);
        let err = tracer
            .trace(fx.node("(*A)"), Direction::Down)
            .expect_err("stray glyph has no anchor");
        assert_eq!(err, ExtractError::UnanchoredNodeGlyph { row: 2, column: 1 });
    }

    #[test]
    fn trace_all_reports_hits_in_direction_order() {
        let fx = Fixture::new("(*A)-(B)\n |\n(C)");
        let tracer = EdgeTracer::new(&fx.grid, &fx.nodes);
        let found = tracer.trace_all(fx.node("(*A)")).expect("trace all");
        let labels = found.iter().map(|id| fx.nodes[id.index()].label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["(B)", "(C)"]);
    }
}
