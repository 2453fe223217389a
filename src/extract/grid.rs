// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Asciigraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Position;

/// Character returned for any cell outside the text.
pub const BLANK: char = ' ';

/// A read-only character grid over diagram text.
///
/// Rows are the input split on `\n` (a trailing `\r` is dropped). Rows keep their own length;
/// lookups past the end of a row or below the last row read as [`BLANK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl CharGrid {
    pub fn new(text: &str) -> Self {
        let rows = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    pub fn get(&self, row: usize, column: usize) -> char {
        self.rows
            .get(row)
            .and_then(|line| line.get(column))
            .copied()
            .unwrap_or(BLANK)
    }

    pub fn at(&self, position: Position) -> char {
        self.get(position.row, position.column)
    }

    pub fn row(&self, row: usize) -> &[char] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `position` lies in the `height x width` search area.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height() && position.column < self.width
    }

    /// Column of the nearest `(` at or left of `column` on `row`.
    pub fn anchor_column(&self, row: usize, column: usize) -> Option<usize> {
        let line = self.row(row);
        let end = column.saturating_add(1).min(line.len());
        line[..end].iter().rposition(|&ch| ch == '(')
    }
}
