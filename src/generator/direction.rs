/*
direction.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordgrid.

Wordgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Directions along which words are hidden in the grid.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Line along which a word is written.
///
/// Words are always read forward: left to right, top to bottom.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row fixed, column increasing.
    Horizontal,

    /// Column fixed, row increasing.
    Vertical,

    /// Row and column increasing.
    DiagonalDownRight,

    /// Row increasing, column decreasing.
    DiagonalDownLeft,
}

impl Direction {
    /// All the supported directions.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Return the `(row, column)` step between two consecutive letters.
    pub fn step(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Pick a direction uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Direction::Horizontal)
    }

    /// Return the ranges of the starting row and column so that a word of `len` letters stays
    /// inside a `size` x `size` grid.
    ///
    /// Return None if the word is longer than the grid.
    pub fn start_ranges(
        &self,
        size: usize,
        len: usize,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        if len == 0 || len > size {
            return None;
        }
        let last: usize = size - 1;
        let span: usize = size - len;
        Some(match self {
            Direction::Horizontal => (0..=last, 0..=span),
            Direction::Vertical => (0..=span, 0..=last),
            Direction::DiagonalDownRight => (0..=span, 0..=span),
            Direction::DiagonalDownLeft => (0..=span, len - 1..=last),
        })
    }

    /// Return the grid coordinates of the `index`th letter of a word starting at
    /// `(row, col)`, or None if it falls outside a `size` x `size` grid.
    pub fn offset(
        &self,
        row: usize,
        col: usize,
        index: usize,
        size: usize,
    ) -> Option<(usize, usize)> {
        let (row_step, col_step) = self.step();
        let r: isize = row as isize + row_step * index as isize;
        let c: isize = col as isize + col_step * index as isize;
        if r < 0 || c < 0 || r >= size as isize || c >= size as isize {
            None
        } else {
            Some((r as usize, c as usize))
        }
    }
}
