/*
verify.rs

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

//! Search words in a finished grid.
//!
//! The search ignores the placement bookkeeping of the builder and only looks at the letters.

use log::debug;

use super::direction::Direction;
use super::grid::Grid;
use super::placement::{Placement, PlacementResult};
use super::word::Word;

/// Search the word in the grid, in the four directions.
///
/// Cells are scanned row by row. Return the first position where the word can be read.
pub fn locate(grid: &Grid, word: &Word) -> Option<Placement> {
    let size: usize = grid.size();
    if word.len() > size {
        return None;
    }
    for row in 0..size {
        for col in 0..size {
            for direction in Direction::ALL {
                if grid
                    .read(row, col, direction, word.len())
                    .is_some_and(|text| text == word.as_str())
                {
                    return Some(Placement::new(word.clone(), row, col, direction));
                }
            }
        }
    }
    None
}

/// Return the placed words that can be read at their recorded position.
pub fn confirm<'a>(grid: &Grid, result: &'a PlacementResult) -> Vec<&'a Word> {
    result
        .placed
        .iter()
        .filter(|placement| {
            let found: bool = grid.contains(placement);
            if !found {
                debug!("Word {} not found at its recorded position", placement.word);
            }
            found
        })
        .map(|placement| &placement.word)
        .collect()
}
