/*
placement.rs

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

//! Location of the words in the grid, and outcome of a grid build.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::word::Word;

/// Position of a word in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The placed word.
    pub word: Word,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Direction in which the word is read.
    pub direction: Direction,
}

impl Placement {
    /// Create a [`Placement`] object.
    pub fn new(word: Word, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            word,
            row,
            col,
            direction,
        }
    }

    /// Return the coordinates and the letter of each cell the word covers in a
    /// `size` x `size` grid.
    ///
    /// Return None if part of the word falls outside the grid.
    pub fn cells(&self, size: usize) -> Option<Vec<(usize, usize, char)>> {
        self.word
            .letters()
            .enumerate()
            .map(|(i, letter)| {
                self.direction
                    .offset(self.row, self.col, i, size)
                    .map(|(r, c)| (r, c, letter))
            })
            .collect()
    }
}

/// Words placed by the grid builder, and words that could not be placed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlacementResult {
    /// Placed words, in placement order (longest words first).
    pub placed: Vec<Placement>,

    /// Words for which no placement was found after all the attempts.
    pub failed: Vec<Word>,

    /// Words longer than the grid. They are never attempted.
    pub oversized: Vec<Word>,
}

impl PlacementResult {
    /// Create an empty [`PlacementResult`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given word has been placed.
    pub fn is_placed(&self, word: &Word) -> bool {
        self.placed.iter().any(|p| &p.word == word)
    }

    /// Return the placement of the given word, if placed.
    pub fn placement(&self, word: &Word) -> Option<&Placement> {
        self.placed.iter().find(|p| &p.word == word)
    }

    /// Return the placed words.
    pub fn placed_words(&self) -> Vec<&Word> {
        self.placed.iter().map(|p| &p.word).collect()
    }

    /// Iterate over the words that are not in the grid, whatever the reason.
    pub fn missing_words(&self) -> impl Iterator<Item = &Word> {
        self.oversized.iter().chain(self.failed.iter())
    }

    /// Total number of words provided to the builder.
    pub fn num_words(&self) -> usize {
        self.placed.len() + self.failed.len() + self.oversized.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_direction() {
        let p: Placement = Placement::new(
            Word::new("DOG").unwrap(),
            1,
            4,
            Direction::DiagonalDownLeft,
        );
        assert_eq!(
            p.cells(6),
            Some(vec![(1, 4, 'D'), (2, 3, 'O'), (3, 2, 'G')])
        );
    }

    #[test]
    fn cells_outside_grid() {
        let p: Placement = Placement::new(Word::new("BIRD").unwrap(), 0, 3, Direction::Horizontal);
        assert_eq!(p.cells(6), None);
        assert!(p.cells(7).is_some());
    }

    #[test]
    fn missing_words_lists_both_reasons() {
        let mut result: PlacementResult = PlacementResult::new();
        result.oversized.push(Word::new("ELEPHANT").unwrap());
        result.failed.push(Word::new("ZEBRA").unwrap());
        result.placed.push(Placement::new(
            Word::new("CAT").unwrap(),
            0,
            0,
            Direction::Vertical,
        ));
        let missing: Vec<&str> = result.missing_words().map(|w| w.as_str()).collect();
        assert_eq!(missing, vec!["ELEPHANT", "ZEBRA"]);
        assert_eq!(result.num_words(), 3);
        assert!(result.is_placed(&Word::new("cat").unwrap()));
        assert!(!result.is_placed(&Word::new("zebra").unwrap()));
    }
}
