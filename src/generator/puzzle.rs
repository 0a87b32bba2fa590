/*
puzzle.rs

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

//! Puzzle ready to be played: the grid and the list of words to find.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use super::grid::Grid;
use super::placement::PlacementResult;
use super::verify;
use super::word::Word;
use super::word_grid::WordGrid;
use crate::difficulty::Difficulty;
use crate::word_list::{WordEntry, WordList};

/// A puzzle with fewer words is not worth playing.
pub const MIN_WORDS: usize = 3;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PuzzleError {
    /// The word list has no word that fits in the grid.
    NoWords,

    /// Too few words could be hidden in the grid.
    NotEnoughWords { placed: usize },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::NoWords => write!(f, "not enough words in the word list"),
            PuzzleError::NotEnoughWords { placed } => write!(
                f,
                "could not generate enough words for this game ({placed} placed, {MIN_WORDS} \
                 required)"
            ),
        }
    }
}

impl Error for PuzzleError {}

/// Puzzle object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Difficulty level.
    pub difficulty: Difficulty,

    /// Letter grid.
    pub grid: Grid,

    /// Words hidden in the grid, in placement order.
    pub words: Vec<Word>,

    /// Definition of each hidden word.
    pub definitions: BTreeMap<Word, String>,
}

impl Puzzle {
    /// Generate a random puzzle for the given difficulty level.
    ///
    /// # Errors
    ///
    /// The method returns an error if the word list does not provide any word short enough for
    /// the grid, or if fewer than [`MIN_WORDS`] words end up in the grid. In that later case, the
    /// method can be retried.
    pub fn generate<R: Rng + ?Sized>(
        list: &WordList,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(Self, PlacementResult), PuzzleError> {
        let size: usize = difficulty.grid_size();
        let entries: Vec<&WordEntry> =
            list.sample(difficulty, difficulty.word_count(), Some(size), rng);
        if entries.is_empty() {
            return Err(PuzzleError::NoWords);
        }
        debug!(
            "Generating a {difficulty} puzzle with {} candidate words",
            entries.len()
        );

        let words: Vec<Word> = entries.iter().map(|e| e.word.clone()).collect();
        let mut builder: WordGrid = WordGrid::new(size).map_err(|_| PuzzleError::NoWords)?;
        let (grid, result) = builder.build(&words, rng);

        let puzzle: Puzzle = Self::from_grid(difficulty, grid, &result, |word| {
            list.get(word).map(|e| e.definition.clone())
        })?;
        Ok((puzzle, result))
    }

    /// Create a puzzle from an existing grid.
    ///
    /// Every word given to the builder is searched in the grid, placed words first. Words that
    /// could not be placed are kept too when the random letters happen to spell them. Words that
    /// cannot be read in the grid are dropped.
    pub fn from_grid<F>(
        difficulty: Difficulty,
        grid: Grid,
        result: &PlacementResult,
        definition: F,
    ) -> Result<Self, PuzzleError>
    where
        F: Fn(&Word) -> Option<String>,
    {
        let mut words: Vec<Word> = Vec::with_capacity(result.num_words());
        for word in result.placed_words().into_iter().chain(&result.failed) {
            if words.contains(word) {
                continue;
            }
            if verify::locate(&grid, word).is_some() {
                words.push(word.clone());
            } else {
                warn!("Word '{word}' is not in the grid, removing from list");
            }
        }

        if words.len() < MIN_WORDS {
            return Err(PuzzleError::NotEnoughWords {
                placed: words.len(),
            });
        }

        let definitions: BTreeMap<Word, String> = words
            .iter()
            .map(|w| (w.clone(), definition(w).unwrap_or_default()))
            .collect();
        Ok(Self {
            difficulty,
            grid,
            words,
            definitions,
        })
    }

    /// Whether the word is one of the words to find.
    pub fn has_word(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Return the definition of the given word.
    pub fn definition(&self, word: &Word) -> Option<&str> {
        self.definitions.get(word).map(|d| d.as_str())
    }
}
