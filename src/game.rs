/*
game.rs

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

//! Manage the status of a game in progress.

use chrono::{DateTime, Local};
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt;

use crate::generator::puzzle::Puzzle;
use crate::generator::word::Word;
use crate::score::{self, ScoreBreakdown};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GameError {
    /// A game cannot end before at least one word is found.
    NothingFound,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::NothingFound => {
                write!(f, "you must find at least one word before ending the game")
            }
        }
    }
}

impl Error for GameError {}

/// Outcome of a word submitted by the player.
#[derive(Debug, Clone, PartialEq)]
pub enum WordCheck {
    /// The word is in the puzzle. Holds its definition.
    Found(String),

    /// The player already found that word.
    AlreadyFound,

    /// The word is not one of the words to find, or is not a word at all.
    NotInPuzzle,
}

/// Results of a finished game.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GameSummary {
    /// Number of words found.
    pub words_found: usize,

    /// Number of words in the puzzle.
    pub total_words: usize,

    /// Duration of the game in seconds.
    pub elapsed_seconds: i64,

    /// Duration formatted as `MM:SS`.
    pub formatted_time: String,

    /// Whether all the words were found.
    pub completed: bool,

    /// Score details.
    pub score: ScoreBreakdown,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Puzzle being played.
    pub puzzle: Puzzle,

    /// Words found so far, in the order the player found them.
    found: Vec<Word>,

    /// Time when the game started. Used to compute the game duration.
    start_time: DateTime<Local>,
}

impl Game {
    /// Start a game now.
    pub fn new(puzzle: Puzzle) -> Self {
        Self::started_at(puzzle, Local::now())
    }

    /// Create a [`Game`] object that started at the given time.
    pub fn started_at(puzzle: Puzzle, start_time: DateTime<Local>) -> Self {
        Self {
            puzzle,
            found: Vec::new(),
            start_time,
        }
    }

    /// Return the words found so far.
    pub fn found_words(&self) -> &[Word] {
        &self.found
    }

    /// Whether all the words are found.
    pub fn is_solved(&self) -> bool {
        self.found.len() == self.puzzle.words.len()
    }

    /// Process a word submitted by the player.
    pub fn submit(&mut self, text: &str) -> WordCheck {
        let Ok(word) = Word::new(text) else {
            return WordCheck::NotInPuzzle;
        };
        if !self.puzzle.has_word(&word) {
            debug!("{word} is not in the puzzle");
            return WordCheck::NotInPuzzle;
        }
        if self.found.contains(&word) {
            return WordCheck::AlreadyFound;
        }
        let definition: String = self.puzzle.definition(&word).unwrap_or_default().to_string();
        self.found.push(word);
        debug!(
            "Found {} words out of {}",
            self.found.len(),
            self.puzzle.words.len()
        );
        WordCheck::Found(definition)
    }

    /// Number of whole seconds between the start of the game and `now`.
    pub fn elapsed_seconds_at(&self, now: DateTime<Local>) -> i64 {
        (now - self.start_time).num_seconds().max(0)
    }

    /// End the game now and compute the score.
    pub fn finish(&self) -> Result<GameSummary, GameError> {
        self.finish_at(Local::now())
    }

    /// End the game at the given time and compute the score.
    ///
    /// # Errors
    ///
    /// The method returns an error if the player has not found any word.
    pub fn finish_at(&self, now: DateTime<Local>) -> Result<GameSummary, GameError> {
        if self.found.is_empty() {
            return Err(GameError::NothingFound);
        }
        let elapsed_seconds: i64 = self.elapsed_seconds_at(now);
        let words_found: usize = self.found.len();
        let total_words: usize = self.puzzle.words.len();
        let score: ScoreBreakdown = score::score(
            words_found as i64,
            total_words as i64,
            elapsed_seconds,
            self.puzzle.difficulty,
        );
        debug!("Game finished: {score:?}");

        Ok(GameSummary {
            words_found,
            total_words,
            elapsed_seconds,
            formatted_time: score::format_elapsed(elapsed_seconds),
            completed: words_found == total_words,
            score,
        })
    }
}
