/*
word_grid.rs

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

//! Hide words in a random letter grid.
//!
//! Words are placed one after the other, longest first. For each word, random positions and
//! directions are tried. Positions where the word shares letters with the words already in the
//! grid (intersections) are preferred, which produces denser puzzles. A word that cannot be
//! placed is reported and skipped; the build itself never fails.

use log::{Level, debug, log_enabled, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::direction::Direction;
use super::grid::{Canvas, Grid};
use super::placement::{Placement, PlacementResult};
use super::word::Word;

/// Number of random positions tried for each word.
pub const MAX_ATTEMPTS: usize = 300;

/// After this many attempts, the first valid position is used.
pub const GREEDY_AFTER: usize = 200;

/// After this many attempts, a single intersection is good enough.
pub const PATIENCE: usize = 50;

/// Number of intersections for which a position is used right away.
pub const STRONG_INTERSECTIONS: usize = 2;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum BuildError {
    /// The grid must have at least one row and one column.
    EmptyGrid,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildError::EmptyGrid => write!(f, "the grid size must be at least 1"),
        }
    }
}

impl Error for BuildError {}

/// Tuning of the placement search.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct BuildOptions {
    /// Number of random positions tried for each word.
    pub max_attempts: usize,

    /// Attempt index after which the first valid position is used.
    pub greedy_after: usize,

    /// Attempt index after which a single intersection is accepted.
    pub patience: usize,

    /// Number of intersections for which a position is accepted right away.
    pub strong_intersections: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            greedy_after: GREEDY_AFTER,
            patience: PATIENCE,
            strong_intersections: STRONG_INTERSECTIONS,
        }
    }
}

/// Candidate position for a word, with its number of intersections.
#[derive(Debug, Copy, Clone)]
struct Trial {
    row: usize,
    col: usize,
    direction: Direction,
    intersections: usize,
}

/// [`WordGrid`] object.
pub struct WordGrid {
    /// Number of rows and columns of the grid.
    pub size: usize,

    /// Search parameters.
    pub options: BuildOptions,

    /// Number of positions tried during the last build.
    pub attempts: usize,

    /// Number of intersections in the last grid.
    pub intersections: usize,

    /// Duration in seconds of the last build.
    pub duration: f32,
}

impl WordGrid {
    /// Create the object with the default search parameters.
    ///
    /// # Errors
    ///
    /// The method returns an error if `size` is zero.
    pub fn new(size: usize) -> Result<Self, BuildError> {
        Self::with_options(size, BuildOptions::default())
    }

    /// Create the object.
    pub fn with_options(size: usize, options: BuildOptions) -> Result<Self, BuildError> {
        if size == 0 {
            return Err(BuildError::EmptyGrid);
        }
        Ok(Self {
            size,
            options,
            attempts: 0,
            intersections: 0,
            duration: 0.0,
        })
    }

    /// Build a grid that hides the given words and return it with the placement of each word.
    ///
    /// Words longer than the grid are not attempted and are reported in
    /// [`PlacementResult::oversized`]. Words for which no position is found are reported in
    /// [`PlacementResult::failed`].
    /// For a given random generator state, the result is always the same.
    pub fn build<R: Rng + ?Sized>(
        &mut self,
        words: &[Word],
        rng: &mut R,
    ) -> (Grid, PlacementResult) {
        let start: Instant = Instant::now();
        self.attempts = 0;
        self.intersections = 0;

        let mut result: PlacementResult = PlacementResult::new();
        let mut candidates: Vec<&Word> = Vec::with_capacity(words.len());
        for word in words {
            if word.len() > self.size {
                result.oversized.push(word.clone());
            } else {
                candidates.push(word);
            }
        }
        if !result.oversized.is_empty() {
            warn!(
                "Filtered out {} words that were too long for the {}x{} grid: {:?}",
                result.oversized.len(),
                self.size,
                self.size,
                result.oversized
            );
        }

        // Longer words are harder to fit: place them while the grid is still empty
        candidates.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut canvas: Canvas = Canvas::new(self.size);
        for word in candidates {
            let first: bool = result.placed.is_empty();
            match self.find_position(&canvas, word, first, rng) {
                Some(trial) => {
                    debug!(
                        "Placed {word} at ({}, {}) {:?} with {} intersections",
                        trial.row, trial.col, trial.direction, trial.intersections
                    );
                    let placement: Placement =
                        Placement::new(word.clone(), trial.row, trial.col, trial.direction);
                    canvas.place(&placement);
                    self.intersections += trial.intersections;
                    result.placed.push(placement);
                }
                None => {
                    warn!("Could not place word '{word}' in the grid");
                    result.failed.push(word.clone());
                }
            }
        }

        let letters: usize = canvas.num_letters();
        let grid: Grid = canvas.fill(rng);
        self.duration = start.elapsed().as_secs_f32();

        if log_enabled!(Level::Debug) {
            debug!(
                "Placed {} out of {} words  Attempts = {}  Intersections = {}  Letters = {}/{}  \
                 Duration = {}",
                result.placed.len(),
                result.placed.len() + result.failed.len(),
                self.attempts,
                self.intersections,
                letters,
                self.size * self.size,
                self.duration
            );
            for row in grid.rows() {
                debug!("    {row}");
            }
        }
        (grid, result)
    }

    /// Search a position for the word.
    ///
    /// Return None if no valid position has been found after [`BuildOptions::max_attempts`]
    /// attempts.
    fn find_position<R: Rng + ?Sized>(
        &mut self,
        canvas: &Canvas,
        word: &Word,
        first: bool,
        rng: &mut R,
    ) -> Option<Trial> {
        let mut best: Option<Trial> = None;

        for attempt in 0..self.options.max_attempts {
            let direction: Direction = Direction::random(rng);
            let Some((rows, cols)) = direction.start_ranges(self.size, word.len()) else {
                continue;
            };
            let row: usize = rng.random_range(rows);
            let col: usize = rng.random_range(cols);
            self.attempts += 1;

            let Some(intersections) = canvas.evaluate(word, row, col, direction) else {
                continue;
            };
            let trial: Trial = Trial {
                row,
                col,
                direction,
                intersections,
            };

            // Nothing to intersect with, or running out of attempts
            if first || attempt > self.options.greedy_after {
                return Some(trial);
            }

            if intersections >= self.options.strong_intersections
                || (intersections >= 1 && attempt > self.options.patience)
            {
                return Some(trial);
            }

            if best.is_none_or(|b| intersections > b.intersections) {
                best = Some(trial);
            }
        }
        best
    }
}

/// Build a `size` x `size` grid that hides the given words with the default search parameters.
///
/// See [`WordGrid::build`].
pub fn build<R: Rng + ?Sized>(
    words: &[Word],
    size: usize,
    rng: &mut R,
) -> Result<(Grid, PlacementResult), BuildError> {
    let mut builder: WordGrid = WordGrid::new(size)?;
    Ok(builder.build(words, rng))
}
