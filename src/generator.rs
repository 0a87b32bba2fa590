/*
generator.rs

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

//! Build word search grids.
//!
//! A [`word::Word`] is an uppercase string of letters.
//! Words are hidden in a square [`grid::Grid`] along one of the four
//! [`direction::Direction`]: horizontally, vertically, or along one of the two diagonals going
//! down.
//!
//! To hide words, create a [`word_grid::WordGrid`] object and use its
//! [`word_grid::WordGrid::build`] method.
//! The method returns the grid and a [`placement::PlacementResult`] object that lists the
//! [`placement::Placement`] of every word, and the words that could not be placed.
//! The builder is randomized: a word is never guaranteed to be placed.
//! The random generator is provided by the caller, so that a seeded generator produces the same
//! grid every time.
//!
//! The [`verify`] module searches words in a finished grid, independently of the placement
//! records.
//!
//! To play, a [`puzzle::Puzzle`] is generated from a [`crate::word_list::WordList`] for a
//! difficulty level.
//! Only the words that can actually be found in the grid are kept. If fewer than
//! [`puzzle::MIN_WORDS`] words remain, then the generation fails and can be retried.

pub mod direction;
pub mod grid;
pub mod placement;
pub mod puzzle;
pub mod verify;
pub mod word;
pub mod word_grid;
