/*
lib.rs

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

//! Word search puzzle generator and scorer.
//!
//! See [`generator`] to build grids, and [`score`] to compute the score of a game.

pub mod difficulty;
pub mod game;
pub mod generator;
pub mod score;
pub mod word_list;

pub use difficulty::Difficulty;
pub use generator::direction::Direction;
pub use generator::grid::Grid;
pub use generator::placement::{Placement, PlacementResult};
pub use generator::word::Word;
pub use generator::word_grid::{BuildOptions, WordGrid, build};
pub use score::{ScoreBreakdown, score};
