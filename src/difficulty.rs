/*
difficulty.rs

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

//! Puzzle difficulty levels.
//!
//! The difficulty drives the grid size, the number of hidden words, and the score multiplier.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl Difficulty {
    /// Return all the difficulty levels, from the easiest.
    pub fn all() -> Vec<Difficulty> {
        (0..).map_while(Difficulty::from_repr).collect()
    }

    /// Return the difficulty level with the given name (case insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(name.trim()))
    }

    /// Return the difficulty level with the given name, or [`Difficulty::Easy`] for unknown
    /// names.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Number of rows and columns of the grid.
    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 10,
            Difficulty::Hard => 12,
        }
    }

    /// Number of words to hide in the grid.
    pub fn word_count(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 7,
            Difficulty::Hard => 10,
        }
    }

    /// Score multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_levels_in_order() {
        assert_eq!(
            Difficulty::all(),
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }

    #[test]
    fn unknown_names_default_to_easy() {
        assert_eq!(Difficulty::from_name("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("expert"), None);
        assert_eq!(Difficulty::from_name_or_default("expert"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name_or_default(" MEDIUM "), Difficulty::Medium);
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }
}
