/*
word.rs

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

//! Words hidden in the grid.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;

/// Letters used in the grid.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum WordError {
    /// The word has no letter.
    Empty,

    /// The word contains a character that is not a letter.
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordError::Empty => write!(f, "the word is empty"),
            WordError::InvalidCharacter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl Error for WordError {}

/// Uppercase word made of the letters in [`ALPHABET`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Create a [`Word`] object from the given text, which is converted to uppercase.
    ///
    /// Surrounding spaces are ignored.
    pub fn new(text: &str) -> Result<Self, WordError> {
        let word: String = text.trim().to_ascii_uppercase();
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(c) = word.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacter(c));
        }
        Ok(Self(word))
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a word has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the letters.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Word::new(text)
    }
}

/// Deserialize through [`Word::new`] so that invalid words are rejected.
impl<'de> Deserialize<'de> for Word {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: String = String::deserialize(deserializer)?;
        Word::new(&text).map_err(serde::de::Error::custom)
    }
}
