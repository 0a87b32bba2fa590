/*
word_list.rs

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

//! Candidate words for the puzzles.
//!
//! A word list is a JSON array of [`WordEntry`] objects:
//!
//! ```json
//! [
//!     {"word": "cat", "definition": "A small domesticated feline", "difficulty": "easy"},
//!     {"word": "labyrinth", "difficulty": "hard"}
//! ]
//! ```
//!
//! The definition defaults to an empty string and the difficulty to `easy`.
//! Words are converted to uppercase; words with characters other than letters are rejected.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::difficulty::Difficulty;
use crate::generator::word::Word;

/// Words that are available without a word list file.
const BUILTIN: [(&str, &str, Difficulty); 36] = [
    ("CAT", "A small domesticated feline", Difficulty::Easy),
    ("DOG", "A domesticated canine", Difficulty::Easy),
    ("BIRD", "A feathered animal that lays eggs", Difficulty::Easy),
    ("FISH", "An animal that lives in water and breathes with gills", Difficulty::Easy),
    ("TREE", "A tall plant with a woody trunk", Difficulty::Easy),
    ("BOOK", "Printed pages bound together", Difficulty::Easy),
    ("MOON", "The natural satellite of the Earth", Difficulty::Easy),
    ("STAR", "A luminous ball of gas in the sky", Difficulty::Easy),
    ("RAIN", "Water falling from clouds", Difficulty::Easy),
    ("APPLE", "A round fruit with red or green skin", Difficulty::Easy),
    ("HOUSE", "A building where people live", Difficulty::Easy),
    ("WATER", "A clear liquid essential for life", Difficulty::Easy),
    ("GARDEN", "A piece of land where plants are grown", Difficulty::Medium),
    ("PLANET", "A large body orbiting a star", Difficulty::Medium),
    ("BRIDGE", "A structure that spans an obstacle", Difficulty::Medium),
    ("CASTLE", "A large fortified building", Difficulty::Medium),
    ("JUNGLE", "A dense tropical forest", Difficulty::Medium),
    ("ISLAND", "Land surrounded by water", Difficulty::Medium),
    ("VOLCANO", "A mountain that erupts lava", Difficulty::Medium),
    ("HARBOR", "A sheltered place for ships", Difficulty::Medium),
    ("LANTERN", "A portable light in a protective case", Difficulty::Medium),
    ("MEADOW", "A field of grass and wild flowers", Difficulty::Medium),
    ("COMPASS", "An instrument that shows the north", Difficulty::Medium),
    ("BLANKET", "A large piece of warm fabric", Difficulty::Medium),
    ("LABYRINTH", "A complicated network of passages", Difficulty::Hard),
    ("EPHEMERAL", "Lasting a very short time", Difficulty::Hard),
    ("QUINTESSENCE", "The most perfect example of something", Difficulty::Hard),
    ("SERENDIPITY", "A fortunate discovery by accident", Difficulty::Hard),
    ("UBIQUITOUS", "Present everywhere", Difficulty::Hard),
    ("MELANCHOLY", "A deep and lasting sadness", Difficulty::Hard),
    ("ELOQUENT", "Fluent and persuasive in speech", Difficulty::Hard),
    ("RESILIENT", "Able to recover quickly", Difficulty::Hard),
    ("PARADIGM", "A typical pattern or model", Difficulty::Hard),
    ("ENIGMATIC", "Difficult to understand", Difficulty::Hard),
    ("OBFUSCATE", "To make something unclear", Difficulty::Hard),
    ("ZEPHYR", "A soft gentle breeze", Difficulty::Hard),
];

/// Word and its details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordEntry {
    /// The word to hide.
    pub word: Word,

    /// Definition displayed when the player finds the word.
    #[serde(default)]
    pub definition: String,

    /// Difficulty level of the word.
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// List of candidate words.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Create a [`WordList`] object from the given entries.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Return the list of words that are available without a word list file.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .filter_map(|(word, definition, difficulty)| {
                    Word::new(word).ok().map(|word| WordEntry {
                        word,
                        definition: definition.to_string(),
                        difficulty: *difficulty,
                    })
                })
                .collect(),
        )
    }

    /// Parse a word list in JSON format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a word list file in JSON format.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let list: WordList = serde_json::from_reader(reader)?;
        debug!("Loaded {} words from {path:?}", list.len());
        Ok(list)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no word.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the words.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// Return the entry for the given word.
    pub fn get(&self, word: &Word) -> Option<&WordEntry> {
        self.entries.iter().find(|e| &e.word == word)
    }

    /// Number of words for the given difficulty level.
    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.entries
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .count()
    }

    /// Select `count` random words for the given difficulty level.
    ///
    /// Words longer than `max_length` are ignored.
    /// If the difficulty level does not provide enough words, then the words of all the levels
    /// are used. If there are still not enough words, then all the matching words are returned.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        max_length: Option<usize>,
        rng: &mut R,
    ) -> Vec<&WordEntry> {
        let fits = |e: &&WordEntry| max_length.is_none_or(|max| e.word.len() <= max);

        let mut pool: Vec<&WordEntry> = self
            .entries
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .filter(fits)
            .collect();
        if pool.len() < count {
            debug!(
                "Only {} {difficulty} words available, using all the difficulty levels",
                pool.len()
            );
            pool = self.entries.iter().filter(fits).collect();
        }
        if pool.len() < count {
            return pool;
        }
        pool.choose_multiple(rng, count).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const JSON: &str = r#"[
        {"word": "cat", "definition": "A small feline", "difficulty": "easy"},
        {"word": "dog", "difficulty": "easy"},
        {"word": "owl"},
        {"word": "garden", "difficulty": "medium"},
        {"word": "labyrinth", "difficulty": "hard"}
    ]"#;

    #[test]
    fn parse_with_defaults() {
        let list: WordList = WordList::from_json(JSON).unwrap();
        assert_eq!(list.len(), 5);
        let owl: &WordEntry = list.get(&Word::new("OWL").unwrap()).unwrap();
        assert_eq!(owl.difficulty, Difficulty::Easy);
        assert_eq!(owl.definition, "");
        assert_eq!(list.count(Difficulty::Easy), 3);
    }

    #[test]
    fn invalid_word_is_rejected() {
        assert!(WordList::from_json(r#"[{"word": "ice cream"}]"#).is_err());
    }

    #[test]
    fn sample_from_difficulty() {
        let list: WordList = WordList::from_json(JSON).unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let sample: Vec<&WordEntry> = list.sample(Difficulty::Easy, 2, None, &mut rng);
        assert_eq!(sample.len(), 2);
        assert!(sample.iter().all(|e| e.difficulty == Difficulty::Easy));
    }

    #[test]
    fn sample_widens_to_all_levels() {
        let list: WordList = WordList::from_json(JSON).unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(2);
        let sample: Vec<&WordEntry> = list.sample(Difficulty::Hard, 3, None, &mut rng);
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn sample_respects_max_length() {
        let list: WordList = WordList::from_json(JSON).unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        // Not enough short words: all of them are returned
        let sample: Vec<&WordEntry> = list.sample(Difficulty::Hard, 5, Some(3), &mut rng);
        let mut words: Vec<&str> = sample.iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["CAT", "DOG", "OWL"]);
    }

    #[test]
    fn builtin_list_covers_every_level() {
        let list: WordList = WordList::builtin();
        assert_eq!(list.len(), BUILTIN.len());
        for difficulty in Difficulty::all() {
            assert!(list.count(difficulty) >= difficulty.word_count());
            assert!(
                list.entries()
                    .filter(|e| e.difficulty == difficulty)
                    .all(|e| e.word.len() <= difficulty.grid_size())
            );
        }
    }
}
