//! Property-based tests for the grid builder.
//!
//! These tests use proptest to verify that the grid invariants hold across randomly generated
//! word lists, grid sizes, and seeds.

use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wordgrid::generator::verify;
use wordgrid::{Grid, PlacementResult, Word, build};

/// Strategy for generating valid words.
fn word() -> impl Strategy<Value = Word> {
    "[A-Z]{1,12}".prop_map(|text| Word::new(&text).unwrap())
}

/// Strategy for generating word lists.
fn word_list() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(word(), 0..12)
}

fn build_seeded(words: &[Word], size: usize, seed: u64) -> (Grid, PlacementResult) {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    build(words, size, &mut rng).unwrap()
}

proptest! {
    /// Every cell of the grid holds an uppercase letter.
    #[test]
    fn grid_is_square_and_full(words in word_list(), size in 1usize..14, seed in any::<u64>()) {
        let (grid, _) = build_seeded(&words, size, seed);
        prop_assert_eq!(grid.size(), size);
        let rows: Vec<String> = grid.rows();
        prop_assert_eq!(rows.len(), size);
        for row in rows {
            prop_assert_eq!(row.chars().count(), size);
            prop_assert!(row.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    /// Every placed word can be read at its recorded position.
    #[test]
    fn placements_are_honest(words in word_list(), size in 1usize..14, seed in any::<u64>()) {
        let (grid, result) = build_seeded(&words, size, seed);
        for placement in &result.placed {
            prop_assert!(grid.contains(placement), "{:?}", placement);
            prop_assert!(verify::locate(&grid, &placement.word).is_some());
        }
        prop_assert_eq!(verify::confirm(&grid, &result).len(), result.placed.len());
    }

    /// Every word is reported exactly once, and oversized words are never attempted.
    #[test]
    fn words_are_classified(words in word_list(), size in 1usize..14, seed in any::<u64>()) {
        let (_, result) = build_seeded(&words, size, seed);
        prop_assert_eq!(result.num_words(), words.len());
        for word in &result.oversized {
            prop_assert!(word.len() > size);
        }
        for word in result.failed.iter().chain(result.placed.iter().map(|p| &p.word)) {
            prop_assert!(word.len() <= size);
        }
        let oversized: usize = words.iter().filter(|w| w.len() > size).count();
        prop_assert_eq!(result.oversized.len(), oversized);
    }

    /// Placed words agree on every shared cell.
    #[test]
    fn no_conflicting_overwrite(words in word_list(), size in 1usize..14, seed in any::<u64>()) {
        let (_, result) = build_seeded(&words, size, seed);
        let mut cells: HashMap<(usize, usize), char> = HashMap::new();
        for placement in &result.placed {
            let covered: Vec<(usize, usize, char)> = placement.cells(size).unwrap();
            for (r, c, letter) in covered {
                let existing: char = *cells.entry((r, c)).or_insert(letter);
                prop_assert_eq!(existing, letter);
            }
        }
    }

    /// The same seed always produces the same grid.
    #[test]
    fn seeded_builds_are_deterministic(
        words in word_list(),
        size in 1usize..14,
        seed in any::<u64>(),
    ) {
        let (grid1, result1) = build_seeded(&words, size, seed);
        let (grid2, result2) = build_seeded(&words, size, seed);
        prop_assert_eq!(grid1, grid2);
        prop_assert_eq!(result1, result2);
    }
}
