//! Grid builder and puzzle scenarios.

use rand::SeedableRng;
use rand::rngs::StdRng;

use wordgrid::generator::puzzle::{MIN_WORDS, Puzzle};
use wordgrid::generator::verify;
use wordgrid::word_list::WordList;
use wordgrid::{Difficulty, Word, WordGrid, build};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(w).unwrap()).collect()
}

#[test]
fn short_words_fit_in_small_grid() {
    let list: Vec<Word> = words(&["CAT", "DOG", "BIRD"]);
    for seed in 0..100 {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let (grid, result) = build(&list, 8, &mut rng).unwrap();
        assert_eq!(result.placed.len(), 3, "seed {seed}");
        assert!(result.failed.is_empty(), "seed {seed}");
        for word in &list {
            assert!(verify::locate(&grid, word).is_some(), "seed {seed}: {word}");
        }
    }
}

#[test]
fn oversized_word_is_excluded() {
    let mut rng: StdRng = StdRng::seed_from_u64(8);
    let (grid, result) = build(&words(&["SUPERCALIFRAGILISTIC"]), 8, &mut rng).unwrap();
    assert!(result.placed.is_empty());
    assert!(result.failed.is_empty());
    assert_eq!(result.oversized.len(), 1);
    assert_eq!(grid.rows().len(), 8);
}

#[test]
fn word_filling_the_grid() {
    let mut rng: StdRng = StdRng::seed_from_u64(9);
    let (grid, result) = build(&words(&["ABCDE"]), 5, &mut rng).unwrap();
    let placement = &result.placed[0];
    assert!(grid.contains(placement));
    let (rows, cols) = placement.direction.start_ranges(5, 5).unwrap();
    assert!(rows.contains(&placement.row));
    assert!(cols.contains(&placement.col));
}

#[test]
fn builder_statistics_are_reset() {
    let list: Vec<Word> = words(&["RUST", "TRUST", "CRUST"]);
    let mut builder: WordGrid = WordGrid::new(6).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(10);
    builder.build(&list, &mut rng);
    let attempts: usize = builder.attempts;
    assert!(attempts >= 3);

    let mut rng: StdRng = StdRng::seed_from_u64(10);
    builder.build(&list, &mut rng);
    assert_eq!(builder.attempts, attempts);
}

#[test]
fn puzzles_for_every_difficulty() {
    let list: WordList = WordList::builtin();
    for difficulty in Difficulty::all() {
        for seed in 0..5 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let (puzzle, _) = Puzzle::generate(&list, difficulty, &mut rng).unwrap();
            assert_eq!(puzzle.difficulty, difficulty);
            assert_eq!(puzzle.grid.size(), difficulty.grid_size());
            assert!(puzzle.words.len() >= MIN_WORDS);
            for word in &puzzle.words {
                assert!(word.len() <= difficulty.grid_size());
                assert!(verify::locate(&puzzle.grid, word).is_some());
            }
        }
    }
}

#[test]
fn puzzle_json_round_trip() {
    let list: WordList = WordList::builtin();
    let mut rng: StdRng = StdRng::seed_from_u64(3);
    let (puzzle, _) = Puzzle::generate(&list, Difficulty::Easy, &mut rng).unwrap();
    let json: String = serde_json::to_string(&puzzle).unwrap();
    let restored: Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, puzzle);
}
