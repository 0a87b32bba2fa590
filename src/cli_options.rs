/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the word lists and the grid builder.
//!
//! # Examples
//!
//! List the built-in words:
//!
//! ```text
//! $ wordgrid --ls
//! ```
//!
//! Generate three hard puzzles from a word list file, with some statistics:
//!
//! ```text
//! $ wordgrid -f hard -l words.json -c 3 --summary
//! ```
//!
//! Hide the given words in a 6x6 grid, always the same:
//!
//! ```text
//! $ wordgrid -w cat,dog,bird -s 6 --seed 42
//! ```
//!
//! Compute the score of a medium game where the player found 7 words out of 7 in 150 seconds:
//!
//! ```text
//! $ wordgrid -f medium --score 7,7,150
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use wordgrid::difficulty::Difficulty;
use wordgrid::generator::grid::Grid;
use wordgrid::generator::placement::PlacementResult;
use wordgrid::generator::puzzle::{Puzzle, PuzzleError};
use wordgrid::generator::word::Word;
use wordgrid::generator::word_grid::WordGrid;
use wordgrid::score::{self, ScoreBreakdown};
use wordgrid::word_list::WordList;

/// Number of consecutive puzzle generation failures before giving up.
const MAX_ERRORS: usize = 10;

/// Largest absolute value accepted for each number of the `--score` option.
const MAX_SCORE_ARG: i64 = 1_000_000_000;

/// Build random word search grids and compute scores.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the words of the word list
    #[arg(long, default_value_t = false, conflicts_with = "words")]
    ls: bool,

    /// Difficulty level for the puzzle
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Comma-separated list of words to hide, instead of sampling the word list
    #[arg(short, long, value_delimiter = ',')]
    words: Vec<String>,

    /// Word list file in JSON format (the built-in list is used otherwise)
    #[arg(short = 'l', long)]
    word_list: Option<PathBuf>,

    /// Grid size for the words given with --words (the difficulty grid size otherwise)
    #[arg(short, long, requires = "words")]
    size: Option<usize>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of grids to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the grids in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the grids
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Print the score of a game and exit
    #[arg(long, value_name = "FOUND,TOTAL,SECONDS", value_parser = parse_score_args)]
    score: Option<(i64, i64, i64)>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Grid built from an explicit list of words, as printed in JSON.
#[derive(Serialize)]
struct BuiltGrid<'a> {
    grid: &'a Grid,
    result: &'a PlacementResult,
}

/// Parse the `FOUND,TOTAL,SECONDS` value of the `--score` option.
fn parse_score_args(value: &str) -> Result<(i64, i64, i64), String> {
    let numbers: Vec<i64> = value
        .split(',')
        .map(|n| n.trim().parse::<i64>())
        .collect::<Result<Vec<i64>, _>>()
        .map_err(|e| format!("{value}: {e}"))?;
    if let Some(n) = numbers.iter().find(|n| !(-MAX_SCORE_ARG..=MAX_SCORE_ARG).contains(*n)) {
        return Err(format!("{value}: {n} is out of range (at most {MAX_SCORE_ARG})"));
    }
    match numbers[..] {
        [found, total, seconds] => Ok((found, total, seconds)),
        _ => Err(format!("{value}: expected FOUND,TOTAL,SECONDS")),
    }
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut logger: env_logger::Builder = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    //
    // Score a game
    //
    if let Some((found, total, seconds)) = args.score {
        let breakdown: ScoreBreakdown = score::score(found, total, seconds, args.difficulty);
        print_score(&breakdown, seconds, args.json);
        return 0;
    }

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    if !args.words.is_empty() {
        return build_words(&args, &mut rng);
    }

    let list: WordList = match &args.word_list {
        Some(path) => match WordList::from_file(path) {
            Ok(list) => list,
            Err(e) => {
                eprintln!("Cannot read the word list {}: {e}", path.display());
                return 1;
            }
        },
        None => WordList::builtin(),
    };

    //
    // List the words
    //
    if args.ls {
        for difficulty in Difficulty::all() {
            let words: Vec<String> = list
                .entries()
                .filter(|e| e.difficulty == difficulty)
                .map(|e| e.word.to_string())
                .collect();
            println!("{difficulty} ({} words): {}", words.len(), words.join(", "));
        }
        return 0;
    }

    generate_puzzles(&args, &list, &mut rng)
}

/// Hide the words given with `--words`.
fn build_words(args: &Args, rng: &mut StdRng) -> u8 {
    let mut words: Vec<Word> = Vec::with_capacity(args.words.len());
    for text in &args.words {
        match Word::new(text) {
            Ok(word) => words.push(word),
            Err(e) => {
                eprintln!("Invalid word '{text}': {e}");
                return 1;
            }
        }
    }

    let size: usize = args.size.unwrap_or(args.difficulty.grid_size());
    let mut builder: WordGrid = match WordGrid::new(size) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Invalid grid size: {e}");
            return 1;
        }
    };

    let mut total: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut intersections: usize = 0;
    let mut failed: usize = 0;
    for i in 0..args.count {
        debug!("Iteration {i}");
        let (grid, result) = builder.build(&words, rng);
        total += builder.duration;
        attempts += builder.attempts;
        intersections += builder.intersections;
        failed += result.failed.len();

        if args.json {
            match serde_json::to_string_pretty(&BuiltGrid {
                grid: &grid,
                result: &result,
            }) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Cannot serialize the grid: {e}");
                    return 1;
                }
            }
        } else {
            println!("{grid}");
            for p in &result.placed {
                println!("{:<16} ({}, {}) {:?}", p.word.as_str(), p.row, p.col, p.direction);
            }
            for word in &result.oversized {
                println!("{:<16} too long for the grid", word.as_str());
            }
            for word in &result.failed {
                println!("{:<16} not placed", word.as_str());
            }
            println!();
        }
    }

    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
  average attempts = {}
average intersections = {}
      failed words = {}",
            total,
            total / args.count as f32,
            attempts / args.count,
            intersections as f32 / args.count as f32,
            failed
        );
    }
    0
}

/// Generate puzzles from the word list.
fn generate_puzzles(args: &Args, list: &WordList, rng: &mut StdRng) -> u8 {
    let start: Instant = Instant::now();
    let mut errors: usize = 0;
    let mut consecutive_errors: usize = 0;
    let mut placed: usize = 0;
    let mut failed: usize = 0;
    let mut i: usize = 0;
    while i < args.count {
        debug!("Iteration {i}");
        match Puzzle::generate(list, args.difficulty, rng) {
            Ok((puzzle, result)) => {
                consecutive_errors = 0;
                placed += puzzle.words.len();
                failed += result.failed.len();
                if !print_puzzle(&puzzle, args.json) {
                    return 1;
                }
                i += 1;
            }
            Err(PuzzleError::NoWords) => {
                eprintln!("Error: {}", PuzzleError::NoWords);
                return 1;
            }
            Err(e) => {
                errors += 1;
                consecutive_errors += 1;
                debug!("ERROR generating puzzle: {e}");
                if consecutive_errors >= MAX_ERRORS {
                    eprintln!("Error: {e}");
                    return 1;
                }
            }
        }
    }

    if args.summary && args.count > 0 {
        let total: f32 = start.elapsed().as_secs_f32();
        println!(
            "
   total time = {}s
 average time = {}s
average words = {}
 failed words = {}
       errors = {}",
            total,
            total / args.count as f32,
            placed as f32 / args.count as f32,
            failed,
            errors
        );
    }
    0
}

/// Print a puzzle. Return false if the puzzle cannot be serialized.
fn print_puzzle(puzzle: &Puzzle, json: bool) -> bool {
    if json {
        match serde_json::to_string_pretty(puzzle) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the puzzle: {e}");
                return false;
            }
        }
        return true;
    }

    let size: usize = puzzle.grid.size();
    println!("{} puzzle ({size}x{size})\n", puzzle.difficulty);
    println!("{}", puzzle.grid);
    for word in &puzzle.words {
        println!("{:<16} {}", word.as_str(), puzzle.definition(word).unwrap_or_default());
    }
    println!();
    true
}

/// Print the details of a score.
fn print_score(breakdown: &ScoreBreakdown, seconds: i64, json: bool) {
    if json {
        match serde_json::to_string_pretty(breakdown) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Cannot serialize the score: {e}"),
        }
        return;
    }
    println!(
        "            time = {}
      base score = {}
difficulty bonus = {}
      time bonus = {}
completion bonus = {}
           total = {}",
        score::format_elapsed(seconds),
        breakdown.base,
        breakdown.difficulty_bonus,
        breakdown.time_bonus,
        breakdown.completion_bonus,
        breakdown.total
    );
}
