/*
score.rs

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

//! Compute the score of a game.
//!
//! The score is the sum of four parts:
//!
//! * 100 points per word found;
//! * a difficulty bonus: the base points multiplied by the difficulty multiplier, minus the base
//!   points;
//! * a time bonus that decreases by steps with the time the player took;
//! * 200 points when all the words are found.
//!
//! Inputs are not validated.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// Points for each word found.
pub const POINTS_PER_WORD: i64 = 100;

/// Bonus when all the words are found.
pub const COMPLETION_BONUS: i64 = 200;

/// Time bonus steps: below the given number of seconds, the player gets the associated bonus.
const TIME_BONUS_STEPS: [(i64, i64); 4] = [(60, 300), (120, 200), (180, 100), (300, 50)];

/// Details of a score.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Points for the words found.
    pub base: i64,

    /// Extra points for the difficulty level.
    pub difficulty_bonus: i64,

    /// Extra points for a fast game.
    pub time_bonus: i64,

    /// Extra points when all the words are found.
    pub completion_bonus: i64,

    /// Sum of all the parts.
    pub total: i64,
}

/// Compute the score.
pub fn score(
    words_found: i64,
    total_words: i64,
    elapsed_seconds: i64,
    difficulty: Difficulty,
) -> ScoreBreakdown {
    let base: i64 = words_found * POINTS_PER_WORD;
    let difficulty_bonus: i64 = difficulty_bonus(base, difficulty.multiplier());
    let time_bonus: i64 = time_bonus(elapsed_seconds);
    let completion_bonus: i64 = if words_found == total_words {
        COMPLETION_BONUS
    } else {
        0
    };

    ScoreBreakdown {
        base,
        difficulty_bonus,
        time_bonus,
        completion_bonus,
        total: base + difficulty_bonus + time_bonus + completion_bonus,
    }
}

/// Return the extra points for the difficulty multiplier.
///
/// The multiplied points are truncated before the base points are subtracted.
pub fn difficulty_bonus(base: i64, multiplier: f64) -> i64 {
    (base as f64 * multiplier).trunc() as i64 - base
}

/// Return the extra points for the time the player took.
pub fn time_bonus(elapsed_seconds: i64) -> i64 {
    TIME_BONUS_STEPS
        .iter()
        .find(|(limit, _)| elapsed_seconds < *limit)
        .map_or(0, |(_, bonus)| *bonus)
}

/// Format a duration in seconds as `MM:SS`.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds: i64 = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_fast_full_clear() {
        assert_eq!(
            score(5, 5, 45, Difficulty::Easy),
            ScoreBreakdown {
                base: 500,
                difficulty_bonus: 0,
                time_bonus: 300,
                completion_bonus: 200,
                total: 1000,
            }
        );
    }

    #[test]
    fn hard_slow_partial() {
        assert_eq!(
            score(4, 10, 310, Difficulty::Hard),
            ScoreBreakdown {
                base: 400,
                difficulty_bonus: 400,
                time_bonus: 0,
                completion_bonus: 0,
                total: 800,
            }
        );
    }

    #[test]
    fn medium_mid_time_full_clear() {
        assert_eq!(
            score(7, 7, 150, Difficulty::Medium),
            ScoreBreakdown {
                base: 700,
                difficulty_bonus: 350,
                time_bonus: 100,
                completion_bonus: 200,
                total: 1350,
            }
        );
    }

    #[test]
    fn time_bonus_steps() {
        let cases: [(i64, i64); 10] = [
            (0, 300),
            (59, 300),
            (60, 200),
            (119, 200),
            (120, 100),
            (179, 100),
            (180, 50),
            (299, 50),
            (300, 0),
            (10_000, 0),
        ];
        for (elapsed, bonus) in cases {
            assert_eq!(time_bonus(elapsed), bonus, "{elapsed}s");
        }
    }

    #[test]
    fn unknown_difficulty_has_no_bonus() {
        let breakdown: ScoreBreakdown =
            score(3, 5, 200, Difficulty::from_name_or_default("legendary"));
        assert_eq!(breakdown.difficulty_bonus, 0);
        assert_eq!(breakdown.total, 350);
    }

    #[test]
    fn difficulty_bonus_truncates() {
        assert_eq!(difficulty_bonus(100, 1.5), 50);
        assert_eq!(difficulty_bonus(101, 1.5), 50);
        assert_eq!(difficulty_bonus(0, 2.0), 0);
    }

    #[test]
    fn format_minutes_seconds() {
        assert_eq!(format_elapsed(75), "01:15");
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(6001), "100:01");
        assert_eq!(format_elapsed(-5), "00:00");
    }
}
