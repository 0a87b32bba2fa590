/*
grid.rs

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

//! Square letter grids.
//!
//! [`Canvas`] is the grid under construction, where cells can still be unset.
//! Once all the words are placed, the canvas is filled with random letters and becomes a
//! [`Grid`], where every cell holds a letter.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::placement::Placement;
use super::word::{ALPHABET, Word};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The grid has no row.
    Empty,

    /// A row does not have as many letters as there are rows.
    NotSquare { row: usize, len: usize },

    /// A cell does not hold a letter from the alphabet.
    InvalidLetter { row: usize, col: usize, letter: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "the grid is empty"),
            GridError::NotSquare { row, len } => {
                write!(f, "row {row} has {len} letters, the grid is not square")
            }
            GridError::InvalidLetter { row, col, letter } => {
                write!(f, "cell ({row}, {col}) holds '{letter}', which is not a letter")
            }
        }
    }
}

impl Error for GridError {}

/// Complete `size` x `size` letter grid.
///
/// Serialized as a list of rows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Letters, row after row.
    cells: Vec<char>,
}

impl Grid {
    /// Create a [`Grid`] object from its rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size: usize = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut cells: Vec<char> = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let letters: Vec<char> = text
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if letters.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: letters.len(),
                });
            }
            if let Some(col) = letters.iter().position(|c| !c.is_ascii_uppercase()) {
                return Err(GridError::InvalidLetter {
                    row,
                    col,
                    letter: letters[col],
                });
            }
            cells.extend(letters);
        }
        Ok(Self { size, cells })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter at the given coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            None
        } else {
            Some(self.cells[row * self.size + col])
        }
    }

    /// Return the rows as strings.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Read `len` letters starting at `(row, col)` in the given direction.
    ///
    /// Return None if the line leaves the grid.
    pub fn read(&self, row: usize, col: usize, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                direction
                    .offset(row, col, i, self.size)
                    .and_then(|(r, c)| self.get(r, c))
            })
            .collect()
    }

    /// Whether the word of the placement can be read at its recorded position.
    pub fn contains(&self, placement: &Placement) -> bool {
        self.read(
            placement.row,
            placement.col,
            placement.direction,
            placement.word.len(),
        )
        .is_some_and(|text| text == placement.word.as_str())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows.as_slice())
    }
}

/// Grid under construction.
#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    /// Number of rows and columns.
    size: usize,

    /// Letters, row after row. None for the cells that are not set yet.
    cells: Vec<Option<char>>,
}

impl Canvas {
    /// Create an empty [`Canvas`] object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Return the letter at the given coordinates, or None if the cell is not set.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row * self.size + col]
    }

    /// Check whether the word can be written at `(row, col)` in the given direction.
    ///
    /// Return the number of cells that already hold the required letter (intersections), or
    /// None if a cell holds another letter or if the word leaves the grid.
    pub fn evaluate(
        &self,
        word: &Word,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<usize> {
        let mut intersections: usize = 0;
        for (i, letter) in word.letters().enumerate() {
            let (r, c) = direction.offset(row, col, i, self.size)?;
            match self.get(r, c) {
                Some(existing) if existing == letter => intersections += 1,
                Some(_) => return None,
                None => (),
            }
        }
        Some(intersections)
    }

    /// Write the word of the placement.
    ///
    /// The placement must have been validated with [`Canvas::evaluate`].
    pub fn place(&mut self, placement: &Placement) {
        if let Some(cells) = placement.cells(self.size) {
            for (r, c, letter) in cells {
                self.cells[r * self.size + c] = Some(letter);
            }
        }
    }

    /// Number of cells holding a letter.
    pub fn num_letters(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill the unset cells with random letters and return the final [`Grid`].
    pub fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let cells: Vec<char> = self
            .cells
            .into_iter()
            .map(|cell| {
                cell.unwrap_or_else(|| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            })
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn evaluate_counts_intersections() {
        let mut canvas: Canvas = Canvas::new(5);
        canvas.place(&Placement::new(word("CAT"), 0, 0, Direction::Horizontal));

        // "CAR" going down from the C shares one letter
        assert_eq!(canvas.evaluate(&word("CAR"), 0, 0, Direction::Vertical), Some(1));
        // "CAT" over itself shares all the letters
        assert_eq!(canvas.evaluate(&word("CAT"), 0, 0, Direction::Horizontal), Some(3));
        // "DOG" over the C conflicts
        assert_eq!(canvas.evaluate(&word("DOG"), 0, 0, Direction::Vertical), None);
        // Empty area
        assert_eq!(canvas.evaluate(&word("DOG"), 2, 0, Direction::Horizontal), Some(0));
        // Out of the grid
        assert_eq!(canvas.evaluate(&word("DOG"), 0, 3, Direction::Horizontal), None);
    }

    #[test]
    fn fill_sets_every_cell() {
        let mut canvas: Canvas = Canvas::new(4);
        canvas.place(&Placement::new(word("OWL"), 1, 3, Direction::DiagonalDownLeft));
        assert_eq!(canvas.num_letters(), 3);

        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let grid: Grid = canvas.fill(&mut rng);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.get(1, 3), Some('O'));
        assert_eq!(grid.get(2, 2), Some('W'));
        assert_eq!(grid.get(3, 1), Some('L'));
        for row in grid.rows() {
            assert_eq!(row.len(), 4);
            assert!(row.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn rows_round_trip() {
        let grid: Grid = Grid::from_rows(&["ABC", "D E F", "GHI"]).unwrap();
        assert_eq!(grid.rows(), vec!["ABC", "DEF", "GHI"]);
        assert_eq!(grid.to_string(), "A B C\nD E F\nG H I\n");
        assert_eq!(grid.read(0, 2, Direction::DiagonalDownLeft, 3), Some("CEG".to_string()));
        assert_eq!(grid.read(1, 0, Direction::Vertical, 3), None);
    }

    #[test]
    fn malformed_rows() {
        assert_eq!(Grid::from_rows::<&str>(&[]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&["AB", "C"]),
            Err(GridError::NotSquare { row: 1, len: 1 })
        );
        assert_eq!(
            Grid::from_rows(&["AB", "c1"]),
            Err(GridError::InvalidLetter {
                row: 1,
                col: 0,
                letter: 'c'
            })
        );
    }
}
