//! Square pixel grids with pure rotation, reflection and trimming
//!
//! A grid is always square. Transforms never mutate the receiver; they
//! return a new grid so that callers decide what to replace.

use ndarray::{Array2, s};
use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{EMPTY_SYMBOL, FILLED_SYMBOL};
use crate::io::error::{JigsawError, Result, malformed_tile};

/// One of the two pixel symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    /// Calm water, rendered as `.`
    #[default]
    Empty,
    /// Rough water, rendered as `#`
    Filled,
}

impl Pixel {
    /// Parse a pixel symbol
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            FILLED_SYMBOL => Some(Self::Filled),
            EMPTY_SYMBOL => Some(Self::Empty),
            _ => None,
        }
    }

    /// Symbol used when rendering this pixel
    pub const fn to_char(self) -> char {
        match self {
            Self::Filled => FILLED_SYMBOL,
            Self::Empty => EMPTY_SYMBOL,
        }
    }

    /// Whether the pixel is filled
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

impl From<bool> for Pixel {
    fn from(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }
}

/// Square buffer of pixels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Array2<Pixel>,
}

impl Grid {
    /// The empty grid of side 0
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid of the given side from a cell function
    pub fn from_fn<F>(side: usize, mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        Self {
            cells: Array2::from_shape_fn((side, side), |(row, col)| cell(row, col)),
        }
    }

    /// Build a grid from rows of pixels
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if any row length differs from the row count
    pub fn from_rows(rows: &[Vec<Pixel>]) -> Result<Self> {
        let side = rows.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != side) {
            return Err(malformed_tile(&format!(
                "row {index} has {} pixels but the grid has {side} rows",
                row.len()
            )));
        }

        let flat: Vec<Pixel> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((side, side), flat).map_err(|e| malformed_tile(&e))?;
        Ok(Self { cells })
    }

    /// Side length of the grid
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Pixel at a position, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        self.cells.get((row, col)).copied()
    }

    /// Underlying pixel array
    pub const fn cells(&self) -> &Array2<Pixel> {
        &self.cells
    }

    /// Pixels of one row, left to right; empty when out of range
    pub fn row(&self, index: usize) -> impl Iterator<Item = Pixel> + '_ {
        let side = if index < self.side() { self.side() } else { 0 };
        (0..side).filter_map(move |col| self.get(index, col))
    }

    /// Pixels of one column, top to bottom; empty when out of range
    pub fn column(&self, index: usize) -> impl Iterator<Item = Pixel> + '_ {
        let side = if index < self.side() { self.side() } else { 0 };
        (0..side).filter_map(move |row| self.get(row, index))
    }

    /// Rotate 90 degrees clockwise
    ///
    /// Cell `(i, j)` of the result is cell `(n - 1 - j, i)` of the input.
    #[must_use]
    pub fn rotate90(&self) -> Self {
        Self {
            cells: self.cells.t().slice(s![.., ..;-1]).to_owned(),
        }
    }

    /// Mirror by reversing the row order
    #[must_use]
    pub fn reflect(&self) -> Self {
        Self {
            cells: self.cells.slice(s![..;-1, ..]).to_owned(),
        }
    }

    /// Remove the outermost ring of cells
    ///
    /// Grids smaller than 3 have no interior and trim to the empty grid.
    #[must_use]
    pub fn trim_border(&self) -> Self {
        let side = self.side();
        if side < 3 {
            return Self::empty();
        }
        Self {
            cells: self.cells.slice(s![1..side - 1, 1..side - 1]).to_owned(),
        }
    }

    /// Number of filled pixels
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|pixel| pixel.is_filled()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for pixel in row {
                write!(f, "{}", pixel.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = JigsawError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (index, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let row = line
                .chars()
                .map(|symbol| {
                    Pixel::from_char(symbol).ok_or_else(|| JigsawError::InvalidInput {
                        line: index + 1,
                        reason: format!("unknown pixel symbol '{symbol}'"),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}
