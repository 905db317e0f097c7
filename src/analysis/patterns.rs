//! Orientation-invariant pattern search over a stitched image
//!
//! A pattern is a rectangular template whose cells either require a pixel
//! value or accept anything. The image is searched in all eight
//! orientations and the orientation with the most matches is taken as the
//! true one. Matches are assumed not to overlap; that is a property of the
//! puzzle input and is not checked here.

use ndarray::Array2;

use crate::io::configuration::SEA_MONSTER;
use crate::io::error::{Result, computation_error};
use crate::spatial::{Grid, ORIENTATIONS, Orientation, Pixel};

/// Rectangular search template with wildcard cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    /// Required cells as (row, col, pixel)
    cells: Vec<(usize, usize, Pixel)>,
}

impl Pattern {
    /// Build a pattern from template rows
    ///
    /// `#` requires a filled pixel, `.` an empty one, anything else is a
    /// wildcard. Rows may differ in length; the widest one sets the width.
    pub fn from_template<S: AsRef<str>>(template: &[S]) -> Self {
        let mut cells = Vec::new();
        let mut cols = 0;
        for (row, line) in template.iter().enumerate() {
            let line = line.as_ref();
            cols = cols.max(line.chars().count());
            for (col, symbol) in line.chars().enumerate() {
                if let Some(pixel) = Pixel::from_char(symbol) {
                    cells.push((row, col, pixel));
                }
            }
        }
        Self {
            rows: template.len(),
            cols,
            cells,
        }
    }

    /// The sea monster template
    pub fn sea_monster() -> Self {
        Self::from_template(&SEA_MONSTER)
    }

    /// Template height
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Template width
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells that require a filled pixel
    pub fn weight(&self) -> usize {
        self.filled_offsets().count()
    }

    /// Offsets of the cells that require a filled pixel
    pub fn filled_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|(_, _, pixel)| pixel.is_filled())
            .map(|&(row, col, _)| (row, col))
    }

    /// Whether the template matches with its top-left corner at a position
    pub fn matches_at(&self, image: &Grid, row: usize, col: usize) -> bool {
        self.cells
            .iter()
            .all(|&(r, c, pixel)| image.get(row + r, col + c) == Some(pixel))
    }

    /// Top-left corners of every window that matches
    pub fn match_positions(&self, image: &Grid) -> Vec<(usize, usize)> {
        let side = image.side();
        if side < self.rows || side < self.cols {
            return Vec::new();
        }

        let mut positions = Vec::new();
        for row in 0..=side - self.rows {
            for col in 0..=side - self.cols {
                if self.matches_at(image, row, col) {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Number of matching windows
    pub fn count_matches(&self, image: &Grid) -> usize {
        self.match_positions(image).len()
    }

    /// Mask of the filled pixels covered by some match
    pub fn match_mask(&self, image: &Grid) -> Array2<bool> {
        let mut mask = Array2::from_elem((image.side(), image.side()), false);
        for (row, col) in self.match_positions(image) {
            for (r, c) in self.filled_offsets() {
                if let Some(cell) = mask.get_mut((row + r, col + c)) {
                    *cell = true;
                }
            }
        }
        mask
    }
}

/// Outcome of searching every orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSearch {
    /// Orientation of the image with the most matches
    pub orientation: Orientation,
    /// Matches found in that orientation
    pub matches: usize,
}

/// Count matches in all eight orientations and keep the best
///
/// Ties keep the earliest orientation in `ORIENTATIONS` order.
pub fn search_orientations(image: &Grid, pattern: &Pattern) -> PatternSearch {
    let mut best = PatternSearch {
        orientation: Orientation::default(),
        matches: 0,
    };
    for orientation in ORIENTATIONS {
        let matches = pattern.count_matches(&orientation.oriented(image));
        log::trace!("{matches} matches with image {orientation}");
        if matches > best.matches {
            best = PatternSearch {
                orientation,
                matches,
            };
        }
    }
    best
}

/// Filled pixels left over once pattern matches are discounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roughness {
    /// Filled pixels in the whole image
    pub filled: usize,
    /// Best orientation search result
    pub search: PatternSearch,
    /// Filled cells per pattern match
    pub weight: usize,
    /// `filled - matches * weight`
    pub value: usize,
}

/// Water roughness of an image with respect to a pattern
///
/// # Errors
///
/// Returns a computation error if the matched cells outnumber the filled
/// pixels, which can only happen when matches overlap
pub fn water_roughness(image: &Grid, pattern: &Pattern) -> Result<Roughness> {
    let filled = image.count_filled();
    let search = search_orientations(image, pattern);
    let weight = pattern.weight();
    let value = search
        .matches
        .checked_mul(weight)
        .and_then(|covered| filled.checked_sub(covered))
        .ok_or_else(|| {
            computation_error(
                "water roughness",
                &format!(
                    "{} matches of weight {weight} exceed {filled} filled pixels",
                    search.matches
                ),
            )
        })?;

    Ok(Roughness {
        filled,
        search,
        weight,
        value,
    })
}
