//! Puzzle tiles with border signatures and neighbor tracking
//!
//! A tile owns its grid and the four border signatures read from the grid's
//! current orientation. Each border also remembers the id of the tile found
//! to share that edge. Transforms re-read the signatures from the new grid
//! but carry the neighbor ids along with the physical edge they belong to.

use bitvec::vec::BitVec;
use std::collections::HashSet;
use std::fmt;

use crate::io::configuration::MIN_TILE_SIDE;
use crate::io::error::{JigsawError, Result};
use crate::spatial::grid::{Grid, Pixel};
use crate::spatial::orientation::Orientable;

/// Numeric tile identifier from the puzzle input
pub type TileId = u64;

/// One of the four tile borders, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row
    Top,
    /// First column
    Left,
    /// Last row
    Bottom,
    /// Last column
    Right,
}

impl Side {
    /// All sides in storage order
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];
}

/// Pixels along one border, filled pixels stored as set bits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Signature(BitVec);

impl Signature {
    /// Read a signature from a pixel sequence
    pub fn from_pixels<I: IntoIterator<Item = Pixel>>(pixels: I) -> Self {
        Self(pixels.into_iter().map(Pixel::is_filled).collect())
    }

    /// The same border read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bits = self.0.clone();
        bits.reverse();
        Self(bits)
    }

    /// Number of pixels in the border
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the border has no pixels
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pixels of the border in reading order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.0.iter().by_vals().map(Pixel::from)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pixel in self.pixels() {
            write!(f, "{}", pixel.to_char())?;
        }
        Ok(())
    }
}

/// A border signature and the neighbor sharing it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    /// Pixels along the border in the tile's current orientation
    pub signature: Signature,
    /// Id of the tile found to share this edge
    pub matched_tile_id: Option<TileId>,
}

impl Border {
    const fn unmatched(signature: Signature) -> Self {
        Self {
            signature,
            matched_tile_id: None,
        }
    }
}

/// Read the top, left, bottom and right signatures of a grid
///
/// Rows are read left to right and columns top to bottom.
pub fn borders_of(grid: &Grid) -> [Signature; 4] {
    let last = grid.side().saturating_sub(1);
    [
        Signature::from_pixels(grid.row(0)),
        Signature::from_pixels(grid.column(0)),
        Signature::from_pixels(grid.row(last)),
        Signature::from_pixels(grid.column(last)),
    ]
}

/// A puzzle piece: id, pixels, and border adjacency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    grid: Grid,
    borders: [Border; 4],
}

impl Tile {
    /// Create an unmatched tile
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the grid is too small to have an interior
    pub fn new(id: TileId, grid: Grid) -> Result<Self> {
        if grid.side() < MIN_TILE_SIDE {
            return Err(JigsawError::MalformedTile {
                tile_id: Some(id),
                reason: format!(
                    "side {} is below the minimum of {MIN_TILE_SIDE}",
                    grid.side()
                ),
            });
        }
        let borders = borders_of(&grid).map(Border::unmatched);
        Ok(Self { id, grid, borders })
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Pixels in the current orientation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length of the tile grid
    pub fn side(&self) -> usize {
        self.grid.side()
    }

    /// All borders in top, left, bottom, right order
    pub const fn borders(&self) -> &[Border; 4] {
        &self.borders
    }

    /// One border
    pub const fn border(&self, side: Side) -> &Border {
        let [top, left, bottom, right] = &self.borders;
        match side {
            Side::Top => top,
            Side::Left => left,
            Side::Bottom => bottom,
            Side::Right => right,
        }
    }

    /// Record (or clear) the neighbor sharing one border
    pub fn set_match(&mut self, side: Side, neighbor: Option<TileId>) {
        let [top, left, bottom, right] = &mut self.borders;
        let border = match side {
            Side::Top => top,
            Side::Left => left,
            Side::Bottom => bottom,
            Side::Right => right,
        };
        border.matched_tile_id = neighbor;
    }

    /// Neighbor ids in top, left, bottom, right order
    pub fn matches(&self) -> [Option<TileId>; 4] {
        self.borders.each_ref().map(|border| border.matched_tile_id)
    }

    /// Number of borders with a known neighbor
    pub fn matched_count(&self) -> usize {
        self.borders
            .iter()
            .filter(|border| border.matched_tile_id.is_some())
            .count()
    }

    /// Every signature another tile could present against this one
    ///
    /// Each border forward and reversed, so membership tests adjacency
    /// against this tile in any orientation without transforming it.
    pub fn possible_signatures(&self) -> HashSet<Signature> {
        self.borders
            .iter()
            .flat_map(|border| [border.signature.clone(), border.signature.reversed()])
            .collect()
    }

    /// Interior pixels with the border ring removed
    pub fn trim(&self) -> Grid {
        self.grid.trim_border()
    }

    fn rebuild_borders(&mut self, matches: [Option<TileId>; 4]) {
        let [top, left, bottom, right] = borders_of(&self.grid);
        let [top_id, left_id, bottom_id, right_id] = matches;
        self.borders = [
            Border {
                signature: top,
                matched_tile_id: top_id,
            },
            Border {
                signature: left,
                matched_tile_id: left_id,
            },
            Border {
                signature: bottom,
                matched_tile_id: bottom_id,
            },
            Border {
                signature: right,
                matched_tile_id: right_id,
            },
        ];
    }
}

impl Orientable for Tile {
    fn apply_rotate90(&mut self) {
        self.grid = self.grid.rotate90();
        // Clockwise: left edge moves to the top, top to the right
        let [top, left, bottom, right] = self.matches();
        self.rebuild_borders([left, bottom, right, top]);
    }

    fn apply_reflect(&mut self) {
        self.grid = self.grid.reflect();
        let [top, left, bottom, right] = self.matches();
        self.rebuild_borders([bottom, left, top, right]);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tile {}:", self.id)?;
        write!(f, "{}", self.grid)
    }
}
