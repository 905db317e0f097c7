//! Row-major mosaic reconstruction from a resolved tile set
//!
//! Starting from a corner, each tile is oriented so that its top border
//! equals the bottom border of the tile above and its left border equals
//! the right border of the tile to its left. Outer image edges are expressed
//! as "no requirement", which demands an unmatched border instead.

use ndarray::Array2;

use crate::io::error::{JigsawError, Result, computation_error, orientation_error};
use crate::spatial::orientation::orientations;
use crate::spatial::{Border, Side, Signature, Tile, TileId, TileSet};

/// Assembled grid of oriented tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mosaic {
    tiles: Array2<Tile>,
}

impl Mosaic {
    /// Tiles per side
    pub fn side(&self) -> usize {
        self.tiles.nrows()
    }

    /// Oriented tile at a mosaic position
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get((row, col))
    }

    /// Oriented tiles in row-major layout
    pub const fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    /// Tile ids in row-major layout
    pub fn tile_ids(&self) -> Array2<TileId> {
        self.tiles.map(Tile::id)
    }
}

fn border_satisfies(border: &Border, required: Option<&Signature>) -> bool {
    required.map_or(border.matched_tile_id.is_none(), |signature| {
        border.signature == *signature
    })
}

/// Orient a tile so its top and left borders meet the given requirements
///
/// `None` means the border lies on the image edge and must be unmatched.
/// Orientations are tried in `ORIENTATIONS` order; the first fit wins.
pub fn find_matching_orientation(
    tile: &Tile,
    required_top: Option<&Signature>,
    required_left: Option<&Signature>,
) -> Option<Tile> {
    orientations(tile)
        .map(|(_, candidate)| candidate)
        .find(|candidate| {
            border_satisfies(candidate.border(Side::Top), required_top)
                && border_satisfies(candidate.border(Side::Left), required_left)
        })
}

/// Reconstruct the mosaic with `anchor` in the top-left position
///
/// The tile set must already be resolved. The next tile is always found
/// through the adjacency links: the right neighbor while a row continues,
/// the bottom neighbor of the tile above once a new row starts.
///
/// # Errors
///
/// Returns `InvalidCornerCount` if the tile count is not a perfect square,
/// and `TileOrientation` if:
/// - No orientation of a tile satisfies its top and left requirements
/// - A neighbor link names a tile missing from the set
/// - A row runs longer than the row above it
/// - A tile above has no neighbor below while rows remain
/// - Placement does not finish within the tile count, or ends non-square
pub fn assemble(tiles: &TileSet, anchor: TileId) -> Result<Mosaic> {
    let side = tiles
        .mosaic_side()
        .ok_or(JigsawError::InvalidCornerCount {
            corners: None,
            tiles: tiles.len(),
        })?;

    let mut rows: Vec<Vec<Tile>> = Vec::with_capacity(side);
    let mut current: Vec<Tile> = Vec::with_capacity(side);
    let mut required_top: Option<Signature> = None;
    let mut required_left: Option<Signature> = None;
    let mut next_id = anchor;
    let mut placed = 0;

    loop {
        let position = (rows.len(), current.len());
        if placed == tiles.len() {
            return Err(orientation_error(
                next_id,
                position,
                &"placement would exceed the tile count",
            ));
        }

        let candidate = tiles.get(next_id).ok_or_else(|| {
            orientation_error(next_id, position, &"neighbor id is not in the tile set")
        })?;
        let oriented =
            find_matching_orientation(candidate, required_top.as_ref(), required_left.as_ref())
                .ok_or_else(|| {
                    orientation_error(
                        next_id,
                        position,
                        &"no orientation satisfies the top and left borders",
                    )
                })?;
        placed += 1;
        log::trace!("placed tile {next_id} at {position:?}");

        let right = oriented.border(Side::Right).clone();
        let bottom_open = oriented.border(Side::Bottom).matched_tile_id.is_none();
        current.push(oriented);

        if let Some(right_id) = right.matched_tile_id {
            required_left = Some(right.signature);
            next_id = right_id;
        } else {
            rows.push(std::mem::take(&mut current));
            if bottom_open {
                break;
            }
            required_left = None;
        }

        if let Some(above_row) = rows.last() {
            let position = (rows.len(), current.len());
            let above = above_row.get(current.len()).ok_or_else(|| {
                orientation_error(next_id, position, &"row is longer than the row above")
            })?;
            let bottom = above.border(Side::Bottom);
            next_id = bottom.matched_tile_id.ok_or_else(|| {
                orientation_error(above.id(), position, &"tile above has no neighbor below")
            })?;
            required_top = Some(bottom.signature.clone());
        }
    }

    if rows.len() != side || rows.iter().any(|row| row.len() != side) {
        return Err(orientation_error(
            anchor,
            (rows.len(), 0),
            &format!("assembled rows do not form a {side}x{side} square"),
        ));
    }

    let cells: Vec<Tile> = rows.into_iter().flatten().collect();
    let tiles = Array2::from_shape_vec((side, side), cells)
        .map_err(|e| computation_error("mosaic layout", &e))?;
    log::debug!("assembled {side}x{side} mosaic anchored at tile {anchor}");

    Ok(Mosaic { tiles })
}
