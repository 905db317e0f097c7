//! Border resolution: which tiles share which edges
//!
//! Every border of every tile is tested against the forward and reversed
//! signatures of every other tile. Tile counts are puzzle-sized, so the
//! quadratic pairwise scan needs no index.

use crate::io::error::{JigsawError, Result, computation_error};
use crate::spatial::{Side, Tile, TileId, TileSet};

/// Position class implied by the number of matched borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Two matched borders
    Corner,
    /// Three matched borders
    Edge,
    /// Four matched borders
    Interior,
}

/// Annotate every border of every tile with the neighbor sharing it
///
/// Matches are derived from signatures alone, so running this again on an
/// annotated set reproduces the same adjacency graph. When one border
/// matches several tiles the one with the highest id wins.
pub fn resolve_borders(tiles: &mut TileSet) {
    let snapshot: &TileSet = tiles;
    let annotations: Vec<(TileId, [Option<TileId>; 4])> = snapshot
        .iter()
        .map(|tile| (tile.id(), neighbors_of(tile, snapshot)))
        .collect();

    for (id, matches) in annotations {
        if let Some(tile) = tiles.get_mut(id) {
            for (side, neighbor) in Side::ALL.into_iter().zip(matches) {
                tile.set_match(side, neighbor);
            }
        }
    }

    for (from, to) in one_sided_links(tiles) {
        log::debug!("tile {from} matches tile {to} but not the reverse");
    }

    log::debug!(
        "resolved borders of {} tiles: {} corners",
        tiles.len(),
        tiles
            .iter()
            .filter(|tile| classify(tile) == Some(TileClass::Corner))
            .count()
    );
}

fn neighbors_of(tile: &Tile, tiles: &TileSet) -> [Option<TileId>; 4] {
    let mut matches = [None; 4];
    for other in tiles.iter().filter(|other| other.id() != tile.id()) {
        let candidates = other.possible_signatures();
        for (slot, border) in matches.iter_mut().zip(tile.borders()) {
            if candidates.contains(&border.signature) {
                *slot = Some(other.id());
            }
        }
    }
    matches
}

/// Matches `(from, to)` where `to` does not record `from` on any border
///
/// A well-formed puzzle has none. Ambiguous borders can leave a tile
/// pointing at a neighbor that resolved to some other tile instead.
pub fn one_sided_links(tiles: &TileSet) -> Vec<(TileId, TileId)> {
    tiles
        .iter()
        .flat_map(|tile| {
            tile.matches()
                .into_iter()
                .flatten()
                .map(move |neighbor| (tile.id(), neighbor))
        })
        .filter(|&(from, to)| {
            !tiles
                .get(to)
                .is_some_and(|other| other.matches().contains(&Some(from)))
        })
        .collect()
}

/// Classify a resolved tile, `None` for fewer than two matched borders
pub fn classify(tile: &Tile) -> Option<TileClass> {
    match tile.matched_count() {
        2 => Some(TileClass::Corner),
        3 => Some(TileClass::Edge),
        4 => Some(TileClass::Interior),
        _ => None,
    }
}

/// The four corner tiles of a resolved set, in ascending id order
///
/// # Errors
///
/// Returns `InvalidCornerCount` if:
/// - The tile count is not a perfect square
/// - Resolution produced a number of corners other than four
pub fn find_corners(tiles: &TileSet) -> Result<[TileId; 4]> {
    if tiles.mosaic_side().is_none() {
        return Err(JigsawError::InvalidCornerCount {
            corners: None,
            tiles: tiles.len(),
        });
    }

    let corners: Vec<TileId> = tiles
        .iter()
        .filter(|tile| classify(tile) == Some(TileClass::Corner))
        .map(Tile::id)
        .collect();

    <[TileId; 4]>::try_from(corners).map_err(|found| JigsawError::InvalidCornerCount {
        corners: Some(found.len()),
        tiles: tiles.len(),
    })
}

/// Product of the corner tile ids
///
/// # Errors
///
/// Returns a computation error if the product overflows `u64`
pub fn corner_product(corners: &[TileId]) -> Result<u64> {
    corners
        .iter()
        .try_fold(1_u64, |product, &id| product.checked_mul(id))
        .ok_or_else(|| computation_error("corner product", &"product overflows u64"))
}
