//! Stitching of trimmed tile interiors into one image

use crate::algorithm::assembler::Mosaic;
use crate::spatial::{Grid, Pixel, Tile};

/// Concatenate every tile's interior into the full image
///
/// Image row `r * inner + i` is the horizontal concatenation of interior row
/// `i` of every tile in mosaic row `r`, where `inner` is the interior side.
pub fn stitch(mosaic: &Mosaic) -> Grid {
    let interiors = mosaic.tiles().map(Tile::trim);
    let inner = interiors.iter().next().map_or(0, Grid::side);
    if inner == 0 {
        return Grid::empty();
    }

    Grid::from_fn(mosaic.side() * inner, |row, col| {
        interiors
            .get((row / inner, col / inner))
            .and_then(|interior| interior.get(row % inner, col % inner))
            .unwrap_or(Pixel::Empty)
    })
}
