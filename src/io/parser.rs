//! Puzzle text parsing
//!
//! The input is a sequence of blocks separated by blank lines. Each block
//! starts with a `Tile <id>:` header followed by the rows of the tile.

use crate::io::configuration::TILE_HEADER_PREFIX;
use crate::io::error::{JigsawError, Result, WithTile};
use crate::spatial::{Grid, Pixel, Tile, TileId, TileSet};

/// Parse puzzle text into a tile set
///
/// # Errors
///
/// Returns `InvalidInput` for a bad header, an unknown pixel symbol or a
/// header without rows, and `MalformedTile` for non-square or undersized
/// tiles, inconsistent tile sizes and duplicate ids
pub fn parse_tiles(input: &str) -> Result<TileSet> {
    let mut tiles = Vec::new();
    let mut block: Vec<(usize, &str)> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            if !block.is_empty() {
                tiles.push(parse_block(&block)?);
                block.clear();
            }
        } else {
            block.push((index + 1, line));
        }
    }
    if !block.is_empty() {
        tiles.push(parse_block(&block)?);
    }

    log::debug!("parsed {} tiles", tiles.len());
    TileSet::new(tiles)
}

fn parse_block(block: &[(usize, &str)]) -> Result<Tile> {
    let Some((&(header_line, header), rows)) = block.split_first() else {
        return Err(JigsawError::InvalidInput {
            line: 0,
            reason: "empty tile block".to_string(),
        });
    };
    let id = parse_header(header_line, header)?;
    if rows.is_empty() {
        return Err(JigsawError::InvalidInput {
            line: header_line,
            reason: format!("tile {id} has no rows"),
        });
    }

    let pixels = rows
        .iter()
        .map(|&(line, row)| parse_row(line, row))
        .collect::<Result<Vec<_>>>()?;
    let grid = Grid::from_rows(&pixels).with_tile(id)?;
    Tile::new(id, grid)
}

fn parse_header(line: usize, header: &str) -> Result<TileId> {
    header
        .trim()
        .strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(':'))
        .and_then(|id| id.trim().parse().ok())
        .ok_or_else(|| JigsawError::InvalidInput {
            line,
            reason: format!("expected a '{TILE_HEADER_PREFIX}<id>:' header, found '{header}'"),
        })
}

fn parse_row(line: usize, row: &str) -> Result<Vec<Pixel>> {
    row.trim()
        .chars()
        .map(|symbol| {
            Pixel::from_char(symbol).ok_or_else(|| JigsawError::InvalidInput {
                line,
                reason: format!("unknown pixel symbol '{symbol}'"),
            })
        })
        .collect()
}
