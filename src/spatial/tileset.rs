//! Id-keyed arena holding every tile of one puzzle

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::io::error::{JigsawError, Result};
use crate::spatial::tiles::{Tile, TileId};

/// The full tile collection of a puzzle
///
/// Built once from parsed tiles and never resized. All tiles share one side
/// length. Iteration follows ascending tile id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    tiles: BTreeMap<TileId, Tile>,
    tile_side: usize,
}

impl TileSet {
    /// Collect tiles into a set
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if:
    /// - No tiles are given
    /// - A tile's side differs from the first tile's
    /// - Two tiles share an id
    pub fn new<I: IntoIterator<Item = Tile>>(tiles: I) -> Result<Self> {
        let mut arena = BTreeMap::new();
        let mut tile_side = None;

        for tile in tiles {
            let side = *tile_side.get_or_insert(tile.side());
            if tile.side() != side {
                return Err(JigsawError::MalformedTile {
                    tile_id: Some(tile.id()),
                    reason: format!("side {} differs from the puzzle's {side}", tile.side()),
                });
            }
            match arena.entry(tile.id()) {
                Entry::Occupied(_) => {
                    return Err(JigsawError::MalformedTile {
                        tile_id: Some(tile.id()),
                        reason: "duplicate tile id".to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(tile);
                }
            }
        }

        let tile_side = tile_side.ok_or_else(|| JigsawError::MalformedTile {
            tile_id: None,
            reason: "puzzle contains no tiles".to_string(),
        })?;

        Ok(Self {
            tiles: arena,
            tile_side,
        })
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Side length shared by every tile
    pub const fn tile_side(&self) -> usize {
        self.tile_side
    }

    /// Tiles per mosaic side, if the tile count is a perfect square
    pub fn mosaic_side(&self) -> Option<usize> {
        let side = self.len().isqrt();
        (side * side == self.len()).then_some(side)
    }

    /// Look up a tile
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Look up a tile for annotation
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(&id)
    }

    /// Tiles in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Tile ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.keys().copied()
    }
}
