//! End-to-end puzzle solving pipeline
//!
//! Resolve borders, validate corners, assemble the mosaic from an anchor
//! corner, stitch the image and measure its water roughness.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::assembler::{Mosaic, assemble};
use crate::algorithm::resolver::{corner_product, find_corners, resolve_borders};
use crate::algorithm::stitching::stitch;
use crate::analysis::patterns::{Pattern, Roughness, water_roughness};
use crate::io::error::Result;
use crate::spatial::{Grid, TileId, TileSet};

/// How the top-left corner of the mosaic is chosen
///
/// Every corner yields the same image up to rotation and reflection, so the
/// choice never changes the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorSelection {
    /// The corner with the lowest id
    #[default]
    LowestId,
    /// A corner drawn from a seeded generator
    Seeded(u64),
}

impl AnchorSelection {
    /// Pick one of the four corners
    pub fn select(self, corners: &[TileId; 4]) -> TileId {
        let [lowest, ..] = *corners;
        match self {
            Self::LowestId => lowest,
            Self::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                let index = rng.random_range(0..corners.len());
                corners.get(index).copied().unwrap_or(lowest)
            }
        }
    }
}

/// Solver parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Anchor corner selection
    pub anchor: AnchorSelection,
    /// Pattern searched for in the stitched image
    pub pattern: Pattern,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            anchor: AnchorSelection::default(),
            pattern: Pattern::sea_monster(),
        }
    }
}

/// Everything computed for one puzzle
#[derive(Debug, Clone)]
pub struct Solution {
    /// Corner tile ids in ascending order
    pub corners: [TileId; 4],
    /// Product of the corner ids
    pub corner_product: u64,
    /// Corner placed top-left
    pub anchor: TileId,
    /// Oriented tile placement
    pub mosaic: Mosaic,
    /// Stitched image in the anchor's orientation
    pub image: Grid,
    /// Pattern search and roughness figures
    pub roughness: Roughness,
}

impl Solution {
    /// Stitched image turned to the orientation the pattern search chose
    pub fn oriented_image(&self) -> Grid {
        self.roughness.search.orientation.oriented(&self.image)
    }
}

/// Runs the full pipeline over a tile set
#[derive(Debug, Clone, Default)]
pub struct JigsawSolver {
    config: SolverConfig,
}

impl JigsawSolver {
    /// Create a solver
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solver parameters
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve one puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile count is not square or there are not exactly four corners
    /// - The adjacency graph cannot be assembled into a consistent mosaic
    /// - The corner product or roughness computation overflows
    pub fn solve(&self, mut tiles: TileSet) -> Result<Solution> {
        resolve_borders(&mut tiles);
        let corners = find_corners(&tiles)?;
        let corner_product = corner_product(&corners)?;
        log::debug!("corners {corners:?}, product {corner_product}");

        let anchor = self.config.anchor.select(&corners);
        let mosaic = assemble(&tiles, anchor)?;
        let image = stitch(&mosaic);
        let roughness = water_roughness(&image, &self.config.pattern)?;
        log::debug!(
            "{} pattern matches with image {}, roughness {}",
            roughness.search.matches,
            roughness.search.orientation,
            roughness.value
        );

        Ok(Solution {
            corners,
            corner_product,
            anchor,
            mosaic,
            image,
            roughness,
        })
    }
}
