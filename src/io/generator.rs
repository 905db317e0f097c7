//! Synthetic puzzle generation
//!
//! Builds a full image, plants non-overlapping sea monsters in it, cuts it
//! into tiles whose shared edges carry unique codes, and scrambles every
//! tile's orientation. The result is a well-formed puzzle with a known
//! answer, used for tests and benchmarks.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::analysis::patterns::Pattern;
use crate::io::configuration::{DEFAULT_SEED, GENERATED_ID_BASE, MIN_TILE_SIDE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Grid, ORIENTATIONS, Pixel, Tile, TileSet};

// Edge codes are framed by a leading filled and a trailing empty pixel, so
// no code is a palindrome and no code equals another code reversed
const CODE_FRAME_BITS: usize = 2;

/// Parameters of a generated puzzle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleSpec {
    /// Tiles per mosaic side
    pub tiles_per_side: usize,
    /// Side length of every tile, borders included
    pub tile_side: usize,
    /// Probability of a background pixel being filled
    pub fill_ratio: f64,
    /// Sea monsters planted in the image
    pub monsters: usize,
    /// Seed for background, placement and orientations
    pub seed: u64,
}

impl Default for PuzzleSpec {
    fn default() -> Self {
        Self {
            tiles_per_side: 3,
            tile_side: 10,
            fill_ratio: 0.1,
            monsters: 0,
            seed: DEFAULT_SEED,
        }
    }
}

impl PuzzleSpec {
    /// Side of the stitched image
    pub const fn image_side(&self) -> usize {
        self.tiles_per_side * self.tile_side.saturating_sub(2)
    }

    /// Number of distinct edges in the mosaic, outer edges included
    pub const fn edge_count(&self) -> usize {
        2 * self.tiles_per_side * (self.tiles_per_side + 1)
    }

    fn validate(&self) -> Result<()> {
        if self.tiles_per_side == 0 {
            return Err(invalid_parameter(
                "tiles_per_side",
                &self.tiles_per_side,
                &"must be positive",
            ));
        }
        if self.tile_side < MIN_TILE_SIDE + CODE_FRAME_BITS {
            return Err(invalid_parameter(
                "tile_side",
                &self.tile_side,
                &format!("must be at least {}", MIN_TILE_SIDE + CODE_FRAME_BITS),
            ));
        }
        let index_bits = self.tile_side - 2 - CODE_FRAME_BITS;
        let capacity = u32::try_from(index_bits)
            .ok()
            .and_then(|bits| 1_usize.checked_shl(bits))
            .unwrap_or(usize::MAX);
        if capacity < self.edge_count() {
            return Err(invalid_parameter(
                "tile_side",
                &self.tile_side,
                &format!(
                    "too small to give {} edges unique codes",
                    self.edge_count()
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.fill_ratio) {
            return Err(invalid_parameter(
                "fill_ratio",
                &self.fill_ratio,
                &"must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Generate a scrambled, well-formed puzzle
///
/// Tile ids are `1000 + row * tiles_per_side + col` in the unscrambled
/// layout, so the corner ids are known in advance.
///
/// # Errors
///
/// Returns `InvalidParameter` if the tile side cannot encode every edge
/// uniquely, the fill ratio is outside `[0, 1]`, or the monsters do not fit
pub fn generate_puzzle(spec: &PuzzleSpec) -> Result<TileSet> {
    spec.validate()?;
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let image = generate_image(spec, &mut rng)?;

    let k = spec.tiles_per_side;
    let inner = spec.tile_side - 2;
    let mut tiles = Vec::with_capacity(k * k);
    for tile_row in 0..k {
        for tile_col in 0..k {
            let edges = [
                edge_code(spec, tile_row * k + tile_col),
                edge_code(spec, vertical_edge(k, tile_row, tile_col)),
                edge_code(spec, (tile_row + 1) * k + tile_col),
                edge_code(spec, vertical_edge(k, tile_row, tile_col + 1)),
            ];
            let grid = Grid::from_fn(spec.tile_side, |row, col| {
                tile_pixel(&image, &edges, (tile_row * inner, tile_col * inner), row, col)
            });

            let id = GENERATED_ID_BASE + (tile_row * k + tile_col) as u64;
            let mut tile = Tile::new(id, grid)?;
            let orientation = ORIENTATIONS
                .get(rng.random_range(0..ORIENTATIONS.len()))
                .copied()
                .unwrap_or_default();
            orientation.apply(&mut tile);
            tiles.push(tile);
        }
    }

    log::debug!("generated {k}x{k} puzzle with {} monsters", spec.monsters);
    TileSet::new(tiles)
}

const fn vertical_edge(k: usize, tile_row: usize, col_line: usize) -> usize {
    (k + 1) * k + tile_row * (k + 1) + col_line
}

// Border pixels are empty at both ends, framed code in between
fn edge_code(spec: &PuzzleSpec, edge: usize) -> Vec<Pixel> {
    let index_bits = spec.tile_side - 2 - CODE_FRAME_BITS;
    let mut pixels = Vec::with_capacity(spec.tile_side);
    pixels.push(Pixel::Empty);
    pixels.push(Pixel::Filled);
    pixels.extend((0..index_bits).rev().map(|bit| Pixel::from((edge >> bit) & 1 == 1)));
    pixels.push(Pixel::Empty);
    pixels.push(Pixel::Empty);
    pixels
}

fn tile_pixel(
    image: &Grid,
    [top, left, bottom, right]: &[Vec<Pixel>; 4],
    (origin_row, origin_col): (usize, usize),
    row: usize,
    col: usize,
) -> Pixel {
    let last = top.len().saturating_sub(1);
    let border = if row == 0 {
        top.get(col)
    } else if row == last {
        bottom.get(col)
    } else if col == 0 {
        left.get(row)
    } else if col == last {
        right.get(row)
    } else {
        return image
            .get(origin_row + row - 1, origin_col + col - 1)
            .unwrap_or_default();
    };
    border.copied().unwrap_or_default()
}

fn generate_image(spec: &PuzzleSpec, rng: &mut StdRng) -> Result<Grid> {
    let side = spec.image_side();
    let background = Grid::from_fn(side, |_, _| Pixel::from(rng.random_bool(spec.fill_ratio)));

    let monster = Pattern::sea_monster();
    // Monsters go into disjoint slots with a one-pixel gap
    let slot_height = monster.rows() + 1;
    let slot_width = monster.cols() + 1;
    let mut slots: Vec<(usize, usize)> = (0..side / slot_height)
        .flat_map(|r| (0..side / slot_width).map(move |c| (r * slot_height, c * slot_width)))
        .collect();
    if spec.monsters > slots.len() {
        return Err(invalid_parameter(
            "monsters",
            &spec.monsters,
            &format!("only {} fit in a {side}x{side} image", slots.len()),
        ));
    }

    let planted: Vec<(usize, usize)> = (0..spec.monsters)
        .map(|_| slots.swap_remove(rng.random_range(0..slots.len())))
        .collect();
    let offsets: Vec<(usize, usize)> = monster.filled_offsets().collect();

    Ok(Grid::from_fn(side, |row, col| {
        let covered = planted.iter().any(|&(top, left)| {
            row >= top && col >= left && offsets.contains(&(row - top, col - left))
        });
        if covered {
            Pixel::Filled
        } else {
            background.get(row, col).unwrap_or_default()
        }
    }))
}

/// Render a tile set in the puzzle text format
pub fn render_puzzle(tiles: &TileSet) -> String {
    let mut text = String::new();
    for (index, tile) in tiles.iter().enumerate() {
        if index > 0 {
            text.push_str("\n\n");
        }
        text.push_str(&tile.to_string());
    }
    text.push('\n');
    text
}
