//! Puzzle constants and runtime configuration defaults

/// Character for a filled ("rough water") pixel
pub const FILLED_SYMBOL: char = '#';
/// Character for an empty pixel
pub const EMPTY_SYMBOL: char = '.';

/// Sea monster search template
///
/// `#` cells must be filled, every other character is a wildcard.
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Tile grids below this size have no interior to contribute
/// Minimum tile side length
pub const MIN_TILE_SIDE: usize = 3;

/// Prefix of every tile header line in puzzle text
pub const TILE_HEADER_PREFIX: &str = "Tile ";

// Input discovery
/// Extension of puzzle files picked up from a directory target
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Side length in output pixels of one stitched image pixel
pub const PIXEL_SCALE: u32 = 4;
/// Export color for empty pixels
pub const WATER_RGBA: [u8; 4] = [16, 42, 92, 255];
/// Export color for filled pixels outside any pattern match
pub const ROUGH_WATER_RGBA: [u8; 4] = [96, 160, 220, 255];
/// Export color for filled pixels covered by a pattern match
pub const MONSTER_RGBA: [u8; 4] = [230, 80, 40, 255];

// Progress bar display settings
/// Minimum number of files before a batch progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Synthetic puzzle defaults
/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;
/// Id assigned to the top-left tile of a generated puzzle
pub const GENERATED_ID_BASE: u64 = 1000;
