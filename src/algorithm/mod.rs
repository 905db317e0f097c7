/// Row-major mosaic reconstruction
pub mod assembler;
/// Pipeline orchestration from tiles to results
pub mod executor;
/// Border matching and corner classification
pub mod resolver;
/// Concatenation of tile interiors
pub mod stitching;
