//! Jigsaw reassembly of square image tiles and sea monster search
//!
//! Tiles arrive scrambled in position, rotation and reflection. Their borders
//! are matched pairwise, the four corners identified, and the mosaic laid out
//! row by row from one corner. The tile interiors are stitched into a single
//! image which is then searched for a pattern in all eight orientations to
//! measure how much of the image is left over as rough water.

#![deny(unsafe_code)]

/// Border resolution, mosaic assembly, stitching and the solving pipeline
pub mod algorithm;
/// Pattern search over stitched images
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, orientations and tiles
pub mod spatial;

pub use io::error::{JigsawError, Result};
