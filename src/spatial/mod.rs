//! Spatial data structures and orientation handling
//!
//! This module contains spatial-related functionality including:
//! - Square pixel grids and their transforms
//! - The eight orientations and the trait applying them
//! - Tiles with border signatures and neighbor tracking
//! - The tile collection of a puzzle

/// Square pixel grids with rotation, reflection and trimming
pub mod grid;
/// Orientation enumeration over rotations and reflection
pub mod orientation;
/// Tiles, border signatures and neighbor tracking
pub mod tiles;
/// Id-keyed tile collection
pub mod tileset;

pub use grid::{Grid, Pixel};
pub use orientation::{ORIENTATIONS, Orientable, Orientation};
pub use tiles::{Border, Side, Signature, Tile, TileId};
pub use tileset::TileSet;
