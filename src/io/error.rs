//! Error types and context management for tile assembly operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::TileId;

/// Main error type for all tile assembly operations
#[derive(Debug)]
pub enum JigsawError {
    /// A tile grid is not square, too small, or inconsistent with its peers
    MalformedTile {
        /// Tile the problem was found in, when known
        tile_id: Option<TileId>,
        /// Description of what's wrong with the tile
        reason: String,
    },

    /// Border resolution did not produce a square mosaic with four corners
    ///
    /// `corners` is `None` when the tile count itself is not a perfect
    /// square and corner classification never ran.
    InvalidCornerCount {
        /// Number of tiles with exactly two matched borders
        corners: Option<usize>,
        /// Total number of tiles in the collection
        tiles: usize,
    },

    /// Mosaic assembly could not place a tile consistently with its neighbors
    TileOrientation {
        /// Tile that could not be placed
        tile_id: TileId,
        /// Mosaic row being filled
        row: usize,
        /// Mosaic column being filled
        col: usize,
        /// Which consistency check failed
        reason: String,
    },

    /// Puzzle text could not be parsed
    InvalidInput {
        /// One-based line number of the offending line
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save an exported image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for JigsawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTile {
                tile_id: Some(id),
                reason,
            } => write!(f, "Malformed tile {id}: {reason}"),
            Self::MalformedTile {
                tile_id: None,
                reason,
            } => write!(f, "Malformed tile: {reason}"),
            Self::InvalidCornerCount {
                corners: Some(corners),
                tiles,
            } => {
                write!(
                    f,
                    "Expected 4 corner tiles but found {corners} among {tiles} tiles"
                )
            }
            Self::InvalidCornerCount {
                corners: None,
                tiles,
            } => {
                write!(f, "Tile count {tiles} does not form a square mosaic")
            }
            Self::TileOrientation {
                tile_id,
                row,
                col,
                reason,
            } => {
                write!(
                    f,
                    "Cannot place tile {tile_id} at mosaic position ({row}, {col}): {reason}"
                )
            }
            Self::InvalidInput { line, reason } => {
                write!(f, "Invalid input at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for JigsawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile assembly results
pub type Result<T> = std::result::Result<T, JigsawError>;

/// Attaches the owning tile id to errors raised while building its grid
pub trait WithTile<T> {
    /// Fill in the tile id of a `MalformedTile` error that lacks one
    ///
    /// # Errors
    ///
    /// Propagates the original error, annotated when applicable
    fn with_tile(self, tile_id: TileId) -> Result<T>;
}

impl<T, E> WithTile<T> for std::result::Result<T, E>
where
    E: Into<JigsawError>,
{
    fn with_tile(self, tile_id: TileId) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let JigsawError::MalformedTile { tile_id: slot, .. } = &mut error {
                slot.get_or_insert(tile_id);
            }
            error
        })
    }
}

impl From<image::ImageError> for JigsawError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for JigsawError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> JigsawError {
    JigsawError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> JigsawError {
    JigsawError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error without a tile id
pub fn malformed_tile(reason: &impl ToString) -> JigsawError {
    JigsawError::MalformedTile {
        tile_id: None,
        reason: reason.to_string(),
    }
}

/// Create a tile orientation error for a mosaic position
pub fn orientation_error(
    tile_id: TileId,
    (row, col): (usize, usize),
    reason: &impl ToString,
) -> JigsawError {
    JigsawError::TileOrientation {
        tile_id,
        row,
        col,
        reason: reason.to_string(),
    }
}
