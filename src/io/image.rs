//! PNG export of stitched images with pattern matches highlighted

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;

use crate::io::configuration::{MONSTER_RGBA, PIXEL_SCALE, ROUGH_WATER_RGBA, WATER_RGBA};
use crate::io::error::{JigsawError, Result, invalid_parameter};
use crate::spatial::{Grid, Pixel};

// Picks the export color of one image pixel
fn pixel_color(image: &Grid, highlights: &Array2<bool>, row: usize, col: usize) -> Rgba<u8> {
    let filled = image.get(row, col).is_some_and(Pixel::is_filled);
    let highlighted = highlights.get((row, col)).copied().unwrap_or(false);
    match (filled, highlighted) {
        (true, true) => Rgba(MONSTER_RGBA),
        (true, false) => Rgba(ROUGH_WATER_RGBA),
        (false, _) => Rgba(WATER_RGBA),
    }
}

/// Render an image to an RGBA buffer, each pixel scaled to a square block
///
/// Filled pixels set in `highlights` get the monster color, other filled
/// pixels the rough water color, empty pixels the water color.
///
/// # Errors
///
/// Returns `InvalidParameter` if the highlight mask does not have the
/// image's shape or the scaled image is too large to address
pub fn render_image(image: &Grid, highlights: &Array2<bool>) -> Result<RgbaImage> {
    let side = image.side();
    if highlights.dim() != (side, side) {
        return Err(invalid_parameter(
            "highlights",
            &format!("{:?}", highlights.dim()),
            &format!("mask must be {side}x{side}"),
        ));
    }
    let scaled = u32::try_from(side)
        .ok()
        .and_then(|side| side.checked_mul(PIXEL_SCALE))
        .ok_or_else(|| invalid_parameter("image side", &side, &"too large to export"))?;

    Ok(ImageBuffer::from_fn(scaled, scaled, |x, y| {
        let row = (y / PIXEL_SCALE) as usize;
        let col = (x / PIXEL_SCALE) as usize;
        pixel_color(image, highlights, row, col)
    }))
}

/// Export an image as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The highlight mask does not match the image
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_mosaic_as_png(image: &Grid, highlights: &Array2<bool>, output_path: &Path) -> Result<()> {
    let buffer = render_image(image, highlights)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| JigsawError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| JigsawError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("exported {}", output_path.display());
    Ok(())
}
