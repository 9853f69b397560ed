//! Preview rendering for quantized grids.
//!
//! Reconstructs the posterized image an operator can eyeball before flashing
//! the generated array. Levels are pre-inversion: the preview shows the
//! sampled intensities, not the panel drive values.

use image::{GrayImage, Luma};

use crate::grid::LevelGrid;

/// Render a quantized grid back to an 8-bit grayscale image.
///
/// Each level maps to the floor of its intensity bucket
/// (`level * 256 / levels`; with 32 levels, level×8), so the preview shows
/// exactly the posterization the panel will display.
pub fn render_preview(grid: &LevelGrid) -> GrayImage {
    let levels = grid.levels();
    GrayImage::from_fn(grid.width(), grid.height(), |x, y| {
        let level = grid.get(x, y) as u32;
        Luma([(level * 256 / levels) as u8])
    })
}
