//! Intensity quantization pipeline.
//!
//! This module turns a decoded grayscale photograph into a panel-sized grid
//! of level samples in three steps:
//! - Min-max normalization of the intensity range
//! - Resampling to the target grid dimensions
//! - Bucketing each sample into one of the panel's gray levels

use image::imageops;
use image::{GrayImage, Luma};
use thiserror::Error;

use crate::grid::LevelGrid;
use crate::QuantizeConfig;

/// Errors that can occur during quantization.
#[derive(Debug, Error)]
pub enum QuantizeError {
    /// Target width or height is zero.
    #[error("Invalid target dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Level count outside the representable range.
    #[error("Invalid level count: {0} (expected 2 to 256)")]
    InvalidLevelCount(u32),

    /// The input image has no pixels.
    #[error("Input image is empty")]
    EmptyImage,
}

/// Filter type for the resampling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> imageops::FilterType {
        match self {
            FilterType::Nearest => imageops::FilterType::Nearest,
            FilterType::Bilinear => imageops::FilterType::Triangle,
            FilterType::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// Stretch the intensity range linearly so the darkest sample maps to 0 and
/// the brightest to 255.
///
/// Relative intensity ordering is preserved. A uniform image (min == max)
/// has no range to stretch and collapses to the constant 0; there is no
/// division by zero.
pub fn normalize(image: &GrayImage) -> GrayImage {
    let mut iter = image.pixels().map(|px| px.0[0]);
    let first = match iter.next() {
        Some(v) => v,
        None => return image.clone(),
    };
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min == max {
        return GrayImage::from_pixel(image.width(), image.height(), Luma([0]));
    }

    let range = (max - min) as f32;
    let mut out = image.clone();
    for px in out.pixels_mut() {
        px.0[0] = (((px.0[0] - min) as f32) * 255.0 / range).round() as u8;
    }
    out
}

/// Quantize a grayscale image to a panel-sized grid of level samples.
///
/// Runs the full pipeline: normalize the intensity range, resample to
/// `cfg.width` × `cfg.height` with the configured filter, then bucket each
/// sample into `level = floor(sample / step_width)`, clamped to
/// `[0, levels - 1]`. The clamp guards the top bucket edge against
/// floating-point rounding.
///
/// # Arguments
///
/// * `image` - The decoded grayscale input
/// * `cfg` - Target panel configuration
///
/// # Returns
///
/// A `LevelGrid` with `cfg.width * cfg.height` samples, each in
/// `[0, cfg.levels - 1]`.
///
/// # Errors
///
/// Returns `QuantizeError::InvalidDimensions` or
/// `QuantizeError::InvalidLevelCount` for a malformed configuration, and
/// `QuantizeError::EmptyImage` if the input has no pixels.
pub fn quantize(image: &GrayImage, cfg: &QuantizeConfig) -> Result<LevelGrid, QuantizeError> {
    cfg.validate()?;
    if image.width() == 0 || image.height() == 0 {
        return Err(QuantizeError::EmptyImage);
    }

    let normalized = normalize(image);
    let resized = imageops::resize(
        &normalized,
        cfg.width,
        cfg.height,
        cfg.filter.to_image_filter(),
    );

    let step = cfg.step_width();
    let max_level = cfg.levels - 1;
    let samples = resized
        .pixels()
        .map(|px| ((px.0[0] as f32 / step).floor() as u32).min(max_level) as u8)
        .collect();

    Ok(LevelGrid::new(cfg.width, cfg.height, cfg.levels, samples))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
