//! Lcdforge Core - Grayscale panel conversion library
//!
//! This crate provides the conversion pipeline for turning a grayscale
//! photograph into firmware data for a monochrome LCD panel: grayscale
//! decoding, intensity quantization, PROGMEM array code generation, and
//! preview rendering.

pub mod codegen;
pub mod decode;
pub mod grid;
pub mod preview;
pub mod quantize;

pub use codegen::{encode_array, CodegenError, ProgmemArray};
pub use decode::{decode_grayscale, DecodeError};
pub use grid::LevelGrid;
pub use preview::render_preview;
pub use quantize::{quantize, FilterType, QuantizeError};

/// Width of the reference panel in pixels.
pub const PANEL_WIDTH: u32 = 160;

/// Height of the reference panel in pixels.
pub const PANEL_HEIGHT: u32 = 160;

/// Number of gray shades the reference panel can display.
pub const PANEL_LEVELS: u32 = 32;

/// Configuration for the quantization pipeline.
///
/// Describes the target panel: grid dimensions, how many gray levels the
/// hardware can display, whether emitted values are inverted for the panel's
/// drive polarity, and which resampling filter scales the input down to the
/// grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeConfig {
    /// Target grid width in pixels.
    pub width: u32,
    /// Target grid height in pixels.
    pub height: u32,
    /// Number of intensity levels (2 to 256).
    pub levels: u32,
    /// Invert emitted values for panels where the low drive level is "on".
    pub invert: bool,
    /// Resampling filter used to scale the input to the grid.
    pub filter: FilterType,
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            levels: PANEL_LEVELS,
            invert: true,
            filter: FilterType::default(),
        }
    }
}

impl QuantizeConfig {
    /// Create a configuration for a panel of the given geometry, keeping the
    /// default inversion and filter settings.
    pub fn new(width: u32, height: u32, levels: u32) -> Self {
        Self {
            width,
            height,
            levels,
            ..Self::default()
        }
    }

    /// Width of one quantization bucket in native intensity units.
    ///
    /// With 32 levels this is 8.0: levels partition [0, 255] into equal
    /// buckets of width 8.
    pub fn step_width(&self) -> f32 {
        256.0 / self.levels as f32
    }

    /// Total number of grid cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check the configuration invariants: non-zero dimensions and a level
    /// count that fits byte-sized samples.
    pub fn validate(&self) -> Result<(), QuantizeError> {
        if self.width == 0 || self.height == 0 {
            return Err(QuantizeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.levels < 2 || self.levels > 256 {
            return Err(QuantizeError::InvalidLevelCount(self.levels));
        }
        Ok(())
    }
}
