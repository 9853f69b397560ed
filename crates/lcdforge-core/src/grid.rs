//! Quantized raster grid produced by the quantizer.

/// A quantized image: a row-major grid of level samples.
///
/// Every sample is a bucket index in `[0, levels - 1]`. The grid is the
/// hand-off type between the quantizer and the code generator and is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    width: u32,
    height: u32,
    levels: u32,
    samples: Vec<u8>,
}

impl LevelGrid {
    /// Create a grid from raw level samples in row-major order
    /// (top-to-bottom, left-to-right).
    pub fn new(width: u32, height: u32, levels: u32, samples: Vec<u8>) -> Self {
        debug_assert_eq!(
            samples.len(),
            (width as usize) * (height as usize),
            "Sample buffer size mismatch"
        );
        debug_assert!(
            samples.iter().all(|&s| (s as u32) < levels),
            "Sample out of level range"
        );
        Self {
            width,
            height,
            levels,
            samples,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of levels the samples are quantized to.
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Level sample at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "Cell out of bounds");
        self.samples[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.samples.len()
    }

    /// Check if this is an empty grid.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
