//! PROGMEM array code generation.
//!
//! Serializes a quantized grid into the C declaration the firmware build
//! embeds. The emitted byte sequence is a wire contract shared with the
//! display code: row-major traversal, one decimal literal per cell, and the
//! exact header/terminator tokens below. Golden tests assert the literal
//! output byte for byte.

use thiserror::Error;

use crate::grid::LevelGrid;
use crate::QuantizeConfig;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The declaration name is not a legal C identifier.
    #[error("Invalid array identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// A generated byte-array declaration.
///
/// Holds the declaration identifier and the emitted values in row-major
/// order; `render` produces the exact header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgmemArray {
    name: String,
    values: Vec<u8>,
}

impl ProgmemArray {
    /// The declaration identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emitted values in row-major order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of emitted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the declaration as C source text.
    ///
    /// Format: `const uint8_t <name>[] PROGMEM = { <v0>, <v1>, ..., };\n`.
    /// Single line, every value followed by a comma and a space, trailing
    /// comma before the closing brace.
    pub fn render(&self) -> String {
        // "255, " is the widest a value gets
        let mut out = String::with_capacity(40 + self.name.len() + self.values.len() * 5);
        out.push_str("const uint8_t ");
        out.push_str(&self.name);
        out.push_str("[] PROGMEM = { ");
        for value in &self.values {
            out.push_str(&value.to_string());
            out.push_str(", ");
        }
        out.push_str("};\n");
        out
    }
}

/// Encode a quantized grid as a named PROGMEM byte-array declaration.
///
/// Walks the grid in raster order (rows top-to-bottom, columns left-to-right)
/// and emits one value per cell. With `cfg.invert` set, each level is flipped
/// to `(levels - 1) - level`: the panel drives a pixel dark on a low output
/// level, so the darkest sampled intensity must emit the highest value.
///
/// # Arguments
///
/// * `grid` - The quantized grid to serialize
/// * `cfg` - Panel configuration (supplies the inversion flag)
/// * `name` - Identifier for the generated array
///
/// # Errors
///
/// Returns `CodegenError::InvalidIdentifier` if `name` is not a legal C
/// identifier.
pub fn encode_array(
    grid: &LevelGrid,
    cfg: &QuantizeConfig,
    name: &str,
) -> Result<ProgmemArray, CodegenError> {
    if !is_c_identifier(name) {
        return Err(CodegenError::InvalidIdentifier(name.to_string()));
    }
    debug_assert_eq!(cfg.levels, grid.levels(), "Config/grid level mismatch");

    let max_level = (grid.levels() - 1) as u8;
    let values = grid
        .samples()
        .iter()
        .map(|&level| if cfg.invert { max_level - level } else { level })
        .collect();

    Ok(ProgmemArray {
        name: name.to_string(),
        values,
    })
}

/// Check whether `name` is a legal C identifier.
fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating a grid with in-range samples.
    fn grid_strategy() -> impl Strategy<Value = LevelGrid> {
        (1u32..=16, 1u32..=16, 2u32..=256).prop_flat_map(|(w, h, levels)| {
            let size = (w as usize) * (h as usize);
            prop::collection::vec(0..levels as u16, size..=size).prop_map(move |samples| {
                let samples = samples.into_iter().map(|s| s as u8).collect();
                LevelGrid::new(w, h, levels, samples)
            })
        })
    }

    proptest! {
        /// Property: emitted(i) + level(i) == levels - 1 for every cell.
        #[test]
        fn prop_inversion_law(grid in grid_strategy()) {
            let cfg = QuantizeConfig::new(grid.width(), grid.height(), grid.levels());
            let array = encode_array(&grid, &cfg, "img").unwrap();

            let max = (grid.levels() - 1) as u16;
            for (&emitted, &level) in array.values().iter().zip(grid.samples()) {
                prop_assert_eq!(emitted as u16 + level as u16, max);
            }
        }

        /// Property: emitted values stay within [0, levels - 1].
        #[test]
        fn prop_emitted_in_bounds(grid in grid_strategy()) {
            let cfg = QuantizeConfig::new(grid.width(), grid.height(), grid.levels());
            let array = encode_array(&grid, &cfg, "img").unwrap();

            prop_assert!(array.values().iter().all(|&v| (v as u32) < grid.levels()));
        }

        /// Property: the emitted sequence has one value per grid cell.
        #[test]
        fn prop_length_matches_cells(grid in grid_strategy()) {
            let cfg = QuantizeConfig::new(grid.width(), grid.height(), grid.levels());
            let array = encode_array(&grid, &cfg, "img").unwrap();

            prop_assert_eq!(array.len(), grid.cell_count());
        }

        /// Property: rendering is deterministic.
        #[test]
        fn prop_render_deterministic(grid in grid_strategy()) {
            let cfg = QuantizeConfig::new(grid.width(), grid.height(), grid.levels());
            let array = encode_array(&grid, &cfg, "img").unwrap();

            prop_assert_eq!(array.render(), array.render());
        }

        /// Property: rendered text always matches the declaration grammar.
        #[test]
        fn prop_render_shape(grid in grid_strategy()) {
            let cfg = QuantizeConfig::new(grid.width(), grid.height(), grid.levels());
            let array = encode_array(&grid, &cfg, "img").unwrap();
            let text = array.render();

            prop_assert!(text.starts_with("const uint8_t img[] PROGMEM = { "), "unexpected prefix");
            prop_assert!(text.ends_with(", };\n"), "unexpected suffix");
            prop_assert_eq!(text.matches(", ").count(), array.len());
        }
    }
}
