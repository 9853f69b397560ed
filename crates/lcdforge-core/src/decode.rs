//! Grayscale image decoding.
//!
//! The input photograph may arrive in any container the `image` crate
//! understands; everything is collapsed to an 8-bit single-channel buffer
//! before quantization, matching how the panel consumes it.

use std::io::Cursor;

use image::{GrayImage, ImageError, ImageReader};
use thiserror::Error;

/// Errors that can occur while decoding the input image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format: {0}")]
    InvalidFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Decode an image from raw file bytes into an 8-bit grayscale buffer.
///
/// Color inputs are converted to luma; grayscale inputs pass through with
/// their sample values unchanged.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes (format is sniffed from the content)
///
/// # Returns
///
/// A `GrayImage` holding one intensity sample per pixel.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not supported and
/// `DecodeError::CorruptedFile` if the data cannot be read as an image.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(err) => DecodeError::InvalidFormat(err.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(img.into_luma8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Luma, RgbImage};

    fn png_bytes(img: &GrayImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("PNG encoding failed");
        bytes
    }

    #[test]
    fn test_decode_gray_png_roundtrip() {
        let img = GrayImage::from_fn(3, 2, |x, y| Luma([(x * 50 + y * 100) as u8]));
        let decoded = decode_grayscale(&png_bytes(&img)).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        // Grayscale samples survive the container unchanged
        assert_eq!(decoded.get_pixel(0, 0).0, [0]);
        assert_eq!(decoded.get_pixel(2, 1).0, [200]);
    }

    #[test]
    fn test_decode_color_png_collapses_to_luma() {
        let mut bytes = Vec::new();
        let img = RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let decoded = decode_grayscale(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (2, 2));
        // White stays white under any luma weighting
        assert_eq!(decoded.get_pixel(0, 0).0, [255]);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_grayscale(&[0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_empty_bytes() {
        let result = decode_grayscale(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let img = GrayImage::from_pixel(4, 4, Luma([128]));
        let bytes = png_bytes(&img);

        let result = decode_grayscale(&bytes[0..20]);
        assert!(result.is_err());
    }
}
