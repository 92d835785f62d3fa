//! Synthetic image builders for testing.

#![allow(clippy::cast_possible_truncation)]

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};

/// Builder for encoded test payloads.
///
/// Every method returns the encoded bytes, ready to be used as a request body.
pub struct SyntheticJpegBuilder;

impl SyntheticJpegBuilder {
    // === Valid inputs ===

    /// Creates a uniform RGB JPEG.
    #[must_use]
    pub fn rgb(width: u32, height: u32) -> Vec<u8> {
        Self::rgb_uniform(width, height, [200, 120, 90])
    }

    /// Creates an RGB JPEG filled with one color.
    #[must_use]
    pub fn rgb_uniform(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        encode(&DynamicImage::ImageRgb8(img), ImageFormat::Jpeg)
    }

    /// Creates an RGB JPEG with a diagonal color gradient.
    #[must_use]
    pub fn gradient(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let r = ((255 * x) / width.max(1)) as u8;
            let g = ((255 * y) / height.max(1)) as u8;
            Rgb([r, g, 255 - r / 2])
        });
        encode(&DynamicImage::ImageRgb8(img), ImageFormat::Jpeg)
    }

    // === Invalid inputs ===

    /// Creates a single-channel JPEG.
    #[must_use]
    pub fn grayscale(width: u32, height: u32) -> Vec<u8> {
        let img = GrayImage::from_pixel(width, height, Luma([128]));
        encode(&DynamicImage::ImageLuma8(img), ImageFormat::Jpeg)
    }

    /// Creates a four-channel CMYK JPEG.
    ///
    /// Decoders convert these to RGB, so only the frame header tells them
    /// apart from a regular color JPEG.
    #[must_use]
    pub fn cmyk(width: u16, height: u16) -> Vec<u8> {
        let pixels = [30_u8, 160, 90, 10].repeat(usize::from(width) * usize::from(height));
        let mut out = Vec::new();
        if let Err(e) = jpeg_encoder::Encoder::new(&mut out, 90).encode(
            &pixels,
            width,
            height,
            jpeg_encoder::ColorType::Cmyk,
        ) {
            panic!("failed to encode synthetic CMYK JPEG: {e}");
        }
        out
    }

    /// Creates a PNG, which the pipeline must reject.
    #[must_use]
    pub fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
        encode(&DynamicImage::ImageRgb8(img), ImageFormat::Png)
    }

    /// Creates a JPEG cut off right after its header.
    #[must_use]
    pub fn truncated() -> Vec<u8> {
        let mut bytes = Self::gradient(64, 64);
        bytes.truncate(16);
        bytes
    }

    /// Creates a body of `len` bytes that is not an image.
    #[must_use]
    pub fn garbage(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    if let Err(e) = image.write_to(&mut buf, format) {
        panic!("failed to encode synthetic {format:?}: {e}");
    }
    buf.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_magic() {
        let bytes = SyntheticJpegBuilder::rgb(8, 8);
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_cmyk_is_jpeg() {
        let bytes = SyntheticJpegBuilder::cmyk(8, 8);
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_png_magic() {
        let bytes = SyntheticJpegBuilder::png(8, 8);
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_truncated_is_short() {
        assert_eq!(SyntheticJpegBuilder::truncated().len(), 16);
    }
}
