//! Decode and normalize stage.

#![allow(clippy::cast_possible_truncation)]

use candle_core::{Device, Tensor};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat};
use zune_jpeg::zune_core::bytestream::ZCursor;
use zune_jpeg::zune_core::colorspace::ColorSpace;
use zune_jpeg::zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use crate::domain::{InputError, NormalizedTensor, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};

/// Decodes JPEG bytes into the `(1, 224, 224, 3)` model input.
///
/// The image is resized with nearest-neighbor sampling to exactly 224x224,
/// ignoring its aspect ratio, and pixel values are cast to `f32` without
/// rescaling.
///
/// # Errors
///
/// Returns an [`InputError`] if the payload is empty, is not a decodable
/// JPEG, was not stored as 8-bit RGB (grayscale and CMYK/YCCK included), or
/// the tensor cannot be allocated.
pub fn preprocess_image(bytes: &[u8], device: &Device) -> Result<NormalizedTensor, InputError> {
    if bytes.is_empty() {
        return Err(InputError::EmptyPayload);
    }

    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)?;

    // The decoder converts CMYK and YCCK to RGB, so the stored layout is
    // only visible in the frame header.
    match source_color_space(bytes) {
        Some(ColorSpace::YCbCr | ColorSpace::RGB) | None => {}
        Some(other) => return Err(InputError::UnsupportedColor(format!("{other:?}"))),
    }

    let rgb = match decoded {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => return Err(InputError::UnsupportedColor(format!("{:?}", other.color()))),
    };

    let resized = imageops::resize(
        &rgb,
        INPUT_WIDTH as u32,
        INPUT_HEIGHT as u32,
        FilterType::Nearest,
    );
    let pixels: Vec<f32> = resized.into_raw().into_iter().map(f32::from).collect();

    Tensor::from_vec(pixels, (1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS), device)
        .map(NormalizedTensor::new)
        .map_err(InputError::Tensor)
}

/// Reads the color space recorded in the JPEG frame header.
fn source_color_space(bytes: &[u8]) -> Option<ColorSpace> {
    let options = DecoderOptions::default()
        .set_strict_mode(false)
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);
    let mut decoder = JpegDecoder::new_with_options(ZCursor::new(bytes), options);
    decoder.decode_headers().ok()?;
    decoder.input_colorspace()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, format).expect("encode");
        buf.into_inner()
    }

    fn rgb_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        encode(&DynamicImage::ImageRgb8(img), ImageFormat::Jpeg)
    }

    #[test]
    fn test_shape_is_fixed_for_any_dimensions() {
        for (w, h) in [(224, 224), (1, 1), (640, 480), (37, 901), (300, 17)] {
            let tensor = preprocess_image(&rgb_jpeg(w, h), &Device::Cpu)
                .unwrap_or_else(|e| panic!("{w}x{h} should normalize: {e}"));
            assert_eq!(tensor.dims(), &NormalizedTensor::SHAPE, "{w}x{h}");
        }
    }

    #[test]
    fn test_values_are_raw_pixel_range() {
        let img = RgbImage::from_pixel(16, 16, Rgb([250, 250, 250]));
        let bytes = encode(&DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);

        let tensor = preprocess_image(&bytes, &Device::Cpu).unwrap();
        let max = tensor
            .as_tensor()
            .flatten_all()
            .and_then(|t| t.max(0))
            .and_then(|t| t.to_scalar::<f32>())
            .unwrap();

        // JPEG is lossy, but no [0, 1] rescale is applied.
        assert!(max > 200.0, "max pixel was {max}");
    }

    #[test]
    fn test_empty_payload() {
        let err = preprocess_image(&[], &Device::Cpu).unwrap_err();
        assert!(matches!(err, InputError::EmptyPayload));
    }

    #[test]
    fn test_garbage_bytes() {
        let err = preprocess_image(b"definitely not a jpeg", &Device::Cpu).unwrap_err();
        assert!(matches!(err, InputError::Decode(_)));
    }

    #[test]
    fn test_truncated_jpeg() {
        let bytes = rgb_jpeg(64, 64);
        let err = preprocess_image(&bytes[..16], &Device::Cpu).unwrap_err();
        assert!(matches!(err, InputError::Decode(_)));
    }

    #[test]
    fn test_png_rejected() {
        let img = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
        let bytes = encode(&DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let err = preprocess_image(&bytes, &Device::Cpu).unwrap_err();
        assert!(matches!(err, InputError::Decode(_)));
    }

    #[test]
    fn test_grayscale_jpeg_rejected() {
        let img = GrayImage::from_pixel(32, 32, Luma([90]));
        let bytes = encode(&DynamicImage::ImageLuma8(img), ImageFormat::Jpeg);

        let err = preprocess_image(&bytes, &Device::Cpu).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedColor(_)));
        assert_eq!(err.status_code(), 400);
    }

    fn four_channel_jpeg(color_type: jpeg_encoder::ColorType) -> Vec<u8> {
        let pixels = [0_u8, 128, 255, 32].repeat(32 * 32);
        let mut out = Vec::new();
        jpeg_encoder::Encoder::new(&mut out, 90)
            .encode(&pixels, 32, 32, color_type)
            .expect("encode");
        out
    }

    #[test]
    fn test_cmyk_jpeg_rejected() {
        let bytes = four_channel_jpeg(jpeg_encoder::ColorType::Cmyk);

        let err = preprocess_image(&bytes, &Device::Cpu).unwrap_err();
        assert!(
            matches!(err, InputError::UnsupportedColor(ref layout) if layout == "CMYK"),
            "{err}"
        );
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_ycck_jpeg_rejected() {
        let bytes = four_channel_jpeg(jpeg_encoder::ColorType::CmykAsYcck);

        let err = preprocess_image(&bytes, &Device::Cpu).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedColor(_)), "{err}");
    }

    #[test]
    fn test_source_color_space_of_rgb_jpeg() {
        assert_eq!(source_color_space(&rgb_jpeg(8, 8)), Some(ColorSpace::YCbCr));
        assert_eq!(source_color_space(b"not a jpeg"), None);
    }
}
