//! In-memory decode and encode of raster images.
//!
//! Every image entering the compositor is normalized to RGBA8 here;
//! results leave as PNG bytes without touching the filesystem.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use super::ComposeError;

/// Decode image bytes and normalize to RGBA8.
///
/// Accepts any format the `image` crate can sniff; the upload page
/// restricts the picker to PNG but the decoder does not care.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, ComposeError> {
    let img = image::load_from_memory(bytes).map_err(ComposeError::Decode)?;
    Ok(img.to_rgba8())
}

/// Encode an RGBA image as PNG into a fresh buffer.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ComposeError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(ComposeError::Encode)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_rgba(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ComposeError::Decode(_)));
    }

    #[test]
    fn test_decode_empty_fails() {
        let err = decode_rgba(&[]).unwrap_err();
        assert!(matches!(err, ComposeError::Decode(_)));
    }

    #[test]
    fn test_rgb_png_normalized_to_rgba() {
        // Encode a 3-channel PNG, decode it back: alpha must be opaque
        let rgb = RgbImage::from_pixel(4, 2, Rgb([10, 20, 30]));
        let mut buf = Vec::new();
        let encoder = PngEncoder::new(&mut buf);
        encoder
            .write_image(rgb.as_raw(), 4, 2, ExtendedColorType::Rgb8)
            .unwrap();

        let rgba = decode_rgba(&buf).unwrap();
        assert_eq!(rgba.dimensions(), (4, 2));
        assert_eq!(rgba.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_encode_decode_preserves_pixels() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([200, 100, 50, 128]));
        let png = encode_png(&img).unwrap();
        let back = decode_rgba(&png).unwrap();
        assert_eq!(back, img);
    }
}
