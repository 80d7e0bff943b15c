use business::domain::errors::FetchError;
use business::domain::product::model::ImageBuffer;
use business::domain::product::services::ImageDecoder;

/// Decodes PNG, JPEG, GIF, WebP and BMP bodies into RGBA8 pixels.
///
/// The format is sniffed from the bytes; no content type is consulted.
pub struct RasterImageDecoder;

impl ImageDecoder for RasterImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<ImageBuffer, FetchError> {
        let decoded = image::load_from_memory(bytes).map_err(|e| {
            tracing::warn!(target: "product_screen", error = %e, len = bytes.len(), "image decoding failed");
            FetchError::ImageDecode
        })?;

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(ImageBuffer::new(rgba.into_raw(), width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn should_decode_png_into_rgba_pixels() {
        let png = encode(
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255]))),
            ImageFormat::Png,
        );

        let image = RasterImageDecoder.decode(&png).unwrap();

        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels().len(), 3 * 2 * 4);
        assert_eq!(&image.pixels()[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn should_decode_jpeg_dimensions() {
        let jpeg = encode(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 8, Rgb([10, 20, 30]))),
            ImageFormat::Jpeg,
        );

        let image = RasterImageDecoder.decode(&jpeg).unwrap();

        assert_eq!((image.width(), image.height()), (16, 8));
        assert_eq!(image.pixels().len(), 16 * 8 * 4);
    }

    #[test]
    fn should_fail_with_image_decode_when_bytes_are_text() {
        let result = RasterImageDecoder.decode(b"<html>404</html>");
        assert!(matches!(result, Err(FetchError::ImageDecode)));
    }

    #[test]
    fn should_fail_with_image_decode_when_body_is_empty() {
        let result = RasterImageDecoder.decode(&[]);
        assert!(matches!(result, Err(FetchError::ImageDecode)));
    }

    #[test]
    fn should_fail_with_image_decode_when_png_is_truncated() {
        let png = encode(
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]))),
            ImageFormat::Png,
        );

        let result = RasterImageDecoder.decode(&png[..png.len() / 2]);

        assert!(matches!(result, Err(FetchError::ImageDecode)));
    }
}
