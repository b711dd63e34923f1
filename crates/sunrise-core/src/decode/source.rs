//! Decoding of user-supplied image files with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an image file from bytes, applying EXIF orientation correction.
///
/// The format is guessed from the content, so any raster format enabled on
/// the `image` crate (JPEG, PNG, WebP, GIF) is accepted. Animated inputs
/// yield their first frame.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a known format.
/// Returns `DecodeError::CorruptedFile` if decoding fails part way.
/// Returns `DecodeError::EmptyImage` if the image has no pixels.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    let oriented = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgba_image(oriented.into_rgba8()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_decode_png() {
        let bytes = png_bytes(gradient_rgba(40, 20));
        let img = decode_image(&bytes).unwrap();

        assert_eq!(img.width, 40);
        assert_eq!(img.height, 20);
        assert_eq!(img.pixels.len(), 40 * 20 * 4);
    }

    #[test]
    fn test_decode_png_keeps_alpha() {
        let mut src = gradient_rgba(4, 4);
        src.put_pixel(0, 0, image::Rgba([10, 20, 30, 0]));
        let img = decode_image(&png_bytes(src)).unwrap();

        assert_eq!(&img.pixels[0..4], &[10, 20, 30, 0]);
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = jpeg_bytes(noise_rgb(33, 17));
        let img = decode_image(&bytes).unwrap();

        assert_eq!((img.width, img.height), (33, 17));
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(b"definitely not an image");
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(gradient_rgba(64, 64));
        let truncated = &bytes[..bytes.len() / 2];

        assert!(matches!(
            decode_image(truncated),
            Err(DecodeError::CorruptedFile(_))
        ));
    }

    #[test]
    fn test_orientation_without_exif() {
        let bytes = png_bytes(gradient_rgba(2, 2));
        assert_eq!(get_orientation(&bytes), Orientation::Normal);
        assert_eq!(get_orientation(b"garbage"), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_swaps_dimensions() {
        let img = DynamicImage::ImageRgba8(gradient_rgba(30, 10));

        let rotated = apply_orientation(img.clone(), Orientation::Rotate90CW);
        assert_eq!((rotated.width(), rotated.height()), (10, 30));

        let flipped = apply_orientation(img, Orientation::FlipHorizontal);
        assert_eq!((flipped.width(), flipped.height()), (30, 10));
    }
}
