//! Image resizing for avatar rendering.
//!
//! All functions return new `DecodedImage` instances without modifying the input.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if a target dimension is zero and
/// `DecodeError::CorruptedFile` if the source buffer does not match its
/// declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let view = image
        .as_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&view, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgba_image(resized))
}

/// Resize an image so neither side exceeds `max_side`, preserving aspect ratio.
///
/// Images already within the bound are returned unchanged (never upscaled).
pub fn resize_to_fit(
    image: &DecodedImage,
    max_side: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_side == 0 {
        return Err(DecodeError::EmptyImage {
            width: 0,
            height: 0,
        });
    }

    let (width, height) = fit_within(image.width, image.height, max_side);
    resize(image, width, height, filter)
}

/// Compute output dimensions for a maximum side length.
///
/// `scale = min(max_side / width, max_side / height, 1.0)` and each side is
/// `max(1, round(side * scale))`.
pub fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let max_side = f64::from(max_side);
    let scale = (max_side / f64::from(width))
        .min(max_side / f64::from(height))
        .min(1.0);

    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
                pixels.push(255);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Bilinear).unwrap();

        assert_eq!(resized.pixels, img.pixels);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_mismatched_buffer_error() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 12],
        };
        assert!(matches!(
            resize(&img, 5, 5, FilterType::Nearest),
            Err(DecodeError::CorruptedFile(_))
        ));
    }

    #[test]
    fn test_resize_to_fit_landscape() {
        let img = create_test_image(1024, 512);
        let resized = resize_to_fit(&img, 64, FilterType::Bilinear).unwrap();

        assert_eq!((resized.width, resized.height), (64, 32));
    }

    #[test]
    fn test_resize_to_fit_already_smaller() {
        let img = create_test_image(20, 10);
        let resized = resize_to_fit(&img, 64, FilterType::Bilinear).unwrap();

        assert_eq!((resized.width, resized.height), (20, 10));
    }

    #[test]
    fn test_resize_to_fit_zero_max_side_error() {
        let img = create_test_image(100, 50);
        assert!(resize_to_fit(&img, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_fit_within_square() {
        assert_eq!(fit_within(1024, 1024, 64), (64, 64));
    }

    #[test]
    fn test_fit_within_portrait() {
        assert_eq!(fit_within(300, 600, 64), (32, 64));
    }

    #[test]
    fn test_fit_within_rounds() {
        // 4000 * 64 / 6000 = 42.67
        assert_eq!(fit_within(6000, 4000, 64), (64, 43));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(10, 5, 64), (10, 5));
    }

    #[test]
    fn test_fit_within_extreme_aspect_keeps_one_pixel() {
        assert_eq!(fit_within(10_000, 1, 16), (16, 1));
        assert_eq!(fit_within(1, 10_000, 16), (1, 16));
    }

    #[test]
    fn test_fit_within_zero_input() {
        assert_eq!(fit_within(0, 0, 64), (0, 0));
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!((resized.width, resized.height), (50, 25));
        }
    }
}
