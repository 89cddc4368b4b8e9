//! Caller-side crop helpers.
//!
//! The detection engine returns rectangles, not pixels, so it stays
//! independent of the imaging backend; these helpers do the actual slicing
//! for callers that work with the `image` crate.

use image::{DynamicImage, GenericImageView};

use crate::geometry::{AxisRect, Point};

/// Extract the pixels selected by `rect` as a half-open slice
/// (`top_left` inclusive, `bottom_right` exclusive), clamped to the image
/// bounds. A rect fully outside the image yields an empty crop.
pub fn crop_region(img: &DynamicImage, rect: &AxisRect) -> DynamicImage {
    let (width, height) = img.dimensions();

    let x0 = rect.top_left.x.clamp(0, width as i32) as u32;
    let y0 = rect.top_left.y.clamp(0, height as i32) as u32;
    let x1 = rect.bottom_right.x.clamp(x0 as i32, width as i32) as u32;
    let y1 = rect.bottom_right.y.clamp(y0 as i32, height as i32) as u32;

    img.crop_imm(x0, y0, x1 - x0, y1 - y0)
}

/// The four frame regions scanned for a date stamp when none was found in
/// the main pass: 10% bands at the top and bottom of the frame, each split
/// into a left and a right half.
pub fn margin_regions(frame_width: u32, frame_height: u32) -> [AxisRect; 4] {
    let w = frame_width as i32;
    let h = frame_height as i32;
    let band = (h as f32 * 0.1) as i32;
    let bottom = (h as f32 * 0.9) as i32;
    let half = (w as f32 * 0.5) as i32;

    [
        AxisRect::new(Point::new(0, 0), Point::new(half, band)),
        AxisRect::new(Point::new(half, 0), Point::new(w, band)),
        AxisRect::new(Point::new(0, bottom), Point::new(half, h)),
        AxisRect::new(Point::new(half, bottom), Point::new(w, h)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn blank(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
    }

    #[test]
    fn crop_uses_half_open_bounds() {
        let img = blank(40, 20);
        let rect = AxisRect::new(Point::new(5, 2), Point::new(15, 12));
        let crop = crop_region(&img, &rect);
        assert_eq!(crop.dimensions(), (10, 10));
    }

    #[test]
    fn crop_clamps_to_image_bounds() {
        let img = blank(40, 20);
        let rect = AxisRect::new(Point::new(-10, -5), Point::new(100, 100));
        let crop = crop_region(&img, &rect);
        assert_eq!(crop.dimensions(), (40, 20));
    }

    #[test]
    fn crop_outside_the_image_is_empty() {
        let img = blank(40, 20);
        let rect = AxisRect::new(Point::new(50, 30), Point::new(60, 40));
        let crop = crop_region(&img, &rect);
        assert_eq!(crop.dimensions(), (0, 0));
    }

    #[test]
    fn margin_regions_cover_the_corner_bands() {
        let regions = margin_regions(200, 100);
        assert_eq!(
            regions[0],
            AxisRect::new(Point::new(0, 0), Point::new(100, 10))
        );
        assert_eq!(
            regions[1],
            AxisRect::new(Point::new(100, 0), Point::new(200, 10))
        );
        assert_eq!(
            regions[2],
            AxisRect::new(Point::new(0, 90), Point::new(100, 100))
        );
        assert_eq!(
            regions[3],
            AxisRect::new(Point::new(100, 90), Point::new(200, 100))
        );
    }
}
