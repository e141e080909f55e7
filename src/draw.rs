use crate::theme::Color;
use image::{Rgba, RgbaImage};

/// Pixel box, inclusive on both corners.
///
/// Coordinates are signed so layouts for odd sizes may spill past the
/// canvas; everything outside is clipped when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl BoundingBox {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        BoundingBox { x0, y0, x1, y1 }
    }

    /// Box spanning `side` pixels right and down from `(x, y)`
    pub fn square(x: i64, y: i64, side: i64) -> Self {
        BoundingBox::new(x, y, x + side, y + side)
    }

    /// Center pixel, rounded toward the top-left
    pub fn center(&self) -> (i64, i64) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }

    /// Ellipse membership, done in doubled coordinates so half-pixel
    /// centers stay exact. A zero radius collapses to the center line.
    fn ellipse_contains(&self, px: i64, py: i64) -> bool {
        let a2 = self.x1 - self.x0;
        let b2 = self.y1 - self.y0;
        let dx2 = 2 * px - (self.x0 + self.x1);
        let dy2 = 2 * py - (self.y0 + self.y1);
        dx2 * dx2 * b2 * b2 + dy2 * dy2 * a2 * a2 <= a2 * a2 * b2 * b2
    }

    /// Visible pixels of the box as `(x, y)` pairs
    fn pixels(&self, width: u32, height: u32) -> impl Iterator<Item = (i64, i64)> {
        let x_start = self.x0.max(0);
        let y_start = self.y0.max(0);
        let x_end = self.x1.min(width as i64 - 1);
        let y_end = self.y1.min(height as i64 - 1);
        (y_start..=y_end).flat_map(move |y| (x_start..=x_end).map(move |x| (x, y)))
    }
}

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Fill every pixel whose position satisfies `inside`
fn fill_where(
    img: &mut RgbaImage,
    bbox: BoundingBox,
    color: Color,
    inside: impl Fn(i64, i64) -> bool,
) {
    let color: Rgba<u8> = color.into();
    let (width, height) = img.dimensions();
    for (x, y) in bbox.pixels(width, height) {
        if inside(x, y) {
            put(img, x, y, color);
        }
    }
}

pub fn fill_rect(img: &mut RgbaImage, bbox: BoundingBox, color: Color) {
    fill_where(img, bbox, color, |_, _| true);
}

pub fn fill_ellipse(img: &mut RgbaImage, bbox: BoundingBox, color: Color) {
    fill_where(img, bbox, color, |x, y| bbox.ellipse_contains(x, y));
}

/// Lower half of the ellipse inscribed in `bbox`, center row included
pub fn fill_lower_half_ellipse(img: &mut RgbaImage, bbox: BoundingBox, color: Color) {
    fill_where(img, bbox, color, |x, y| {
        2 * y >= bbox.y0 + bbox.y1 && bbox.ellipse_contains(x, y)
    });
}

/// Rectangle with each corner cut to a quarter circle of `radius`
pub fn fill_rounded_rect(img: &mut RgbaImage, bbox: BoundingBox, radius: i64, color: Color) {
    let max_radius = (bbox.x1 - bbox.x0).min(bbox.y1 - bbox.y0) / 2;
    let r = radius.clamp(0, max_radius.max(0));
    let diameter = 2 * r;

    let top_left = BoundingBox::square(bbox.x0, bbox.y0, diameter);
    let top_right = BoundingBox::square(bbox.x1 - diameter, bbox.y0, diameter);
    let bottom_left = BoundingBox::square(bbox.x0, bbox.y1 - diameter, diameter);
    let bottom_right = BoundingBox::square(bbox.x1 - diameter, bbox.y1 - diameter, diameter);

    fill_where(img, bbox, color, |x, y| {
        let left = x < bbox.x0 + r;
        let right = x > bbox.x1 - r;
        let top = y < bbox.y0 + r;
        let bottom = y > bbox.y1 - r;
        match (left, right, top, bottom) {
            (true, _, true, _) => top_left.ellipse_contains(x, y),
            (_, true, true, _) => top_right.ellipse_contains(x, y),
            (true, _, _, true) => bottom_left.ellipse_contains(x, y),
            (_, true, _, true) => bottom_right.ellipse_contains(x, y),
            _ => true,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgba(255, 0, 0, 255);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn blank(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, CLEAR)
    }

    fn filled_count(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p.0[3] != 0).count()
    }

    #[test]
    fn test_rect_is_inclusive() {
        let mut img = blank(10);
        fill_rect(&mut img, BoundingBox::new(2, 3, 4, 5), RED);
        assert_eq!(filled_count(&img), 9);
        assert_eq!(*img.get_pixel(2, 3), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(4, 5), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(5, 5), CLEAR);
    }

    #[test]
    fn test_rect_clips_to_canvas() {
        let mut img = blank(4);
        fill_rect(&mut img, BoundingBox::new(-3, -3, 10, 10), RED);
        assert_eq!(filled_count(&img), 16);
    }

    #[test]
    fn test_small_circle_is_a_plus() {
        let mut img = blank(5);
        fill_ellipse(&mut img, BoundingBox::square(1, 1, 2), RED);
        assert_eq!(filled_count(&img), 5);
        assert_eq!(img.get_pixel(2, 2).0[3], 255);
        assert_eq!(img.get_pixel(1, 2).0[3], 255);
        assert_eq!(*img.get_pixel(1, 1), CLEAR);
    }

    #[test]
    fn test_degenerate_ellipse() {
        let mut img = blank(5);
        fill_ellipse(&mut img, BoundingBox::square(2, 2, 0), RED);
        assert_eq!(filled_count(&img), 1);
        assert_eq!(img.get_pixel(2, 2).0[3], 255);
    }

    #[test]
    fn test_lower_half_stays_below_center() {
        let mut img = blank(12);
        let bbox = BoundingBox::new(0, 0, 10, 10);
        fill_lower_half_ellipse(&mut img, bbox, RED);
        for y in 0..5 {
            for x in 0..12 {
                assert_eq!(*img.get_pixel(x, y), CLEAR, "pixel ({}, {})", x, y);
            }
        }
        assert_eq!(img.get_pixel(5, 5).0[3], 255);
        assert_eq!(img.get_pixel(5, 10).0[3], 255);
        assert_eq!(img.get_pixel(0, 5).0[3], 255);
        assert_eq!(*img.get_pixel(0, 10), CLEAR);
    }

    #[test]
    fn test_rounded_rect_corners_are_symmetric() {
        let mut img = blank(16);
        fill_rounded_rect(&mut img, BoundingBox::new(0, 0, 15, 15), 2, RED);
        for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15), (1, 0), (0, 1), (14, 15), (15, 14)] {
            assert_eq!(*img.get_pixel(x, y), CLEAR, "corner pixel ({}, {})", x, y);
        }
        for (x, y) in [(0, 2), (2, 0), (13, 0), (15, 13), (8, 8), (1, 1), (14, 14)] {
            assert_eq!(img.get_pixel(x, y).0[3], 255, "edge pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_rounded_rect_zero_radius_is_rect() {
        let mut img = blank(6);
        fill_rounded_rect(&mut img, BoundingBox::new(0, 0, 5, 5), 0, RED);
        assert_eq!(filled_count(&img), 36);
    }

    #[test]
    fn test_fill_overwrites() {
        let mut img = blank(6);
        fill_rect(&mut img, BoundingBox::new(0, 0, 5, 5), RED);
        fill_ellipse(&mut img, BoundingBox::square(1, 1, 2), Color::rgba(0, 0, 255, 128));
        assert_eq!(*img.get_pixel(2, 2), Rgba([0, 0, 255, 128]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
    }
}
