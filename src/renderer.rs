use crate::constants::{colors, output};
use crate::draw::{self, BoundingBox};
use crate::preset::Preset;
use crate::theme::Color;
use image::RgbaImage;

/// Layout of the ghost glyph for one size and preset.
///
/// All values are pixels. Divisions truncate, which matches floor since
/// every operand is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: i64,
    pub corner_radius: i64,
    pub body_x: i64,
    pub body_y: i64,
    pub body_width: i64,
    pub body_height: i64,
    pub head_radius: i64,
    pub wave_count: i64,
    pub wave_width: i64,
    pub wave_height: i64,
    pub torso_top: i64,
    pub torso_bottom: i64,
    pub eye_size: i64,
    pub eye_y: i64,
    pub eye_spacing: i64,
    pub left_eye_x: i64,
    pub right_eye_x: i64,
}

impl Geometry {
    pub fn compute(size: u32, preset: &Preset) -> Self {
        let size_px = size as i64;
        let padding = preset.padding as i64;
        let wave_count = preset.wave_count.max(1) as i64;

        let body_width = (size as f64 * preset.body_width_ratio) as i64;
        let body_height = size_px - 2 * padding;
        let body_x = (size_px - body_width) / 2;
        let body_y = padding;

        let wave_width = body_width / wave_count;
        let wave_height = wave_width / 2;

        let body_main_height = body_height - wave_height;
        let head_radius = body_width / 2;

        let eye_size = (size as f64 * preset.eye_ratio) as i64;
        let eye_spacing = body_width / 3;

        Geometry {
            size: size_px,
            corner_radius: (size / output::CORNER_RADIUS_DIVISOR) as i64,
            body_x,
            body_y,
            body_width,
            body_height,
            head_radius,
            wave_count,
            wave_width,
            wave_height,
            torso_top: body_y + head_radius,
            torso_bottom: body_y + body_main_height,
            eye_size,
            eye_y: body_y + head_radius - eye_size,
            eye_spacing,
            left_eye_x: body_x + (body_width - eye_spacing) / 2 - eye_size,
            right_eye_x: body_x + (body_width + eye_spacing) / 2,
        }
    }

    pub fn background_box(&self) -> BoundingBox {
        BoundingBox::new(0, 0, self.size - 1, self.size - 1)
    }

    pub fn head_box(&self) -> BoundingBox {
        BoundingBox::square(self.body_x, self.body_y, self.body_width)
    }

    pub fn torso_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.body_x,
            self.torso_top,
            self.body_x + self.body_width,
            self.torso_bottom,
        )
    }

    /// One box per bump, left to right. Each box is centered on the torso's
    /// bottom row so only its lower half shows below the body.
    pub fn wave_boxes(&self) -> Vec<BoundingBox> {
        let wave_y = self.torso_bottom - self.wave_height;
        (0..self.wave_count)
            .map(|i| {
                let wave_x = self.body_x + i * self.wave_width;
                BoundingBox::new(
                    wave_x,
                    wave_y,
                    wave_x + self.wave_width,
                    wave_y + 2 * self.wave_height,
                )
            })
            .collect()
    }

    pub fn left_eye_box(&self) -> BoundingBox {
        BoundingBox::square(self.left_eye_x, self.eye_y, self.eye_size)
    }

    pub fn right_eye_box(&self) -> BoundingBox {
        BoundingBox::square(self.right_eye_x, self.eye_y, self.eye_size)
    }
}

/// Render the ghost glyph at `size` using the preset table.
pub fn render(size: u32, background: Color) -> RgbaImage {
    render_with_preset(size, &Preset::for_size(size), background)
}

/// Render with an explicit preset. Draw order matters: the torso hides
/// the head's lower half and the eyes cut through the body.
pub fn render_with_preset(size: u32, preset: &Preset, background: Color) -> RgbaImage {
    let geometry = Geometry::compute(size, preset);
    let mut img = RgbaImage::from_pixel(size, size, colors::TRANSPARENT.into());

    draw::fill_rounded_rect(
        &mut img,
        geometry.background_box(),
        geometry.corner_radius,
        background,
    );

    draw::fill_ellipse(&mut img, geometry.head_box(), colors::GHOST);
    draw::fill_rect(&mut img, geometry.torso_box(), colors::GHOST);

    for wave in geometry.wave_boxes() {
        draw::fill_lower_half_ellipse(&mut img, wave, colors::GHOST);
    }

    // Eyes reuse the background color
    draw::fill_ellipse(&mut img, geometry.left_eye_box(), background);
    draw::fill_ellipse(&mut img, geometry.right_eye_box(), background);

    img
}
