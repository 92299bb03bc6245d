use crate::raytracer::ray::Ray;
use glam::DVec3;

/// Linear RGB, nominally in `[0, 1]` per channel. Not clamped here.
pub type Color = DVec3;

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const LIGHT_BLUE: Color = Color::new(0.5, 0.7, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

pub const QUADRANT_BOTTOM_LEFT: Color = Color::new(1.0, 0.0, 0.0);
pub const QUADRANT_BOTTOM_RIGHT: Color = Color::new(0.0, 1.0, 0.0);
pub const QUADRANT_TOP_LEFT: Color = Color::new(0.0, 0.0, 1.0);
pub const QUADRANT_TOP_RIGHT: Color = Color::new(1.0, 1.0, 0.0);

/// Per-pixel color selection, chosen once before rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadingMode {
    #[default]
    Gradient,
    Brightness,
    Blend,
    Quadrant,
}

impl From<&str> for ShadingMode {
    /// Unknown names select the plain gradient.
    fn from(name: &str) -> Self {
        match name {
            "brightness" => ShadingMode::Brightness,
            "blend" => ShadingMode::Blend,
            "quadrant" => ShadingMode::Quadrant,
            _ => ShadingMode::Gradient,
        }
    }
}

impl ShadingMode {
    pub fn name(&self) -> &'static str {
        match self {
            ShadingMode::Gradient => "default",
            ShadingMode::Brightness => "brightness",
            ShadingMode::Blend => "blend",
            ShadingMode::Quadrant => "quadrant",
        }
    }
}

/// `(1 - t) * c1 + t * c2`
pub fn lerp(c1: Color, c2: Color, t: f64) -> Color {
    (1.0 - t) * c1 + t * c2
}

// Maps the normalized direction's y from [-1, 1] onto [0, 1].
fn vertical_factor(ray: &Ray) -> f64 {
    let unit_direction = ray.direction().normalize();
    0.5 * (unit_direction.y + 1.0)
}

// Pixel index scaled to [0, 1]; a single-pixel axis maps to 0.
fn normalized_coord(index: u32, extent: u32) -> f64 {
    if extent > 1 {
        index as f64 / (extent - 1) as f64
    } else {
        0.0
    }
}

/// Vertical gradient from `c1` (ray pointing straight down) to `c2`
/// (straight up). The ray direction must be non-zero.
pub fn ray_color(ray: &Ray, c1: Color, c2: Color) -> Color {
    lerp(c1, c2, vertical_factor(ray))
}

/// Scales `color` by the same vertical factor as [`ray_color`]: black for
/// rays pointing down, unchanged for rays pointing up.
pub fn adjust_brightness(ray: &Ray, color: Color) -> Color {
    vertical_factor(ray) * color
}

/// Diagonal gradient over the raster, `c1` at the top-left pixel and `c2`
/// at the bottom-right one.
pub fn blend(c1: Color, c2: Color, i: u32, j: u32, width: u32, height: u32) -> Color {
    let u = normalized_coord(i, width);
    let v = normalized_coord(j, height);
    lerp(c1, c2, (u + v) / 2.0)
}

/// Bilinear blend of the four `QUADRANT_*` corner colors. Row 0 is the top
/// of the image. A 1x1 raster yields the top-left color.
pub fn quadrant_blend(i: u32, j: u32, width: u32, height: u32) -> Color {
    let u = normalized_coord(i, width);
    let v = normalized_coord(j, height);
    (1.0 - u) * (1.0 - v) * QUADRANT_TOP_LEFT
        + u * (1.0 - v) * QUADRANT_TOP_RIGHT
        + (1.0 - u) * v * QUADRANT_BOTTOM_LEFT
        + u * v * QUADRANT_BOTTOM_RIGHT
}
