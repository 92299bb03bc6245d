use crate::raytracer::Color;
use std::io::{self, Write};

/// A rendered raster, pixels stored row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub data: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32, data: Vec<Color>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.data[(y * self.width + x) as usize]
    }

    /// Writes the image as plain-text PPM: a `P3` header, then one
    /// `r g b` line per pixel.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;
        for color in &self.data {
            write_color(out, *color)?;
        }
        out.flush()
    }
}

/// Channel value in `[0, 1]` to a byte. Out-of-range values saturate.
pub fn to_byte(channel: f64) -> u8 {
    (255.999 * channel) as u8
}

pub fn write_color<W: Write>(out: &mut W, color: Color) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        to_byte(color.x),
        to_byte(color.y),
        to_byte(color.z)
    )
}

/// Saves the image through the `image` crate; the format follows the
/// file extension.
pub fn save_image(img: &Image, path: &str) -> Result<(), String> {
    let mut imgbuf = image::RgbImage::new(img.width, img.height);
    for y in 0..img.height {
        for x in 0..img.width {
            let color = img.pixel(x, y);
            imgbuf.put_pixel(
                x,
                y,
                image::Rgb([to_byte(color.x), to_byte(color.y), to_byte(color.z)]),
            );
        }
    }
    imgbuf.save(path).map_err(|e| e.to_string())
}
