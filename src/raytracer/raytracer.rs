use crate::imgoutput::Image;
use crate::raytracer::config::Config;
use crate::raytracer::shading::{
    adjust_brightness, blend, quadrant_blend, ray_color, Color, ShadingMode, BLACK, LIGHT_BLUE,
    WHITE,
};

use rayon::prelude::*;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, info};

pub struct RayTracer {
    config: Config,
}

impl RayTracer {
    pub fn new(config: Config) -> Self {
        RayTracer { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Color of pixel `(i, j)` under the configured shading mode.
    pub fn shade_pixel(&self, i: u32, j: u32) -> Color {
        let image = &self.config.image;
        let ray = self.config.camera.get_ray(i, j);
        let base_color = ray_color(&ray, WHITE, LIGHT_BLUE);
        match self.config.mode {
            ShadingMode::Gradient => base_color,
            ShadingMode::Brightness => adjust_brightness(&ray, base_color),
            ShadingMode::Blend => blend(base_color, BLACK, i, j, image.width, image.height),
            ShadingMode::Quadrant => quadrant_blend(i, j, image.width, image.height),
        }
    }

    /// Renders every scanline, rows in parallel, and reassembles them top
    /// to bottom.
    pub fn render(&self) -> Image {
        let image = &self.config.image;
        info!(
            width = image.width,
            height = image.height,
            aspect_ratio = image.aspect_ratio,
            mode = self.config.mode.name(),
            "starting render"
        );

        let remaining = AtomicU32::new(image.height);
        let rows: Vec<Vec<Color>> = (0..image.height)
            .into_par_iter()
            .map(|j| {
                let row = self.render_row(j);
                let left = remaining.fetch_sub(1, Ordering::Relaxed) - 1;
                debug!(scanlines_remaining = left, "scanline {j} done");
                row
            })
            .collect();

        let mut data = Vec::with_capacity(image.pixel_count());
        for row in rows {
            data.extend(row);
        }
        info!("render done");
        Image::new(image.width, image.height, data)
    }

    /// Renders and writes the result as a P3 stream.
    pub fn render_to<W: Write>(&self, out: &mut W) -> io::Result<Image> {
        let image = self.render();
        image.write_ppm(out)?;
        Ok(image)
    }

    fn render_row(&self, j: u32) -> Vec<Color> {
        (0..self.config.image.width)
            .map(|i| self.shade_pixel(i, j))
            .collect()
    }
}
