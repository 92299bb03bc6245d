use crate::raytracer::config::ImageConfig;
use crate::raytracer::ray::{Point3, Ray};
use glam::DVec3;

/// Pinhole camera at the origin looking down `-z`.
///
/// `viewport_v` points down so that raster row 0 is the top of the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub center: Point3,
    pub viewport_u: DVec3,
    pub viewport_v: DVec3,
    pub pixel_delta_u: DVec3,
    pub pixel_delta_v: DVec3,
    pub pixel00_loc: Point3,
}

impl Camera {
    pub fn new(image: &ImageConfig, viewport_height: f64, focal_length: f64) -> Self {
        let viewport_width = viewport_height * (image.width as f64 / image.height as f64);

        let center = Point3::ZERO;
        let viewport_u = DVec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = DVec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image.width as f64;
        let pixel_delta_v = viewport_v / image.height as f64;

        let viewport_upper_left =
            center - DVec3::new(0.0, 0.0, focal_length) - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Camera {
            center,
            viewport_u,
            viewport_v,
            pixel_delta_u,
            pixel_delta_v,
            pixel00_loc,
        }
    }

    /// World-space center of pixel `(i, j)`.
    pub fn pixel_center(&self, i: u32, j: u32) -> Point3 {
        self.pixel00_loc + (i as f64 * self.pixel_delta_u) + (j as f64 * self.pixel_delta_v)
    }

    /// Ray from the camera center through the center of pixel `(i, j)`.
    ///
    /// The direction is never zero as long as the focal length is positive.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let pixel_center = self.pixel_center(i, j);
        Ray::new(self.center, pixel_center - self.center)
    }
}
