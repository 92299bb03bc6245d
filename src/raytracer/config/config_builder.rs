use crate::raytracer::config::camera::Camera;
use crate::raytracer::config::image_config::ImageConfig;
use crate::raytracer::shading::ShadingMode;

use tracing::debug;

pub const DEFAULT_IMAGE_WIDTH: u32 = 400;
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 2.0;
pub const DEFAULT_FOCAL_LENGTH: f64 = 1.0;

/// Everything the renderer needs: raster, camera and shading mode.
///
/// Built once through [`ConfigBuilder`] and read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub image: ImageConfig,
    pub camera: Camera,
    pub mode: ShadingMode,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Collects render parameters, falling back to the fixed defaults
/// (400 px wide, 16:9, viewport height 2, focal length 1).
#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    width: u32,
    aspect_ratio: f64,
    viewport_height: f64,
    focal_length: f64,
    mode: ShadingMode,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            width: DEFAULT_IMAGE_WIDTH,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            focal_length: DEFAULT_FOCAL_LENGTH,
            mode: ShadingMode::default(),
        }
    }
}

impl ConfigBuilder {
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn mode(mut self, mode: ShadingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> Result<Config, String> {
        if self.width == 0 {
            return Err("Image width must be greater than zero".to_string());
        }
        check_positive("Aspect ratio", self.aspect_ratio)?;
        check_positive("Viewport height", self.viewport_height)?;
        // a zero focal length would put pixel (0, 0) on the camera center
        check_positive("Focal length", self.focal_length)?;

        let image = ImageConfig::new(self.width, self.aspect_ratio);
        let camera = Camera::new(&image, self.viewport_height, self.focal_length);
        debug!(
            width = image.width,
            height = image.height,
            mode = self.mode.name(),
            "configuration built"
        );
        Ok(Config {
            image,
            camera,
            mode: self.mode,
        })
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), String> {
    if !(value.is_finite() && value > 0.0) {
        return Err(format!("{name} must be a positive number, got {value}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.image, ImageConfig::new(400, 16.0 / 9.0));
        assert_eq!(config.camera, Camera::new(&config.image, 2.0, 1.0));
        assert_eq!(config.mode, ShadingMode::Gradient);
    }

    #[test]
    fn test_overrides() {
        let config = Config::builder()
            .width(2)
            .aspect_ratio(2.0)
            .viewport_height(4.0)
            .focal_length(0.5)
            .mode(ShadingMode::Quadrant)
            .build()
            .unwrap();
        assert_eq!(config.image.width, 2);
        assert_eq!(config.image.height, 1);
        assert_eq!(config.camera.viewport_v.y, -4.0);
        assert_eq!(config.camera.pixel00_loc.z, -0.5);
        assert_eq!(config.mode, ShadingMode::Quadrant);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(Config::builder().width(0).build().is_err());
    }

    #[test]
    fn test_non_positive_geometry_rejected() {
        assert!(Config::builder().aspect_ratio(0.0).build().is_err());
        assert!(Config::builder().aspect_ratio(f64::NAN).build().is_err());
        assert!(Config::builder().viewport_height(-2.0).build().is_err());
        assert!(Config::builder().focal_length(0.0).build().is_err());
        assert!(Config::builder().focal_length(f64::INFINITY).build().is_err());
    }

    #[test]
    fn test_check_positive_message() {
        let err = check_positive("Focal length", -1.0).unwrap_err();
        assert_eq!(err, "Focal length must be a positive number, got -1");
    }
}
