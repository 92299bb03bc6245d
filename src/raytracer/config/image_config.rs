/// Raster dimensions derived from a requested width and aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
}

impl ImageConfig {
    /// Height is `width / aspect_ratio` truncated, never less than one row.
    pub fn new(width: u32, aspect_ratio: f64) -> Self {
        let height = ((width as f64 / aspect_ratio) as u32).max(1);
        ImageConfig {
            width,
            height,
            aspect_ratio,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_raster_is_400_by_225() {
        let image = ImageConfig::new(400, 16.0 / 9.0);
        assert_eq!(image.width, 400);
        assert_eq!(image.height, 225);
        assert_eq!(image.pixel_count(), 400 * 225);
    }

    #[test]
    fn test_height_truncates() {
        assert_eq!(ImageConfig::new(10, 3.0).height, 3);
        assert_eq!(ImageConfig::new(2, 2.0).height, 1);
    }

    #[test]
    fn test_height_never_below_one() {
        assert_eq!(ImageConfig::new(1, 100.0).height, 1);
        assert_eq!(ImageConfig::new(400, 1000.0).height, 1);
    }

    #[test]
    fn test_height_matches_floor_rule() {
        for width in [1u32, 7, 64, 399, 400, 1920] {
            for aspect in [0.5, 1.0, 4.0 / 3.0, 16.0 / 9.0, 21.0 / 9.0] {
                let image = ImageConfig::new(width, aspect);
                let expected = ((width as f64 / aspect).floor() as u32).max(1);
                assert_eq!(image.height, expected, "width {width} aspect {aspect}");
            }
        }
    }
}
