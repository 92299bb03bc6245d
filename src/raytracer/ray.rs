use glam::DVec3;

pub type Point3 = DVec3;

/// A half-line starting at `origin` and extending along `direction`.
///
/// `direction` is not required to be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: DVec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: DVec3) -> Self {
        Ray { origin, direction }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Point reached after travelling `t` direction lengths from the origin.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_zero_is_origin() {
        let ray = Ray::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.at(0.0), ray.origin());
    }

    #[test]
    fn test_at_uses_unnormalized_direction() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(2.0, 0.0, -4.0));
        assert_eq!(ray.at(0.5), DVec3::new(1.0, 0.0, -2.0));
        assert_eq!(ray.at(-1.0), DVec3::new(-2.0, 0.0, 4.0));
    }
}
