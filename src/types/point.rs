//! 3D point type.

use std::fmt;

/// A point in model space. IGES coordinates are always three-dimensional;
/// planar entities carry an explicit Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point3 {
    /// Origin point (0, 0, 0)
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_zero() {
        let p = Point3::new(1.0, -2.5, 3.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, -2.5);
        assert_eq!(p.z, 3.0);
        assert_eq!(Point3::ZERO, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point3::new(0.0, 1.5, -2.0).to_string(), "(0, 1.5, -2)");
    }
}
