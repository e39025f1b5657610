//! Ray type and operations

use crate::core::types::Vec3;

/// A ray defined by origin and unit direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction, or zero for a degenerate ray
    pub direction: Vec3,
    /// Per-axis |1 / direction|; infinite on axes the ray never moves along
    pub inv_direction: Vec3,
}

impl Ray {
    /// Create a new ray; the direction is normalized here
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            origin,
            direction,
            inv_direction: Vec3::new(
                guarded_inverse(direction.x),
                guarded_inverse(direction.y),
                guarded_inverse(direction.z),
            ),
        }
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// True when the ray cannot be traversed: zero-length direction, a
    /// non-finite origin, or an origin whose cell has no i32 coordinate
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO || !self.origin.is_finite() || !in_cell_range(self.origin)
    }
}

/// Every component of `floor(p)` fits in an i32
fn in_cell_range(p: Vec3) -> bool {
    let cell = p.floor();
    cell.cmpge(Vec3::splat(i32::MIN as f32)).all() && cell.cmplt(Vec3::splat(-(i32::MIN as f32))).all()
}

/// |1 / d|, treating a zero component as an infinite crossing distance
fn guarded_inverse(d: f32) -> f32 {
    if d == 0.0 {
        f32::INFINITY
    } else {
        (1.0 / d).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.at(5.0), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.inv_direction.y - 1.0 / 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_zero_component_is_infinite() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(ray.inv_direction.x, f32::INFINITY);
        assert_eq!(ray.inv_direction.y, 1.0);
        assert_eq!(ray.inv_direction.z, f32::INFINITY);
        assert!(!ray.is_degenerate());
    }

    #[test]
    fn test_degenerate() {
        assert!(Ray::new(Vec3::ONE, Vec3::ZERO).is_degenerate());
        assert!(Ray::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X).is_degenerate());
    }

    #[test]
    fn test_origin_outside_cell_range() {
        assert!(Ray::new(Vec3::new(3.0e9, 1.5, 1.5), Vec3::X).is_degenerate());
        assert!(Ray::new(Vec3::new(1.5, -3.0e9, 1.5), Vec3::Y).is_degenerate());
        assert!(!Ray::new(Vec3::new(-2147483648.0, 0.0, 0.0), Vec3::X).is_degenerate());
        assert!(Ray::new(Vec3::new(2147483648.0, 0.0, 0.0), Vec3::X).is_degenerate());
    }
}
