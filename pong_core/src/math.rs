use glam::Vec2;

/// Rotate `v` about the origin by `degrees` (counter-clockwise, y-up).
/// Magnitude is preserved.
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Signed angle in degrees from `from` to `to`
pub fn angle_between_degrees(from: Vec2, to: Vec2) -> f32 {
    from.angle_between(to).to_degrees()
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive overlap test: boxes sharing an edge count as touching
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate_degrees(Vec2::new(1.0, 0.0), 90.0);
        assert!(v.x.abs() < EPS, "x should vanish, got {}", v.x);
        assert!((v.y - 1.0).abs() < EPS, "y should be 1, got {}", v.y);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let base = Vec2::new(8.0, 2.0);
        for deg in [0.0, 10.0, 33.0, 60.0, 180.0, 270.0] {
            let rotated = rotate_degrees(base, deg);
            assert!(
                (rotated.length() - base.length()).abs() < EPS,
                "Rotation by {deg} changed length"
            );
        }
    }

    #[test]
    fn test_angle_between_recovers_rotation() {
        let base = Vec2::new(-8.0, 0.0);
        let rotated = rotate_degrees(base, 45.0);
        assert!((angle_between_degrees(base, rotated) - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_aabb_overlap_inclusive() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::splat(2.0));
        let touching = Aabb::new(Vec2::new(1.0, -1.0), Vec2::new(3.0, 1.0));
        let apart = Aabb::new(Vec2::new(1.5, -1.0), Vec2::new(3.0, 1.0));
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }
}
