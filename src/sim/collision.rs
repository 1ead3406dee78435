//! Circle-circle collision tests
//!
//! Every collision participant in the game is a circle, so the whole contact
//! model is a Euclidean distance check against the sum of radii. The test is
//! strict: tangent circles do not count as colliding.

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Strict circle-circle overlap test
///
/// Returns true only when the circles genuinely interpenetrate
/// (`distance < r_a + r_b`). Symmetric in its arguments.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    distance(a, b) < radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(7.0, 0.0);
        assert!(circles_overlap(a, 5.0, b, 5.0));
    }

    #[test]
    fn test_tangent_circles_do_not_collide() {
        // distance 10 == 5 + 5, strict < means no hit
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(!circles_overlap(a, 5.0, b, 5.0));
    }

    #[test]
    fn test_separated_circles() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 100.0);
        assert!(!circles_overlap(a, 5.0, b, 5.0));
    }

    #[test]
    fn test_symmetry() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(6.0, 8.0);
        assert_eq!(
            circles_overlap(a, 2.0, b, 4.0),
            circles_overlap(b, 4.0, a, 2.0)
        );
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_diagonal_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
    }
}
