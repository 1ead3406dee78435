//! Enemy spawn placement
//!
//! Fresh enemies appear just outside the world bounds: a uniformly chosen
//! edge, a uniform position along it, displaced outward by a fixed offset so
//! they walk into view rather than popping up inside the camera window.

use glam::Vec2;
use rand::Rng;

use crate::remap;

/// Which side of the world an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Pick a spawn position outside the world bounds
///
/// Deterministic given the RNG state: one draw for the edge, one for the
/// position along it.
pub fn edge_spawn_position<R: Rng>(rng: &mut R, world: Vec2, offset: f32) -> Vec2 {
    let edge = match rng.random_range(0..4u8) {
        0 => Edge::Left,
        1 => Edge::Right,
        2 => Edge::Top,
        _ => Edge::Bottom,
    };
    let t: f32 = rng.random_range(0.0..1.0);

    match edge {
        Edge::Left => Vec2::new(-offset, remap(0.0, 1.0, 0.0, world.y, t)),
        Edge::Right => Vec2::new(world.x + offset, remap(0.0, 1.0, 0.0, world.y, t)),
        Edge::Top => Vec2::new(remap(0.0, 1.0, 0.0, world.x, t), -offset),
        Edge::Bottom => Vec2::new(remap(0.0, 1.0, 0.0, world.x, t), world.y + offset),
    }
}
