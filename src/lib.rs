//! Crimson Swarm - a top-down survival shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, camera, game state)
//! - `render`: Drawing through the `DrawSurface` boundary trait
//! - `input`: Held-key/pointer snapshot mutated by platform events
//! - `session`: Per-frame update-and-draw orchestration and lifecycle
//!
//! The platform layer (canvas, DOM events, frame scheduling) is out of scope:
//! it supplies a `DrawSurface`, feeds input events, and calls
//! [`Session::frame`] once per repaint.

pub mod input;
pub mod render;
pub mod session;
pub mod sim;

pub use input::InputState;
pub use render::DrawSurface;
pub use session::{FrameStatus, Session, SessionError};

/// Game configuration constants
pub mod consts {
    use crate::render::Rgba;

    /// Fixed simulation timestep in milliseconds (60 Hz frame clock)
    pub const TICK_MS: f64 = 1000.0 / 60.0;

    /// World dimensions (larger than a typical screen, so the camera scrolls)
    pub const WORLD_WIDTH: f32 = 1000.0;
    pub const WORLD_HEIGHT: f32 = 1000.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 25.0;
    /// Per-tick displacement per held movement key
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 25.0;
    /// Per-tick homing step
    pub const ENEMY_SPEED: f32 = 5.0;
    pub const ENEMY_MAX_HEALTH: f32 = 100.0;
    pub const ENEMY_CONTACT_DAMAGE: f32 = 10.0;
    pub const ENEMY_SCORE_WEIGHT: u32 = 10;

    /// Weapon defaults
    pub const WEAPON_DAMAGE: f32 = 25.0;
    /// Projectile speed, units per tick
    pub const WEAPON_MUZZLE_SPEED: f32 = 15.0;
    pub const WEAPON_COOLDOWN_MS: f64 = 200.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Enemy spawn cadence and placement
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// How far outside the world bounds a fresh enemy appears
    pub const SPAWN_EDGE_OFFSET: f32 = 50.0;

    /// Background grid
    pub const GRID_SPACING: f32 = 150.0;
    pub const GRID_LINE_THICKNESS: f32 = 1.0;

    /// HUD
    pub const HEALTH_BAR_WIDTH: f32 = 50.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 3.0;
    /// Gap between the top of a body circle and its health bar
    pub const HEALTH_BAR_RISE: f32 = 7.0;
    pub const SCORE_FONT_PX: f32 = 48.0;
    pub const SCORE_BASELINE_Y: f32 = 50.0;

    /// Palette
    pub const WORLD_FILL: Rgba = Rgba::rgb(245, 36, 50);
    pub const GRID_LINE: Rgba = Rgba::rgb(207, 19, 31);
    pub const PLAYER_COLOR: Rgba = Rgba::rgb(255, 255, 255);
    pub const ENEMY_COLOR: Rgba = Rgba::rgb(0, 0, 0);
    pub const PROJECTILE_COLOR: Rgba = Rgba::rgb(255, 255, 255);
    pub const SCORE_COLOR: Rgba = Rgba::rgb(255, 255, 255);
    pub const HEALTH_BAR_TRACK: Rgba = Rgba::new(50, 50, 50, 0.2);
    pub const HEALTH_BAR_FILL: Rgba = Rgba::new(242, 242, 242, 0.5);
}

/// Map `t` from the range `[in_min, in_max]` to `[out_min, out_max]`
#[inline]
pub fn remap(in_min: f32, in_max: f32, out_min: f32, out_max: f32, t: f32) -> f32 {
    out_min + (t - in_min) / (in_max - in_min) * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::remap;

    #[test]
    fn test_remap_unit_to_world() {
        assert_eq!(remap(0.0, 1.0, 0.0, 1000.0, 0.5), 500.0);
        assert_eq!(remap(0.0, 1.0, 0.0, 1000.0, 0.0), 0.0);
        assert_eq!(remap(0.0, 1.0, 0.0, 1000.0, 1.0), 1000.0);
    }

    #[test]
    fn test_remap_shifted_ranges() {
        assert_eq!(remap(10.0, 20.0, 100.0, 200.0, 15.0), 150.0);
        assert_eq!(remap(0.0, 1.0, -50.0, 50.0, 0.25), -25.0);
    }
}
