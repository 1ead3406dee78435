//! Clamped camera-follow window
//!
//! The camera is a derived value: a screen-sized axis-aligned rectangle of
//! world coordinates, recomputed every frame as a pure function of the player
//! position and the world/screen dimensions. No smoothing, no lag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The world-coordinate rectangle currently visible on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left corner of the window, world coordinates
    pub min: Vec2,
    /// Bottom-right corner, always `min + screen`
    pub max: Vec2,
}

impl Camera {
    /// Compute the visible window for a player at `player`
    ///
    /// Each axis is handled independently. A world axis no larger than the
    /// screen is centered in the window (no scrolling on that axis). A larger
    /// world centers the window on the player, then shifts the whole window
    /// back whenever it would overshoot a world edge, so the window never
    /// shows area outside the world and never shrinks below screen size.
    pub fn recompute(player: Vec2, world: Vec2, screen: Vec2) -> Self {
        let min = Vec2::new(
            axis_window_start(player.x, world.x, screen.x),
            axis_window_start(player.y, world.y, screen.y),
        );
        Self {
            min,
            max: min + screen,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Translate a world position into screen space
    #[inline]
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.min
    }

    /// Translate a screen position (e.g. a pointer event) into world space
    #[inline]
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos + self.min
    }
}

fn axis_window_start(center: f32, world: f32, screen: f32) -> f32 {
    if world <= screen {
        // World fully visible: center it (start may be negative)
        (world - screen) / 2.0
    } else {
        (center - screen / 2.0).clamp(0.0, world - screen)
    }
}
