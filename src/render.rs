//! Drawing through the platform surface boundary
//!
//! The platform hands us an opaque drawable surface; everything we need from
//! it is the four operations of [`DrawSurface`]. Entities render as a fixed,
//! ordered list of layers per variant (body circle first, overlays after),
//! all translated into screen space through the camera window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::{Body, Enemy, Player, Projectile};
use crate::sim::Camera;

/// Display color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// The drawable-surface collaborator provided by the platform layer
///
/// Coordinates are screen space, origin top-left. Implementations may batch
/// or forward to a real canvas; the simulation never sees this trait.
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Horizontally centered text with its baseline at `pos.y`
    fn fill_text_centered(&mut self, text: &str, pos: Vec2, font_px: f32, color: Rgba);
}

/// One visual layer of an entity, drawn in slice order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Filled body circle in the entity's color
    Circle,
    /// Health bar floating above the body
    HealthBar,
}

/// Projectiles are a bare circle
pub const PROJECTILE_LAYERS: &[Layer] = &[Layer::Circle];
/// Player and enemies get a health overlay on top of the body
pub const PLAYER_LAYERS: &[Layer] = &[Layer::Circle, Layer::HealthBar];
pub const ENEMY_LAYERS: &[Layer] = &[Layer::Circle, Layer::HealthBar];

/// Draw an entity's layer list through the camera transform
///
/// `health_fraction` feeds the `HealthBar` layer; variants without one pass
/// `None` and must not list that layer.
pub fn draw_entity<S: DrawSurface>(
    surface: &mut S,
    layers: &[Layer],
    body: &Body,
    health_fraction: Option<f32>,
    camera: &Camera,
) {
    let center = camera.world_to_screen(body.pos);
    for layer in layers {
        match layer {
            Layer::Circle => surface.fill_circle(center, body.radius, body.color),
            Layer::HealthBar => {
                let fraction = health_fraction.unwrap_or(1.0);
                let x = center.x - HEALTH_BAR_WIDTH / 2.0;
                let y = center.y - body.radius - HEALTH_BAR_HEIGHT / 2.0 - HEALTH_BAR_RISE;
                surface.fill_rect(x, y, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT, HEALTH_BAR_TRACK);
                surface.fill_rect(
                    x,
                    y,
                    HEALTH_BAR_WIDTH * fraction,
                    HEALTH_BAR_HEIGHT,
                    HEALTH_BAR_FILL,
                );
            }
        }
    }
}

pub fn draw_player<S: DrawSurface>(surface: &mut S, player: &Player, camera: &Camera) {
    draw_entity(
        surface,
        PLAYER_LAYERS,
        &player.body,
        Some(player.health_fraction()),
        camera,
    );
}

pub fn draw_enemy<S: DrawSurface>(surface: &mut S, enemy: &Enemy, camera: &Camera) {
    draw_entity(
        surface,
        ENEMY_LAYERS,
        &enemy.body,
        Some(enemy.health_fraction()),
        camera,
    );
}

pub fn draw_projectile<S: DrawSurface>(surface: &mut S, projectile: &Projectile, camera: &Camera) {
    draw_entity(surface, PROJECTILE_LAYERS, &projectile.body, None, camera);
}

/// Screen-space offsets of grid lines crossing the span `[start, end]`
///
/// Only lines intersecting the camera window are produced, so a frame never
/// pays for the full world extent.
pub fn grid_line_offsets(start: f32, end: f32, spacing: f32) -> Vec<f32> {
    let mut offsets = Vec::new();
    let base = (start / spacing).floor() * spacing - start;
    let mut pos = base + spacing;
    while pos <= end - start {
        offsets.push(pos);
        pos += spacing;
    }
    offsets
}

/// Background fill plus the repeating grid visible in the camera window
pub fn draw_world<S: DrawSurface>(surface: &mut S, camera: &Camera, screen: Vec2) {
    surface.clear_rect(0.0, 0.0, screen.x, screen.y);
    surface.fill_rect(0.0, 0.0, screen.x, screen.y, WORLD_FILL);

    for x in grid_line_offsets(camera.min.x, camera.max.x, GRID_SPACING) {
        surface.fill_rect(
            x - GRID_LINE_THICKNESS,
            0.0,
            GRID_LINE_THICKNESS,
            screen.y,
            GRID_LINE,
        );
    }
    for y in grid_line_offsets(camera.min.y, camera.max.y, GRID_SPACING) {
        surface.fill_rect(
            0.0,
            y - GRID_LINE_THICKNESS,
            screen.x,
            GRID_LINE_THICKNESS,
            GRID_LINE,
        );
    }
}

/// Running score overlay, centered near the top of the screen
pub fn draw_score<S: DrawSurface>(surface: &mut S, score: u64, screen: Vec2) {
    surface.fill_text_centered(
        &score.to_string(),
        Vec2::new(screen.x / 2.0, SCORE_BASELINE_Y),
        SCORE_FONT_PX,
        SCORE_COLOR,
    );
}
