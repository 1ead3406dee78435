//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entity vectors, spawn order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{circles_overlap, distance};
pub use spawn::edge_spawn_position;
pub use state::{
    Body, Enemy, GameEvent, GamePhase, GameState, Player, Projectile, SpawnTimer, UpdateStatus,
    Weapon,
};
pub use tick::{TickInput, TickReport, tick};
