//! Session lifecycle and per-frame orchestration
//!
//! The platform layer constructs a [`Session`] around its drawable surface,
//! forwards input events to it, and calls [`Session::frame`] once per repaint
//! until the frame reports dead. Everything else (simulation, drawing) is
//! internal.

use glam::Vec2;
use thiserror::Error;

use crate::input::{InputState, KeyCode, PRIMARY_BUTTON};
use crate::render::{self, DrawSurface};
use crate::sim::{Camera, GamePhase, GameState, TickInput, UpdateStatus, tick};

/// Fatal session construction failures
///
/// The only failure class in scope: an unusable drawable surface. Surfaced
/// synchronously so the caller can abort instead of running a blind session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("drawable surface has unusable dimensions {width}x{height}")]
    InvalidSurfaceSize { width: f32, height: f32 },
}

/// Per-frame verdict for the frame scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Keep rescheduling frames
    Alive,
    /// Player health reached zero; stop rescheduling
    Dead,
}

/// One game session: owns the surface, the world, and the input snapshot
#[derive(Debug)]
pub struct Session<S: DrawSurface> {
    surface: S,
    screen: Vec2,
    state: GameState,
    input: InputState,
    pending_start: bool,
}

impl<S: DrawSurface> Session<S> {
    /// Construct a session over a surface of `screen_w` x `screen_h`
    ///
    /// Fails if the dimensions are not strictly positive (which also rejects
    /// NaN) - the surface cannot be drawn to, so nothing is built.
    pub fn new(surface: S, screen_w: f32, screen_h: f32, seed: u64) -> Result<Self, SessionError> {
        if !(screen_w > 0.0) || !(screen_h > 0.0) {
            return Err(SessionError::InvalidSurfaceSize {
                width: screen_w,
                height: screen_h,
            });
        }
        log::info!("session created: screen {screen_w}x{screen_h}, seed {seed}");
        Ok(Self {
            surface,
            screen: Vec2::new(screen_w, screen_h),
            state: GameState::new(seed),
            input: InputState::new(),
            pending_start: false,
        })
    }

    /// Begin or resume gameplay on the next frame
    pub fn start(&mut self) {
        self.pending_start = true;
    }

    /// End the session: cancel the spawn timer and freeze the world
    ///
    /// Deterministic teardown - no recurring action survives the UI being
    /// dismissed.
    pub fn end(&mut self) {
        self.state.spawn_timer.cancel();
        self.state.phase = GamePhase::GameOver;
        log::info!("session ended with score {}", self.state.score);
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    // Input event handlers, forwarded by the platform layer

    pub fn key_down(&mut self, code: KeyCode) {
        self.input.key_down(code);
    }

    pub fn key_up(&mut self, code: KeyCode) {
        self.input.key_up(code);
    }

    pub fn pointer_down(&mut self, button: u8, pos: Vec2) {
        self.input.pointer_down(button, pos);
    }

    pub fn pointer_up(&mut self, button: u8) {
        self.input.pointer_up(button);
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.input.pointer_moved(pos);
    }

    /// Advance and draw one frame
    ///
    /// Update order follows the world contract: camera, background grid,
    /// score overlay, projectiles, enemies, player. The camera window comes
    /// from the player's position at the top of the frame, the same window
    /// the tick uses to translate pointer coordinates.
    pub fn frame(&mut self) -> FrameStatus {
        let camera = Camera::recompute(self.state.player.body.pos, self.state.world, self.screen);

        let tick_input = TickInput {
            move_left: self.input.is_held(KeyCode::KeyA),
            move_right: self.input.is_held(KeyCode::KeyD),
            move_up: self.input.is_held(KeyCode::KeyW),
            move_down: self.input.is_held(KeyCode::KeyS),
            fire_at: self.input.pointer(PRIMARY_BUTTON),
            start: self.pending_start || self.input.is_held(KeyCode::Enter),
            pause: self.input.is_held(KeyCode::Escape),
        };
        self.pending_start = false;

        let report = tick(&mut self.state, &tick_input, self.screen);
        for event in &report.events {
            log::debug!("frame {}: {event:?}", self.state.time_ticks);
        }

        render::draw_world(&mut self.surface, &camera, self.screen);
        render::draw_score(&mut self.surface, self.state.score, self.screen);
        for projectile in &self.state.projectiles {
            render::draw_projectile(&mut self.surface, projectile, &camera);
        }
        for enemy in &self.state.enemies {
            render::draw_enemy(&mut self.surface, enemy, &camera);
        }
        render::draw_player(&mut self.surface, &self.state.player, &camera);

        match report.status {
            UpdateStatus::Dead => FrameStatus::Dead,
            UpdateStatus::Alive => FrameStatus::Alive,
        }
    }
}
