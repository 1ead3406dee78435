//! Per-frame simulation tick
//!
//! One `tick` advances the whole world by a single fixed frame: spawn timer,
//! projectiles, enemies, then the player, in that order. Entities report
//! outcomes; this orchestrator applies damage, credits score, and culls the
//! dead, so every cross-entity effect happens in one auditable place.

use glam::Vec2;

use super::camera::Camera;
use super::spawn::edge_spawn_position;
use super::state::{Enemy, GameEvent, GamePhase, GameState, UpdateStatus};
use crate::consts::{SPAWN_EDGE_OFFSET, TICK_MS};

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    /// Screen-space position of the held primary pointer button, if any
    pub fire_at: Option<Vec2>,
    /// Begin or resume the session
    pub start: bool,
    /// Freeze the simulation (spawn timer keeps accruing)
    pub pause: bool,
}

/// What a tick produced
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Dead once player health has reached zero
    pub status: UpdateStatus,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one fixed frame
///
/// `screen` is the visible surface size, needed to rebuild the camera window
/// that translates pointer positions back into world space.
pub fn tick(state: &mut GameState, input: &TickInput, screen: Vec2) -> TickReport {
    let mut events = Vec::new();

    if input.start && matches!(state.phase, GamePhase::NotStarted | GamePhase::Paused) {
        log::info!("session running (tick {})", state.time_ticks);
        state.phase = GamePhase::Running;
    }
    if input.pause && state.phase == GamePhase::Running {
        log::info!("session paused (tick {})", state.time_ticks);
        state.phase = GamePhase::Paused;
    }

    state.time_ticks += 1;

    // The spawn timer accrues on every tick regardless of phase; only its
    // effect is gated on Running, so pausing never rewinds it.
    if state.spawn_timer.advance(TICK_MS) && state.phase == GamePhase::Running {
        let pos = edge_spawn_position(&mut state.rng, state.world, SPAWN_EDGE_OFFSET);
        log::debug!("enemy spawned at ({:.1}, {:.1})", pos.x, pos.y);
        state.enemies.push(Enemy::new(pos));
        events.push(GameEvent::EnemySpawned);
    }

    if state.phase != GamePhase::Running {
        return TickReport {
            status: player_status(state),
            events,
        };
    }

    // Camera for this frame, from the player's pre-movement position
    let camera = Camera::recompute(state.player.body.pos, state.world, screen);

    advance_projectiles(state);
    advance_enemies(state, &mut events);
    advance_player(state, input, &camera, &mut events);

    let status = player_status(state);
    if status == UpdateStatus::Dead && state.phase != GamePhase::GameOver {
        log::info!("game over at tick {} with score {}", state.time_ticks, state.score);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }

    TickReport { status, events }
}

fn player_status(state: &GameState) -> UpdateStatus {
    if state.player.health <= 0.0 {
        UpdateStatus::Dead
    } else {
        UpdateStatus::Alive
    }
}

/// Move every projectile, cull the off-world ones, and resolve first hits
fn advance_projectiles(state: &mut GameState) {
    let GameState {
        projectiles,
        enemies,
        world,
        ..
    } = state;
    let world = *world;

    projectiles.retain_mut(|projectile| {
        projectile.advance();
        if projectile.off_world(world) {
            return false;
        }
        match projectile.find_hit(enemies) {
            Some(index) => {
                enemies[index].apply_damage(projectile.damage);
                false
            }
            None => true,
        }
    });
}

/// Home every enemy on the player; retain survivors, credit every death
fn advance_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let target = state.player.body.pos;

    for mut enemy in std::mem::take(&mut state.enemies) {
        // Pre-check: projectile damage from this frame kills before moving
        if enemy.health <= 0.0 {
            credit_kill(state, events, &enemy);
            continue;
        }

        enemy.seek(target);

        if enemy.touches(&state.player) {
            // Kamikaze contact: one-shot attack, always fatal to the enemy
            state.player.apply_damage(enemy.damage);
            log::debug!(
                "player hit for {} ({} health left)",
                enemy.damage,
                state.player.health
            );
            events.push(GameEvent::PlayerHit {
                damage: enemy.damage,
            });
            credit_kill(state, events, &enemy);
            continue;
        }

        state.enemies.push(enemy);
    }
}

/// Score is credited uniformly for any dead transition, whichever path
fn credit_kill(state: &mut GameState, events: &mut Vec<GameEvent>, enemy: &Enemy) {
    state.score += u64::from(enemy.score_weight);
    events.push(GameEvent::EnemySlain {
        score: enemy.score_weight,
    });
}

/// Movement, world containment, and cooldown-gated shooting
fn advance_player(
    state: &mut GameState,
    input: &TickInput,
    camera: &Camera,
    events: &mut Vec<GameEvent>,
) {
    state.player.apply_movement(
        input.move_left,
        input.move_right,
        input.move_up,
        input.move_down,
    );
    state.player.clamp_to_world(state.world);

    if let Some(pointer) = input.fire_at {
        let target = camera.screen_to_world(pointer);
        let now_ms = state.now_ms();
        if let Some(projectile) = state.player.shoot_at(target, now_ms) {
            state.projectiles.push(projectile);
            events.push(GameEvent::ShotFired);
        }
    }
}
