//! Game state and core simulation types
//!
//! Entities are plain data: a shared [`Body`] value (position, radius, color)
//! embedded in each variant, with per-type fields alongside. Update logic
//! returns statuses and reports; cross-entity effects (damage, score) are
//! applied by the tick orchestrator, never by entities reaching into each
//! other.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use crate::consts::*;
use crate::render::Rgba;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session constructed, first frame not yet requested
    NotStarted,
    /// Active gameplay
    Running,
    /// Simulation frozen, spawn timer still accrues
    Paused,
    /// Player health reached zero
    GameOver,
}

/// Per-tick entity outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Alive,
    Dead,
}

/// Something the tick produced, for the caller to log or surface in UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    EnemySpawned,
    /// An enemy died (by projectile or by contact); score already credited
    EnemySlain { score: u32 },
    /// An enemy self-destructed on the player
    PlayerHit { damage: f32 },
    GameOver,
}

/// Shared positional/visual core embedded in every entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Collision radius, always positive
    pub radius: f32,
    /// Display-only
    pub color: Rgba,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, color: Rgba) -> Self {
        debug_assert!(radius > 0.0);
        Self { pos, radius, color }
    }
}

/// Cooldown-gated projectile factory, owned by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: f32,
    /// Projectile speed in units per tick
    pub muzzle_speed: f32,
    pub cooldown_ms: f64,
    /// None until the first successful shot, so a shot at t=0 always fires
    pub last_shot_ms: Option<f64>,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            damage: WEAPON_DAMAGE,
            muzzle_speed: WEAPON_MUZZLE_SPEED,
            cooldown_ms: WEAPON_COOLDOWN_MS,
            last_shot_ms: None,
        }
    }
}

impl Weapon {
    /// Attempt to fire toward `angle` from `origin` at simulated time `now_ms`
    ///
    /// A rate-limiting gate, not a queue: attempts inside the cooldown window
    /// are dropped, and the timestamp is stamped only on a successful shot.
    pub fn fire(&mut self, origin: Vec2, angle: f32, now_ms: f64) -> Option<Projectile> {
        if let Some(last) = self.last_shot_ms
            && now_ms - last < self.cooldown_ms
        {
            return None;
        }
        self.last_shot_ms = Some(now_ms);

        Some(Projectile {
            body: Body::new(origin, PROJECTILE_RADIUS, PROJECTILE_COLOR),
            vel: Vec2::new(angle.cos(), angle.sin()) * self.muzzle_speed,
            damage: self.damage,
        })
    }
}

/// A fired shot: constant-velocity hazard, dies on its first enemy hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Displacement per tick
    pub vel: Vec2,
    pub damage: f32,
}

impl Projectile {
    /// Step forward one tick (no drag, no gravity)
    pub fn advance(&mut self) {
        self.body.pos += self.vel;
    }

    /// Linear scan over the enemy list in spawn order; first strict overlap
    /// wins (no penetration, never nearest-first)
    pub fn find_hit(&self, enemies: &[Enemy]) -> Option<usize> {
        enemies.iter().position(|enemy| {
            circles_overlap(
                self.body.pos,
                self.body.radius,
                enemy.body.pos,
                enemy.body.radius,
            )
        })
    }

    /// True once the projectile circle is fully outside the world bounds
    pub fn off_world(&self, world: Vec2) -> bool {
        let p = self.body.pos;
        let r = self.body.radius;
        p.x + r < 0.0 || p.y + r < 0.0 || p.x - r > world.x || p.y - r > world.y
    }
}

/// Homing kamikaze: steers toward the player every tick, trades a one-shot
/// contact attack for self-destruction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    /// Homing step per tick
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    /// Contact damage dealt to the player
    pub damage: f32,
    /// Points credited when this enemy dies, via either death path
    pub score_weight: u32,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, ENEMY_RADIUS, ENEMY_COLOR),
            speed: ENEMY_SPEED,
            health: ENEMY_MAX_HEALTH,
            max_health: ENEMY_MAX_HEALTH,
            damage: ENEMY_CONTACT_DAMAGE,
            score_weight: ENEMY_SCORE_WEIGHT,
        }
    }

    pub fn apply_damage(&mut self, damage: f32) {
        self.health -= damage;
    }

    /// Step toward `target`, recomputing the direction from the current
    /// positions (continuous homing, no steering inertia)
    pub fn seek(&mut self, target: Vec2) {
        let to_target = target - self.body.pos;
        let angle = to_target.y.atan2(to_target.x);
        self.body.pos += Vec2::new(angle.cos(), angle.sin()) * self.speed;
    }

    /// Strict circle overlap against the player
    pub fn touches(&self, player: &Player) -> bool {
        circles_overlap(
            self.body.pos,
            self.body.radius,
            player.body.pos,
            player.body.radius,
        )
    }

    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// The user-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Per-tick displacement per held movement key
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub weapon: Weapon,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, PLAYER_RADIUS, PLAYER_COLOR),
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            weapon: Weapon::default(),
        }
    }

    /// Apply held movement keys: four independent axis checks, fixed step
    /// each, no diagonal normalization (diagonals run √2 faster by design)
    pub fn apply_movement(&mut self, left: bool, right: bool, up: bool, down: bool) {
        if left {
            self.body.pos.x -= self.speed;
        }
        if right {
            self.body.pos.x += self.speed;
        }
        if up {
            self.body.pos.y -= self.speed;
        }
        if down {
            self.body.pos.y += self.speed;
        }
    }

    /// Soft containment: clamp to `[radius/2, dim - radius/2]` per axis,
    /// allowing a half-overlap at the world edge
    pub fn clamp_to_world(&mut self, world: Vec2) {
        let margin = self.body.radius / 2.0;
        self.body.pos.x = self.body.pos.x.clamp(margin, world.x - margin);
        self.body.pos.y = self.body.pos.y.clamp(margin, world.y - margin);
    }

    /// Fire toward a world-space target, subject to the weapon cooldown
    pub fn shoot_at(&mut self, target: Vec2, now_ms: f64) -> Option<Projectile> {
        let to_target = target - self.body.pos;
        let angle = to_target.y.atan2(to_target.x);
        self.weapon.fire(self.body.pos, angle, now_ms)
    }

    /// Contact damage from an enemy; health floors at zero
    pub fn apply_damage(&mut self, damage: f32) {
        self.health = (self.health - damage).max(0.0);
    }

    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// Fixed-interval enemy spawn gate
///
/// The timer accrues simulated time on every tick regardless of phase; only
/// its effect is suppressed while not running. Cancelling it (session end)
/// stops it for good, so nothing recurs after the UI is dismissed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub interval_ms: f64,
    elapsed_ms: f64,
    cancelled: bool,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            cancelled: false,
        }
    }

    /// Accrue `dt_ms`; returns true each time a full interval elapses
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if self.cancelled {
            return false;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawn placement
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Running score, monotone non-decreasing
    pub score: u64,
    /// Simulation tick counter; wall clock is derived from it
    pub time_ticks: u64,
    /// World bounds (fixed, larger than the screen in the scrolling setup)
    pub world: Vec2,
    pub player: Player,
    /// Insertion order = spawn order; no identity beyond membership
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub spawn_timer: SpawnTimer,
}

impl GameState {
    /// Create a fresh world with the player at world center
    pub fn new(seed: u64) -> Self {
        let world = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            time_ticks: 0,
            world,
            player: Player::new(world / 2.0),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            spawn_timer: SpawnTimer::new(SPAWN_INTERVAL_MS),
        }
    }

    /// Simulated wall clock in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.time_ticks as f64 * TICK_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_weapon_cooldown_gate() {
        let mut weapon = Weapon::default();
        let origin = Vec2::ZERO;

        // First shot at t=0 fires
        assert!(weapon.fire(origin, 0.0, 0.0).is_some());
        // Inside the 200 ms window: dropped, timestamp untouched
        assert!(weapon.fire(origin, 0.0, 150.0).is_none());
        assert_eq!(weapon.last_shot_ms, Some(0.0));
        // Past the window: fires again
        assert!(weapon.fire(origin, 0.0, 210.0).is_some());
        assert_eq!(weapon.last_shot_ms, Some(210.0));
    }

    #[test]
    fn test_weapon_projectile_velocity() {
        let mut weapon = Weapon::default();
        let p = weapon
            .fire(Vec2::new(3.0, 4.0), std::f32::consts::FRAC_PI_2, 0.0)
            .unwrap();
        assert!((p.vel.x).abs() < 1e-4);
        assert!((p.vel.y - WEAPON_MUZZLE_SPEED).abs() < 1e-4);
        assert_eq!(p.damage, WEAPON_DAMAGE);
        assert_eq!(p.body.pos, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_projectile_first_hit_in_list_order() {
        let projectile = Projectile {
            body: Body::new(Vec2::ZERO, 5.0, PROJECTILE_COLOR),
            vel: Vec2::ZERO,
            damage: 25.0,
        };
        // Both enemies overlap; the scan must report the first by list order,
        // not the nearer second one
        let far = Enemy::new(Vec2::new(20.0, 0.0));
        let near = Enemy::new(Vec2::new(5.0, 0.0));
        assert_eq!(projectile.find_hit(&[far, near]), Some(0));
    }

    #[test]
    fn test_projectile_tangent_is_a_miss() {
        let projectile = Projectile {
            body: Body::new(Vec2::ZERO, 5.0, PROJECTILE_COLOR),
            vel: Vec2::ZERO,
            damage: 25.0,
        };
        let mut enemy = Enemy::new(Vec2::new(10.0, 0.0));
        enemy.body.radius = 5.0;
        assert_eq!(projectile.find_hit(std::slice::from_ref(&enemy)), None);
    }

    #[test]
    fn test_projectile_off_world() {
        let mut p = Projectile {
            body: Body::new(Vec2::new(500.0, 500.0), 5.0, PROJECTILE_COLOR),
            vel: Vec2::ZERO,
            damage: 25.0,
        };
        let world = Vec2::new(1000.0, 1000.0);
        assert!(!p.off_world(world));
        // Straddling the edge still counts as in-world
        p.body.pos = Vec2::new(1002.0, 500.0);
        assert!(!p.off_world(world));
        p.body.pos = Vec2::new(1006.0, 500.0);
        assert!(p.off_world(world));
        p.body.pos = Vec2::new(500.0, -6.0);
        assert!(p.off_world(world));
    }

    #[test]
    fn test_enemy_homing_recomputes_direction() {
        let mut enemy = Enemy::new(Vec2::new(0.0, 0.0));
        enemy.seek(Vec2::new(100.0, 0.0));
        assert!((enemy.body.pos.x - ENEMY_SPEED).abs() < 1e-4);
        // Target moved; next step heads the new way, no inertia
        enemy.seek(Vec2::new(enemy.body.pos.x, -100.0));
        assert!((enemy.body.pos.y + ENEMY_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_player_damage_floors_at_zero() {
        let mut player = Player::new(Vec2::ZERO);
        player.apply_damage(64.0);
        assert_eq!(player.health, 36.0);
        player.apply_damage(1000.0);
        assert_eq!(player.health, 0.0);
        assert_eq!(player.health_fraction(), 0.0);
    }

    #[test]
    fn test_spawn_timer_fires_on_interval() {
        let mut timer = SpawnTimer::new(1000.0);
        let mut fired = 0;
        for _ in 0..120 {
            if timer.advance(TICK_MS) {
                fired += 1;
            }
        }
        // 120 ticks at ~16.67 ms = 2000 ms
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_spawn_timer_cancel_is_final() {
        let mut timer = SpawnTimer::new(100.0);
        timer.cancel();
        assert!(!timer.advance(10_000.0));
        assert!(timer.is_cancelled());
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(7);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.player.body.pos, state.player.body.pos);
        assert_eq!(back.phase, GamePhase::NotStarted);
    }

    proptest! {
        #[test]
        fn prop_clamp_keeps_player_in_soft_bounds(
            px in -10_000.0f32..10_000.0,
            py in -10_000.0f32..10_000.0,
        ) {
            let world = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
            let mut player = Player::new(Vec2::new(px, py));
            player.clamp_to_world(world);
            let margin = player.body.radius / 2.0;
            prop_assert!(player.body.pos.x >= margin);
            prop_assert!(player.body.pos.x <= world.x - margin);
            prop_assert!(player.body.pos.y >= margin);
            prop_assert!(player.body.pos.y <= world.y - margin);
        }
    }
}
