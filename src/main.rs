//! Headless demo runner
//!
//! Drives a session against a no-op surface with a scripted input: the player
//! holds fire and sweeps the pointer in a circle while enemies close in. Runs
//! until the player dies or a minute of simulated time passes, then prints a
//! summary (and the full state as JSON with `--dump`).

use glam::Vec2;

use crimson_swarm::input::PRIMARY_BUTTON;
use crimson_swarm::render::Rgba;
use crimson_swarm::{DrawSurface, FrameStatus, Session, SessionError};

const SCREEN_W: f32 = 800.0;
const SCREEN_H: f32 = 600.0;
/// One minute at 60 frames per second
const MAX_FRAMES: u32 = 3600;

/// Surface that discards every draw call
struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Rgba) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {}
    fn fill_text_centered(&mut self, _text: &str, _pos: Vec2, _font_px: f32, _color: Rgba) {}
}

fn main() -> Result<(), SessionError> {
    env_logger::init();

    let mut seed = 0xC0FFEE_u64;
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dump" {
            dump = true;
        } else if let Ok(parsed) = arg.parse() {
            seed = parsed;
        }
    }

    let mut session = Session::new(NullSurface, SCREEN_W, SCREEN_H, seed)?;
    session.start();

    let center = Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0);
    session.pointer_down(PRIMARY_BUTTON, center + Vec2::new(200.0, 0.0));

    let mut frames = 0;
    while frames < MAX_FRAMES {
        // Sweep the aim point in a slow circle
        let angle = frames as f32 * 0.05;
        session.pointer_moved(center + Vec2::new(angle.cos(), angle.sin()) * 200.0);

        frames += 1;
        if session.frame() == FrameStatus::Dead {
            break;
        }
    }

    let state = session.state();
    println!(
        "seed {seed}: score {} after {} ticks ({:?}, {} enemies on field)",
        state.score,
        state.time_ticks,
        state.phase,
        state.enemies.len()
    );
    if dump {
        match serde_json::to_string_pretty(state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("state dump failed: {err}"),
        }
    }

    session.end();
    Ok(())
}
