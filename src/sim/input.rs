//! Pointer and keyboard reactions
//!
//! The platform layer turns raw window events into `InputEvent`s; everything
//! here is a pure function of the current state and that event sequence
//! (plus the injected RNG for resets).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::placement::randomize;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Escape,
    Other(u32),
}

/// Discrete input events, drained once per frame before simulating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// Pointer moved (only matters for the aim preview)
    PointerMove { x: f32, y: f32 },
    KeyDown(Key),
}

/// What the frame loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Launch velocity produced by a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub velocity: Vec2,
    /// Drag length after capping, in input units (0..=MAX_DRAG)
    pub power: f32,
}

/// Map a pull-back drag to a launch impulse
///
/// The ball flies away from the release point. Drags no longer than
/// `min_drag` are discarded. Longer drags are capped at `MAX_DRAG` with the
/// angle preserved, then scaled into velocity units.
pub fn launch_impulse(ball_center: Vec2, release: Vec2, min_drag: f32) -> Option<Impulse> {
    let mut drag = ball_center - release;
    let mut power = drag.length();

    if power <= min_drag {
        return None;
    }

    if power > MAX_DRAG {
        power = MAX_DRAG;
        let angle = drag.y.atan2(drag.x);
        drag = Vec2::new(angle.cos(), angle.sin()) * power;
    }

    Some(Impulse {
        velocity: drag * LAUNCH_POWER,
        power,
    })
}

/// Arrow and power bar shown while aiming
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimPreview {
    /// Arrow tail (ball center)
    pub origin: Vec2,
    /// Launch direction in degrees, screen space
    pub angle_deg: f32,
    /// Power bar fill (0..=1)
    pub power_fraction: f32,
}

/// Compute the aim overlay for the current pointer, if a drag is in progress
pub fn aim_preview(state: &GameState, pointer: Vec2) -> Option<AimPreview> {
    if !state.locked {
        return None;
    }

    let origin = state.ball.body.center();
    let drag = origin - pointer;
    let length = drag.length();
    if length <= state.ball.min_drag() {
        return None;
    }

    Some(AimPreview {
        origin,
        angle_deg: drag.y.atan2(drag.x).to_degrees(),
        power_fraction: length.min(MAX_DRAG) / MAX_DRAG,
    })
}

/// React to one input event
pub fn handle_input<R: Rng + ?Sized>(
    state: &mut GameState,
    event: InputEvent,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Flow {
    match event {
        InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return Flow::Quit,

        InputEvent::PointerDown { x, y } => {
            if !state.ball.moving
                && !state.won
                && state.ball.body.contains_point(Vec2::new(x, y))
            {
                state.locked = true;
            }
        }

        InputEvent::PointerUp { x, y } => {
            if state.locked {
                state.locked = false;
                let center = state.ball.body.center();
                match launch_impulse(center, Vec2::new(x, y), state.ball.min_drag()) {
                    Some(impulse) => {
                        state.ball.launch(impulse.velocity);
                        events.push(GameEvent::Launched {
                            power: impulse.power,
                        });
                    }
                    None => log::debug!("Drag too short, shot cancelled"),
                }
            }
        }

        InputEvent::PointerMove { .. } => {}

        InputEvent::KeyDown(Key::Space) => {
            if state.won {
                match randomize(state, rng) {
                    Ok(()) => {
                        state.won = false;
                        events.push(GameEvent::Reset);
                    }
                    Err(e) => log::error!("Cannot lay out a new course: {}", e),
                }
            }
        }

        InputEvent::KeyDown(Key::Other(_)) => {}
    }

    Flow::Continue
}
