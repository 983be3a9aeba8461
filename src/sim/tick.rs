//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{check_win, resolve_bounds, resolve_obstacles};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Advance the game state by one fixed timestep
///
/// Stages run in a fixed order and each sees the corrections of the one
/// before: motion, field edges, obstacles, then the hole.
pub fn tick(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;

    let previous = state.ball.body;
    // A slow ball can come to rest in the same step it reaches a tile
    let was_moving = state.ball.moving;
    state.ball.integrate(dt);

    resolve_bounds(&mut state.ball, &state.field, events);

    if was_moving {
        resolve_obstacles(&mut state.ball, &previous, &state.obstacles, events);
    }

    if !state.won {
        if check_win(state, events) {
            log::info!("Holed after {} ticks", state.time_ticks);
        }
    } else {
        // Drop animation
        state.ball.shrink(SHRINK_PER_STEP);
    }
}

/// Accumulates wall-clock time and releases it in fixed steps
#[derive(Debug, Clone)]
pub struct FixedStepper {
    accumulator: f64,
    step: f64,
    max_frame_dt: f64,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(FIXED_DT, MAX_FRAME_DT)
    }
}

impl FixedStepper {
    pub fn new(step: f64, max_frame_dt: f64) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_frame_dt,
        }
    }

    /// Time banked but not yet simulated
    pub fn pending(&self) -> f64 {
        self.accumulator
    }

    /// Bank one frame's worth of wall-clock time
    ///
    /// Negative deltas are ignored; long stalls are clamped to `max_frame_dt`.
    pub fn accumulate(&mut self, frame_dt: f64) {
        self.accumulator += frame_dt.clamp(0.0, self.max_frame_dt);
    }

    /// Take one fixed step from the bank, if enough time is banked
    pub fn next_step(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            true
        } else {
            false
        }
    }

    /// Run `tick` until the bank is drained; returns the number of ticks
    pub fn drain(&mut self, state: &mut GameState, events: &mut Vec<GameEvent>) -> u32 {
        let dt = self.step as f32;
        let mut steps = 0;
        while self.next_step() {
            tick(state, dt, events);
            steps += 1;
        }
        steps
    }
}
