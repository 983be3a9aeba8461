//! Game state and core simulation types
//!
//! Entities are plain bodies plus role-specific fields. Textures are opaque
//! handles into the renderer's asset table; the simulation only reads their
//! dimensions when sizing entities.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;

/// Non-owning index into the renderer's texture table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// A texture handle together with the size it was loaded at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub texture: TextureHandle,
    pub size: Vec2,
}

/// Sprites for every entity kind in a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub ball: Sprite,
    pub hole: Sprite,
    pub obstacle: Sprite,
}

/// Playing field bounds (from the viewport)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Things that happened during input handling or a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball launched with the given capped drag length
    Launched { power: f32 },
    /// Ball bounced off a wall or obstacle, with its speed after the bounce
    Collided { speed: f32 },
    /// Ball dropped into the hole
    Holed,
    /// Course re-randomized after a win
    Reset,
}

/// The player's ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub texture: TextureHandle,
    /// Size the ball spawns at (restored on reset)
    pub base_size: Vec2,
    pub vel: Vec2,
    /// Speed proxy: |vel / 10|
    pub speed: f32,
    pub moving: bool,
}

impl Ball {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, sprite.size),
            texture: sprite.texture,
            base_size: sprite.size,
            vel: Vec2::ZERO,
            speed: 0.0,
            moving: false,
        }
    }

    /// Advance the ball by `dt` seconds under friction
    ///
    /// Decay happens before the position update so the displacement already
    /// uses the slower velocity; snapping happens after so a nearly stopped
    /// ball still gets its last small move.
    pub fn integrate(&mut self, dt: f32) {
        if !self.moving {
            return;
        }

        let extra = if self.speed < LOW_SPEED {
            LOW_SPEED_DAMPING
        } else {
            1.0
        };
        self.vel *= FRICTION.powf(dt) * extra;
        self.speed = (self.vel / SPEED_PROXY_SCALE).length();

        self.body.pos += self.vel * dt;

        if self.vel.x.abs() < SNAP_THRESHOLD {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < SNAP_THRESHOLD {
            self.vel.y = 0.0;
        }

        if self.vel == Vec2::ZERO {
            self.stop();
        }
    }

    /// Set the ball in motion
    pub fn launch(&mut self, vel: Vec2) {
        self.vel = vel;
        self.speed = (vel / SPEED_PROXY_SCALE).length();
        self.moving = true;
    }

    /// Bring the ball to rest immediately
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
        self.speed = 0.0;
        self.moving = false;
    }

    /// Shrink around the current center (hole drop animation)
    ///
    /// Each axis moves by half of what it actually lost, so an axis already
    /// at zero stays put.
    pub fn shrink(&mut self, factor: f32) {
        let size = (self.body.size - Vec2::splat(factor)).max(Vec2::ZERO);
        self.body.pos += (self.body.size - size) / 2.0;
        self.body.size = size;
    }

    /// Restore spawn size after a drop animation
    pub fn restore_size(&mut self) {
        self.body.size = self.base_size;
    }

    /// Shortest drag that counts as a shot
    pub fn min_drag(&self) -> f32 {
        self.body.size.x * MIN_DRAG_FRACTION
    }
}

/// A static obstacle tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    pub texture: TextureHandle,
}

impl Obstacle {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, sprite.size),
            texture: sprite.texture,
        }
    }
}

/// The target hole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hole {
    pub body: Body,
    pub texture: TextureHandle,
}

impl Hole {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, sprite.size),
            texture: sprite.texture,
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub ball: Ball,
    pub hole: Hole,
    /// Obstacles in resolution order
    pub obstacles: Vec<Obstacle>,
    /// A drag that started on the ball is in progress
    pub locked: bool,
    /// Ball has dropped into the hole
    pub won: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a session with every entity at the origin (call placement next)
    pub fn new(field: Field, sprites: &Sprites, obstacle_count: usize) -> Self {
        Self {
            field,
            ball: Ball::new(sprites.ball),
            hole: Hole::new(sprites.hole),
            obstacles: (0..obstacle_count)
                .map(|_| Obstacle::new(sprites.obstacle))
                .collect(),
            locked: false,
            won: false,
            time_ticks: 0,
        }
    }
}
