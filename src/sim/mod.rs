//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only, and only at placement time
//! - Stable iteration order (obstacles resolve in index order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod input;
pub mod placement;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{Direction, ball_in_hole, check_win, classify, resolve_bounds, resolve_obstacle, resolve_obstacles};
pub use input::{AimPreview, Flow, Impulse, InputEvent, Key, aim_preview, handle_input, launch_impulse};
pub use placement::{crowding, random_spot, randomize};
pub use state::{Ball, Field, GameEvent, GameState, Hole, Obstacle, Sprite, Sprites, TextureHandle};
pub use tick::{FixedStepper, tick};
