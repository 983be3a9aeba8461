//! Platform abstraction layer
//!
//! The simulation talks to the outside world through these traits only:
//! - Viewport size and frame presentation
//! - Texture dimensions
//! - Input events
//! - Sound playback
//! - Frame timing

pub mod headless;

pub use headless::{FixedTextures, HeadlessViewport, LogAudio, ScriptedInput, SteadyClock, WallClock};

use crate::audio::SoundEffect;
use crate::sim::{AimPreview, GameState, InputEvent, TextureHandle};

/// Window or canvas the game draws into
pub trait Viewport {
    /// Playing field size in pixels
    fn size(&self) -> (u32, u32);

    /// Draw the latest simulated state (called once per frame)
    fn present(&mut self, state: &GameState, aim: Option<&AimPreview>);
}

/// Loaded image assets, addressed by handle
pub trait TextureProvider {
    /// Width and height of a loaded texture
    fn dimensions(&self, texture: TextureHandle) -> (u32, u32);
}

/// Non-blocking source of input events
pub trait InputSource {
    /// Called once at the top of each frame before polling
    fn begin_frame(&mut self) {}

    /// Next pending event, or `None` once this frame's queue is empty
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Fire-and-forget sound playback
pub trait AudioSink {
    /// Play `effect` at `volume` (0..=128)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Source of per-frame time deltas in seconds
pub trait FrameClock {
    fn frame_delta(&mut self) -> f64;
}
