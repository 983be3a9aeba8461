//! Headless collaborators
//!
//! Used by the native binary and the tests: no window, no decoder, no mixer.
//! Frames are logged instead of drawn and sounds are logged instead of played.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use super::{AudioSink, FrameClock, InputSource, TextureProvider, Viewport};
use crate::audio::SoundEffect;
use crate::sim::{AimPreview, GameState, InputEvent, TextureHandle};

/// Viewport that only counts frames
#[derive(Debug, Clone)]
pub struct HeadlessViewport {
    width: u32,
    height: u32,
    /// Frames presented so far
    pub frames: u64,
    /// Sleep after each frame (for real-time pacing)
    pub frame_pause: Option<Duration>,
}

impl HeadlessViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: 0,
            frame_pause: None,
        }
    }
}

impl Viewport for HeadlessViewport {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&mut self, state: &GameState, aim: Option<&AimPreview>) {
        self.frames += 1;
        if let Some(aim) = aim {
            log::trace!(
                "Frame {}: aiming {:.1}° at {:.0}% power",
                self.frames,
                aim.angle_deg,
                aim.power_fraction * 100.0
            );
        } else if state.ball.moving {
            log::trace!(
                "Frame {}: ball at {:?} speed {:.1}",
                self.frames,
                state.ball.body.pos,
                state.ball.speed
            );
        }
        if let Some(pause) = self.frame_pause {
            std::thread::sleep(pause);
        }
    }
}

/// Texture table with dimensions known up front
#[derive(Debug, Clone, Default)]
pub struct FixedTextures {
    sizes: HashMap<TextureHandle, (u32, u32)>,
}

impl FixedTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture and return its handle
    pub fn insert(&mut self, width: u32, height: u32) -> TextureHandle {
        let handle = TextureHandle(self.sizes.len() as u32);
        self.sizes.insert(handle, (width, height));
        handle
    }
}

impl TextureProvider for FixedTextures {
    fn dimensions(&self, texture: TextureHandle) -> (u32, u32) {
        match self.sizes.get(&texture) {
            Some(&size) => size,
            None => {
                log::warn!("Unknown texture {:?}, treating as empty", texture);
                (0, 0)
            }
        }
    }
}

/// Input source fed from a queue of per-frame event batches
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
    current: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events delivered on a future frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    /// True when nothing is queued for upcoming frames
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.current.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn begin_frame(&mut self) {
        self.current = self.frames.pop_front().unwrap_or_default().into();
    }

    fn poll(&mut self) -> Option<InputEvent> {
        self.current.pop_front()
    }
}

/// Audio sink that logs each cue and remembers it
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    pub played: Vec<(SoundEffect, f32)>,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound {} at volume {:.0}", effect.as_str(), volume);
        self.played.push((effect, volume));
    }
}

/// Constant frame delta (simulated display rate)
#[derive(Debug, Clone, Copy)]
pub struct SteadyClock {
    pub frame_dt: f64,
}

impl SteadyClock {
    pub fn new(frame_dt: f64) -> Self {
        Self { frame_dt }
    }
}

impl FrameClock for SteadyClock {
    fn frame_delta(&mut self) -> f64 {
        self.frame_dt
    }
}

/// Wall-clock frame delta from a monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    last: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl FrameClock for WallClock {
    fn frame_delta(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f64()
    }
}
