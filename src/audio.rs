//! Audio cue mapping
//!
//! The simulation reports `GameEvent`s; this module turns them into sound
//! requests for whatever `AudioSink` the platform provides. Playback itself
//! is the sink's business.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_VOLUME, VOLUME_SCALE};
use crate::platform::AudioSink;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball launched (swing)
    Launch,
    /// Ball hits a wall or obstacle
    Collision,
    /// Ball dropped into the hole
    Holed,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Launch => "launch",
            SoundEffect::Collision => "collision",
            SoundEffect::Holed => "holed",
        }
    }
}

/// Map a game event to a sound and its raw volume (speed × 1.28)
///
/// Launch volume comes from the capped drag length, collision volume from the
/// ball's speed after the bounce. Holed plays at full volume.
pub fn sound_for(event: &GameEvent) -> Option<(SoundEffect, f32)> {
    match *event {
        GameEvent::Launched { power } => Some((SoundEffect::Launch, power * VOLUME_SCALE)),
        GameEvent::Collided { speed } => Some((SoundEffect::Collision, speed * VOLUME_SCALE)),
        GameEvent::Holed => Some((SoundEffect::Holed, MAX_VOLUME)),
        GameEvent::Reset => None,
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(1.0, false)
    }
}

impl AudioManager {
    pub fn new(master_volume: f32, muted: bool) -> Self {
        Self {
            master_volume: master_volume.clamp(0.0, 1.0),
            muted,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Scale a raw cue volume into the sink's 0..=128 range
    pub fn effective_volume(&self, raw: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            (raw * self.master_volume).clamp(0.0, MAX_VOLUME)
        }
    }

    /// Forward every sound-worthy event to the sink
    pub fn play_events<'a, S, I>(&self, sink: &mut S, events: I)
    where
        S: AudioSink + ?Sized,
        I: IntoIterator<Item = &'a GameEvent>,
    {
        for event in events {
            let Some((effect, raw)) = sound_for(event) else {
                continue;
            };
            let vol = self.effective_volume(raw);
            if vol <= 0.0 {
                continue;
            }
            sink.play(effect, vol);
        }
    }
}
