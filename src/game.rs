//! Frame driver
//!
//! Owns the session state and is the only place it is mutated from. Each
//! frame: bank elapsed time, drain all pending input, run the fixed ticks the
//! bank allows, send sounds, present.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::AudioManager;
use crate::error::SettingsError;
use crate::platform::{AudioSink, FrameClock, InputSource, TextureProvider, Viewport};
use crate::settings::Settings;
use crate::sim::{
    Field, FixedStepper, Flow, GameEvent, GameState, InputEvent, Sprite, Sprites, TextureHandle,
    aim_preview, crowding, handle_input, randomize,
};
use crate::consts::{FIXED_DT, MAX_CROWDING};

/// Texture handles for each entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityTextures {
    pub ball: TextureHandle,
    pub hole: TextureHandle,
    pub obstacle: TextureHandle,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    stepper: FixedStepper,
    rng: Pcg32,
    audio: AudioManager,
    /// Last known pointer position (for the aim preview)
    pointer: Vec2,
    /// Events produced this frame, handed to audio then cleared
    events: Vec<GameEvent>,
    seed: u64,
}

impl Game {
    /// Size the entities from their textures and lay out the first course
    pub fn new<T, V>(
        settings: &Settings,
        textures: &T,
        handles: EntityTextures,
        viewport: &V,
        seed: u64,
    ) -> Result<Self, SettingsError>
    where
        T: TextureProvider + ?Sized,
        V: Viewport + ?Sized,
    {
        settings.validate()?;
        let field_px = viewport.size();

        let sprite = |entity: &'static str, texture| -> Result<Sprite, SettingsError> {
            let size = textures.dimensions(texture);
            // Spawn range is [size, extent - size); it must be non-empty
            if field_px.0 <= size.0 * 2 || field_px.1 <= size.1 * 2 {
                return Err(SettingsError::FieldTooSmall {
                    entity,
                    field: field_px,
                    size,
                });
            }
            Ok(Sprite {
                texture,
                size: Vec2::new(size.0 as f32, size.1 as f32),
            })
        };
        let sprites = Sprites {
            ball: sprite("ball", handles.ball)?,
            hole: sprite("hole", handles.hole)?,
            obstacle: sprite("obstacle", handles.obstacle)?,
        };

        let field = Field::new(field_px.0 as f32, field_px.1 as f32);
        let crowded = crowding(&field, &sprites, settings.obstacle_count);
        if crowded > MAX_CROWDING {
            log::debug!("Course would block {:.0}% of the field", crowded * 100.0);
            return Err(SettingsError::CourseTooCrowded {
                entity: "obstacles",
                obstacles: settings.obstacle_count,
                field: field_px,
            });
        }

        let mut state = GameState::new(field, &sprites, settings.obstacle_count);
        let mut rng = Pcg32::seed_from_u64(seed);
        randomize(&mut state, &mut rng)?;

        log::info!(
            "Game initialized with seed {} on a {}x{} field",
            seed,
            field_px.0,
            field_px.1
        );

        Ok(Self {
            state,
            stepper: FixedStepper::new(FIXED_DT, settings.max_frame_dt),
            rng,
            audio: AudioManager::new(settings.master_volume, settings.muted),
            pointer: Vec2::ZERO,
            events: Vec::new(),
            seed,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// React to one input event
    pub fn handle_input(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::PointerDown { x, y }
            | InputEvent::PointerUp { x, y }
            | InputEvent::PointerMove { x, y } => self.pointer = Vec2::new(x, y),
            _ => {}
        }

        let start = self.events.len();
        let flow = handle_input(&mut self.state, event, &mut self.rng, &mut self.events);
        for event in &self.events[start..] {
            match event {
                GameEvent::Launched { power } => log::debug!("Launched with power {:.1}", power),
                GameEvent::Reset => log::info!("New course"),
                _ => {}
            }
        }
        flow
    }

    /// Run one display frame
    pub fn frame<I, A, V>(&mut self, frame_dt: f64, input: &mut I, audio: &mut A, viewport: &mut V) -> Flow
    where
        I: InputSource + ?Sized,
        A: AudioSink + ?Sized,
        V: Viewport + ?Sized,
    {
        self.stepper.accumulate(frame_dt);

        input.begin_frame();
        let mut flow = Flow::Continue;
        while let Some(event) = input.poll() {
            if self.handle_input(event) == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        if flow == Flow::Quit {
            log::info!("Quit requested");
            return flow;
        }

        self.stepper.drain(&mut self.state, &mut self.events);

        self.audio.play_events(audio, &self.events);
        self.events.clear();

        let aim = aim_preview(&self.state, self.pointer);
        viewport.present(&self.state, aim.as_ref());
        Flow::Continue
    }

    /// Run frames until quit or `max_frames`; returns frames run
    pub fn run<C, I, A, V>(
        &mut self,
        clock: &mut C,
        input: &mut I,
        audio: &mut A,
        viewport: &mut V,
        max_frames: u64,
    ) -> u64
    where
        C: FrameClock + ?Sized,
        I: InputSource + ?Sized,
        A: AudioSink + ?Sized,
        V: Viewport + ?Sized,
    {
        let mut frames = 0;
        while frames < max_frames {
            frames += 1;
            if self.frame(clock.frame_delta(), input, audio, viewport) == Flow::Quit {
                break;
            }
        }
        frames
    }
}
