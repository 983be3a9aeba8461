//! Sling Golf - A drag-to-launch mini golf game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, AABB collisions, input reactions)
//! - `platform`: Collaborator interfaces (viewport, textures, input, audio)
//! - `audio`: Sound cues and volume mapping
//! - `game`: Frame driver tying the simulation to its collaborators
//! - `settings`: Runtime configuration

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds (62.5 Hz)
    pub const FIXED_DT: f64 = 0.016;
    /// Upper bound on a single frame's wall-clock delta fed to the accumulator
    pub const MAX_FRAME_DT: f64 = 0.25;

    /// Default playing field
    pub const FIELD_WIDTH: u32 = 640;
    pub const FIELD_HEIGHT: u32 = 480;

    /// Per-second velocity retention (v *= FRICTION^dt)
    pub const FRICTION: f32 = 0.6;
    /// Speed proxy below which extra damping kicks in
    pub const LOW_SPEED: f32 = 10.0;
    /// Extra per-step damping applied at low speed
    pub const LOW_SPEED_DAMPING: f32 = 0.99;
    /// Velocity components below this magnitude snap to zero
    pub const SNAP_THRESHOLD: f32 = 0.5;
    /// Divisor between velocity units and speed proxy units
    pub const SPEED_PROXY_SCALE: f32 = 10.0;

    /// Maximum drag length in input units
    pub const MAX_DRAG: f32 = 100.0;
    /// Input units to velocity units
    pub const LAUNCH_POWER: f32 = 10.0;
    /// Minimum drag as a fraction of ball width
    pub const MIN_DRAG_FRACTION: f32 = 0.5;

    /// Ball center must be closer than this to the hole center to count
    pub const WIN_DISTANCE: f32 = 7.5;
    /// Ball speed proxy must be below this to drop in
    pub const WIN_MAX_SPEED: f32 = 70.0;
    /// Size lost per step while dropping into the hole
    pub const SHRINK_PER_STEP: f32 = 0.5;

    /// Speed to volume scale (100 drag units maps to full volume)
    pub const VOLUME_SCALE: f32 = 1.28;
    /// Loudest volume an audio sink accepts
    pub const MAX_VOLUME: f32 = 128.0;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 5;
    pub const MAX_OBSTACLES: usize = 32;
    /// Free space kept around the hole and between obstacles at placement
    pub const PLACEMENT_CLEARANCE: f32 = 16.0;
    /// Rejection sampling budget per entity
    pub const PLACEMENT_ATTEMPTS: u32 = 64;
    /// Largest share of the spawn range the placed entities may block
    pub const MAX_CROWDING: f32 = 0.5;
}
