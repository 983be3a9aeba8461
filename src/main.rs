//! Sling Golf entry point
//!
//! Native headless mode: lays out a course, then a simple caddie keeps
//! putting toward the hole until it drops or the frame budget runs out.

use std::path::PathBuf;
use std::time::Duration;

use sling_golf::consts::{FIXED_DT, FRICTION, LAUNCH_POWER, MAX_DRAG};
use sling_golf::game::EntityTextures;
use sling_golf::platform::{
    FixedTextures, FrameClock, HeadlessViewport, LogAudio, ScriptedInput, SteadyClock, WallClock,
};
use sling_golf::sim::{Flow, GameState, InputEvent};
use sling_golf::{Game, Settings};

/// Give up after this many strokes
const MAX_STROKES: u32 = 20;

/// Press on the ball and release behind it so the roll ends near the hole
fn plan_shot(state: &GameState) -> Vec<Vec<InputEvent>> {
    let center = state.ball.body.center();
    let to_hole = state.hole.body.center() - center;
    let dir = to_hole.normalize_or_zero();

    // Rolling distance under pure friction is v0 / ln(1 / FRICTION)
    let reach_per_drag = LAUNCH_POWER / (1.0 / FRICTION).ln();
    let drag = (to_hole.length() / reach_per_drag).clamp(state.ball.min_drag() + 1.0, MAX_DRAG);
    let release = center - dir * drag;

    vec![
        vec![InputEvent::PointerDown {
            x: center.x,
            y: center.y,
        }],
        vec![InputEvent::PointerUp {
            x: release.x,
            y: release.y,
        }],
    ]
}

fn main() {
    env_logger::init();
    log::info!("Sling Golf (headless) starting...");

    let mut settings_path: Option<PathBuf> = None;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            "--print-config" => {
                println!("{}", Settings::default().to_json());
                return;
            }
            _ => settings_path = Some(PathBuf::from(arg)),
        }
    }
    let settings = Settings::load_or_default(settings_path.as_deref());

    let mut textures = FixedTextures::new();
    let sizes = settings.textures;
    let handles = EntityTextures {
        ball: textures.insert(sizes.ball.0, sizes.ball.1),
        hole: textures.insert(sizes.hole.0, sizes.hole.1),
        obstacle: textures.insert(sizes.obstacle.0, sizes.obstacle.1),
    };
    let mut viewport = HeadlessViewport::new(settings.field_width, settings.field_height);
    let seed = settings.seed.unwrap_or_else(rand::random);

    let mut game = match Game::new(&settings, &textures, handles, &viewport, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    let mut clock: Box<dyn FrameClock> = if realtime {
        viewport.frame_pause = Some(Duration::from_secs_f64(FIXED_DT));
        Box::new(WallClock::new())
    } else {
        Box::new(SteadyClock::new(1.0 / 60.0))
    };
    let mut input = ScriptedInput::new();
    let mut audio = LogAudio::default();

    let mut strokes = 0;
    let mut frames = 0;
    while frames < settings.max_frames {
        let state = game.state();
        if state.won {
            if state.ball.body.size.x <= 0.0 {
                break;
            }
        } else if !state.ball.moving && input.is_idle() {
            if strokes == MAX_STROKES {
                log::warn!("Out of strokes");
                break;
            }
            strokes += 1;
            for batch in plan_shot(state) {
                input.push_frame(batch);
            }
        }

        frames += 1;
        if game.frame(clock.frame_delta(), &mut input, &mut audio, &mut viewport) == Flow::Quit {
            break;
        }
    }

    if game.state().won {
        log::info!("Holed in {} strokes (seed {})", strokes, game.seed());
        println!("Holed in {} strokes (seed {})", strokes, game.seed());
    } else {
        log::info!("Gave up after {} strokes (seed {})", strokes, game.seed());
        println!("No luck after {} strokes (seed {})", strokes, game.seed());
    }
    log::info!("{} frames, {} sounds", frames, audio.played.len());
}
