use glam::Vec2;
use sling_golf::consts::*;
use sling_golf::game::EntityTextures;
use sling_golf::platform::{FixedTextures, HeadlessViewport, LogAudio, ScriptedInput, SteadyClock};
use sling_golf::sim::{
    Body, Direction, Field, GameEvent, GameState, InputEvent, Obstacle, Sprite, Sprites,
    TextureHandle, check_win, classify, handle_input, launch_impulse, resolve_obstacle, tick,
};
use sling_golf::{Game, Settings};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn state(width: f32, height: f32) -> GameState {
    let sprite = |id, size| Sprite {
        texture: TextureHandle(id),
        size: Vec2::splat(size),
    };
    let sprites = Sprites {
        ball: sprite(0, 20.0),
        hole: sprite(1, 20.0),
        obstacle: sprite(2, 40.0),
    };
    GameState::new(Field::new(width, height), &sprites, 0)
}

#[test]
fn wall_bounce_clamps_and_reflects() {
    let mut state = state(480.0, 320.0);
    state.hole.body.pos = Vec2::new(20.0, 280.0);
    state.ball.body.pos = Vec2::new(100.0, 100.0);
    // 50 drag units straight right
    let impulse = launch_impulse(Vec2::new(110.0, 110.0), Vec2::new(60.0, 110.0), 10.0).unwrap();
    state.ball.launch(impulse.velocity);
    assert_eq!(state.ball.vel, Vec2::new(500.0, 0.0));

    let mut events = Vec::new();
    for _ in 0..1000 {
        tick(&mut state, FIXED_DT as f32, &mut events);
        if !events.is_empty() {
            break;
        }
    }

    assert!(matches!(events.as_slice(), [GameEvent::Collided { .. }]));
    assert_eq!(state.ball.body.pos.x, 460.0);
    assert!(state.ball.vel.x < 0.0);
    assert_eq!(state.ball.body.pos.y, 100.0);
}

#[test]
fn short_drag_is_discarded() {
    let mut state = state(480.0, 320.0);
    state.ball.body.pos = Vec2::new(100.0, 100.0);
    let mut rng = Pcg32::seed_from_u64(0);
    let mut events = Vec::new();

    handle_input(&mut state, InputEvent::PointerDown { x: 110.0, y: 110.0 }, &mut rng, &mut events);
    assert!(state.locked);
    // Half the ball width is 10; a 5 unit drag does nothing
    handle_input(&mut state, InputEvent::PointerUp { x: 113.0, y: 114.0 }, &mut rng, &mut events);

    assert!(!state.ball.moving);
    assert_eq!(state.ball.vel, Vec2::ZERO);
    assert!(events.is_empty());
}

#[test]
fn slow_ball_near_hole_wins() {
    let mut state = state(480.0, 320.0);
    state.ball.body.pos = Vec2::new(190.0, 190.0);
    state.hole.body.pos = Vec2::new(193.0, 194.0);
    state.ball.launch(Vec2::new(100.0, 0.0));
    assert!((state.ball.speed - 10.0).abs() < 1e-5);

    let mut events = Vec::new();
    assert!(check_win(&mut state, &mut events));
    assert!(state.won);
    assert!(!state.ball.moving);
    assert_eq!(state.ball.vel, Vec2::ZERO);
    assert_eq!(events, vec![GameEvent::Holed]);
}

#[test]
fn fast_ball_flies_over_hole() {
    let mut state = state(480.0, 320.0);
    state.ball.body.pos = Vec2::new(190.0, 190.0);
    state.hole.body.pos = Vec2::new(193.0, 194.0);
    state.ball.launch(Vec2::new(900.0, 0.0));

    let mut events = Vec::new();
    assert!(!check_win(&mut state, &mut events));
    assert!(!state.won);
}

#[test]
fn left_of_tile_resolves_flush() {
    let ball = Body::new(Vec2::new(70.0, 100.0), Vec2::splat(20.0));
    let tile = Body::new(Vec2::new(100.0, 100.0), Vec2::splat(40.0));
    assert_eq!(classify(&ball, &tile), Direction::Left);

    let mut state = state(480.0, 320.0);
    state.ball.body = ball;
    state.ball.launch(Vec2::new(300.0, 20.0));
    assert!(resolve_obstacle(&mut state.ball, &tile, Direction::Left));
    assert_eq!(state.ball.body.pos.x, 80.0);
    assert_eq!(state.ball.vel, Vec2::new(-300.0, 20.0));
}

#[test]
fn ball_bounces_off_tile_from_above() {
    let mut state = state(480.0, 320.0);
    state.hole.body.pos = Vec2::new(400.0, 20.0);
    state.obstacles.push(Obstacle {
        body: Body::new(Vec2::new(100.0, 200.0), Vec2::splat(40.0)),
        texture: TextureHandle(2),
    });
    state.ball.body.pos = Vec2::new(110.0, 150.0);
    state.ball.launch(Vec2::new(0.0, 600.0));

    let mut events = Vec::new();
    for _ in 0..200 {
        tick(&mut state, FIXED_DT as f32, &mut events);
        if !events.is_empty() {
            break;
        }
    }

    assert_eq!(state.ball.body.pos.y, 180.0);
    assert!(state.ball.vel.y < 0.0);
}

#[test]
fn same_seed_same_session() {
    fn play() -> GameState {
        let mut textures = FixedTextures::new();
        let handles = EntityTextures {
            ball: textures.insert(16, 16),
            hole: textures.insert(24, 24),
            obstacle: textures.insert(32, 32),
        };
        let mut viewport = HeadlessViewport::new(640, 480);
        let mut game = Game::new(&Settings::default(), &textures, handles, &viewport, 2024).unwrap();

        let center = game.state().ball.body.center();
        let mut input = ScriptedInput::new();
        input.push_frame(vec![InputEvent::PointerDown {
            x: center.x,
            y: center.y,
        }]);
        input.push_frame(vec![InputEvent::PointerUp {
            x: center.x - 70.0,
            y: center.y + 45.0,
        }]);
        let mut audio = LogAudio::default();
        let mut clock = SteadyClock::new(1.0 / 60.0);
        game.run(&mut clock, &mut input, &mut audio, &mut viewport, 600);
        game.state().clone()
    }

    let a = play();
    let b = play();
    assert_eq!(a.time_ticks, b.time_ticks);
    assert_eq!(a.ball.body, b.ball.body);
    assert_eq!(a.ball.vel, b.ball.vel);
    assert_eq!(a.won, b.won);
}
