use glam::Vec2;
use proptest::prelude::*;
use std::f32::consts::PI;
use sling_golf::consts::*;
use sling_golf::sim::{
    Ball, Body, Direction, Field, GameEvent, GameState, Obstacle, Sprite, Sprites, TextureHandle,
    classify, launch_impulse, tick,
};

fn ball_sprite() -> Sprite {
    Sprite {
        texture: TextureHandle(0),
        size: Vec2::splat(20.0),
    }
}

fn state(width: f32, height: f32) -> GameState {
    let sprites = Sprites {
        ball: ball_sprite(),
        hole: Sprite {
            texture: TextureHandle(1),
            size: Vec2::splat(24.0),
        },
        obstacle: Sprite {
            texture: TextureHandle(2),
            size: Vec2::splat(32.0),
        },
    };
    GameState::new(Field::new(width, height), &sprites, 0)
}

/// Tiles kept at least a ball's width from every edge, as placement does
fn course() -> Vec<Obstacle> {
    [(40.0, 40.0), (150.0, 120.0), (260.0, 30.0), (300.0, 240.0), (408.0, 150.0)]
        .into_iter()
        .map(|(x, y)| Obstacle {
            body: Body::new(Vec2::new(x, y), Vec2::splat(32.0)),
            texture: TextureHandle(2),
        })
        .collect()
}

fn velocity() -> impl Strategy<Value = Vec2> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0)
        .prop_filter("moving", |(x, y)| x.abs() >= 1.0 || y.abs() >= 1.0)
        .prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn friction_never_speeds_up(vel in velocity(), dt in 0.001f32..0.05) {
        let mut ball = Ball::new(ball_sprite());
        ball.launch(vel);

        let mut last = ball.speed;
        let mut steps = 0;
        while ball.moving {
            ball.integrate(dt);
            prop_assert!(ball.speed <= last, "speed rose from {} to {}", last, ball.speed);
            last = ball.speed;
            steps += 1;
            prop_assert!(steps < 200_000, "ball never stopped");
        }
        prop_assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn small_components_snap(vel in velocity(), dt in 0.001f32..0.05) {
        let mut ball = Ball::new(ball_sprite());
        ball.launch(vel);
        for _ in 0..50 {
            ball.integrate(dt);
            for v in [ball.vel.x, ball.vel.y] {
                prop_assert!(v == 0.0 || v.abs() >= SNAP_THRESHOLD);
            }
        }
    }

    #[test]
    fn ball_stays_on_field(
        x in 0.0f32..460.0,
        y in 0.0f32..300.0,
        vel in velocity(),
        steps in 1usize..400,
    ) {
        let mut state = state(480.0, 320.0);
        state.hole.body.pos = Vec2::new(-500.0, -500.0);
        state.ball.body.pos = Vec2::new(x, y);
        state.ball.launch(vel);

        let mut events = Vec::new();
        for _ in 0..steps {
            tick(&mut state, FIXED_DT as f32, &mut events);
            let pos = state.ball.body.pos;
            let size = state.ball.body.size;
            prop_assert!(pos.x >= 0.0 && pos.x <= 480.0 - size.x, "x = {}", pos.x);
            prop_assert!(pos.y >= 0.0 && pos.y <= 320.0 - size.y, "y = {}", pos.y);
        }
    }

    #[test]
    fn ball_stays_on_field_among_tiles(
        x in 0.0f32..460.0,
        y in 0.0f32..300.0,
        vel in velocity(),
        steps in 1usize..400,
    ) {
        let mut state = state(480.0, 320.0);
        state.hole.body.pos = Vec2::new(-500.0, -500.0);
        state.obstacles = course();
        state.ball.body.pos = Vec2::new(x, y);
        prop_assume!(state.obstacles.iter().all(|o| !o.body.overlaps(&state.ball.body)));
        state.ball.launch(vel);

        let mut events = Vec::new();
        for _ in 0..steps {
            tick(&mut state, FIXED_DT as f32, &mut events);
            let pos = state.ball.body.pos;
            let size = state.ball.body.size;
            prop_assert!(pos.x >= 0.0 && pos.x <= 480.0 - size.x, "x = {}", pos.x);
            prop_assert!(pos.y >= 0.0 && pos.y <= 320.0 - size.y, "y = {}", pos.y);
        }
    }

    #[test]
    fn horizontal_separation_wins_ties(
        ax in 0.0f32..100.0,
        ay in 0.0f32..400.0,
        gap in 0.1f32..50.0,
        by in 0.0f32..400.0,
        w in 1.0f32..40.0,
        h in 1.0f32..40.0,
    ) {
        let a = Body::new(Vec2::new(ax, ay), Vec2::new(w, h));
        let b = Body::new(Vec2::new(ax + w + gap, by), Vec2::new(w, h));

        let first = classify(&a, &b);
        prop_assert_eq!(first, Direction::Left);
        prop_assert_eq!(classify(&a, &b), first);
        prop_assert_eq!(classify(&b, &a), Direction::Right);
    }

    #[test]
    fn vertical_separation_when_columns_overlap(
        x in 0.0f32..100.0,
        ay in 0.0f32..100.0,
        gap in 0.1f32..50.0,
        shift in -10.0f32..10.0,
    ) {
        let a = Body::new(Vec2::new(x, ay), Vec2::splat(20.0));
        let b = Body::new(Vec2::new(x + shift, ay + 20.0 + gap), Vec2::splat(20.0));

        prop_assert_eq!(classify(&a, &b), Direction::Up);
        prop_assert_eq!(classify(&b, &a), Direction::Down);
    }

    #[test]
    fn launch_speed_is_capped(angle in -PI..PI, length in 10.5f32..600.0) {
        let drag = Vec2::new(angle.cos(), angle.sin()) * length;
        let impulse = launch_impulse(Vec2::ZERO, -drag, 10.0).unwrap();

        let expected = length.min(MAX_DRAG) * LAUNCH_POWER;
        prop_assert!((impulse.velocity.length() - expected).abs() < expected * 1e-4);
        prop_assert!(impulse.velocity.normalize().dot(drag.normalize()) > 0.9999);
    }

    #[test]
    fn holed_fires_once(dx in -3.0f32..3.0, dy in -3.0f32..3.0, steps in 2usize..100) {
        let mut state = state(480.0, 320.0);
        state.hole.body.pos = Vec2::new(200.0, 150.0);
        let hole_center = state.hole.body.center();
        state.ball.body.pos = hole_center + Vec2::new(dx, dy) - Vec2::splat(10.0);

        let mut events = Vec::new();
        for _ in 0..steps {
            tick(&mut state, FIXED_DT as f32, &mut events);
        }

        let holed = events.iter().filter(|e| matches!(e, GameEvent::Holed)).count();
        prop_assert_eq!(holed, 1);
        prop_assert!(state.won);
    }
}
