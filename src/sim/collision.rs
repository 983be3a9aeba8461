//! Collision detection and response for axis-aligned boxes
//!
//! Three checks run every tick: the ball against the field edges, the ball
//! against the first obstacle it hits, and the ball against the hole.

use super::body::Body;
use super::state::{Ball, Field, GameEvent, GameState, Hole, Obstacle};
use crate::consts::*;

/// Side of `other` that `self` lies on, from the first separating axis found
///
/// Screen space: `Up` means above (smaller y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Boxes overlap, no separating axis
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Classify where `a` sits relative to `b`
///
/// Checks run in a fixed order and the first that holds wins, so a diagonal
/// separation is always reported as horizontal.
pub fn classify(a: &Body, b: &Body) -> Direction {
    if a.right() < b.left() {
        return Direction::Left;
    }
    if a.left() > b.right() {
        return Direction::Right;
    }
    if a.bottom() < b.top() {
        return Direction::Up;
    }
    if a.top() > b.bottom() {
        return Direction::Down;
    }
    Direction::None
}

/// Push the ball flush against `obstacle` on the `from` side and reflect
///
/// Returns false for `Direction::None` (nothing to resolve).
pub fn resolve_obstacle(ball: &mut Ball, obstacle: &Body, from: Direction) -> bool {
    match from {
        Direction::Left => {
            ball.body.pos.x = obstacle.left() - ball.body.size.x;
            ball.vel.x = -ball.vel.x;
        }
        Direction::Right => {
            ball.body.pos.x = obstacle.right();
            ball.vel.x = -ball.vel.x;
        }
        Direction::Up => {
            ball.body.pos.y = obstacle.top() - ball.body.size.y;
            ball.vel.y = -ball.vel.y;
        }
        Direction::Down => {
            ball.body.pos.y = obstacle.bottom();
            ball.vel.y = -ball.vel.y;
        }
        Direction::None => return false,
    }
    true
}

/// Keep the ball inside the field, reflecting off the edges
///
/// Each axis is handled independently; a corner hit fires on both axes.
pub fn resolve_bounds(ball: &mut Ball, field: &Field, events: &mut Vec<GameEvent>) {
    let size = ball.body.size;

    let hit_x = if ball.body.pos.x < 0.0 {
        ball.body.pos.x = 0.0;
        true
    } else if ball.body.pos.x + size.x > field.width {
        ball.body.pos.x = field.width - size.x;
        true
    } else {
        false
    };
    if hit_x {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::Collided {
            speed: ball.vel.length(),
        });
    }

    let hit_y = if ball.body.pos.y < 0.0 {
        ball.body.pos.y = 0.0;
        true
    } else if ball.body.pos.y + size.y > field.height {
        ball.body.pos.y = field.height - size.y;
        true
    } else {
        false
    };
    if hit_y {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::Collided {
            speed: ball.vel.length(),
        });
    }
}

/// Side of `b` that `a` rests against when the two share an edge
fn touching_side(a: &Body, b: &Body) -> Direction {
    if a.right() <= b.left() {
        Direction::Left
    } else if a.left() >= b.right() {
        Direction::Right
    } else if a.bottom() <= b.top() {
        Direction::Up
    } else if a.top() >= b.bottom() {
        Direction::Down
    } else {
        Direction::None
    }
}

/// Resolve the ball against the first obstacle it intersects
///
/// `previous` is the ball's box at the start of the tick; the side it was on
/// decides the push-out direction. A ball that started flush against a face
/// is pushed back out of that face. A ball that was already inside the
/// obstacle classifies as `None` and is left alone this tick.
///
/// Returns the index of the obstacle that was hit, if any.
pub fn resolve_obstacles(
    ball: &mut Ball,
    previous: &Body,
    obstacles: &[Obstacle],
    events: &mut Vec<GameEvent>,
) -> Option<usize> {
    let index = obstacles
        .iter()
        .position(|obstacle| ball.body.intersects(&obstacle.body))?;
    let obstacle = &obstacles[index].body;

    let mut from = classify(previous, obstacle);
    if from == Direction::None && !previous.intersects(obstacle) {
        from = touching_side(previous, obstacle);
    }
    if resolve_obstacle(ball, obstacle, from) {
        events.push(GameEvent::Collided {
            speed: ball.vel.length(),
        });
    } else {
        log::debug!("Ball embedded in obstacle {}, no push-out this tick", index);
    }
    Some(index)
}

/// Distance between the ball and hole centers
pub fn hole_distance(ball: &Ball, hole: &Hole) -> f32 {
    ball.body.center().distance(hole.body.center())
}

/// True if the ball is close enough and slow enough to drop in
pub fn ball_in_hole(ball: &Ball, hole: &Hole) -> bool {
    hole_distance(ball, hole) < WIN_DISTANCE && ball.speed < WIN_MAX_SPEED
}

/// Evaluate the win condition; fires `Holed` only on the transition
pub fn check_win(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if state.won || !ball_in_hole(&state.ball, &state.hole) {
        return false;
    }

    state.ball.stop();
    state.won = true;
    events.push(GameEvent::Holed);
    true
}
