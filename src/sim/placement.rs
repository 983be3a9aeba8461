//! Random course layout
//!
//! Runs at spawn and on reset only, never inside the tick loop. The RNG is
//! passed in so a seeded generator gives a reproducible course.

use glam::Vec2;
use rand::Rng;

use super::body::Body;
use super::state::{Field, GameState, Sprites};
use crate::consts::*;
use crate::error::SettingsError;

/// Pick an integer coordinate in `[size, extent - size)`
///
/// The margin keeps the whole box on screen. A degenerate range (field too
/// small) falls back to the margin itself; `Settings::validate` rules that out.
fn spawn_coord<R: Rng + ?Sized>(rng: &mut R, extent: f32, size: f32) -> f32 {
    let low = size as i32;
    let high = (extent - size) as i32;
    if high <= low {
        return low as f32;
    }
    rng.random_range(low..high) as f32
}

/// Random top-left position for a box of `size` inside the field
pub fn random_spot<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, size: Vec2) -> Vec2 {
    Vec2::new(
        spawn_coord(rng, width, size.x),
        spawn_coord(rng, height, size.y),
    )
}

/// Area of spawn positions a box of `size` loses to `blocker`
///
/// A candidate is rejected when it touches the blocker grown by the
/// clearance, so the lost region is the Minkowski sum of the two boxes.
fn blocked_area(blocker: Vec2, size: Vec2) -> f32 {
    let lost = blocker + Vec2::splat(PLACEMENT_CLEARANCE * 2.0) + size;
    lost.x * lost.y
}

fn spawn_area(field: &Field, size: Vec2) -> f32 {
    let range = Vec2::new(field.width, field.height) - size * 2.0;
    range.x.max(0.0) * range.y.max(0.0)
}

/// Worst-case share of the spawn range already blocked when the last
/// obstacle or the ball is placed
///
/// Overlapping blockers are counted twice, so this over-estimates. Above
/// `MAX_CROWDING` the layout may run out of rejection attempts.
pub fn crowding(field: &Field, sprites: &Sprites, obstacle_count: usize) -> f32 {
    let fraction = |blocked: f32, size: Vec2| {
        let area = spawn_area(field, size);
        if area > 0.0 { blocked / area } else { f32::INFINITY }
    };
    let hole = sprites.hole.size;
    let obstacle = sprites.obstacle.size;
    let ball = sprites.ball.size;

    let last_obstacle = match obstacle_count {
        0 => 0.0,
        n => fraction(
            blocked_area(hole, obstacle) + (n - 1) as f32 * blocked_area(obstacle, obstacle),
            obstacle,
        ),
    };
    let ball = fraction(
        blocked_area(hole, ball) + obstacle_count as f32 * blocked_area(obstacle, ball),
        ball,
    );
    last_obstacle.max(ball)
}

/// Find a spot for `size` that avoids every box in `avoid`
///
/// Rejection-samples `PLACEMENT_ATTEMPTS` times, then walks the integer
/// spawn grid in order. `None` means the field has no clear spot at all.
fn place_clear<R: Rng + ?Sized>(
    rng: &mut R,
    field: &Field,
    size: Vec2,
    avoid: &[Body],
) -> Option<Vec2> {
    let clear = |pos: Vec2| {
        let candidate = Body::new(pos, size);
        !avoid.iter().any(|other| candidate.overlaps(other))
    };

    for _ in 0..PLACEMENT_ATTEMPTS {
        let pos = random_spot(rng, field.width, field.height, size);
        if clear(pos) {
            return Some(pos);
        }
    }

    let (x0, x1) = (size.x as i32, (field.width - size.x) as i32);
    let (y0, y1) = (size.y as i32, (field.height - size.y) as i32);
    let found = (y0..y1)
        .flat_map(|y| (x0..x1).map(move |x| Vec2::new(x as f32, y as f32)))
        .find(|&pos| clear(pos));
    if let Some(pos) = found {
        log::debug!("Rejection sampling missed, scanned to {:?}", pos);
    }
    found
}

/// Lay out the hole, then the obstacles around it, then the ball
///
/// Leaves the state untouched when some entity has nowhere clear to go.
pub fn randomize<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<(), SettingsError> {
    let field = state.field;
    let crowded = |entity: &'static str| SettingsError::CourseTooCrowded {
        entity,
        obstacles: state.obstacles.len(),
        field: (field.width as u32, field.height as u32),
    };

    let hole = Body::new(
        random_spot(rng, field.width, field.height, state.hole.body.size),
        state.hole.body.size,
    );

    let mut avoid = vec![hole.expanded(PLACEMENT_CLEARANCE)];
    let mut obstacles = Vec::with_capacity(state.obstacles.len());
    for obstacle in &state.obstacles {
        let size = obstacle.body.size;
        let pos = place_clear(rng, &field, size, &avoid).ok_or_else(|| crowded("obstacle"))?;
        let body = Body::new(pos, size);
        avoid.push(body.expanded(PLACEMENT_CLEARANCE));
        obstacles.push(body);
    }

    let ball_size = state.ball.base_size;
    let ball = place_clear(rng, &field, ball_size, &avoid).ok_or_else(|| crowded("ball"))?;

    state.hole.body = hole;
    for (obstacle, body) in state.obstacles.iter_mut().zip(obstacles) {
        obstacle.body = body;
    }
    state.ball.stop();
    state.ball.restore_size();
    state.ball.body.pos = ball;

    state.locked = false;
    log::debug!(
        "Course laid out: hole at {:?}, ball at {:?}, {} obstacles",
        state.hole.body.pos,
        state.ball.body.pos,
        state.obstacles.len()
    );
    Ok(())
}
