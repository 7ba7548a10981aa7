//! Physics/collision step
//!
//! `step` is the reducer behind the game-state stream: previous state plus
//! one `(tick, paddle)` pair in, next state out.

use super::state::{Ball, Brick, Collisions, GameState, Playfield, Tick};
use crate::consts::*;

/// Advance the game by one tick.
///
/// Order matters:
/// 1. integrate the ball
/// 2. remove bricks hit by the ball's lookahead point
/// 3. paddle bounce
/// 4. side walls
/// 5. ceiling
///
/// Terminal conditions are not evaluated here; see [`GameState::outcome`].
pub fn step(prev: &GameState, tick: Tick, paddle: f32, field: &Playfield) -> GameState {
    let mut ball = Ball {
        position: prev.ball.position + prev.ball.direction * tick.delta * BALL_SPEED,
        direction: prev.ball.direction,
    };
    let mut collisions = Collisions::default();
    let mut score = prev.score;

    // Every brick under the lookahead point goes, but the ball only flips once
    let (hit, bricks): (Vec<Brick>, Vec<Brick>) = prev
        .bricks
        .iter()
        .copied()
        .partition(|brick| brick.hit_by(&ball));
    if !hit.is_empty() {
        ball.direction.y = -ball.direction.y;
        collisions.brick = true;
        score += BRICK_SCORE * hit.len() as u32;
    }

    let top = paddle_top(field.height);
    if ball.position.x > paddle - PADDLE_WIDTH / 2.0
        && ball.position.x < paddle + PADDLE_WIDTH / 2.0
        && ball.position.y > top
    {
        ball.position.y = top;
        ball.direction.y = -ball.direction.y;
        collisions.paddle = true;
    }

    let left_wall = ball.position.x < BALL_RADIUS;
    if left_wall || ball.position.x > field.width - BALL_RADIUS {
        ball.position.x = if left_wall {
            BALL_RADIUS
        } else {
            field.width - BALL_RADIUS
        };
        ball.direction.x = -ball.direction.x;
        collisions.wall = true;
    }

    if ball.position.y < BALL_RADIUS {
        ball.position.y = BALL_RADIUS;
        ball.direction.y = -ball.direction.y;
        collisions.ceiling = true;
    }

    GameState {
        tick,
        paddle,
        ball,
        bricks,
        collisions,
        score,
    }
}
