//! Game state and core simulation types
//!
//! Every step produces a fresh `GameState`; nothing here is mutated in place
//! across steps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::brick_field;
use crate::consts::*;

/// One discrete timestep of the game clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Wall-clock time of the sample (ms)
    pub time: f64,
    /// Seconds elapsed since the previous sample, never negative
    pub delta: f32,
}

impl Tick {
    pub fn new(time: f64, delta: f32) -> Self {
        Self {
            time,
            delta: delta.max(0.0),
        }
    }
}

/// Size of the drawing surface the game is played on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Leftmost paddle center
    pub fn paddle_min(&self) -> f32 {
        PADDLE_WIDTH / 2.0
    }

    /// Rightmost paddle center
    pub fn paddle_max(&self) -> f32 {
        self.width - PADDLE_WIDTH / 2.0
    }

    pub fn clamp_paddle(&self, x: f32) -> f32 {
        x.min(self.paddle_max()).max(self.paddle_min())
    }
}

/// The ball. `direction` is velocity-like and never normalized; its signs
/// encode the bounce state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub direction: Vec2,
}

impl Ball {
    pub fn new(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Where the ball would be after one more raw `direction` step
    #[inline]
    pub fn lookahead(&self) -> Vec2 {
        self.position + self.direction
    }
}

/// A rectangular target, addressed by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Surfaces hit during a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collisions {
    pub paddle: bool,
    pub wall: bool,
    pub ceiling: bool,
    pub brick: bool,
}

impl Collisions {
    pub fn any(&self) -> bool {
        self.paddle || self.wall || self.ceiling || self.brick
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Ball dropped past the floor
    Loss,
    /// Every brick destroyed
    Win,
}

/// Complete snapshot of one session at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tick: Tick,
    /// Paddle center x
    pub paddle: f32,
    pub ball: Ball,
    /// Remaining bricks, in layout order
    pub bricks: Vec<Brick>,
    pub collisions: Collisions,
    pub score: u32,
}

impl GameState {
    /// Fresh session state: full brick grid, centered ball, zero score
    pub fn new(field: &Playfield) -> Self {
        let (dx, dy) = BALL_START_DIRECTION;
        Self {
            tick: Tick::default(),
            paddle: field.width / 2.0,
            ball: Ball::new(
                Vec2::new(field.width / 2.0, field.height / 2.0),
                Vec2::new(dx, dy),
            ),
            bricks: brick_field(field.width),
            collisions: Collisions::default(),
            score: 0,
        }
    }

    /// Terminal check against this snapshot. A lost ball wins over an empty
    /// brick set.
    pub fn outcome(&self, field: &Playfield) -> Option<Outcome> {
        if self.ball.position.y > field.height - BALL_RADIUS {
            Some(Outcome::Loss)
        } else if self.bricks.is_empty() {
            Some(Outcome::Win)
        } else {
            None
        }
    }

    /// Pretty JSON dump for the debug panel (bricks summarized by count)
    pub fn debug_dump(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Dump<'a> {
            tick: &'a Tick,
            paddle: f32,
            ball: &'a Ball,
            collisions: &'a Collisions,
            score: u32,
            bricks_left: usize,
        }

        serde_json::to_string_pretty(&Dump {
            tick: &self.tick,
            paddle: self.paddle,
            ball: &self.ball,
            collisions: &self.collisions,
            score: self.score,
            bricks_left: self.bricks.len(),
        })
    }
}
