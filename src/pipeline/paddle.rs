//! Paddle position stream

use crate::consts::PADDLE_SPEED;
use crate::sim::{Playfield, Tick};

use super::cell::{Distinct, Latest};
use super::input::PaddleSignal;

/// Integrates held directions over ticks, or follows pointer coordinates,
/// into a clamped paddle center.
///
/// The seed position (field center) is never emitted; after that only
/// changed positions are.
#[derive(Debug, Clone)]
pub struct PaddleStream {
    field: Playfield,
    position: f32,
    direction: Latest<i8>,
    out: Distinct<f32>,
}

impl PaddleStream {
    pub fn new(field: Playfield) -> Self {
        Self {
            field,
            position: field.clamp_paddle(field.width / 2.0),
            direction: Latest::new(),
            out: Distinct::new(),
        }
    }

    /// Current stored position, emitted or not
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn on_signal(&mut self, signal: PaddleSignal) -> Option<f32> {
        match signal {
            PaddleSignal::Direction(direction) => {
                self.direction.set(direction);
                None
            }
            PaddleSignal::Pointer(x) => {
                self.position = self.field.clamp_paddle(x);
                self.out.update(self.position)
            }
        }
    }

    /// Nothing moves until a direction has been seen at least once
    pub fn on_tick(&mut self, tick: &Tick) -> Option<f32> {
        let direction = self.direction.value()?;
        let moved = self.position + f32::from(direction) * tick.delta * PADDLE_SPEED;
        self.position = self.field.clamp_paddle(moved);
        self.out.update(self.position)
    }
}
