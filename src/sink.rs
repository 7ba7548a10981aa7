//! Render and audio post-processing
//!
//! Every presented state is drawn in full, then checked for a terminal
//! condition. Drawing goes through [`Canvas`], tones through a [`Beeper`].

use crate::audio::{Beeper, TonePlayer};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Ball, Brick, GameState, Outcome, Playfield};

/// Receives each state picked for display and reports whether it ended the
/// session.
pub trait StateSink {
    fn present(&mut self, state: &GameState, field: &Playfield) -> Option<Outcome>;

    /// Title screen shown when a session starts
    fn intro(&mut self) {}
}

/// Draw effects for one frame, in playfield coordinates
pub trait Canvas {
    fn clear(&mut self);
    /// Paddle centered on `x`, resting on the floor
    fn paddle(&mut self, x: f32);
    fn ball(&mut self, ball: &Ball);
    fn bricks(&mut self, bricks: &[Brick]);
    fn score(&mut self, score: u32);
    fn debug(&mut self, text: &str);
    /// Centered headline with smaller lines below it
    fn message(&mut self, headline: &str, details: &[&str]);
    /// Submit everything drawn since `clear`
    fn flush(&mut self) {}
}

const TITLE: &str = "Breakout";
const CREDITS: [&str; 2] = ["GWT version by Ignacio Baca", "JS version by Manuel Wieser"];

/// Tone for a brick hit, pitched by the ball's height
pub fn brick_tone(ball_y: f32) -> u8 {
    TONE_BRICK_BASE + ball_y.rem_euclid(12.0).floor() as u8
}

pub struct FrameSink<C: Canvas, P: TonePlayer> {
    canvas: C,
    beeper: Beeper<P>,
    settings: Settings,
}

impl<C: Canvas, P: TonePlayer> FrameSink<C, P> {
    pub fn new(canvas: C, player: P, settings: Settings) -> Self {
        Self {
            canvas,
            beeper: Beeper::new(player),
            settings,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn beeper(&self) -> &Beeper<P> {
        &self.beeper
    }

    /// Let the sampler play its pending tone, if the window elapsed
    pub fn poll_audio(&mut self, now_ms: f64) -> Option<u8> {
        self.beeper.poll(now_ms)
    }

    fn draw(&mut self, state: &GameState) {
        self.canvas.clear();
        self.canvas.paddle(state.paddle);
        self.canvas.ball(&state.ball);
        self.canvas.bricks(&state.bricks);
        self.canvas.score(state.score);

        if self.settings.show_debug {
            match state.debug_dump() {
                Ok(text) => self.canvas.debug(&text),
                Err(e) => log::warn!("Failed to serialize state: {e}"),
            }
        }
    }

    fn game_over(&mut self, headline: &str) {
        let hint = self.settings.control.replay_hint();
        self.canvas.message(headline, &[hint]);
    }
}

impl<C: Canvas, P: TonePlayer> StateSink for FrameSink<C, P> {
    fn present(&mut self, state: &GameState, field: &Playfield) -> Option<Outcome> {
        self.draw(state);

        let outcome = state.outcome(field);
        match outcome {
            Some(Outcome::Loss) => {
                self.beeper.request(TONE_LOSS);
                self.game_over("GAME OVER");
            }
            Some(Outcome::Win) => {
                self.beeper.request(TONE_WIN);
                self.game_over("CONGRATULATIONS");
            }
            None => {
                let hit = state.collisions;
                if hit.paddle {
                    self.beeper.request(TONE_PADDLE);
                }
                if hit.wall || hit.ceiling {
                    self.beeper.request(TONE_WALL);
                }
                if hit.brick {
                    self.beeper.request(brick_tone(state.ball.position.y));
                }
            }
        }

        self.canvas.flush();
        outcome
    }

    fn intro(&mut self) {
        self.canvas.clear();
        let hint = self.settings.control.play_hint();
        self.canvas.message(TITLE, &[hint, CREDITS[0], CREDITS[1]]);
        self.canvas.flush();
    }
}
