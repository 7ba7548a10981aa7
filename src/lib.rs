//! Breakout - a tick-driven remake of the arcade classic
//!
//! Core modules:
//! - `sim`: Pure game state and the physics/collision step
//! - `pipeline`: Ticker, input adapter, paddle stream and session controller
//! - `sink`: Render and audio post-processing of each state snapshot
//! - `audio`: Tone sampling and Web Audio playback
//! - `renderer`: WebGPU pipeline, DOM HUD and a headless recording canvas
//! - `platform`: Browser event/timer handles

pub mod audio;
pub mod game;
pub mod pipeline;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod sink;

pub use game::Breakout;
pub use settings::{ControlScheme, Settings};

/// Game configuration constants
pub mod consts {
    /// Nominal ticker period (ms)
    pub const TICKER_INTERVAL_MS: u32 = 17;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle speed while a direction is held (px/s)
    pub const PADDLE_SPEED: f32 = 240.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Multiplier applied to the ball direction each second
    pub const BALL_SPEED: f32 = 60.0;
    pub const BALL_START_DIRECTION: (f32, f32) = (2.0, 2.0);

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 7;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 3.0;
    pub const BRICK_TOP_OFFSET: f32 = 20.0;
    /// Points per destroyed brick
    pub const BRICK_SCORE: u32 = 10;

    /// Audio: only the latest tone request per window is played
    pub const BEEP_SAMPLE_MS: f64 = 100.0;
    pub const TONE_DURATION_SECS: f64 = 0.1;

    /// Piano key indices for the game's tones
    pub const TONE_LOSS: u8 = 28;
    pub const TONE_WIN: u8 = 52;
    pub const TONE_PADDLE: u8 = 40;
    pub const TONE_WALL: u8 = 45;
    pub const TONE_BRICK_BASE: u8 = 47;

    /// Y coordinate the ball is clamped to when it lands on the paddle
    #[inline]
    pub fn paddle_top(height: f32) -> f32 {
        height - PADDLE_HEIGHT - BALL_RADIUS / 2.0
    }
}
