//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Each step derives a new `GameState` from the previous one
//! - Time only enters through the `Tick` argument
//! - No rendering, audio or platform dependencies

pub mod bricks;
pub mod state;
pub mod step;

pub use bricks::brick_field;
pub use state::{Ball, Brick, Collisions, GameState, Outcome, Playfield, Tick};
pub use step::step;
