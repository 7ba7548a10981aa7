//! Event pipeline
//!
//! The game loop is a single-threaded chain of explicit stages:
//!
//! ```text
//! Ticker ──┬──────────────► PaddleStream ──► Latest<paddle>
//!          │                     ▲                 │
//! Input ───┼─► InputAdapter ─────┘                 ▼
//!          └──────────────────────────────► step(state, tick, paddle)
//!                                                  │
//!                              SessionController ◄─┘──► pending frame
//! ```
//!
//! "Latest value" combinations are plain [`cell::Latest`] reads and
//! emit-on-change stages use [`cell::Distinct`].

pub mod cell;
pub mod input;
pub mod paddle;
pub mod session;
pub mod ticker;

pub use cell::{Distinct, Latest};
pub use input::{DirectionInput, InputAdapter, InputEvent, Key, PaddleSignal, PointerInput};
pub use paddle::PaddleStream;
pub use session::{SessionController, SessionEvent, SessionPhase};
pub use ticker::{Clock, ManualClock, Ticker};
