//! Input adapter
//!
//! Converts raw keyboard/touch events into paddle-driving signals. Platform
//! code only has to translate DOM events into [`InputEvent`]s.

use crate::settings::ControlScheme;

use super::cell::Distinct;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Space" => Key::Space,
            _ => Key::Other,
        }
    }

    /// Paddle direction while this key is held
    pub fn direction(self) -> Option<i8> {
        match self {
            Key::Left => Some(-1),
            Key::Right => Some(1),
            _ => None,
        }
    }
}

/// Platform-neutral input event.
///
/// Pointer coordinates are `None` when the source event carried no usable
/// point (e.g. a touch event with an empty touch list).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown(Option<f32>),
    PointerMove(Option<f32>),
    PointerUp,
    PointerCancel,
}

impl InputEvent {
    /// Starts a session from idle
    pub fn is_start(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown(Key::Space) | InputEvent::PointerDown(Some(_))
        )
    }

    /// Restarts a running session
    pub fn is_restart(&self) -> bool {
        matches!(self, InputEvent::KeyDown(Key::Space))
    }
}

/// What the paddle stream receives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleSignal {
    /// -1, 0 or +1
    Direction(i8),
    /// Absolute horizontal position
    Pointer(f32),
}

/// Held-direction state from the arrow keys.
///
/// The most recent arrow press wins; releasing a key that was superseded by
/// a later press does nothing. Repeated values are suppressed.
#[derive(Debug, Clone, Default)]
pub struct DirectionInput {
    held: Option<Key>,
    out: Distinct<i8>,
}

impl DirectionInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-arrow presses, Space included, are ignored outright: they neither
    /// stop nor replace a held arrow, and its later key-up still releases it.
    pub fn key_down(&mut self, key: Key) -> Option<i8> {
        let direction = key.direction()?;
        self.held = Some(key);
        self.out.update(direction)
    }

    pub fn key_up(&mut self, key: Key) -> Option<i8> {
        if self.held != Some(key) {
            return None;
        }
        self.held = None;
        self.out.update(0)
    }

    /// Key currently driving the paddle
    pub fn held(&self) -> Option<Key> {
        self.held
    }
}

/// Drag tracking: forwards move coordinates between pointer down and up.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    tracking: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn down(&mut self, x: Option<f32>) {
        if x.is_some() {
            self.tracking = true;
        }
    }

    pub fn moved(&mut self, x: Option<f32>) -> Option<f32> {
        if self.tracking { x } else { None }
    }

    pub fn release(&mut self) {
        self.tracking = false;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
}

/// Merges the directional and pointer sources into one paddle signal.
#[derive(Debug, Clone)]
pub struct InputAdapter {
    direction: DirectionInput,
    pointer: PointerInput,
    pointer_enabled: bool,
}

impl InputAdapter {
    pub fn new(control: ControlScheme) -> Self {
        Self {
            direction: DirectionInput::new(),
            pointer: PointerInput::new(),
            pointer_enabled: control == ControlScheme::Touch,
        }
    }

    pub fn handle(&mut self, event: &InputEvent) -> Option<PaddleSignal> {
        match *event {
            InputEvent::KeyDown(key) => self.direction.key_down(key).map(PaddleSignal::Direction),
            InputEvent::KeyUp(key) => self.direction.key_up(key).map(PaddleSignal::Direction),
            _ if !self.pointer_enabled => None,
            InputEvent::PointerDown(x) => {
                self.pointer.down(x);
                None
            }
            InputEvent::PointerMove(x) => self.pointer.moved(x).map(PaddleSignal::Pointer),
            InputEvent::PointerUp | InputEvent::PointerCancel => {
                self.pointer.release();
                None
            }
        }
    }
}
