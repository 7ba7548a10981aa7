//! Platform layer
//!
//! Browser bindings live in `web`; the key and coordinate mapping they rely
//! on is plain logic and kept here.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::pipeline::{InputEvent, Key};

/// Map a DOM keyboard event (`type`, `code`, `repeat`) to an input event.
///
/// Auto-repeat keydowns pass through for the arrows so a still-held arrow
/// takes over again after another arrow is released. A repeated Space is
/// dropped, otherwise holding it would restart the game on every repeat.
pub fn key_input(kind: &str, code: &str, repeat: bool) -> Option<InputEvent> {
    let key = Key::from_code(code);
    match kind {
        "keydown" if repeat && key == Key::Space => None,
        "keydown" => Some(InputEvent::KeyDown(key)),
        "keyup" => Some(InputEvent::KeyUp(key)),
        _ => None,
    }
}

/// Map a client-space x coordinate onto the playfield.
///
/// The canvas may be displayed at a different size than its drawing buffer.
/// Returns `None` when the canvas has no visible width.
pub fn client_to_field_x(
    client_x: f32,
    left: f32,
    display_width: f32,
    field_width: f32,
) -> Option<f32> {
    if display_width <= 0.0 {
        return None;
    }
    Some((client_x - left) * field_width / display_width)
}
