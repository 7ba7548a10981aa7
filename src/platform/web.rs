//! Browser event sources
//!
//! Listeners and timers are owned handles: dropping one unregisters it, so
//! tearing down a session detaches it from its sources.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent, TouchEvent};

use super::{client_to_field_x, key_input};
use crate::pipeline::{Clock, InputEvent, Key};
use crate::sim::Playfield;

/// Wall clock backed by `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebClock;

impl Clock for WebClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// A registered DOM event listener
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// A running `setInterval` timer
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F>(period_ms: u32, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut()>::new(callback);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// Translate a `keydown`/`keyup` event
pub fn key_event(event: &web_sys::Event) -> Option<InputEvent> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    let code = event.code();
    if Key::from_code(&code) != Key::Other {
        // Arrows and space would otherwise scroll the page
        event.prevent_default();
    }
    key_input(&event.type_(), &code, event.repeat())
}

/// Translate a touch event on the game canvas
pub fn touch_event(
    event: &web_sys::Event,
    canvas: &HtmlCanvasElement,
    field: &Playfield,
) -> Option<InputEvent> {
    let event = event.dyn_ref::<TouchEvent>()?;
    event.prevent_default();

    let x = || {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        client_to_field_x(
            touch.client_x() as f32,
            rect.left() as f32,
            rect.width() as f32,
            field.width,
        )
    };

    match event.type_().as_str() {
        "touchstart" => Some(InputEvent::PointerDown(x())),
        "touchmove" => Some(InputEvent::PointerMove(x())),
        "touchend" => Some(InputEvent::PointerUp),
        "touchcancel" => Some(InputEvent::PointerCancel),
        _ => None,
    }
}

/// Schedule `callback` for the next animation frame
pub fn request_animation_frame<F>(callback: F)
where
    F: FnOnce(f64) + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(callback);
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
