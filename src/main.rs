//! Breakout entry point
//!
//! In the browser this wires DOM events, timers and the frame loop to the
//! game. Natively it plays one headless session on autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use breakout::audio::WebTonePlayer;
    use breakout::pipeline::{Clock, SessionEvent, Ticker};
    use breakout::platform::web::{self, Interval, Listener, WebClock};
    use breakout::renderer::{Hud, RenderState, WebCanvas};
    use breakout::sim::Playfield;
    use breakout::{Breakout, ControlScheme, Settings};

    /// Everything the page keeps alive
    struct App {
        game: Breakout<WebCanvas, WebTonePlayer>,
        /// Present only while a session runs
        ticker: Option<Interval>,
        _listeners: Vec<Listener>,
    }

    type Shared = Rc<RefCell<App>>;

    /// Start or stop the session ticker to follow a transition
    fn on_transition(app: &mut App, weak: &Weak<RefCell<App>>, event: SessionEvent) {
        match event {
            SessionEvent::Started => {
                // Drop the previous ticker before starting a new one
                app.ticker = None;
                app.game.player().resume();
                let weak = weak.clone();
                let ticker = Interval::new(Ticker::period_ms(), move || {
                    let Some(app) = weak.upgrade() else { return };
                    let Ok(mut app) = app.try_borrow_mut() else {
                        return;
                    };
                    app.game.tick(WebClock.now_ms());
                });
                match ticker {
                    Ok(ticker) => app.ticker = Some(ticker),
                    Err(e) => log::error!("Failed to start ticker: {:?}", e),
                }
            }
            SessionEvent::Ended(_) => app.ticker = None,
        }
    }

    fn input_listener<F>(
        target: &web_sys::EventTarget,
        kind: &'static str,
        weak: Weak<RefCell<App>>,
        translate: F,
    ) -> Result<Listener, JsValue>
    where
        F: Fn(&web_sys::Event) -> Option<breakout::pipeline::InputEvent> + 'static,
    {
        Listener::new(target, kind, move |event| {
            let Some(input) = translate(&event) else {
                return;
            };
            let Some(app) = weak.upgrade() else { return };
            let Ok(mut app) = app.try_borrow_mut() else {
                return;
            };
            if let Some(transition) = app.game.input(&input) {
                on_transition(&mut app, &weak, transition);
            }
        })
    }

    fn frame_loop(app: Shared, time: f64) {
        {
            let mut guard = app.borrow_mut();
            guard.game.poll_audio(time);
            if let Some(transition) = guard.game.frame() {
                on_transition(&mut guard, &Rc::downgrade(&app), transition);
            }
        }

        web::request_animation_frame(move |time| frame_loop(app, time));
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Breakout starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("stage")
            .ok_or("no #stage canvas")?
            .dyn_into()
            .map_err(|_| "#stage is not a canvas")?;

        let (width, height) = (canvas.width(), canvas.height());
        let field = Playfield::new(width as f32, height as f32);
        let settings = Settings::detect();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render = RenderState::new(surface, &adapter, width, height, field)
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to create device: {e}")))?;
        let canvas_sink = WebCanvas::new(render, Hud::new(&document));
        let player = WebTonePlayer::new(&settings);
        let control = settings.control;

        let app: Shared = Rc::new(RefCell::new(App {
            game: Breakout::new(field, settings, canvas_sink, player),
            ticker: None,
            _listeners: Vec::new(),
        }));
        let weak = Rc::downgrade(&app);

        let mut listeners = Vec::new();
        for kind in ["keydown", "keyup"] {
            listeners.push(input_listener(&document, kind, weak.clone(), web::key_event)?);
        }
        if control == ControlScheme::Touch {
            for kind in ["touchstart", "touchmove", "touchend", "touchcancel"] {
                let target = canvas.clone();
                listeners.push(input_listener(&canvas, kind, weak.clone(), move |event| {
                    web::touch_event(event, &target, &field)
                })?);
            }
        }

        {
            let mut guard = app.borrow_mut();
            guard._listeners = listeners;
            let started = guard.game.boot();
            on_transition(&mut guard, &weak, started);
        }

        web::request_animation_frame(move |time| frame_loop(app, time));

        log::info!("Breakout running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use breakout::audio::ToneLog;
    use breakout::pipeline::{Clock, InputEvent, Key, ManualClock, SessionEvent, Ticker};
    use breakout::renderer::HeadlessCanvas;
    use breakout::sim::Playfield;
    use breakout::{Breakout, Settings};

    /// Give up on sessions that bounce forever
    const MAX_TICKS: u32 = 60_000;

    /// Holds the arrow key that moves the paddle toward the ball
    struct Autopilot {
        held: Option<Key>,
    }

    impl Autopilot {
        fn steer(&mut self, paddle: f32, ball_x: f32) -> Vec<InputEvent> {
            let want = if ball_x < paddle - 10.0 {
                Some(Key::Left)
            } else if ball_x > paddle + 10.0 {
                Some(Key::Right)
            } else {
                None
            };
            if want == self.held {
                return Vec::new();
            }

            let mut events = Vec::new();
            if let Some(key) = self.held.take() {
                events.push(InputEvent::KeyUp(key));
            }
            if let Some(key) = want {
                events.push(InputEvent::KeyDown(key));
            }
            self.held = want;
            events
        }
    }

    pub fn run() {
        let field = Playfield::new(400.0, 600.0);
        let mut game = Breakout::new(
            field,
            Settings::default(),
            HeadlessCanvas::new(field),
            ToneLog::default(),
        );
        let mut clock = ManualClock::new(0.0);
        let mut pilot = Autopilot { held: None };

        game.boot();
        // A tap gets the paddle stream going so the ball starts moving
        game.input(&InputEvent::KeyDown(Key::Right));
        game.input(&InputEvent::KeyUp(Key::Right));

        let mut ended = None;
        for _ in 0..MAX_TICKS {
            if let Some(state) = game.session().state() {
                let (paddle, ball_x) = (state.paddle, state.ball.position.x);
                for event in pilot.steer(paddle, ball_x) {
                    game.input(&event);
                }
            }

            game.tick(clock.now_ms());
            game.poll_audio(clock.now_ms());
            if let Some(SessionEvent::Ended(outcome)) = game.frame() {
                ended = Some(outcome);
                break;
            }
            clock.advance(f64::from(Ticker::period_ms()));
        }

        // Let the final tone through
        clock.advance(100.0);
        game.poll_audio(clock.now_ms());

        let canvas = game.canvas();
        match ended {
            Some(outcome) => log::info!(
                "Session over: {:?}, score {}, {} bricks left, {} frames, {} tones",
                outcome,
                canvas.last_score().unwrap_or_default(),
                canvas.brick_count(),
                canvas.frames(),
                game.player().played.len()
            ),
            None => log::warn!("No outcome after {} ticks", MAX_TICKS),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Breakout native build - running a headless session");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser enters through wasm_main
}
