//! Platform-neutral game facade
//!
//! Wires the session controller to a render/audio sink. Platforms only feed
//! it input events and three clocks: the ticker, the frame loop and the tone
//! sampler.

use crate::audio::TonePlayer;
use crate::pipeline::{InputEvent, SessionController, SessionEvent, SessionPhase};
use crate::settings::Settings;
use crate::sim::Playfield;
use crate::sink::{Canvas, FrameSink, StateSink};

pub struct Breakout<C: Canvas, P: TonePlayer> {
    session: SessionController,
    sink: FrameSink<C, P>,
}

impl<C: Canvas, P: TonePlayer> Breakout<C, P> {
    pub fn new(field: Playfield, settings: Settings, canvas: C, player: P) -> Self {
        Self {
            session: SessionController::new(field, settings.control),
            sink: FrameSink::new(canvas, player, settings),
        }
    }

    /// Start the first session as soon as the page is loaded
    pub fn boot(&mut self) -> SessionEvent {
        log::info!(
            "Breakout loaded on a {}x{} field",
            self.session.field().width,
            self.session.field().height
        );
        let event = self.session.start();
        self.sink.intro();
        event
    }

    /// Route an input event; every (re)start shows the title screen again
    pub fn input(&mut self, event: &InputEvent) -> Option<SessionEvent> {
        let transition = self.session.handle_input(event);
        if transition == Some(SessionEvent::Started) {
            self.sink.intro();
        }
        transition
    }

    /// Ticker callback. Returns whether a physics step ran.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.session.on_tick(now_ms).is_some()
    }

    /// Frame callback: present the newest state, if any
    pub fn frame(&mut self) -> Option<SessionEvent> {
        self.session.present(&mut self.sink)
    }

    /// Tone sampler callback
    pub fn poll_audio(&mut self, now_ms: f64) -> Option<u8> {
        self.sink.poll_audio(now_ms)
    }

    pub fn is_running(&self) -> bool {
        self.session.phase() == SessionPhase::Running
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn canvas(&self) -> &C {
        self.sink.canvas()
    }

    pub fn player(&self) -> &P {
        self.sink.beeper().player()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::ToneLog;
    use crate::pipeline::Key;
    use crate::renderer::HeadlessCanvas;

    fn game() -> Breakout<HeadlessCanvas, ToneLog> {
        let field = Playfield::new(400.0, 600.0);
        Breakout::new(field, Settings::default(), HeadlessCanvas::new(field), ToneLog::default())
    }

    #[test]
    fn test_boot_shows_title_and_runs() {
        let mut game = game();
        assert_eq!(game.boot(), SessionEvent::Started);
        assert!(game.is_running());
        assert_eq!(game.canvas().messages()[0].0, "Breakout");
        assert_eq!(game.canvas().frames(), 1);
    }

    #[test]
    fn test_title_stays_until_paddle_moves() {
        let mut game = game();
        game.boot();
        assert!(!game.tick(0.0));
        assert!(!game.tick(17.0));
        assert_eq!(game.frame(), None);
        assert_eq!(game.canvas().messages().len(), 1);

        game.input(&InputEvent::KeyDown(Key::Left));
        assert!(game.tick(34.0));
        assert_eq!(game.frame(), None);
        assert!(game.canvas().messages().is_empty());
        assert!(game.canvas().paddle_x().unwrap() < 200.0);
    }

    #[test]
    fn test_space_restart_redraws_title() {
        let mut game = game();
        game.boot();
        game.input(&InputEvent::KeyDown(Key::Right));
        game.tick(0.0);
        game.tick(17.0);
        game.frame();

        assert_eq!(
            game.input(&InputEvent::KeyDown(Key::Space)),
            Some(SessionEvent::Started)
        );
        assert_eq!(game.canvas().messages()[0].0, "Breakout");
        assert_eq!(game.session().sessions(), 2);
    }
}
