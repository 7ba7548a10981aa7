//! Session controller
//!
//! Owns one "run" (ticker, input adapter, paddle stream and game state) at a
//! time. Dropping the run is how a session detaches from its sources; the
//! next start builds everything fresh.

use crate::settings::ControlScheme;
use crate::sim::{GameState, Outcome, Playfield, step};
use crate::sink::StateSink;

use super::cell::Latest;
use super::input::{InputAdapter, InputEvent};
use super::paddle::PaddleStream;
use super::ticker::Ticker;

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for a start input
    Idle,
    /// Stepping the game on every tick
    Running,
    /// A terminal state was reported; passes straight back to `Idle`
    Terminal,
}

/// Transitions the platform layer reacts to (start/stop timers, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Ended(Outcome),
}

/// Everything subscribed for one running session
struct Run {
    ticker: Ticker,
    input: InputAdapter,
    paddle: PaddleStream,
    latest_paddle: Latest<f32>,
    state: GameState,
}

impl Run {
    fn new(field: Playfield, control: ControlScheme) -> Self {
        Self {
            ticker: Ticker::new(),
            input: InputAdapter::new(control),
            paddle: PaddleStream::new(field),
            latest_paddle: Latest::new(),
            state: GameState::new(&field),
        }
    }
}

pub struct SessionController {
    field: Playfield,
    control: ControlScheme,
    phase: SessionPhase,
    run: Option<Run>,
    /// Newest unrendered state; older ones are overwritten
    frame: Latest<GameState>,
    sessions: u32,
}

impl SessionController {
    pub fn new(field: Playfield, control: ControlScheme) -> Self {
        Self {
            field,
            control,
            phase: SessionPhase::Idle,
            run: None,
            frame: Latest::new(),
            sessions: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    /// Number of sessions started so far
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Latest computed state of the running session
    pub fn state(&self) -> Option<&GameState> {
        self.run.as_ref().map(|run| &run.state)
    }

    /// Begin a fresh session, discarding any run in flight
    pub fn start(&mut self) -> SessionEvent {
        if self.run.is_some() {
            log::info!("Restarting session {}", self.sessions);
        }
        self.run = Some(Run::new(self.field, self.control));
        self.frame = Latest::new();
        self.phase = SessionPhase::Running;
        self.sessions += 1;
        log::info!("Session {} started", self.sessions);
        SessionEvent::Started
    }

    /// Route one input event: start/restart the session, then feed the
    /// running paddle stream.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<SessionEvent> {
        let transition = match self.phase {
            SessionPhase::Idle if event.is_start() => Some(self.start()),
            SessionPhase::Running if event.is_restart() => Some(self.start()),
            _ => None,
        };

        if let Some(run) = self.run.as_mut() {
            if let Some(signal) = run.input.handle(event) {
                if let Some(position) = run.paddle.on_signal(signal) {
                    run.latest_paddle.set(position);
                }
            }
        }

        transition
    }

    /// Feed one raw clock sample. Returns the new state when a step ran.
    ///
    /// Every tick is stepped; only rendering is sampled.
    pub fn on_tick(&mut self, now_ms: f64) -> Option<&GameState> {
        let run = self.run.as_mut()?;
        let tick = run.ticker.sample(now_ms)?;

        if let Some(position) = run.paddle.on_tick(&tick) {
            run.latest_paddle.set(position);
        }
        // No paddle value yet: the ball waits
        let paddle = run.latest_paddle.value()?;

        run.state = step(&run.state, tick, paddle, &self.field);
        log::trace!("step at {:.0}ms, score {}", tick.time, run.state.score);
        self.frame.set(run.state.clone());
        Some(&run.state)
    }

    /// Take the newest unrendered state, dropping any skipped ones
    pub fn take_frame(&mut self) -> Option<GameState> {
        self.frame.take()
    }

    /// Hand the newest state to the sink. A reported outcome ends the
    /// session exactly once and tears the run down.
    pub fn present<S: StateSink>(&mut self, sink: &mut S) -> Option<SessionEvent> {
        if self.phase != SessionPhase::Running {
            return None;
        }
        let frame = self.take_frame()?;
        let outcome = sink.present(&frame, &self.field)?;

        self.phase = SessionPhase::Terminal;
        log::info!(
            "Session {} ended: {:?} with score {}",
            self.sessions,
            outcome,
            frame.score
        );
        self.run = None;
        self.frame = Latest::new();
        self.phase = SessionPhase::Idle;

        Some(SessionEvent::Ended(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::input::Key;
    use glam::Vec2;

    const FIELD: Playfield = Playfield {
        width: 400.0,
        height: 600.0,
    };

    /// Reports terminal states, remembers what it was shown
    #[derive(Default)]
    struct Judge {
        shown: Vec<GameState>,
    }

    impl StateSink for Judge {
        fn present(&mut self, state: &GameState, field: &Playfield) -> Option<Outcome> {
            self.shown.push(state.clone());
            state.outcome(field)
        }
    }

    fn running() -> SessionController {
        let mut session = SessionController::new(FIELD, ControlScheme::Keyboard);
        session.start();
        session
    }

    /// Press right so the paddle starts emitting, prime the ticker
    fn engage(session: &mut SessionController) {
        session.handle_input(&InputEvent::KeyDown(Key::Right));
        session.on_tick(0.0);
    }

    fn run_mut(session: &mut SessionController) -> &mut Run {
        session.run.as_mut().unwrap()
    }

    #[test]
    fn test_idle_until_start_input() {
        let mut session = SessionController::new(FIELD, ControlScheme::Keyboard);
        assert_eq!(session.phase(), SessionPhase::Idle);

        assert_eq!(session.handle_input(&InputEvent::KeyDown(Key::Left)), None);
        assert!(session.on_tick(0.0).is_none());
        assert_eq!(session.phase(), SessionPhase::Idle);

        assert_eq!(
            session.handle_input(&InputEvent::KeyDown(Key::Space)),
            Some(SessionEvent::Started)
        );
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.sessions(), 1);
    }

    #[test]
    fn test_touch_starts_from_idle_only() {
        let mut session = SessionController::new(FIELD, ControlScheme::Touch);
        assert_eq!(session.handle_input(&InputEvent::PointerDown(None)), None);
        assert_eq!(
            session.handle_input(&InputEvent::PointerDown(Some(100.0))),
            Some(SessionEvent::Started)
        );
        // While running a touch drives the paddle instead
        assert_eq!(session.handle_input(&InputEvent::PointerDown(Some(100.0))), None);
        assert_eq!(session.sessions(), 1);
    }

    #[test]
    fn test_ball_waits_for_paddle() {
        let mut session = running();
        assert!(session.on_tick(0.0).is_none());
        assert!(session.on_tick(17.0).is_none());
        assert!(session.take_frame().is_none());

        session.handle_input(&InputEvent::KeyDown(Key::Right));
        let state = session.on_tick(34.0).unwrap();
        assert!(state.paddle > 200.0);
        assert!(state.ball.position.y > 300.0);
    }

    #[test]
    fn test_pointer_drives_physics() {
        let mut session = SessionController::new(FIELD, ControlScheme::Touch);
        session.handle_input(&InputEvent::PointerDown(Some(100.0)));
        session.handle_input(&InputEvent::PointerMove(Some(150.0)));
        session.on_tick(0.0);
        let state = session.on_tick(17.0).unwrap();
        assert_eq!(state.paddle, 150.0);
    }

    #[test]
    fn test_every_tick_stepped_latest_frame_rendered() {
        let mut session = running();
        engage(&mut session);
        for i in 1..=5 {
            session.on_tick(i as f64 * 17.0);
        }

        let mut judge = Judge::default();
        assert_eq!(session.present(&mut judge), None);
        assert_eq!(judge.shown.len(), 1);
        let shown = &judge.shown[0];
        assert_eq!(shown.tick.time, 85.0);
        // Five steps of 17ms at direction (2, 2) * 60
        let expected = Vec2::new(200.0, 300.0) + Vec2::splat(2.0 * 60.0 * 0.017 * 5.0);
        assert!((shown.ball.position - expected).length() < 1e-2);

        // Nothing new to draw
        assert_eq!(session.present(&mut judge), None);
        assert_eq!(judge.shown.len(), 1);
    }

    #[test]
    fn test_win_reported_once() {
        let mut session = running();
        engage(&mut session);
        run_mut(&mut session).state.bricks.truncate(1);
        let last = run_mut(&mut session).state.bricks[0];
        run_mut(&mut session).state.ball =
            crate::sim::Ball::new(Vec2::new(last.x, last.y + 11.0), Vec2::new(0.0, -2.0));

        session.on_tick(0.0);
        let mut judge = Judge::default();
        assert_eq!(
            session.present(&mut judge),
            Some(SessionEvent::Ended(Outcome::Win))
        );
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.state().is_none());

        // Torn down: further ticks and frames do nothing
        assert!(session.on_tick(17.0).is_none());
        assert_eq!(session.present(&mut judge), None);
        assert_eq!(judge.shown.len(), 1);
    }

    #[test]
    fn test_loss_regardless_of_bricks() {
        let mut session = running();
        engage(&mut session);
        run_mut(&mut session).state.ball =
            crate::sim::Ball::new(Vec2::new(20.0, 595.0), Vec2::new(2.0, 2.0));

        session.on_tick(17.0);
        let mut judge = Judge::default();
        assert_eq!(
            session.present(&mut judge),
            Some(SessionEvent::Ended(Outcome::Loss))
        );
        assert!(!judge.shown[0].bricks.is_empty());
    }

    #[test]
    fn test_restart_builds_fresh_state() {
        let mut session = running();
        engage(&mut session);
        session.on_tick(17.0);
        run_mut(&mut session).state.score = 90;

        assert_eq!(
            session.handle_input(&InputEvent::KeyDown(Key::Space)),
            Some(SessionEvent::Started)
        );
        let state = session.state().unwrap();
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 35);
        assert!(session.take_frame().is_none());
        assert_eq!(session.sessions(), 2);

        // New paddle stream: the old held direction is gone
        session.on_tick(100.0);
        assert!(session.on_tick(117.0).is_none());
    }

    #[test]
    fn test_idle_after_end_then_start_again() {
        let mut session = running();
        engage(&mut session);
        run_mut(&mut session).state.bricks.clear();
        session.on_tick(17.0);
        session.present(&mut Judge::default());
        assert_eq!(session.phase(), SessionPhase::Idle);

        assert_eq!(
            session.handle_input(&InputEvent::KeyDown(Key::Space)),
            Some(SessionEvent::Started)
        );
        assert_eq!(session.state().unwrap().bricks.len(), 35);
    }
}
