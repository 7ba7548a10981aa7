//! Recording canvas for native runs and tests

use super::shapes;
use super::vertex::Vertex;
use crate::consts::BALL_RADIUS;
use crate::sim::{Ball, Brick, Playfield};
use crate::sink::Canvas;

/// Keeps what the last frame drew instead of putting pixels anywhere.
/// Geometry goes through the same shape builders as the GPU canvas.
#[derive(Debug, Clone)]
pub struct HeadlessCanvas {
    field: Playfield,
    vertices: Vec<Vertex>,
    paddle: Option<f32>,
    ball: Option<Ball>,
    bricks: usize,
    score: Option<u32>,
    debug: Option<String>,
    messages: Vec<(String, Vec<String>)>,
    frames: u64,
}

impl HeadlessCanvas {
    pub fn new(field: Playfield) -> Self {
        Self {
            field,
            vertices: Vec::new(),
            paddle: None,
            ball: None,
            bricks: 0,
            score: None,
            debug: None,
            messages: Vec::new(),
            frames: 0,
        }
    }

    /// Frames flushed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn paddle_x(&self) -> Option<f32> {
        self.paddle
    }

    pub fn last_ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn brick_count(&self) -> usize {
        self.bricks
    }

    pub fn last_score(&self) -> Option<u32> {
        self.score
    }

    /// Debug text survives `clear`, like a separate text panel
    pub fn debug_text(&self) -> Option<&str> {
        self.debug.as_deref()
    }

    /// Messages drawn since the last `clear`
    pub fn messages(&self) -> &[(String, Vec<String>)] {
        &self.messages
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl Canvas for HeadlessCanvas {
    fn clear(&mut self) {
        self.vertices.clear();
        self.paddle = None;
        self.ball = None;
        self.bricks = 0;
        self.score = None;
        self.messages.clear();
    }

    fn paddle(&mut self, x: f32) {
        self.vertices.extend(shapes::paddle(x, &self.field));
        self.paddle = Some(x);
    }

    fn ball(&mut self, ball: &Ball) {
        self.vertices.extend(shapes::ball(ball, BALL_RADIUS));
        self.ball = Some(*ball);
    }

    fn bricks(&mut self, bricks: &[Brick]) {
        self.vertices.extend(shapes::bricks(bricks));
        self.bricks = bricks.len();
    }

    fn score(&mut self, score: u32) {
        self.score = Some(score);
    }

    fn debug(&mut self, text: &str) {
        self.debug = Some(text.to_owned());
    }

    fn message(&mut self, headline: &str, details: &[&str]) {
        self.messages.push((
            headline.to_owned(),
            details.iter().map(|line| (*line).to_owned()).collect(),
        ));
    }

    fn flush(&mut self) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_records_and_clears() {
        let field = Playfield::new(400.0, 600.0);
        let state = GameState::new(&field);
        let mut canvas = HeadlessCanvas::new(field);

        canvas.paddle(state.paddle);
        canvas.ball(&state.ball);
        canvas.bricks(&state.bricks);
        canvas.score(70);
        canvas.debug("{}");
        canvas.message("hello", &["world"]);
        canvas.flush();
        assert_eq!(canvas.vertex_count(), 6 + 24 * 3 + 35 * 6);
        assert_eq!(canvas.frames(), 1);
        assert_eq!(canvas.last_ball(), Some(&state.ball));
        assert_eq!(canvas.last_score(), Some(70));

        canvas.clear();
        assert_eq!(canvas.vertex_count(), 0);
        assert!(canvas.messages().is_empty());
        assert!(canvas.paddle_x().is_none());
        assert!(canvas.last_ball().is_none());
        assert!(canvas.last_score().is_none());
        assert_eq!(canvas.debug_text(), Some("{}"));
    }
}
