//! Browser canvas: shapes through WebGPU, text through the DOM HUD

use super::hud::Hud;
use super::pipeline::RenderState;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::BALL_RADIUS;
use crate::sim::{Ball, Brick};
use crate::sink::Canvas;

pub struct WebCanvas {
    render: RenderState,
    hud: Hud,
    vertices: Vec<Vertex>,
    score: Option<u32>,
    lines: Vec<String>,
}

impl WebCanvas {
    pub fn new(render: RenderState, hud: Hud) -> Self {
        Self {
            render,
            hud,
            vertices: Vec::new(),
            score: None,
            lines: Vec::new(),
        }
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self) {
        self.vertices.clear();
        self.score = None;
        self.lines.clear();
    }

    fn paddle(&mut self, x: f32) {
        let field = self.render.field;
        self.vertices.extend(shapes::paddle(x, &field));
    }

    fn ball(&mut self, ball: &Ball) {
        self.vertices.extend(shapes::ball(ball, BALL_RADIUS));
    }

    fn bricks(&mut self, bricks: &[Brick]) {
        self.vertices.extend(shapes::bricks(bricks));
    }

    fn score(&mut self, score: u32) {
        self.score = Some(score);
    }

    fn debug(&mut self, text: &str) {
        self.hud.set_state(text);
    }

    fn message(&mut self, headline: &str, details: &[&str]) {
        self.lines.push(headline.to_owned());
        self.lines.extend(details.iter().map(|line| (*line).to_owned()));
    }

    fn flush(&mut self) {
        self.hud.set_score(self.score);
        self.hud.set_message(&self.lines);

        match self.render.render(&self.vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                self.render.resize(self.render.size.0, self.render.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}
