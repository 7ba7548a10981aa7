//! Shape generation for 2D primitives
//!
//! All coordinates are playfield pixels with the origin at the top left.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::sim::{Ball, Brick, Playfield};

/// Segments used for the ball fan
const BALL_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x2, y2) = (x + width, y + height);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Paddle resting on the bottom edge, centered on `x`
pub fn paddle(x: f32, field: &Playfield) -> Vec<Vertex> {
    rect(
        x - PADDLE_WIDTH / 2.0,
        field.height - PADDLE_HEIGHT,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
        colors::PADDLE,
    )
}

pub fn ball(ball: &Ball, radius: f32) -> Vec<Vertex> {
    circle(ball.position, radius, colors::BALL, BALL_SEGMENTS)
}

/// Bricks are addressed by their center
pub fn bricks(bricks: &[Brick]) -> Vec<Vertex> {
    bricks
        .iter()
        .flat_map(|b| {
            rect(
                b.x - b.width / 2.0,
                b.y - b.height / 2.0,
                b.width,
                b.height,
                colors::BRICK,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::brick_field;

    #[test]
    fn test_rect_corners() {
        let v = rect(10.0, 20.0, 30.0, 40.0, colors::PINK);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_paddle_sits_on_floor() {
        let field = Playfield::new(400.0, 600.0);
        let v = paddle(200.0, &field);
        assert!(v.iter().all(|v| (150.0..=250.0).contains(&v.position[0])));
        assert!(v.iter().all(|v| (580.0..=600.0).contains(&v.position[1])));
    }

    #[test]
    fn test_circle_radius() {
        let center = Vec2::new(50.0, 50.0);
        let v = circle(center, 10.0, colors::BALL, 8);
        assert_eq!(v.len(), 24);
        for vertex in v.iter().skip(1).step_by(3) {
            let p = Vec2::from(vertex.position);
            assert!((p.distance(center) - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_bricks_six_vertices_each() {
        let field = brick_field(400.0);
        assert_eq!(bricks(&field).len(), field.len() * 6);
        assert!(bricks(&[]).is_empty());
    }
}
