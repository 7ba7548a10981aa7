//! Brick field layout and brick hit testing

use glam::Vec2;

use super::state::{Ball, Brick};
use crate::consts::*;

/// Build the full brick grid for a playfield of the given width.
///
/// Bricks are laid out left-to-right, top-to-bottom with `BRICK_GAP` spacing
/// and share one width so the row spans the field exactly.
pub fn brick_field(field_width: f32) -> Vec<Brick> {
    let columns = BRICK_COLUMNS as f32;
    let width = (field_width - BRICK_GAP - BRICK_GAP * columns) / columns;

    (0..BRICK_ROWS)
        .flat_map(|row| {
            (0..BRICK_COLUMNS).map(move |column| Brick {
                x: column as f32 * (width + BRICK_GAP) + width / 2.0 + BRICK_GAP,
                y: row as f32 * (BRICK_HEIGHT + BRICK_GAP)
                    + BRICK_HEIGHT / 2.0
                    + BRICK_GAP
                    + BRICK_TOP_OFFSET,
                width,
                height: BRICK_HEIGHT,
            })
        })
        .collect()
}

impl Brick {
    /// Strict containment: points on the edge are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.x - self.width / 2.0
            && point.x < self.x + self.width / 2.0
            && point.y > self.y - self.height / 2.0
            && point.y < self.y + self.height / 2.0
    }

    /// Tests the ball's next raw step (`position + direction`), not its
    /// current position.
    pub fn hit_by(&self, ball: &Ball) -> bool {
        self.contains(ball.lookahead())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_dimensions() {
        let bricks = brick_field(400.0);
        assert_eq!(bricks.len(), BRICK_ROWS * BRICK_COLUMNS);

        let expected_width = (400.0 - 3.0 - 21.0) / 7.0;
        assert!(bricks.iter().all(|b| (b.width - expected_width).abs() < 1e-4));
        // Not truncated to whole pixels
        assert!((bricks[0].width - 53.714).abs() < 1e-3);
        assert!((bricks[0].x - (3.0 + 53.714 / 2.0)).abs() < 1e-3);
        assert!(bricks.iter().all(|b| b.height == BRICK_HEIGHT));
    }

    #[test]
    fn test_field_layout_order() {
        let bricks = brick_field(400.0);
        let width = bricks[0].width;

        // First brick: one gap in from the top-left corner, below the offset
        assert!((bricks[0].x - (width / 2.0 + 3.0)).abs() < 1e-4);
        assert_eq!(bricks[0].y, 33.0);

        // Same row advances by width + gap
        assert!((bricks[1].x - bricks[0].x - (width + 3.0)).abs() < 1e-4);
        assert_eq!(bricks[1].y, 33.0);

        // Second row starts after a full column run
        assert_eq!(bricks[BRICK_COLUMNS].x, bricks[0].x);
        assert_eq!(bricks[BRICK_COLUMNS].y, 56.0);
    }

    #[test]
    fn test_row_spans_field() {
        let bricks = brick_field(400.0);
        let last = bricks[BRICK_COLUMNS - 1];
        let right_edge = last.x + last.width / 2.0;
        // Trailing gap mirrors the leading one
        assert!((400.0 - right_edge - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_field_is_deterministic() {
        let a = brick_field(640.0);
        let b = brick_field(640.0);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.x.to_bits(), y.x.to_bits());
            assert_eq!(x.y.to_bits(), y.y.to_bits());
            assert_eq!(x.width.to_bits(), y.width.to_bits());
            assert_eq!(x.height.to_bits(), y.height.to_bits());
        }
    }

    #[test]
    fn test_contains_is_strict() {
        let brick = Brick {
            x: 100.0,
            y: 50.0,
            width: 40.0,
            height: 20.0,
        };
        assert!(brick.contains(Vec2::new(100.0, 50.0)));
        assert!(!brick.contains(Vec2::new(80.0, 50.0)));
        assert!(!brick.contains(Vec2::new(100.0, 60.0)));
        assert!(brick.contains(Vec2::new(80.5, 59.5)));
    }

    #[test]
    fn test_hit_uses_lookahead() {
        let brick = Brick {
            x: 100.0,
            y: 50.0,
            width: 40.0,
            height: 20.0,
        };
        // Currently just below the brick, next step lands inside
        let ball = Ball::new(Vec2::new(100.0, 61.0), Vec2::new(0.0, -2.0));
        assert!(!brick.contains(ball.position));
        assert!(brick.hit_by(&ball));

        // Inside now but moving out
        let ball = Ball::new(Vec2::new(100.0, 59.0), Vec2::new(0.0, 2.0));
        assert!(!brick.hit_by(&ball));
    }
}
