use glam::Vec2;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // bottom, pointer-driven
    Computer, // top, controller-driven
}

/// Paddle component - horizontal paddle at one end of the arena
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge
}

impl Paddle {
    pub fn new(side: Side, x: f32) -> Self {
        Self { side, x }
    }

    /// Horizontal centre for a paddle of the given width
    pub fn center_x(&self, width: f32) -> f32 {
        self.x + width / 2.0
    }

    /// Whether `x` lies within the paddle's horizontal span (edges inclusive)
    pub fn spans(&self, x: f32, width: f32) -> bool {
        x >= self.x && x <= self.x + width
    }
}

/// Ball component - the pong ball
///
/// `vel.y` uses the inverted convention of the integration step:
/// the ball moves by `-vel.y` per frame, so a negative value heads
/// down toward the player and a positive value heads up.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub paddle_contact: bool, // touched the player paddle since the last serve
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            paddle_contact: false,
        }
    }

    /// Re-centre the ball and serve it toward the player
    ///
    /// Horizontal speed is kept; it stays inert until the next player contact.
    pub fn serve(&mut self, center: Vec2, speed_y: f32) {
        self.pos = center;
        self.vel.y = speed_y;
        self.paddle_contact = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_spans_inclusive_edges() {
        let paddle = Paddle::new(Side::Player, 100.0);
        assert!(paddle.spans(100.0, 50.0));
        assert!(paddle.spans(125.0, 50.0));
        assert!(paddle.spans(150.0, 50.0));
        assert!(!paddle.spans(99.9, 50.0));
        assert!(!paddle.spans(150.1, 50.0));
    }

    #[test]
    fn test_paddle_center() {
        let paddle = Paddle::new(Side::Computer, 10.0);
        assert_eq!(paddle.center_x(50.0), 35.0);
    }

    #[test]
    fn test_serve_clears_contact_and_centres() {
        let mut ball = Ball::new(Vec2::new(3.0, 900.0), Vec2::new(7.5, 5.0));
        ball.paddle_contact = true;

        ball.serve(Vec2::new(384.0, 360.0), -3.0);

        assert_eq!(ball.pos, Vec2::new(384.0, 360.0));
        assert_eq!(ball.vel.y, -3.0);
        assert_eq!(ball.vel.x, 7.5, "Horizontal speed is left alone");
        assert!(!ball.paddle_contact);
    }
}
