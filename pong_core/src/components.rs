use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::Aabb;

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The ball. `pos` is the bottom-left corner of its square box (y-up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Advance by one tick of velocity
    pub fn move_ball(&mut self) {
        self.pos += self.vel;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - Vec2::splat(self.size / 2.0);
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::splat(self.size))
    }
}

/// A player's paddle and its score counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub center: Vec2,
    width: f32,
    height: f32,
    pub score: u8,
}

impl Paddle {
    /// Fails on non-positive sizes; `height` divides the bounce offset.
    pub fn new(side: Side, center: Vec2, width: f32, height: f32) -> Result<Self, ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ConfigError::InvalidPaddle { width, height });
        }
        Ok(Self {
            side,
            center,
            width,
            height,
            score: 0,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.center, Vec2::new(self.width, self.height))
    }

    pub fn collides(&self, ball: &Ball) -> bool {
        self.aabb().overlaps(&ball.aabb())
    }

    /// Reflect the ball off this paddle. Only meaningful when [`Paddle::collides`] holds.
    ///
    /// The horizontal component is reversed and the velocity scaled by
    /// `multiplier`, then the normalized contact offset (-1 at the bottom edge,
    /// 1 at the top, unclamped) is added to the vertical component.
    pub fn bounce_ball(&self, ball: &mut Ball, multiplier: f32) -> Vec2 {
        let offset = (ball.center().y - self.center.y) / (self.height / 2.0);
        let scaled = Vec2::new(-ball.vel.x, ball.vel.y) * multiplier;
        ball.vel = Vec2::new(scaled.x, scaled.y + offset);
        ball.vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(center: Vec2, height: f32) -> Paddle {
        Paddle::new(Side::Left, center, 10.0, height).expect("valid paddle")
    }

    #[test]
    fn test_ball_move_adds_velocity() {
        let mut ball = Ball::new(Vec2::new(10.0, 20.0), Vec2::new(3.5, -1.25), 4.0);
        ball.move_ball();
        assert_eq!(ball.pos, Vec2::new(13.5, 18.75));
        assert_eq!(ball.vel, Vec2::new(3.5, -1.25), "Velocity is untouched");
    }

    #[test]
    fn test_ball_center_round_trip() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 50.0);
        ball.set_center(Vec2::new(400.0, 300.0));
        assert_eq!(ball.pos, Vec2::new(375.0, 275.0));
        assert_eq!(ball.center(), Vec2::new(400.0, 300.0));
        assert_eq!(ball.top(), 325.0);
        assert_eq!(ball.right(), 425.0);
    }

    #[test]
    fn test_zero_height_paddle_rejected() {
        let res = Paddle::new(Side::Right, Vec2::ZERO, 10.0, 0.0);
        assert!(matches!(res, Err(ConfigError::InvalidPaddle { .. })));
        let res = Paddle::new(Side::Right, Vec2::ZERO, f32::NAN, 10.0);
        assert!(res.is_err());
    }

    #[test]
    fn test_collides_on_overlap_only() {
        let paddle = paddle_at(Vec2::new(5.0, 100.0), 40.0);
        let touching = Ball::new(Vec2::new(10.0, 90.0), Vec2::ZERO, 8.0);
        let clear = Ball::new(Vec2::new(10.5, 90.0), Vec2::ZERO, 8.0);
        let above = Ball::new(Vec2::new(5.0, 121.0), Vec2::ZERO, 8.0);
        assert!(paddle.collides(&touching), "Shared edge counts as contact");
        assert!(!paddle.collides(&clear));
        assert!(!paddle.collides(&above));
    }

    #[test]
    fn test_bounce_center_hit_reverses_and_accelerates() {
        let paddle = paddle_at(Vec2::new(5.0, 100.0), 40.0);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(-4.0, 1.0), 10.0);
        ball.set_center(Vec2::new(12.0, 100.0));
        let vel = paddle.bounce_ball(&mut ball, 1.15);
        assert!((vel.x - 4.6).abs() < 1e-5, "x reversed and scaled, got {}", vel.x);
        assert!((vel.y - 1.15).abs() < 1e-5, "centered hit adds no deflection");
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_bounce_deflects_by_contact_point() {
        let paddle = paddle_at(Vec2::new(5.0, 100.0), 40.0);
        let mut low = Ball::new(Vec2::ZERO, Vec2::new(-5.0, 0.0), 10.0);
        low.set_center(Vec2::new(12.0, 80.0));
        paddle.bounce_ball(&mut low, 1.15);
        assert!((low.vel.y + 1.0).abs() < 1e-5, "Bottom edge deflects by -1");

        // Unclamped when the ball center is beyond the paddle edge
        let mut far = Ball::new(Vec2::ZERO, Vec2::new(-5.0, 0.0), 10.0);
        far.set_center(Vec2::new(12.0, 124.0));
        paddle.bounce_ball(&mut far, 1.15);
        assert!((far.vel.y - 1.2).abs() < 1e-5);
    }
}
