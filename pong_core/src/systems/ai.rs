use crate::{Ball, Paddle};

/// Proportional tracker for the computer-controlled paddle.
///
/// Moves the paddle center toward the ball center each tick with a hard cap.
/// It has no notion of where the ball is heading, so it cannot anticipate
/// bounces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    pub max_step: f32,
}

impl AiController {
    pub fn new(max_step: f32) -> Self {
        Self { max_step }
    }

    pub fn move_toward_ball(&self, paddle: &mut Paddle, ball: &Ball) {
        let target = ball.center().y;
        let current = paddle.center.y;
        if target > current {
            paddle.center.y += self.max_step.min(target - current);
        } else if target < current {
            paddle.center.y -= self.max_step.min(current - target);
        }
    }
}
