use crate::Ball;

/// Move ball by one tick of velocity
pub fn move_ball(ball: &mut Ball) {
    ball.move_ball();
}
