use crate::{Ball, Events, MatchEvent, Paddle};

/// Check ball against both paddles, left first, bouncing on contact.
///
/// Only reverses on overlap; there is no swept test, so a ball fast enough to
/// cross a paddle within one tick passes through it.
pub fn check_paddle_collisions(
    ball: &mut Ball,
    paddles: [&Paddle; 2],
    bounce_multiplier: f32,
    events: &mut Events,
) {
    for paddle in paddles {
        if paddle.collides(ball) {
            let velocity = paddle.bounce_ball(ball, bounce_multiplier);
            events.push(MatchEvent::PaddleBounce {
                side: paddle.side,
                velocity,
            });
        }
    }
}

/// Reflect off the bottom and top walls.
///
/// Sign flip only: the ball is not pushed back inside and may stay out of
/// bounds for a tick.
pub fn check_wall_collisions(ball: &mut Ball, field_height: f32, events: &mut Events) {
    if ball.pos.y < 0.0 || ball.top() > field_height {
        ball.vel.y = -ball.vel.y;
        events.push(MatchEvent::WallBounce);
    }
}
