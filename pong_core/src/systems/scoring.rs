use crate::{Ball, Side};

/// Check if ball left the field through the left or right edge.
/// Returns the side that scores.
pub fn check_scoring(ball: &Ball, field_width: f32) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > field_width {
        Some(Side::Left)
    } else {
        None
    }
}
