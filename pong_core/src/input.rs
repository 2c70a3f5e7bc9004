use crate::Side;

/// Map a pointer position to the paddle it steers.
///
/// The left third of the field drives the left paddle, the right third the
/// right paddle, and the middle third is a dead zone.
pub fn pointer_target(x: f32, y: f32, field_width: f32) -> Option<(Side, f32)> {
    let third = field_width / 3.0;
    if x < third {
        Some((Side::Left, y))
    } else if x > field_width - third {
        Some((Side::Right, y))
    } else {
        None
    }
}
