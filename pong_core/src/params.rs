use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;

    // Ball
    pub const BALL_SIZE: f32 = 50.0;
    pub const BOUNCE_MULTIPLIER: f32 = 1.15; // Applied on every paddle hit

    // Serve
    pub const START_SERVE: Vec2 = Vec2::new(8.0, 2.0);
    pub const RALLY_SERVE_SPEED: f32 = 8.0;
    pub const SERVE_ANGLE_MIN_DEG: i32 = 10;
    pub const SERVE_ANGLE_MAX_DEG: i32 = 60;

    // AI
    pub const AI_MAX_STEP: f32 = 4.5; // Units per tick (was 5.0)

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Loop
    pub const TICK_RATE_HZ: u32 = 60;
    pub const MAX_CATCH_UP_TICKS: u32 = 6; // ~0.1s at 60 Hz
}
