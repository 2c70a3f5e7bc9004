use thiserror::Error;

/// Rejected configuration. Raised at construction time, never mid-match.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field size must be positive, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("paddle size must be positive, got {width}x{height}")]
    InvalidPaddle { width: f32, height: f32 },

    #[error("ball size must be positive, got {0}")]
    InvalidBall(f32),

    #[error("win score must be at least 1")]
    InvalidWinScore,

    #[error("bounce multiplier must be positive, got {0}")]
    InvalidBounceMultiplier(f32),

    #[error("AI step must be non-negative, got {0}")]
    InvalidAiStep(f32),

    #[error("serve angle range [{min}, {max}] is empty")]
    InvalidServeAngles { min: i32, max: i32 },

    #[error("tick rate must be at least 1 Hz")]
    InvalidTickRate,

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
