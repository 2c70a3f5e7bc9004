use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Time source for match timestamps
pub trait Clock {
    /// Time since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Side that reached `win_score`, if any
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left < win_score && self.right < win_score {
            return None;
        }
        // Both sides at the threshold cannot happen: one point is scored per
        // tick and the check runs every tick.
        debug_assert_ne!(self.left, self.right, "tied scores at win check");
        if self.left > self.right {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Uniform integer angle in `[min, max]` degrees
    pub fn serve_angle(&mut self, min: i32, max: i32) -> i32 {
        self.0.gen_range(min..=max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something observable happened in the match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    MatchStarted {
        vs_ai: bool,
    },
    Served {
        angle_deg: i32,
        velocity: Vec2,
    },
    PaddleBounce {
        side: Side,
        velocity: Vec2,
    },
    WallBounce,
    Scored {
        scorer: Side,
        score: Score,
    },
    MatchEnded {
        winner: Side,
        elapsed: Duration,
        score: Score,
    },
    ModeSwitched {
        vs_ai: bool,
    },
    ReturnedToMenu,
}

/// Events queued since the last drain, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct Events {
    queue: Vec<MatchEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: MatchEvent) {
        self.queue.push(event);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.queue.iter()
    }

    pub fn drain(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.queue)
    }
}
