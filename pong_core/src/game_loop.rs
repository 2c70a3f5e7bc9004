//! Fixed-rate driver
//!
//! Turns real elapsed time from the host's tick source into whole simulation
//! ticks and fans queued match events out to observers.

use std::time::Duration;

use crate::input::pointer_target;
use crate::match_controller::{Match, TickOutcome};
use crate::params::Params;
use crate::resources::MatchEvent;
use crate::Side;

/// Collaborator notified of every match event, in order (audio, logging, UI)
pub trait MatchObserver {
    fn on_event(&mut self, event: &MatchEvent);
}

/// Writes match events through the `log` facade
#[derive(Debug, Default)]
pub struct LogObserver;

impl MatchObserver for LogObserver {
    fn on_event(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::MatchStarted { vs_ai } => log::info!("match start, vs_ai={vs_ai}"),
            MatchEvent::Served {
                angle_deg,
                velocity,
            } => log::debug!("serve at {angle_deg} deg, velocity={velocity}"),
            MatchEvent::PaddleBounce { side, velocity } => {
                log::debug!("bounce off {side:?} paddle, velocity={velocity}")
            }
            MatchEvent::WallBounce => log::trace!("wall bounce"),
            MatchEvent::Scored { scorer, score } => {
                log::info!("{scorer:?} scores, {}-{}", score.left, score.right)
            }
            MatchEvent::MatchEnded {
                winner,
                elapsed,
                score,
            } => log::info!(
                "match end, winner={winner:?} score={}-{} time={:.2}s",
                score.left,
                score.right,
                elapsed.as_secs_f32()
            ),
            MatchEvent::ModeSwitched { vs_ai } => log::info!("mode switch, vs_ai={vs_ai}"),
            MatchEvent::ReturnedToMenu => log::info!("back to menu"),
        }
    }
}

/// Runs [`Match::update`] at a fixed rate.
///
/// This is the only place ticks are issued, so physics, scoring and the AI
/// step always run together in one ordered update.
pub struct GameLoop {
    game: Match,
    tick_duration: Duration,
    accumulator: Duration,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl GameLoop {
    pub fn new(game: Match) -> Self {
        let hz = u64::from(game.config().tick_rate_hz.max(1));
        Self {
            game,
            tick_duration: Duration::from_nanos(1_000_000_000 / hz),
            accumulator: Duration::ZERO,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Time carried over that has not yet made up a whole tick
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Feed real elapsed time and run as many whole ticks as it covers.
    ///
    /// Catch-up is capped at [`Params::MAX_CATCH_UP_TICKS`]. Pending time is
    /// dropped whenever the match stops ticking. Returns the ticks simulated.
    pub fn advance(&mut self, real_dt: Duration) -> u32 {
        if !self.game.is_ticking() {
            self.accumulator = Duration::ZERO;
            return 0;
        }

        let max_pending = self.tick_duration * Params::MAX_CATCH_UP_TICKS;
        self.accumulator = (self.accumulator + real_dt).min(max_pending);

        let mut ran = 0;
        while self.accumulator >= self.tick_duration {
            self.accumulator -= self.tick_duration;
            match self.tick() {
                TickOutcome::Continue => ran += 1,
                TickOutcome::Finished { .. } => {
                    ran += 1;
                    break;
                }
                TickOutcome::Skipped => break,
            }
        }
        ran
    }

    /// Run exactly one update and dispatch its events
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.game.update();
        if outcome != TickOutcome::Continue {
            self.accumulator = Duration::ZERO;
        }
        self.dispatch();
        outcome
    }

    /// Run up to `n` ticks, stopping early once the match stops
    pub fn run_ticks(&mut self, n: u32) -> u32 {
        let mut ran = 0;
        for _ in 0..n {
            match self.tick() {
                TickOutcome::Continue => ran += 1,
                TickOutcome::Finished { .. } => return ran + 1,
                TickOutcome::Skipped => return ran,
            }
        }
        ran
    }

    pub fn start_game(&mut self) {
        self.accumulator = Duration::ZERO;
        self.game.start_game();
        self.dispatch();
    }

    pub fn return_to_main_menu(&mut self) -> bool {
        self.accumulator = Duration::ZERO;
        let applied = self.game.return_to_main_menu();
        self.dispatch();
        applied
    }

    pub fn switch_mode(&mut self) -> bool {
        let vs_ai = self.game.switch_mode();
        self.dispatch();
        vs_ai
    }

    pub fn set_paddle_target(&mut self, side: Side, y: f32) -> bool {
        self.game.set_paddle_target(side, y)
    }

    /// Route a raw pointer position to the paddle under it
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        match pointer_target(x, y, self.game.config().field_width) {
            Some((side, y)) => self.game.set_paddle_target(side, y),
            None => false,
        }
    }

    fn dispatch(&mut self) {
        let events = self.game.drain_events();
        if self.observers.is_empty() {
            return;
        }
        for event in &events {
            for observer in self.observers.iter_mut() {
                observer.on_event(event);
            }
        }
    }
}
