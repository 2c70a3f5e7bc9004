use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::error::ConfigError;
use crate::resources::{Clock, Events, GameRng, MatchEvent, MonotonicClock, Score};
use crate::systems::*;

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Menu shown, ball parked at center
    Idle,
    /// Ticks are being simulated
    Running,
    /// A side reached the win score; frozen until restarted or reset
    Finished,
}

/// What a call to [`Match::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing changed
    Skipped,
    Continue,
    Finished { winner: Side },
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub state: MatchState,
    pub vs_ai: bool,
    pub ball_pos: Vec2,
    pub ball_center: Vec2,
    pub ball_vel: Vec2,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub score: Score,
    pub elapsed: Duration,
}

/// Owns the ball, both paddles and the match lifecycle.
///
/// All simulation state is mutated here, on the thread driving [`Match::update`].
/// Collaborators observe through [`Match::snapshot`] and the drained event
/// queue, and only act on the match through its commands.
pub struct Match {
    config: Config,
    ball: Ball,
    left: Paddle,
    right: Paddle,
    state: MatchState,
    vs_ai: bool,
    ai: AiController,
    start_time: Duration,
    elapsed: Duration,
    tick: u64,
    ticking: bool,
    rng: GameRng,
    clock: Box<dyn Clock>,
    events: Events,
}

impl Match {
    /// Create an idle match using the wall clock and the configured seed
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Self::with_parts(
            config,
            GameRng::from_seed(config.rng_seed),
            Box::new(MonotonicClock::new()),
        )
    }

    pub fn with_parts(
        config: &Config,
        rng: GameRng,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mid_y = config.field_height / 2.0;
        let left = Paddle::new(
            Side::Left,
            Vec2::new(config.paddle_x(Side::Left), mid_y),
            config.paddle_width,
            config.paddle_height,
        )?;
        let right = Paddle::new(
            Side::Right,
            Vec2::new(config.paddle_x(Side::Right), mid_y),
            config.paddle_width,
            config.paddle_height,
        )?;
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);
        ball.set_center(config.field_center());

        let start_time = clock.now();

        Ok(Self {
            config: config.clone(),
            ball,
            left,
            right,
            state: MatchState::Idle,
            vs_ai: true,
            ai: AiController::new(config.ai_max_step),
            start_time,
            elapsed: Duration::ZERO,
            tick: 0,
            ticking: false,
            rng,
            clock,
            events: Events::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Ticks simulated since the last start
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether periodic updates are currently scheduled
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct access for scripted setups; renderers should use [`Match::ball`].
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn score(&self) -> Score {
        Score {
            left: self.left.score,
            right: self.right.score,
        }
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.events.drain()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            state: self.state,
            vs_ai: self.vs_ai,
            ball_pos: self.ball.pos,
            ball_center: self.ball.center(),
            ball_vel: self.ball.vel,
            paddle_left_y: self.left.center.y,
            paddle_right_y: self.right.center.y,
            score: self.score(),
            elapsed: self.elapsed,
        }
    }

    /// Center the ball and launch it along `base` rotated by a random whole
    /// number of degrees from the configured serve range. Returns the angle.
    pub fn serve(&mut self, base: Vec2) -> i32 {
        let angle_deg = self
            .rng
            .serve_angle(self.config.serve_angle_min_deg, self.config.serve_angle_max_deg);
        self.ball.set_center(self.config.field_center());
        self.ball.vel = crate::math::rotate_degrees(base, angle_deg as f32);
        self.events.push(MatchEvent::Served {
            angle_deg,
            velocity: self.ball.vel,
        });
        angle_deg
    }

    /// Start (or restart) a match from any state
    pub fn start_game(&mut self) {
        self.ticking = false;

        self.reset_scores();
        self.elapsed = Duration::ZERO;
        self.tick = 0;
        self.start_time = self.clock.now();
        self.state = MatchState::Running;
        self.events.push(MatchEvent::MatchStarted { vs_ai: self.vs_ai });
        self.serve(self.config.start_serve);

        if self.vs_ai {
            self.right.center.y = self.config.field_height / 2.0;
        }

        self.ticking = true;
        log::info!("Match started (vs_ai={})", self.vs_ai);
    }

    /// Advance the simulation by one tick.
    ///
    /// Order: move, paddles (left then right), walls, scoring, AI, win check.
    pub fn update(&mut self) -> TickOutcome {
        if self.state != MatchState::Running || !self.ticking {
            return TickOutcome::Skipped;
        }

        self.elapsed = self.clock.now().saturating_sub(self.start_time);
        self.tick += 1;

        move_ball(&mut self.ball);
        check_paddle_collisions(
            &mut self.ball,
            [&self.left, &self.right],
            self.config.bounce_multiplier,
            &mut self.events,
        );
        check_wall_collisions(&mut self.ball, self.config.field_height, &mut self.events);

        if let Some(scorer) = check_scoring(&self.ball, self.config.field_width) {
            self.paddle_mut(scorer).score += 1;
            let score = self.score();
            log::info!("{scorer:?} scored ({}-{})", score.left, score.right);
            self.events.push(MatchEvent::Scored { scorer, score });
            self.serve(self.config.rally_serve(scorer.opposite()));
        }

        if self.vs_ai {
            self.ai.move_toward_ball(&mut self.right, &self.ball);
        }

        match self.score().has_winner(self.config.win_score) {
            Some(winner) => {
                self.finish(winner);
                TickOutcome::Finished { winner }
            }
            None => TickOutcome::Continue,
        }
    }

    /// Back to the menu from Running or Finished. No-op when already idle.
    pub fn return_to_main_menu(&mut self) -> bool {
        if self.state == MatchState::Idle {
            return false;
        }
        self.ticking = false;

        self.state = MatchState::Idle;
        self.reset_scores();
        self.elapsed = Duration::ZERO;
        self.tick = 0;
        self.ball.set_center(self.config.field_center());
        self.ball.vel = Vec2::ZERO;

        self.events.push(MatchEvent::ReturnedToMenu);
        log::info!("Returned to main menu");
        true
    }

    /// Toggle the computer opponent. Returns the new mode.
    pub fn switch_mode(&mut self) -> bool {
        if self.state != MatchState::Idle {
            log::debug!("Mode switched while {:?}", self.state);
        }
        self.vs_ai = !self.vs_ai;
        self.events.push(MatchEvent::ModeSwitched { vs_ai: self.vs_ai });
        self.vs_ai
    }

    /// Move a player's paddle center to `y`.
    ///
    /// Ignored for the AI-controlled side and while the match is finished.
    pub fn set_paddle_target(&mut self, side: Side, y: f32) -> bool {
        if self.state == MatchState::Finished {
            return false;
        }
        if self.vs_ai && side == Side::Right {
            log::debug!("Ignoring paddle target for AI-controlled side");
            return false;
        }
        self.paddle_mut(side).center.y = y;
        true
    }

    fn reset_scores(&mut self) {
        self.left.score = 0;
        self.right.score = 0;
    }

    fn finish(&mut self, winner: Side) {
        self.ticking = false;

        self.state = MatchState::Finished;
        let score = self.score();
        log::info!(
            "Match over: {winner:?} wins {}-{} after {:.1}s",
            score.left,
            score.right,
            self.elapsed.as_secs_f32()
        );
        self.events.push(MatchEvent::MatchEnded {
            winner,
            elapsed: self.elapsed,
            score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ManualClock;

    fn setup_match() -> (Match, ManualClock) {
        let clock = ManualClock::new();
        let game = Match::with_parts(&Config::new(), GameRng::new(12345), Box::new(clock.clone()))
            .expect("default config is valid");
        (game, clock)
    }

    #[test]
    fn test_new_match_is_idle_and_centered() {
        let (game, _clock) = setup_match();
        let config = Config::new();
        assert_eq!(game.state(), MatchState::Idle);
        assert!(!game.is_ticking());
        assert!(game.vs_ai(), "Computer opponent is the default mode");
        assert_eq!(game.ball().center(), config.field_center());
        assert_eq!(game.ball().vel, Vec2::ZERO);
        assert_eq!(game.paddle(Side::Left).center.y, config.field_height / 2.0);
        assert_eq!(game.paddle(Side::Right).center.y, config.field_height / 2.0);
        assert_eq!(game.score(), Score::new());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = Config {
            paddle_height: 0.0,
            ..Config::default()
        };
        let res = Match::with_parts(&config, GameRng::default(), Box::new(ManualClock::new()));
        assert!(matches!(res, Err(ConfigError::InvalidPaddle { .. })));
    }

    #[test]
    fn test_update_skipped_while_idle() {
        let (mut game, _clock) = setup_match();
        game.ball_mut().vel = Vec2::new(5.0, 5.0);
        let before = game.snapshot();

        assert_eq!(game.update(), TickOutcome::Skipped);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_start_game_serves_and_schedules() {
        let (mut game, _clock) = setup_match();
        game.paddle_mut(Side::Right).center.y = 12.0;

        game.start_game();

        assert_eq!(game.state(), MatchState::Running);
        assert!(game.is_ticking());
        assert_eq!(game.ball().center(), game.config().field_center());
        let speed = game.config().start_serve.length();
        assert!((game.ball().vel.length() - speed).abs() < 1e-4);
        assert_eq!(game.paddle(Side::Right).center.y, 300.0, "AI paddle recentered");

        let events = game.drain_events();
        assert_eq!(events[0], MatchEvent::MatchStarted { vs_ai: true });
        assert!(matches!(events[1], MatchEvent::Served { .. }));
    }

    #[test]
    fn test_elapsed_tracks_clock_from_start() {
        let (mut game, clock) = setup_match();
        clock.set(Duration::from_secs(10));
        game.start_game();

        clock.advance(Duration::from_millis(1500));
        game.update();
        assert_eq!(game.elapsed(), Duration::from_millis(1500));
        assert_eq!(game.tick(), 1);
    }

    #[test]
    fn test_switch_mode_toggles_and_reports() {
        let (mut game, _clock) = setup_match();
        assert!(!game.switch_mode());
        assert!(game.switch_mode());
        assert_eq!(
            game.drain_events(),
            vec![
                MatchEvent::ModeSwitched { vs_ai: false },
                MatchEvent::ModeSwitched { vs_ai: true },
            ]
        );
    }

    #[test]
    fn test_paddle_target_ignored_for_ai_side() {
        let (mut game, _clock) = setup_match();
        assert!(!game.set_paddle_target(Side::Right, 50.0));
        assert_eq!(game.paddle(Side::Right).center.y, 300.0);

        assert!(game.set_paddle_target(Side::Left, 50.0));
        assert_eq!(game.paddle(Side::Left).center.y, 50.0);

        game.switch_mode();
        assert!(
            game.set_paddle_target(Side::Right, 75.0),
            "Two-player mode frees the right paddle"
        );
        assert_eq!(game.paddle(Side::Right).center.y, 75.0);
    }

    #[test]
    fn test_return_to_menu_resets_but_keeps_mode() {
        let (mut game, clock) = setup_match();
        game.switch_mode();
        game.start_game();
        game.paddle_mut(Side::Left).score = 3;
        clock.advance(Duration::from_secs(4));
        game.update();

        assert!(game.return_to_main_menu());

        assert_eq!(game.state(), MatchState::Idle);
        assert!(!game.is_ticking());
        assert_eq!(game.score(), Score::new());
        assert_eq!(game.elapsed(), Duration::ZERO);
        assert_eq!(game.ball().vel, Vec2::ZERO);
        assert_eq!(game.ball().center(), game.config().field_center());
        assert!(!game.vs_ai(), "Mode survives a trip to the menu");
        assert!(!game.return_to_main_menu(), "Already idle");
    }
}
