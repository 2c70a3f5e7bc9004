//! Fixed-tick simulation core for a two-paddle ball game.
//!
//! A [`Match`] owns the ball and both paddles and runs one ordered pipeline
//! per tick; a [`GameLoop`] feeds it ticks from the host's timer and forwards
//! the resulting [`MatchEvent`]s to observers.

pub mod components;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod match_controller;
pub mod math;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game_loop::*;
pub use match_controller::*;
pub use params::*;
pub use resources::*;
