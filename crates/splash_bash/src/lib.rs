//! # Birthday Splash Bash
//!
//! A 1v1 top-down water-gun duel. Two players walk around a backyard party,
//! fire one shot at a time and reload from water bottle crates. The first to
//! splash the other three times wins.
//!
//! The crate owns the gameplay state machine only. Drawing goes through
//! [`splash_engine::render::Renderer`], keys through
//! [`splash_engine::input::InputSource`] and time through
//! [`splash_engine::foundation::time::Clock`].

#![warn(missing_docs)]

pub mod arena;
pub mod assets;
pub mod components;
pub mod config;
pub mod controls;
pub mod decor;
pub mod error;
pub mod game;
pub mod hud;
pub mod match_state;
pub mod systems;

#[cfg(test)]
mod tests;

pub use error::{GameError, GameResult};
pub use game::{Game, GameEvent};
pub use match_state::MatchState;
