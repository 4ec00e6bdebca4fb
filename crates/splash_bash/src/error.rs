//! Game error type

use splash_engine::config::ConfigError;
use splash_engine::render::RenderError;
use thiserror::Error;

/// Errors that stop the game
#[derive(Error, Debug)]
pub enum GameError {
    /// The renderer refused a draw
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// An animation names a pose the asset catalog does not have
    #[error("Animation '{clip}' references pose {pose} but only {available} poses are loaded")]
    MissingPose {
        /// Clip name
        clip: &'static str,
        /// 1-based pose number requested
        pose: usize,
        /// Poses available
        available: usize,
    },
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
