//! Gameplay systems, run in a fixed order by [`Game::frame`](crate::game::Game::frame)

pub mod movement;
pub mod pickup;
pub mod projectile;

pub use projectile::ProjectileEvent;
