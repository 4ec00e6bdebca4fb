//! Physics module for collision detection
//!
//! Gameplay only needs axis-aligned box overlap on the play plane; there is
//! no collision response beyond what the game systems do with the result.

pub mod aabb;

pub use aabb::{overlaps, overlaps_any, Aabb2};
