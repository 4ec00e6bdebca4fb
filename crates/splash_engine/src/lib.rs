//! # Splash Engine
//!
//! Gameplay foundation for small real-time 3D games.
//!
//! ## Features
//!
//! - **Transforms**: position/rotation/scale with local-space movement
//! - **Collision**: min-corner axis-aligned box overlap on the play plane
//! - **Time**: frame timer with a clamped delta and injectable clocks
//! - **Input**: polled keyboard state with key-down edges
//! - **Rendering seam**: opaque mesh/material handles and a draw trait
//! - **Animation**: mesh-swap clips with per-entity clocks, path movers
//! - **Configuration**: TOML/RON loading for any `serde` type
//!
//! ## Quick Start
//!
//! ```rust
//! use splash_engine::prelude::*;
//!
//! let mut timer = FrameTimer::new(1.0);
//! let mut clock = ManualClock::new();
//! let mut renderer = RecordingRenderer::new();
//!
//! timer.tick(&clock);
//! clock.advance(0.016);
//! let dt = timer.tick(&clock);
//!
//! let mut hero = Transform::from_position(Vec3::new(0.0, 0.0, 1.0));
//! hero.move_local(Vec3::new(0.0, 0.0, 18.0 * dt));
//! renderer.draw(MeshHandle(1), MaterialHandle(1), &hero.to_matrix()).unwrap();
//! assert_eq!(renderer.calls().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod physics;
pub mod input;
pub mod render;
pub mod animation;
pub mod config;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{select_frame, AnimationClip, ClipClock, PingPongCatmull, PingPongLerp, PlaybackMode, Spinner},
        config::{Config, ConfigError, ConfigFormat},
        foundation::{
            math::{Mat4, Quat, Transform, Vec2, Vec3},
            time::{Clock, FrameTimer, ManualClock, SystemClock},
        },
        input::{InputSource, InputState, KeyCode},
        physics::{overlaps, overlaps_any},
        render::{DrawCall, MaterialHandle, MeshHandle, RecordingRenderer, RenderError, RenderResult, Renderer},
    };
}
