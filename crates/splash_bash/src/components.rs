//! Game-specific components

use splash_engine::animation::ClipClock;
use splash_engine::foundation::math::{Transform, Vec3};
use std::fmt;

/// Which side of the duel an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// Left-hand player (WASD)
    One,

    /// Right-hand player (IJKL)
    Two,
}

impl PlayerId {
    /// Both players, in processing order
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other player
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Slot of this player in per-player arrays
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Water projectile lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    /// Carried by its owner, pinned to the owner's pose
    #[default]
    Idle,

    /// In flight along the heading captured when it was fired
    Traveling,
}

/// Water projectile owned by one player
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Hitbox (scale 1)
    pub transform: Transform,

    /// Current lifecycle state
    pub state: ProjectileState,

    /// World-space unit direction of travel, fixed at fire time
    pub heading: Vec3,
}

impl Projectile {
    /// Create an idle projectile pinned to `owner`
    pub fn pinned_to(owner: &Transform) -> Self {
        let mut projectile = Self {
            transform: Transform::identity(),
            state: ProjectileState::Idle,
            heading: Vec3::zeros(),
        };
        projectile.return_to(owner);
        projectile
    }

    /// Go idle and snap back to the owner's position and rotation
    pub fn return_to(&mut self, owner: &Transform) {
        self.state = ProjectileState::Idle;
        self.transform.snap_pose_to(owner);
        self.heading = Vec3::zeros();
    }

    /// Whether the projectile is in flight
    pub fn is_traveling(&self) -> bool {
        self.state == ProjectileState::Traveling
    }
}

/// One duelist
#[derive(Debug, Clone)]
pub struct Player {
    /// Which side this is
    pub id: PlayerId,

    /// Current pose; position doubles as the hitbox min corner
    pub transform: Transform,

    /// Pose restored on reset
    pub start: Transform,

    /// Whether the water gun is loaded
    pub has_ammo: bool,

    /// Times this player has been splashed
    pub hits_taken: u32,

    /// This player's projectile
    pub projectile: Projectile,

    /// Walk animation clock
    pub walk_clock: ClipClock,

    /// Reload bottle HUD animation clock
    pub reload_clock: ClipClock,

    /// World translation applied by movement this frame
    frame_translation: Vec3,
}

impl Player {
    /// Create a loaded player standing at `start`
    pub fn new(id: PlayerId, start: Transform) -> Self {
        Self {
            id,
            transform: start.clone(),
            projectile: Projectile::pinned_to(&start),
            start,
            has_ammo: true,
            hits_taken: 0,
            walk_clock: ClipClock::running(),
            reload_clock: ClipClock::stopped(),
            frame_translation: Vec3::zeros(),
        }
    }

    /// Forget last frame's translation; call before movement
    pub fn begin_frame(&mut self) {
        self.frame_translation = Vec3::zeros();
    }

    /// Translate along the local axes, remembering the step for undo
    pub fn step_local(&mut self, offset: Vec3) {
        self.frame_translation += self.transform.move_local(offset);
    }

    /// Translation applied since [`begin_frame`](Self::begin_frame)
    pub fn frame_translation(&self) -> Vec3 {
        self.frame_translation
    }

    /// Revert this frame's translation
    ///
    /// Only the first call in a frame moves the player.
    pub fn undo_translation(&mut self) {
        self.transform.position -= self.frame_translation;
        self.frame_translation = Vec3::zeros();
    }

    /// Register a splash, saturating at `hits_to_win`
    pub fn take_hit(&mut self, hits_to_win: u32) {
        self.hits_taken = self.hits_taken.saturating_add(1).min(hits_to_win);
    }

    /// Back to the start pose, loaded, unhurt
    pub fn reset(&mut self) {
        self.transform = self.start.clone();
        self.has_ammo = true;
        self.hits_taken = 0;
        self.projectile.return_to(&self.start);
        self.walk_clock.start();
        self.reload_clock.stop();
        self.frame_translation = Vec3::zeros();
    }
}

/// Ammo crate (water bottle) that respawns after being picked up
#[derive(Debug, Clone)]
pub struct Pickup {
    /// Fixed hitbox
    pub transform: Transform,

    /// Whether the crate can be collected
    pub visible: bool,

    /// Seconds spent hidden
    pub respawn_timer: f32,
}

impl Pickup {
    /// Create a visible crate
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            visible: true,
            respawn_timer: 0.0,
        }
    }

    /// Hide the crate and start its respawn countdown
    pub fn collect(&mut self) {
        self.visible = false;
        self.respawn_timer = 0.0;
    }

    /// Accumulate hidden time; returns true when the crate reappears
    pub fn tick(&mut self, dt: f32, respawn_secs: f32) -> bool {
        if self.visible {
            return false;
        }

        self.respawn_timer += dt;
        if self.respawn_timer >= respawn_secs {
            self.visible = true;
            self.respawn_timer = 0.0;
            return true;
        }
        false
    }

    /// Visible with a zeroed timer
    pub fn reset(&mut self) {
        self.visible = true;
        self.respawn_timer = 0.0;
    }
}

/// What an obstacle is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Arena boundary
    Wall,

    /// Prop inside the arena (tables, trees, presents)
    Scenery,
}

/// Static hitbox that blocks players and stops projectiles
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Hitbox
    pub transform: Transform,

    /// Boundary or prop
    pub kind: ObstacleKind,
}
