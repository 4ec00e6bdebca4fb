//! Arena layout: boundary walls, scenery hitboxes, ammo crates, start poses
//!
//! Obstacles live in a slot map and are told apart by [`ObstacleKind`], so
//! adding a prop never shifts the identity of any other hitbox.

use crate::components::{Obstacle, ObstacleKind, Pickup, PlayerId};
use slotmap::{new_key_type, SlotMap};
use splash_engine::foundation::math::{Transform, Vec3};

new_key_type! {
    /// Stable handle to an obstacle in an [`Arena`]
    pub struct ObstacleId;
}

/// Euler rotation players start with; local forward then points down -Y
pub const PLAYER_START_ROTATION: Vec3 = Vec3::new(90.0, 0.0, 0.0);

/// Uniform scale of a player hitbox
pub const PLAYER_SCALE: f32 = 3.0;

/// Static part of the play field
#[derive(Debug, Clone)]
pub struct Arena {
    obstacles: SlotMap<ObstacleId, Obstacle>,
    crates: Vec<Pickup>,
    starts: [Transform; 2],
}

impl Arena {
    /// Create an empty arena with the given start poses
    pub fn new(player_one_start: Transform, player_two_start: Transform) -> Self {
        Self {
            obstacles: SlotMap::with_key(),
            crates: Vec::new(),
            starts: [player_one_start, player_two_start],
        }
    }

    /// Standard player start pose at `position`
    pub fn player_start(position: Vec3) -> Transform {
        Transform::from_euler_degrees(
            position,
            PLAYER_START_ROTATION,
            Vec3::new(PLAYER_SCALE, PLAYER_SCALE, PLAYER_SCALE),
        )
    }

    /// Add a boundary wall
    pub fn add_wall(&mut self, position: Vec3, scale: Vec3) -> ObstacleId {
        self.add_obstacle(ObstacleKind::Wall, position, scale)
    }

    /// Add a scenery hitbox
    pub fn add_scenery(&mut self, position: Vec3, scale: Vec3) -> ObstacleId {
        self.add_obstacle(ObstacleKind::Scenery, position, scale)
    }

    fn add_obstacle(&mut self, kind: ObstacleKind, position: Vec3, scale: Vec3) -> ObstacleId {
        self.obstacles.insert(Obstacle {
            transform: Transform::from_position(position).with_scale(scale),
            kind,
        })
    }

    /// Add an ammo crate (unit hitbox); returns its index
    pub fn add_crate(&mut self, position: Vec3) -> usize {
        self.crates.push(Pickup::new(Transform::from_position(position)));
        self.crates.len() - 1
    }

    /// Look up an obstacle
    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id)
    }

    /// Remove an obstacle
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.obstacles.remove(id)
    }

    /// Number of obstacles of one kind
    pub fn count(&self, kind: ObstacleKind) -> usize {
        self.obstacles.values().filter(|o| o.kind == kind).count()
    }

    /// Hitboxes of one kind
    pub fn hitboxes(&self, kind: ObstacleKind) -> impl Iterator<Item = &Transform> + '_ {
        self.obstacles
            .values()
            .filter(move |o| o.kind == kind)
            .map(|o| &o.transform)
    }

    /// Every hitbox that blocks players and stops projectiles
    pub fn blocking(&self) -> impl Iterator<Item = &Transform> + '_ {
        self.obstacles.values().map(|o| &o.transform)
    }

    /// Ammo crates
    pub fn crates(&self) -> &[Pickup] {
        &self.crates
    }

    /// Ammo crates, mutably
    pub fn crates_mut(&mut self) -> &mut [Pickup] {
        &mut self.crates
    }

    /// Start pose of a player
    pub fn start(&self, id: PlayerId) -> &Transform {
        &self.starts[id.index()]
    }

    /// Every crate visible with a zeroed timer
    pub fn reset_crates(&mut self) {
        for pickup in &mut self.crates {
            pickup.reset();
        }
    }

    /// The backyard party arena
    pub fn playground() -> Self {
        let mut arena = Self::new(
            Self::player_start(Vec3::new(-30.0, -20.0, 1.0)),
            Self::player_start(Vec3::new(30.0, -20.0, 1.0)),
        );

        // Boundary
        arena.add_wall(Vec3::new(-45.0, -30.0, 1.0), Vec3::new(1.0, 70.0, 1.0));
        arena.add_wall(Vec3::new(47.0, -30.0, 1.0), Vec3::new(1.0, 70.0, 1.0));
        arena.add_wall(Vec3::new(-45.0, -33.0, 1.0), Vec3::new(100.0, 1.0, 1.0));
        arena.add_wall(Vec3::new(-45.0, 33.0, 1.0), Vec3::new(100.0, 1.0, 1.0));

        let uniform = |s: f32| Vec3::new(s, s, s);
        let scenery: [(f32, f32, Vec3); 31] = [
            (-31.0, 3.0, uniform(7.0)),
            (-31.0, -9.0, uniform(7.0)),
            (27.0, -2.0, uniform(7.0)),
            (-10.0, 28.0, uniform(4.0)),
            (9.0, 28.0, uniform(4.0)),
            (-10.0, -29.0, uniform(4.0)),
            (9.0, -29.0, uniform(4.0)),
            (-6.0, -8.0, uniform(5.0)),
            (-7.5, 5.0, Vec3::new(1.0, 10.0, 1.0)),
            (2.0, 10.0, Vec3::new(1.0, 2.5, 1.0)),
            (12.0, 10.0, Vec3::new(1.0, 2.5, 1.0)),
            (10.0, 0.0, Vec3::new(1.0, 0.7, 1.0)),
            (13.0, 0.0, Vec3::new(1.0, 0.7, 1.0)),
            (10.0, -12.0, Vec3::new(1.0, 0.7, 1.0)),
            (13.0, -12.0, Vec3::new(1.0, 0.7, 1.0)),
            (11.5, -3.0, uniform(1.0)),
            (11.5, -9.0, uniform(1.0)),
            (1.5, 26.0, uniform(1.0)),
            (-19.0, 25.0, uniform(1.0)),
            (19.0, 26.0, uniform(1.0)),
            (-40.0, 26.0, uniform(1.0)),
            (-40.0, -24.0, uniform(1.0)),
            (-35.0, -27.0, uniform(1.0)),
            (-26.0, -28.0, uniform(1.0)),
            (-16.0, -28.0, uniform(1.0)),
            (17.0, -28.0, uniform(1.0)),
            (36.0, -28.0, uniform(1.0)),
            (41.0, -20.0, uniform(1.0)),
            (37.0, 26.0, uniform(1.0)),
            (40.0, 15.0, uniform(1.0)),
            (30.0, 26.0, uniform(1.0)),
        ];
        for (x, y, scale) in scenery {
            arena.add_scenery(Vec3::new(x, y, -50.0), scale);
        }

        for (x, y) in [(0.7, 0.0), (1.0, -26.0), (-35.0, 20.0), (35.0, 19.0)] {
            arena.add_crate(Vec3::new(x, y, -50.0));
        }

        arena
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::playground()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splash_engine::physics::{overlaps, overlaps_any};

    #[test]
    fn test_playground_counts() {
        let arena = Arena::playground();

        assert_eq!(arena.count(ObstacleKind::Wall), 4);
        assert_eq!(arena.count(ObstacleKind::Scenery), 31);
        assert_eq!(arena.crates().len(), 4);
        assert_eq!(arena.blocking().count(), 35);
    }

    #[test]
    fn test_players_start_clear() {
        let arena = Arena::playground();

        for id in PlayerId::ALL {
            assert!(!overlaps_any(arena.start(id), arena.blocking()), "{id} starts inside an obstacle");
        }
        assert!(!overlaps(arena.start(PlayerId::One), arena.start(PlayerId::Two)));
    }

    #[test]
    fn test_removing_obstacle_keeps_other_ids() {
        let mut arena = Arena::new(Transform::identity(), Transform::identity());
        let first = arena.add_wall(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let second = arena.add_scenery(Vec3::new(5.0, 5.0, 0.0), Vec3::new(2.0, 2.0, 2.0));

        arena.remove_obstacle(first);

        assert!(arena.obstacle(first).is_none());
        assert_eq!(arena.obstacle(second).map(|o| o.kind), Some(ObstacleKind::Scenery));
        assert_eq!(arena.hitboxes(ObstacleKind::Wall).count(), 0);
    }

    #[test]
    fn test_reset_crates() {
        let mut arena = Arena::playground();
        arena.crates_mut()[2].collect();
        arena.crates_mut()[2].respawn_timer = 3.0;

        arena.reset_crates();

        assert!(arena.crates().iter().all(|c| c.visible && c.respawn_timer == 0.0));
    }
}
