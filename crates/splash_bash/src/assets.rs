//! Game asset definitions
//!
//! The game never loads meshes itself. It is handed a catalog of renderer
//! handles, one per visual role, and builds its animation clips from pose
//! numbers into that catalog.

use crate::components::PlayerId;
use crate::config::AnimationConfig;
use crate::error::{GameError, GameResult};
use splash_engine::animation::{AnimationClip, PlaybackMode};
use splash_engine::render::{MaterialHandle, MeshHandle};

/// Walk cycle, as 1-based pose numbers
pub const WALK_SEQUENCE: [usize; 5] = [1, 2, 1, 4, 5];

/// Pinwheel cycle, as 1-based pose numbers
pub const PINWHEEL_SEQUENCE: [usize; 8] = [1, 2, 1, 4, 5, 6, 7, 8];

/// Frames in the reload bottle animation
pub const RELOAD_FRAME_COUNT: usize = 12;

/// A mesh and the material it is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visual {
    /// Mesh
    pub mesh: MeshHandle,
    /// Material
    pub material: MaterialHandle,
}

/// An animated prop: one mesh per pose, sharing a material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseSet {
    /// Meshes, pose 1 first
    pub poses: Vec<MeshHandle>,
    /// Material
    pub material: MaterialHandle,
}

impl PoseSet {
    /// Build a clip from 1-based pose numbers
    pub fn clip(
        &self,
        name: &'static str,
        sequence: &[usize],
        frame_duration: f32,
        mode: PlaybackMode,
    ) -> GameResult<AnimationClip<MeshHandle>> {
        let frames = sequence
            .iter()
            .map(|&pose| {
                pose.checked_sub(1)
                    .and_then(|index| self.poses.get(index))
                    .copied()
                    .ok_or_else(|| GameError::MissingPose {
                        clip: name,
                        pose,
                        available: self.poses.len(),
                    })
            })
            .collect::<GameResult<Vec<_>>>()?;
        Ok(AnimationClip::new(frames, frame_duration, mode))
    }
}

/// Handles for everything the game draws
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    /// Ground and fences
    pub arena: Visual,
    /// Walk poses per player
    pub players: [PoseSet; 2],
    /// Water projectile
    pub projectile: Visual,
    /// Ammo crate
    pub water_bottle: Visual,
    /// Pinwheel poses
    pub pinwheel: PoseSet,
    /// Roundabout
    pub roundabout: Visual,
    /// Blue balloon
    pub blue_balloon: Visual,
    /// Purple balloon
    pub purple_balloon: Visual,
    /// Loaded-gun HUD icon
    pub ammo_icon: Visual,
    /// Reload bottle HUD frames
    pub reload: PoseSet,
    /// Score balloon per scoring player
    pub score_balloons: [Visual; 2],
    /// Title screen
    pub title: Visual,
    /// Pause overlay
    pub pause: Visual,
    /// Win screen per winner
    pub win_screens: [Visual; 2],
}

/// Hands out sequential handle ids
#[derive(Debug, Default)]
struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    fn mesh(&mut self) -> MeshHandle {
        self.next += 1;
        MeshHandle(self.next)
    }

    fn material(&mut self) -> MaterialHandle {
        self.next += 1;
        MaterialHandle(self.next)
    }

    fn visual(&mut self) -> Visual {
        Visual {
            mesh: self.mesh(),
            material: self.material(),
        }
    }

    fn poses(&mut self, count: usize) -> PoseSet {
        PoseSet {
            poses: (0..count).map(|_| self.mesh()).collect(),
            material: self.material(),
        }
    }
}

impl AssetCatalog {
    /// Catalog of distinct placeholder handles, for headless runs
    pub fn headless() -> Self {
        let mut alloc = HandleAllocator::default();
        Self {
            arena: alloc.visual(),
            players: [alloc.poses(5), alloc.poses(5)],
            projectile: alloc.visual(),
            water_bottle: alloc.visual(),
            pinwheel: alloc.poses(8),
            roundabout: alloc.visual(),
            blue_balloon: alloc.visual(),
            purple_balloon: alloc.visual(),
            ammo_icon: alloc.visual(),
            reload: alloc.poses(RELOAD_FRAME_COUNT),
            score_balloons: [alloc.visual(), alloc.visual()],
            title: alloc.visual(),
            pause: alloc.visual(),
            win_screens: [alloc.visual(), alloc.visual()],
        }
    }

    /// Every mesh handle in the catalog
    pub fn meshes(&self) -> Vec<MeshHandle> {
        let singles = [
            self.arena,
            self.projectile,
            self.water_bottle,
            self.roundabout,
            self.blue_balloon,
            self.purple_balloon,
            self.ammo_icon,
            self.score_balloons[0],
            self.score_balloons[1],
            self.title,
            self.pause,
            self.win_screens[0],
            self.win_screens[1],
        ];
        let mut meshes: Vec<MeshHandle> = singles.iter().map(|visual| visual.mesh).collect();
        for set in self.players.iter().chain([&self.pinwheel, &self.reload]) {
            meshes.extend(set.poses.iter().copied());
        }
        meshes
    }
}

/// Animation clips the game plays
#[derive(Debug, Clone)]
pub struct GameClips {
    /// Walk cycle per player
    pub walk: [AnimationClip<MeshHandle>; 2],
    /// Pinwheel spin
    pub pinwheel: AnimationClip<MeshHandle>,
    /// Reload bottle, played once after each shot
    pub reload: AnimationClip<MeshHandle>,
}

impl GameClips {
    /// Build every clip against `assets`
    pub fn build(assets: &AssetCatalog, animation: &AnimationConfig) -> GameResult<Self> {
        let duration = animation.frame_duration;
        let walk = |id: PlayerId| {
            assets.players[id.index()].clip("walk", &WALK_SEQUENCE, duration, PlaybackMode::Loop)
        };
        let reload_sequence: Vec<usize> = (1..=RELOAD_FRAME_COUNT).collect();

        Ok(Self {
            walk: [walk(PlayerId::One)?, walk(PlayerId::Two)?],
            pinwheel: assets.pinwheel.clip("pinwheel", &PINWHEEL_SEQUENCE, duration, PlaybackMode::Loop)?,
            reload: assets.reload.clip("reload", &reload_sequence, duration, PlaybackMode::Once)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_headless_handles_are_distinct() {
        let assets = AssetCatalog::headless();
        let meshes = assets.meshes();
        let unique: HashSet<_> = meshes.iter().collect();

        assert_eq!(meshes.len(), 13 + 5 + 5 + 8 + RELOAD_FRAME_COUNT);
        assert_eq!(unique.len(), meshes.len());
    }

    #[test]
    fn test_walk_clip_reuses_first_pose() {
        let assets = AssetCatalog::headless();
        let clips = GameClips::build(&assets, &AnimationConfig::default()).unwrap();
        let poses = &assets.players[0].poses;

        assert_eq!(clips.walk[0].frame_count(), 5);
        assert_eq!(clips.pinwheel.frame_count(), 8);
        assert_eq!(clips.reload.mode(), PlaybackMode::Once);

        let mut clock = splash_engine::animation::ClipClock::running();
        clock.advance(0.45, &clips.walk[0]);
        assert_eq!(clips.walk[0].frame(&clock), Some(&poses[0]));
    }

    #[test]
    fn test_missing_pose_is_reported() {
        let mut assets = AssetCatalog::headless();
        assets.pinwheel.poses.truncate(6);

        let err = GameClips::build(&assets, &AnimationConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            GameError::MissingPose {
                clip: "pinwheel",
                pose: 7,
                available: 6
            }
        ));
    }
}
