//! Player movement with collide-and-undo resolution
//!
//! Movement is applied unconditionally, then any player whose hitbox ended
//! up inside an obstacle, and after that inside the other player, gets this
//! frame's translation reverted. Turning is never reverted. There is no sweep, so a large enough
//! step can carry a player through a thin obstacle.

use crate::arena::Arena;
use crate::components::{Player, PlayerId};
use crate::config::GameplayConfig;
use crate::controls::Intent;
use splash_engine::foundation::math::Vec3;
use splash_engine::physics::{overlaps, overlaps_any};

/// Apply one player's walk and turn intents
pub fn apply_intent(player: &mut Player, intent: Intent, dt: f32, tuning: &GameplayConfig) {
    player.begin_frame();

    let step = tuning.move_speed * dt;
    if intent.contains(Intent::FORWARD) {
        player.step_local(Vec3::new(0.0, 0.0, step));
    }
    if intent.contains(Intent::BACK) {
        player.step_local(Vec3::new(0.0, 0.0, -step));
    }

    let turn = tuning.turn_speed * dt;
    if intent.contains(Intent::LEFT) {
        player.transform.rotate_local(Vec3::new(0.0, turn, 0.0));
    }
    if intent.contains(Intent::RIGHT) {
        player.transform.rotate_local(Vec3::new(0.0, -turn, 0.0));
    }
}

/// Revert the translation of every player that now overlaps something
///
/// Obstacles are resolved first. The players are then tested against each
/// other on the corrected poses, so a player pushed back by a wall cannot be
/// left standing inside the other one. Returns which players were pushed back.
pub fn resolve_collisions(players: &mut [Player; 2], arena: &Arena) -> [bool; 2] {
    let mut blocked = [false; 2];

    for id in PlayerId::ALL {
        let player = &mut players[id.index()];
        if overlaps_any(&player.transform, arena.blocking()) {
            log::trace!("{} hit an obstacle, reverting {:?}", id, player.frame_translation());
            player.undo_translation();
            blocked[id.index()] = true;
        }
    }

    if overlaps(&players[0].transform, &players[1].transform) {
        for id in PlayerId::ALL {
            let player = &mut players[id.index()];
            if !blocked[id.index()] {
                log::trace!("{} bumped the other player, reverting {:?}", id, player.frame_translation());
                player.undo_translation();
                blocked[id.index()] = true;
            }
        }
    }

    blocked
}
