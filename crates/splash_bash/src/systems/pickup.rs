//! Ammo crates: respawn countdown and reloading

use crate::components::{Pickup, Player, PlayerId};
use splash_engine::physics::overlaps;

/// Advance the respawn countdown of every hidden crate
///
/// Returns the indices of crates that reappeared this frame.
pub fn tick_respawns(crates: &mut [Pickup], dt: f32, respawn_secs: f32) -> Vec<usize> {
    let mut respawned = Vec::new();
    for (index, pickup) in crates.iter_mut().enumerate() {
        if pickup.tick(dt, respawn_secs) {
            log::debug!("Crate {} respawned", index);
            respawned.push(index);
        }
    }
    respawned
}

/// Reload empty players standing on a visible crate
///
/// Player 1 is checked first, so one crate refills at most one player.
/// Returns `(player, crate index)` for each reload.
pub fn try_pickup(crates: &mut [Pickup], players: &mut [Player; 2]) -> Vec<(PlayerId, usize)> {
    let mut reloads = Vec::new();

    for (index, pickup) in crates.iter_mut().enumerate() {
        if !pickup.visible {
            continue;
        }

        let taker = players
            .iter_mut()
            .find(|player| !player.has_ammo && overlaps(&player.transform, &pickup.transform));
        if let Some(player) = taker {
            player.has_ammo = true;
            pickup.collect();
            log::debug!("{} reloaded from crate {}", player.id, index);
            reloads.push((player.id, index));
        }
    }

    reloads
}
