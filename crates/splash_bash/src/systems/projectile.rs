//! Water projectile lifecycle: `Idle -> Traveling -> Idle`

use crate::arena::Arena;
use crate::components::{Player, PlayerId, ProjectileState};
use crate::config::GameplayConfig;
use splash_engine::physics::{overlaps, overlaps_any};

/// Something that happened to a projectile this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileEvent {
    /// The shooter pulled the trigger
    Fired(PlayerId),

    /// The shot splashed into a wall or prop
    HitObstacle(PlayerId),

    /// The shot splashed the opponent
    HitPlayer {
        /// Who fired
        shooter: PlayerId,
        /// Who got wet
        target: PlayerId,
    },
}

/// Advance both projectiles, Player 1 first
///
/// `fire` holds each player's fire edge for this frame.
pub fn update(
    players: &mut [Player; 2],
    fire: [bool; 2],
    arena: &Arena,
    dt: f32,
    tuning: &GameplayConfig,
) -> Vec<ProjectileEvent> {
    let mut events = Vec::new();

    for id in PlayerId::ALL {
        let (first, second) = players.split_at_mut(1);
        let (shooter, target) = match id {
            PlayerId::One => (&mut first[0], &mut second[0]),
            PlayerId::Two => (&mut second[0], &mut first[0]),
        };
        step(shooter, target, fire[id.index()], arena, dt, tuning, &mut events);
    }

    events
}

fn step(
    shooter: &mut Player,
    target: &mut Player,
    fire: bool,
    arena: &Arena,
    dt: f32,
    tuning: &GameplayConfig,
    events: &mut Vec<ProjectileEvent>,
) {
    if shooter.projectile.state == ProjectileState::Idle {
        shooter.projectile.return_to(&shooter.transform);
        if !(fire && shooter.has_ammo) {
            return;
        }

        shooter.projectile.state = ProjectileState::Traveling;
        shooter.projectile.heading = shooter.transform.forward();
        shooter.reload_clock.start();
        log::debug!("{} fired", shooter.id);
        events.push(ProjectileEvent::Fired(shooter.id));
    }

    let projectile = &mut shooter.projectile;
    projectile.transform.position += projectile.heading * (tuning.projectile_speed * dt);

    if overlaps_any(&projectile.transform, arena.blocking()) {
        projectile.return_to(&shooter.transform);
        shooter.has_ammo = false;
        log::debug!("{} splashed an obstacle", shooter.id);
        events.push(ProjectileEvent::HitObstacle(shooter.id));
    } else if overlaps(&projectile.transform, &target.transform) {
        projectile.return_to(&shooter.transform);
        shooter.has_ammo = false;
        target.take_hit(tuning.hits_to_win);
        log::info!("{} splashed {} ({} of {})", shooter.id, target.id, target.hits_taken, tuning.hits_to_win);
        events.push(ProjectileEvent::HitPlayer {
            shooter: shooter.id,
            target: target.id,
        });
    }
}
