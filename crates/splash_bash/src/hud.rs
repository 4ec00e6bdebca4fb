//! Heads-up display and full-screen overlays

use crate::assets::{AssetCatalog, GameClips, Visual};
use crate::components::{Player, PlayerId};
use crate::match_state::MatchState;
use splash_engine::foundation::math::{Transform, Vec3};
use splash_engine::render::{RenderResult, Renderer};

/// Score balloon slots per side, innermost first
const SCORE_SLOTS: [[f32; 2]; 3] = [[14.0, 47.0], [20.0, 47.0], [26.0, 47.0]];

const SCORE_SCALE: f32 = 8.0;
const AMMO_SCALE: f32 = 6.0;
const OVERLAY_SCALE: f32 = 16.0;
const HUD_DEPTH: f32 = 5.0;

fn uniform(scale: f32) -> Vec3 {
    Vec3::new(scale, scale, scale)
}

/// Where a player's score balloons go: Player 1 on the left, Player 2 on the right
pub fn score_slot(scorer: PlayerId, slot: usize) -> Option<Transform> {
    let [x, y] = *SCORE_SLOTS.get(slot)?;
    let x = match scorer {
        PlayerId::One => -x,
        PlayerId::Two => x,
    };
    Some(Transform::from_position(Vec3::new(x, y, HUD_DEPTH)).with_uniform_scale(SCORE_SCALE))
}

/// Where a player's ammo icon and reload animation go
pub fn ammo_slot(id: PlayerId) -> Transform {
    let x = match id {
        PlayerId::One => -13.0,
        PlayerId::Two => 33.0,
    };
    Transform::from_euler_degrees(Vec3::new(x, -39.0, HUD_DEPTH), Vec3::new(-10.0, 180.0, 0.0), uniform(AMMO_SCALE))
}

fn overlay_pose() -> Transform {
    Transform::from_euler_degrees(Vec3::new(0.0, 0.0, 1.0), Vec3::new(-10.0, 0.0, 0.0), uniform(OVERLAY_SCALE))
}

fn title_pose() -> Transform {
    Transform::from_euler_degrees(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 90.0, 0.0), uniform(1.0))
}

fn draw_visual<R: Renderer + ?Sized>(renderer: &mut R, visual: Visual, at: &Transform) -> RenderResult<()> {
    renderer.draw(visual.mesh, visual.material, &at.to_matrix())
}

/// Ammo state and score for both players
pub fn draw_status<R: Renderer + ?Sized>(
    renderer: &mut R,
    assets: &AssetCatalog,
    clips: &GameClips,
    players: &[Player; 2],
) -> RenderResult<()> {
    for player in players {
        if let Some(visual) = ammo_visual(assets, clips, player) {
            draw_visual(renderer, visual, &ammo_slot(player.id))?;
        }

        // A player's score is the opponent's hit count
        let scored = players[player.id.opponent().index()].hits_taken as usize;
        let balloon = assets.score_balloons[player.id.index()];
        for slot in (0..scored).filter_map(|slot| score_slot(player.id, slot)) {
            draw_visual(renderer, balloon, &slot)?;
        }
    }
    Ok(())
}

/// Full-screen overlay for the current match state, if any
pub fn overlay(assets: &AssetCatalog, state: MatchState) -> Option<(Visual, Transform)> {
    match state {
        MatchState::Menu => Some((assets.title, title_pose())),
        MatchState::Playing => None,
        MatchState::Paused => Some((assets.pause, overlay_pose())),
        MatchState::Won(winner) => Some((assets.win_screens[winner.index()], overlay_pose())),
    }
}

/// Draw the overlay for `state`
pub fn draw_overlay<R: Renderer + ?Sized>(renderer: &mut R, assets: &AssetCatalog, state: MatchState) -> RenderResult<()> {
    match overlay(assets, state) {
        Some((visual, at)) => draw_visual(renderer, visual, &at),
        None => Ok(()),
    }
}

/// What a player's ammo slot shows: the loaded icon, a reload frame, or nothing
///
/// The icon goes away as soon as the shot leaves, not when it lands.
pub fn ammo_visual(assets: &AssetCatalog, clips: &GameClips, player: &Player) -> Option<Visual> {
    if player.has_ammo && !player.projectile.is_traveling() {
        Some(assets.ammo_icon)
    } else if player.reload_clock.is_active() {
        clips.reload.frame(&player.reload_clock).map(|&mesh| Visual {
            mesh,
            material: assets.reload.material,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::components::ProjectileState;
    use crate::config::AnimationConfig;
    use approx::assert_relative_eq;
    use splash_engine::render::RecordingRenderer;

    fn fixtures() -> (AssetCatalog, GameClips, [Player; 2]) {
        let assets = AssetCatalog::headless();
        let clips = GameClips::build(&assets, &AnimationConfig::default()).unwrap();
        let arena = Arena::playground();
        let players = PlayerId::ALL.map(|id| Player::new(id, arena.start(id).clone()));
        (assets, clips, players)
    }

    #[test]
    fn test_score_slots_mirror() {
        let left = score_slot(PlayerId::One, 2).unwrap();
        let right = score_slot(PlayerId::Two, 2).unwrap();

        assert_relative_eq!(left.position, Vec3::new(-26.0, 47.0, 5.0));
        assert_relative_eq!(right.position, Vec3::new(26.0, 47.0, 5.0));
        assert!(score_slot(PlayerId::One, 3).is_none());
    }

    #[test]
    fn test_status_shows_ammo_and_scores() {
        let (assets, clips, mut players) = fixtures();
        players[1].hits_taken = 2;
        let mut renderer = RecordingRenderer::new();

        draw_status(&mut renderer, &assets, &clips, &players).unwrap();

        assert_eq!(renderer.count_mesh(assets.ammo_icon.mesh), 2);
        assert_eq!(renderer.count_mesh(assets.score_balloons[0].mesh), 2);
        assert_eq!(renderer.count_mesh(assets.score_balloons[1].mesh), 0);
    }

    #[test]
    fn test_reload_animation_after_shot() {
        let (assets, clips, mut players) = fixtures();
        players[0].has_ammo = false;
        players[0].reload_clock.start();
        players[0].reload_clock.advance(0.45, &clips.reload);

        assert_eq!(ammo_visual(&assets, &clips, &players[0]).map(|v| v.mesh), Some(assets.reload.poses[2]));

        players[0].reload_clock.stop();
        assert_eq!(ammo_visual(&assets, &clips, &players[0]), None);
    }

    #[test]
    fn test_overlay_per_state() {
        let assets = AssetCatalog::headless();

        assert_eq!(overlay(&assets, MatchState::Menu).map(|(v, _)| v), Some(assets.title));
        assert!(overlay(&assets, MatchState::Playing).is_none());
        assert_eq!(overlay(&assets, MatchState::Paused).map(|(v, _)| v), Some(assets.pause));
        assert_eq!(
            overlay(&assets, MatchState::Won(PlayerId::Two)).map(|(v, _)| v),
            Some(assets.win_screens[1])
        );
    }

    #[test]
    fn test_ammo_icon_hidden_while_shot_in_flight() {
        let (assets, clips, mut players) = fixtures();
        players[0].projectile.state = ProjectileState::Traveling;
        players[0].reload_clock.start();

        assert_eq!(ammo_visual(&assets, &clips, &players[0]).map(|v| v.mesh), Some(assets.reload.poses[0]));
        assert_eq!(ammo_visual(&assets, &clips, &players[1]), Some(assets.ammo_icon));
    }
}
