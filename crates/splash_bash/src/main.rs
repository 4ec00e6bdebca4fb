//! Headless Birthday Splash Bash
//!
//! Plays a short scripted opening against a recording renderer and logs what
//! happened. Pass a `.toml` or `.ron` config path as the first argument to
//! override the defaults.

use splash_bash::arena::Arena;
use splash_bash::assets::AssetCatalog;
use splash_bash::components::PlayerId;
use splash_bash::config::GameConfig;
use splash_bash::{Game, GameEvent};
use splash_engine::foundation::logging;
use splash_engine::foundation::time::ManualClock;
use splash_engine::input::{InputState, KeyCode};
use splash_engine::render::RecordingRenderer;
use std::path::PathBuf;

const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// One stretch of scripted input
struct Step {
    label: &'static str,
    seconds: f64,
    held: &'static [KeyCode],
    tap: Option<KeyCode>,
}

const SCRIPT: &[Step] = &[
    Step { label: "title screen", seconds: 0.5, held: &[], tap: None },
    Step { label: "start", seconds: 0.1, held: &[], tap: Some(KeyCode::Space) },
    Step { label: "player 1 turns to face player 2", seconds: 0.4, held: &[KeyCode::A], tap: None },
    Step { label: "player 1 fires", seconds: 2.5, held: &[], tap: Some(KeyCode::E) },
    Step { label: "pause", seconds: 1.0, held: &[], tap: Some(KeyCode::Escape) },
    Step { label: "resume", seconds: 0.1, held: &[], tap: Some(KeyCode::Enter) },
    Step { label: "player 2 turns to face player 1", seconds: 0.4, held: &[KeyCode::L], tap: None },
    Step { label: "player 2 fires", seconds: 2.5, held: &[], tap: Some(KeyCode::O) },
    Step { label: "player 1 walks toward the crates", seconds: 1.0, held: &[KeyCode::W], tap: None },
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref())?;

    let assets = AssetCatalog::headless();
    let mut renderer = RecordingRenderer::with_known_meshes(assets.meshes());
    let mut game = Game::new(config, Arena::playground(), assets)?;
    let mut clock = ManualClock::new();
    let mut input = InputState::new();

    for step in SCRIPT {
        log::info!("Script: {}", step.label);
        input.release_all();
        for &key in step.held {
            input.handle_key_input(key, true);
        }

        let frames = (step.seconds / FRAME_SECONDS).round().max(1.0) as usize;
        for frame in 0..frames {
            if frame == 0 {
                if let Some(key) = step.tap {
                    input.tap(key);
                }
            }

            renderer.clear();
            let events = game.run_frame(&clock, &input, &mut renderer)?;
            for event in events {
                if let GameEvent::Projectile(shot) = event {
                    log::info!("{:?}", shot);
                }
            }

            input.begin_frame();
            clock.advance(FRAME_SECONDS);
        }
    }

    for id in PlayerId::ALL {
        let player = game.player(id);
        log::info!(
            "{}: hits taken {}, loaded {}, at ({:.1}, {:.1})",
            id,
            player.hits_taken,
            player.has_ammo,
            player.transform.position.x,
            player.transform.position.y
        );
    }
    log::info!(
        "Finished in state {:?} after {} frames ({} draw calls)",
        game.state(),
        game.timer().frame_count(),
        renderer.total_draws()
    );

    Ok(())
}
