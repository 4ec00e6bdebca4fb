//! End-to-end scenarios driving whole frames

use crate::arena::Arena;
use crate::assets::AssetCatalog;
use crate::config::GameConfig;
use crate::game::{Game, GameEvent};
use splash_engine::input::{InputState, KeyCode};
use splash_engine::render::RecordingRenderer;


/// Game plus the collaborators a frame needs
struct Harness {
    pub game: Game,
    pub renderer: RecordingRenderer,
}

impl Harness {
    pub fn new(arena: Arena) -> Self {
        let game = Game::new(GameConfig::default(), arena, AssetCatalog::headless()).unwrap();
        Self {
            game,
            renderer: RecordingRenderer::new(),
        }
    }

    /// One frame with `held` keys down and `taps` freshly pressed
    pub fn frame(&mut self, dt: f32, held: &[KeyCode], taps: &[KeyCode]) -> Vec<GameEvent> {
        let mut input = InputState::new();
        for &key in held {
            input.handle_key_input(key, true);
        }
        for &key in taps {
            input.tap(key);
        }
        self.renderer.clear();
        self.game.frame(dt, &input, &mut self.renderer).unwrap()
    }

    pub fn idle(&mut self, dt: f32) -> Vec<GameEvent> {
        self.frame(dt, &[], &[])
    }

    pub fn start(&mut self) {
        let events = self.frame(0.016, &[], &[KeyCode::Space]);
        assert_eq!(events, vec![GameEvent::Started]);
    }
}
