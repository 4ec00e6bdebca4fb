//! Per-frame input snapshot
//!
//! Key state is read exactly once per frame, at the top of the frame, and
//! turned into intents. Systems downstream never touch the input source.

use crate::components::PlayerId;
use crate::config::ControlsConfig;
use bitflags::bitflags;
use splash_engine::input::InputSource;

bitflags! {
    /// What one player asked for this frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Intent: u8 {
        /// Walk forward (held)
        const FORWARD = 1 << 0;
        /// Walk backward (held)
        const BACK = 1 << 1;
        /// Turn left (held)
        const LEFT = 1 << 2;
        /// Turn right (held)
        const RIGHT = 1 << 3;
        /// Fire (pressed this frame)
        const FIRE = 1 << 4;
    }
}

bitflags! {
    /// Match-flow keys pressed this frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MenuAction: u8 {
        /// Leave the title screen
        const START = 1 << 0;
        /// Pause the match
        const PAUSE = 1 << 1;
        /// Resume the match
        const RESUME = 1 << 2;
        /// Dismiss the win screen
        const CONFIRM = 1 << 3;
    }
}

/// Everything the simulation needs from the keyboard for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    intents: [Intent; 2],
    /// Match-flow presses
    pub actions: MenuAction,
}

impl FrameInput {
    /// Snapshot `source` through `controls`
    pub fn poll<I: InputSource + ?Sized>(source: &I, controls: &ControlsConfig) -> Self {
        let mut input = Self::default();

        for id in PlayerId::ALL {
            let keys = controls.player(id);
            let intent = &mut input.intents[id.index()];
            intent.set(Intent::FORWARD, source.is_key_held(keys.forward));
            intent.set(Intent::BACK, source.is_key_held(keys.back));
            intent.set(Intent::LEFT, source.is_key_held(keys.left));
            intent.set(Intent::RIGHT, source.is_key_held(keys.right));
            intent.set(Intent::FIRE, source.was_key_pressed(keys.fire));
        }

        let actions = &mut input.actions;
        actions.set(MenuAction::START, source.was_key_pressed(controls.start));
        actions.set(MenuAction::PAUSE, source.was_key_pressed(controls.pause));
        actions.set(MenuAction::RESUME, source.was_key_pressed(controls.resume));
        actions.set(MenuAction::CONFIRM, source.was_key_pressed(controls.confirm));

        input
    }

    /// Intent of one player
    pub fn intent(&self, id: PlayerId) -> Intent {
        self.intents[id.index()]
    }

    /// Override one player's intent
    pub fn with_intent(mut self, id: PlayerId, intent: Intent) -> Self {
        self.intents[id.index()] = intent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splash_engine::input::{InputState, KeyCode};

    #[test]
    fn test_poll_maps_both_players() {
        let mut keys = InputState::new();
        keys.handle_key_input(KeyCode::W, true);
        keys.handle_key_input(KeyCode::A, true);
        keys.handle_key_input(KeyCode::L, true);
        keys.handle_key_input(KeyCode::O, true);

        let input = FrameInput::poll(&keys, &ControlsConfig::default());

        assert_eq!(input.intent(PlayerId::One), Intent::FORWARD | Intent::LEFT);
        assert_eq!(input.intent(PlayerId::Two), Intent::RIGHT | Intent::FIRE);
        assert!(input.actions.is_empty());
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut keys = InputState::new();
        keys.handle_key_input(KeyCode::E, true);
        keys.begin_frame();

        let input = FrameInput::poll(&keys, &ControlsConfig::default());

        assert!(!input.intent(PlayerId::One).contains(Intent::FIRE));
    }

    #[test]
    fn test_shared_resume_confirm_key() {
        let mut keys = InputState::new();
        keys.tap(KeyCode::Enter);

        let input = FrameInput::poll(&keys, &ControlsConfig::default());

        assert!(input.actions.contains(MenuAction::RESUME | MenuAction::CONFIRM));
        assert!(!input.actions.contains(MenuAction::START));
    }
}
