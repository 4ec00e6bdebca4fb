//! Match flow: title screen, play, pause, win
//!
//! ```text
//! Menu --start--> Playing --pause--> Paused
//!                    ^  |               |
//!                    |  +---resume------+
//!                    |
//!            (win)   v
//!              Won(id) --confirm--> Menu
//! ```
//!
//! Transitions not in the diagram are rejected and leave the state alone.

use crate::components::PlayerId;

/// Where the match currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// Title screen
    #[default]
    Menu,

    /// Simulation running
    Playing,

    /// Frozen by a player
    Paused,

    /// Frozen on the win screen
    Won(PlayerId),
}

impl MatchState {
    /// Whether the simulation is frozen (paused or won)
    pub fn is_paused(self) -> bool {
        matches!(self, MatchState::Paused | MatchState::Won(_))
    }

    /// Whether movement, firing and pickups run
    pub fn is_playing(self) -> bool {
        self == MatchState::Playing
    }

    /// The winner, once there is one
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            MatchState::Won(id) => Some(id),
            _ => None,
        }
    }

    /// `Menu -> Playing`
    pub fn start(&mut self) -> bool {
        self.transition(MatchState::Menu, MatchState::Playing, "start")
    }

    /// `Playing -> Paused`
    pub fn pause(&mut self) -> bool {
        self.transition(MatchState::Playing, MatchState::Paused, "pause")
    }

    /// `Paused -> Playing`; refused on the win screen
    pub fn resume(&mut self) -> bool {
        self.transition(MatchState::Paused, MatchState::Playing, "resume")
    }

    /// `Playing -> Won(winner)`
    pub fn declare_winner(&mut self, winner: PlayerId) -> bool {
        self.transition(MatchState::Playing, MatchState::Won(winner), "win")
    }

    /// `Won -> Menu`; the caller resets the match
    pub fn confirm(&mut self) -> bool {
        if let MatchState::Won(winner) = *self {
            log::info!("{} win acknowledged, back to menu", winner);
            *self = MatchState::Menu;
            true
        } else {
            log::warn!("Confirm ignored in {:?}", self);
            false
        }
    }

    fn transition(&mut self, from: MatchState, to: MatchState, action: &str) -> bool {
        if *self == from {
            log::info!("Match {:?} -> {:?}", from, to);
            *self = to;
            true
        } else {
            log::warn!("Cannot {} from {:?}", action, self);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut state = MatchState::default();
        assert_eq!(state, MatchState::Menu);

        assert!(state.start());
        assert!(state.is_playing());
        assert!(state.pause());
        assert!(state.is_paused());
        assert!(state.resume());
        assert!(state.declare_winner(PlayerId::Two));
        assert!(state.is_paused());
        assert_eq!(state.winner(), Some(PlayerId::Two));
        assert!(state.confirm());
        assert_eq!(state, MatchState::Menu);
    }

    #[test]
    fn test_resume_rejected_after_win() {
        let mut state = MatchState::Won(PlayerId::One);

        assert!(!state.resume());
        assert_eq!(state, MatchState::Won(PlayerId::One));
    }

    #[test]
    fn test_invalid_transitions_keep_state() {
        let mut state = MatchState::Menu;
        assert!(!state.pause());
        assert!(!state.resume());
        assert!(!state.confirm());
        assert!(!state.declare_winner(PlayerId::One));
        assert_eq!(state, MatchState::Menu);

        let mut paused = MatchState::Paused;
        assert!(!paused.declare_winner(PlayerId::One));
        assert!(!paused.start());
        assert_eq!(paused, MatchState::Paused);
    }
}
