//! Frame driver
//!
//! [`Game::frame`] runs one frame in a fixed order:
//!
//! 1. input poll
//! 2. timers (animation clocks, decorations, crate respawns)
//! 3. movement
//! 4. collision resolution
//! 5. projectiles
//! 6. pickups
//! 7. win check
//! 8. match-flow keys (start, pause, resume, confirm)
//! 9. render
//!
//! Steps 3 to 7 only run while the match is [`MatchState::Playing`]. Clocks
//! and crate timers keep running on the title, pause and win screens.

use crate::arena::Arena;
use crate::assets::{AssetCatalog, GameClips};
use crate::components::{Player, PlayerId};
use crate::config::GameConfig;
use crate::controls::{FrameInput, Intent, MenuAction};
use crate::decor::Decorations;
use crate::error::GameResult;
use crate::hud;
use crate::match_state::MatchState;
use crate::systems::{movement, pickup, projectile, ProjectileEvent};
use splash_engine::foundation::math::Mat4;
use splash_engine::foundation::time::{clamp_delta, Clock, FrameTimer};
use splash_engine::input::InputSource;
use splash_engine::render::{RenderResult, Renderer};

/// Something notable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Left the title screen
    Started,
    /// Match paused
    Paused,
    /// Match resumed
    Resumed,
    /// Projectile activity
    Projectile(ProjectileEvent),
    /// A player reloaded from a crate
    Reloaded {
        /// Who reloaded
        player: PlayerId,
        /// Which crate
        crate_index: usize,
    },
    /// A crate became collectable again
    CrateRespawned(usize),
    /// A player reached the winning score
    Won(PlayerId),
    /// Win screen dismissed and match reset
    Reset,
}

/// Complete game state
pub struct Game {
    config: GameConfig,
    state: MatchState,
    players: [Player; 2],
    arena: Arena,
    decor: Decorations,
    assets: AssetCatalog,
    clips: GameClips,
    timer: FrameTimer,
}

impl Game {
    /// Create a game on the title screen
    pub fn new(config: GameConfig, arena: Arena, assets: AssetCatalog) -> GameResult<Self> {
        config.validate()?;
        let clips = GameClips::build(&assets, &config.animation)?;
        let players = PlayerId::ALL.map(|id| Player::new(id, arena.start(id).clone()));
        let decor = Decorations::playground(&config.animation);
        let timer = FrameTimer::new(config.gameplay.max_frame_dt);

        log::info!(
            "Game ready: {} obstacles, {} crates, first to {} splashes",
            arena.blocking().count(),
            arena.crates().len(),
            config.gameplay.hits_to_win
        );

        Ok(Self {
            config,
            state: MatchState::Menu,
            players,
            arena,
            decor,
            assets,
            clips,
            timer,
        })
    }

    /// Default config, playground arena, placeholder handles
    pub fn with_defaults() -> GameResult<Self> {
        Self::new(GameConfig::default(), Arena::playground(), AssetCatalog::headless())
    }

    /// Measure `dt` from `clock` and run one frame
    pub fn run_frame<I, R>(&mut self, clock: &dyn Clock, input: &I, renderer: &mut R) -> GameResult<Vec<GameEvent>>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let dt = self.timer.tick(clock);
        self.frame(dt, input, renderer)
    }

    /// Run one frame of `dt` seconds
    pub fn frame<I, R>(&mut self, dt: f32, input: &I, renderer: &mut R) -> GameResult<Vec<GameEvent>>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let dt = clamp_delta(dt, self.config.gameplay.max_frame_dt);
        let mut events = Vec::new();

        let input = FrameInput::poll(input, &self.config.controls);

        self.advance_timers(dt, &mut events);

        let mut just_won = false;
        if self.state.is_playing() {
            self.simulate(dt, &input, &mut events);
            just_won = self.check_win(&mut events);
        }

        // The frame that ends the match does not also dismiss it
        if !just_won {
            self.handle_actions(input.actions, &mut events);
        }

        self.render(renderer)?;

        log::trace!("Frame dt={:.4} state={:?} events={}", dt, self.state, events.len());
        Ok(events)
    }

    fn advance_timers(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        for player in &mut self.players {
            player.walk_clock.advance(dt, &self.clips.walk[player.id.index()]);
            player.reload_clock.advance(dt, &self.clips.reload);
        }
        self.decor.advance(dt, &self.clips);

        let respawn_secs = self.config.gameplay.crate_respawn_secs;
        for index in pickup::tick_respawns(self.arena.crates_mut(), dt, respawn_secs) {
            events.push(GameEvent::CrateRespawned(index));
        }
    }

    fn simulate(&mut self, dt: f32, input: &FrameInput, events: &mut Vec<GameEvent>) {
        let tuning = &self.config.gameplay;

        for player in &mut self.players {
            movement::apply_intent(player, input.intent(player.id), dt, tuning);
        }
        movement::resolve_collisions(&mut self.players, &self.arena);

        let fire = PlayerId::ALL.map(|id| input.intent(id).contains(Intent::FIRE));
        let shots = projectile::update(&mut self.players, fire, &self.arena, dt, tuning);
        events.extend(shots.into_iter().map(GameEvent::Projectile));

        for (player, crate_index) in pickup::try_pickup(self.arena.crates_mut(), &mut self.players) {
            events.push(GameEvent::Reloaded { player, crate_index });
        }
    }

    fn check_win(&mut self, events: &mut Vec<GameEvent>) -> bool {
        let hits_to_win = self.config.gameplay.hits_to_win;
        // Player 1 is checked first, so a simultaneous finish goes to Player 1
        let winner = PlayerId::ALL
            .into_iter()
            .find(|id| self.players[id.opponent().index()].hits_taken >= hits_to_win);

        match winner {
            Some(winner) if self.state.declare_winner(winner) => {
                log::info!("{} wins", winner);
                events.push(GameEvent::Won(winner));
                true
            }
            _ => false,
        }
    }

    fn handle_actions(&mut self, actions: MenuAction, events: &mut Vec<GameEvent>) {
        match self.state {
            MatchState::Menu => {
                if actions.contains(MenuAction::START) && self.state.start() {
                    events.push(GameEvent::Started);
                }
            }
            MatchState::Playing => {
                if actions.contains(MenuAction::PAUSE) && self.state.pause() {
                    events.push(GameEvent::Paused);
                }
            }
            MatchState::Paused => {
                if actions.contains(MenuAction::RESUME) && self.state.resume() {
                    events.push(GameEvent::Resumed);
                }
            }
            MatchState::Won(winner) => {
                if actions.contains(MenuAction::CONFIRM) {
                    if self.state.confirm() {
                        self.reset();
                        events.push(GameEvent::Reset);
                    }
                } else if actions.contains(MenuAction::RESUME) {
                    log::warn!("Ignoring resume, {} already won", winner);
                }
            }
        }
    }

    /// Put everything back to how a fresh match starts
    ///
    /// Match state is left alone.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.arena.reset_crates();
        log::info!("Match reset");
    }

    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> RenderResult<()> {
        let assets = &self.assets;

        if self.state != MatchState::Menu {
            renderer.draw(assets.arena.mesh, assets.arena.material, &Mat4::identity())?;

            for pickup in self.arena.crates().iter().filter(|c| c.visible) {
                renderer.draw(assets.water_bottle.mesh, assets.water_bottle.material, &pickup.transform.to_matrix())?;
            }

            for player in &self.players {
                let index = player.id.index();
                if let Some(&mesh) = self.clips.walk[index].frame(&player.walk_clock) {
                    renderer.draw(mesh, assets.players[index].material, &player.transform.to_matrix())?;
                }
                if player.projectile.is_traveling() {
                    let at = player.projectile.transform.to_matrix();
                    renderer.draw(assets.projectile.mesh, assets.projectile.material, &at)?;
                }
            }

            self.decor.draw(renderer, assets, &self.clips)?;
            hud::draw_status(renderer, assets, &self.clips, &self.players)?;
        }

        hud::draw_overlay(renderer, assets, self.state)
    }

    /// Current match state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// One player
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Both players
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The arena
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Asset handles in use
    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    /// Active configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Frame timer used by [`run_frame`](Self::run_frame)
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splash_engine::foundation::time::ManualClock;
    use splash_engine::input::{InputState, KeyCode};
    use splash_engine::render::RecordingRenderer;

    fn tap(key: KeyCode) -> InputState {
        let mut input = InputState::new();
        input.tap(key);
        input
    }

    #[test]
    fn test_menu_runs_no_simulation() {
        let mut game = Game::with_defaults().unwrap();
        let mut renderer = RecordingRenderer::new();
        let mut input = InputState::new();
        input.handle_key_input(KeyCode::W, true);

        game.frame(0.5, &input, &mut renderer).unwrap();

        assert_eq!(game.state(), MatchState::Menu);
        assert!(game.player(PlayerId::One).transform.pose_eq(game.arena().start(PlayerId::One), 1e-6));
        assert_eq!(renderer.calls().len(), 1);
        assert!(renderer.drew(game.assets().title.mesh));
    }

    #[test]
    fn test_start_pause_resume() {
        let mut game = Game::with_defaults().unwrap();
        let mut renderer = RecordingRenderer::new();

        let events = game.frame(0.016, &tap(KeyCode::Space), &mut renderer).unwrap();
        assert_eq!(events, vec![GameEvent::Started]);

        game.frame(0.016, &tap(KeyCode::Escape), &mut renderer).unwrap();
        assert_eq!(game.state(), MatchState::Paused);

        game.frame(0.016, &tap(KeyCode::Enter), &mut renderer).unwrap();
        assert_eq!(game.state(), MatchState::Playing);
    }

    #[test]
    fn test_paused_players_do_not_move() {
        let mut game = Game::with_defaults().unwrap();
        let mut renderer = RecordingRenderer::new();
        game.frame(0.016, &tap(KeyCode::Space), &mut renderer).unwrap();
        game.frame(0.016, &tap(KeyCode::Escape), &mut renderer).unwrap();

        let mut input = InputState::new();
        input.handle_key_input(KeyCode::W, true);
        game.frame(0.5, &input, &mut renderer).unwrap();

        assert!(game.player(PlayerId::One).transform.pose_eq(game.arena().start(PlayerId::One), 1e-6));
        assert!(renderer.drew(game.assets().pause.mesh));
    }

    #[test]
    fn test_crate_timer_runs_on_title_screen() {
        let mut game = Game::with_defaults().unwrap();
        let mut renderer = RecordingRenderer::new();
        game.arena.crates_mut()[0].collect();

        let events = game.frame(1.0, &InputState::new(), &mut renderer).unwrap();
        assert!(events.is_empty());

        for _ in 0..4 {
            game.frame(1.0, &InputState::new(), &mut renderer).unwrap();
        }
        assert!(game.arena().crates()[0].visible);
    }

    #[test]
    fn test_run_frame_clamps_stalls() {
        let mut game = Game::with_defaults().unwrap();
        let mut renderer = RecordingRenderer::new();
        let mut clock = ManualClock::new();
        let input = tap(KeyCode::Space);

        game.run_frame(&clock, &input, &mut renderer).unwrap();
        clock.advance(30.0);
        game.run_frame(&clock, &InputState::new(), &mut renderer).unwrap();

        assert_eq!(game.timer().delta_time(), 1.0);
        assert_eq!(game.timer().frame_count(), 2);
    }

    #[test]
    fn test_render_error_propagates() {
        let mut game = Game::with_defaults().unwrap();
        let mut renderer = RecordingRenderer::with_known_meshes([]);

        let result = game.frame(0.016, &InputState::new(), &mut renderer);

        assert!(matches!(result, Err(crate::error::GameError::Render(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.hits_to_win = 0;

        let result = Game::new(config, Arena::playground(), AssetCatalog::headless());

        assert!(matches!(result, Err(crate::error::GameError::Config(_))));
    }

    #[test]
    fn test_resume_on_win_screen_is_ignored() {
        let mut config = GameConfig::default();
        config.controls.resume = KeyCode::R;
        let mut game = Game::new(config, Arena::playground(), AssetCatalog::headless()).unwrap();
        let mut renderer = RecordingRenderer::new();
        game.state = MatchState::Won(PlayerId::Two);

        let events = game.frame(0.016, &tap(KeyCode::R), &mut renderer).unwrap();
        assert!(events.is_empty());
        assert_eq!(game.state(), MatchState::Won(PlayerId::Two));

        let events = game.frame(0.016, &tap(KeyCode::Enter), &mut renderer).unwrap();
        assert_eq!(events, vec![GameEvent::Reset]);
        assert_eq!(game.state(), MatchState::Menu);
    }
}
