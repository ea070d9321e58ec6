//! Mode state machine and input handling
//!
//! `Game` wraps the simulation with the menu, the player options and the
//! random source. Every entry point returns the effects it produced; sound
//! cues are dropped here when sound is switched off.

use crate::consts::LANE_COUNT;
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{Effect, GameMode, GameState, SeededRng, SimRng, SoundEffect, TimerCommand, tick};
use crate::tuning::Difficulty;

/// Logical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// How a key event was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Press,
    Repeat,
    Release,
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub kind: InputKind,
}

impl InputEvent {
    pub fn press(key: Key) -> Self {
        Self {
            key,
            kind: InputKind::Press,
        }
    }
}

/// Menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Sound,
    Night,
    Difficulty,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Start,
        MenuItem::Sound,
        MenuItem::Night,
        MenuItem::Difficulty,
    ];
}

/// Player-facing toggles that live outside the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub sound_on: bool,
    /// Cosmetic only
    pub night_mode: bool,
}

pub struct Game<R: SimRng = SeededRng> {
    state: GameState,
    rng: R,
    options: Options,
    menu_index: usize,
}

impl Game<SeededRng> {
    /// Build a game from settings and a previously stored high score
    pub fn from_settings(settings: &Settings, high_score: u32, seed: u64) -> Self {
        Game::new(
            GameState::new(settings.difficulty, high_score),
            SeededRng::new(seed),
            Options {
                sound_on: settings.sound_on,
                night_mode: settings.night_mode,
            },
        )
    }
}

impl<R: SimRng> Game<R> {
    pub fn new(state: GameState, rng: R, options: Options) -> Self {
        Self {
            state,
            rng,
            options,
            menu_index: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index]
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.state, self.options, self.menu_item())
    }

    /// Process one timer tick
    pub fn handle_tick(&mut self) -> Vec<Effect> {
        let mut out = Vec::new();
        tick(&mut self.state, &mut self.rng, &mut out);
        self.filter(out)
    }

    /// Process one key event
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Effect> {
        let mut out = Vec::new();
        if matches!(event.kind, InputKind::Press | InputKind::Repeat) {
            match (self.state.mode, event.key) {
                (GameMode::Playing, Key::Back) => self.pause(&mut out),
                (_, Key::Back) => out.push(Effect::Quit),
                (GameMode::Menu, Key::Ok) => self.select(&mut out),
                (GameMode::GameOver, Key::Ok) => self.state.mode = GameMode::Menu,
                (GameMode::Menu, Key::Up) => {
                    self.menu_index = (self.menu_index + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
                }
                (GameMode::Menu, Key::Down) => {
                    self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
                }
                (GameMode::Playing, Key::Left) => self.steer(-1, &mut out),
                (GameMode::Playing, Key::Right) => self.steer(1, &mut out),
                _ => {}
            }
        }
        self.filter(out)
    }

    fn select(&mut self, out: &mut Vec<Effect>) {
        match self.menu_item() {
            MenuItem::Start => self.start_run(out),
            MenuItem::Sound => self.options.sound_on = !self.options.sound_on,
            MenuItem::Night => self.options.night_mode = !self.options.night_mode,
            MenuItem::Difficulty => self.set_difficulty(self.state.difficulty.next()),
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
        self.state.interval_ms = difficulty.tuning().base_interval_ms;
    }

    fn start_run(&mut self, out: &mut Vec<Effect>) {
        self.state.start_run(&mut self.rng);
        out.push(Effect::Timer(TimerCommand::Start {
            interval_ms: self.state.interval_ms,
        }));
        log::info!(
            "run started on {} ({} ms ticks)",
            self.state.difficulty.as_str(),
            self.state.interval_ms
        );
    }

    fn pause(&mut self, out: &mut Vec<Effect>) {
        out.push(Effect::Timer(TimerCommand::Stop));
        self.state.mode = GameMode::Menu;
        log::info!("run abandoned at score {}", self.state.score);
    }

    fn steer(&mut self, dir: i8, out: &mut Vec<Effect>) {
        let lane = self.state.player_lane as i8 + dir;
        if (0..LANE_COUNT as i8).contains(&lane) {
            self.state.player_lane = lane as u8;
            out.push(Effect::Sound(SoundEffect::LaneChange));
        }
    }

    fn filter(&self, mut out: Vec<Effect>) -> Vec<Effect> {
        if !self.options.sound_on {
            out.retain(|e| !matches!(e, Effect::Sound(_)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Obstacle, ObstacleKind, ScriptedRng};

    fn game() -> Game<ScriptedRng> {
        Game::new(
            GameState::new(Difficulty::Normal, 0),
            ScriptedRng::default(),
            Options {
                sound_on: true,
                night_mode: false,
            },
        )
    }

    fn press(game: &mut Game<ScriptedRng>, key: Key) -> Vec<Effect> {
        game.handle_input(InputEvent::press(key))
    }

    #[test]
    fn test_start_from_menu() {
        let mut g = game();
        assert_eq!(g.mode(), GameMode::Menu);
        let out = press(&mut g, Key::Ok);
        assert_eq!(g.mode(), GameMode::Playing);
        assert_eq!(
            out,
            vec![Effect::Timer(TimerCommand::Start { interval_ms: 120 })]
        );
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut g = game();
        press(&mut g, Key::Up);
        assert_eq!(g.menu_item(), MenuItem::Difficulty);
        press(&mut g, Key::Down);
        assert_eq!(g.menu_item(), MenuItem::Start);
    }

    #[test]
    fn test_menu_toggles() {
        let mut g = game();
        press(&mut g, Key::Down);
        press(&mut g, Key::Ok);
        assert!(!g.options().sound_on);
        press(&mut g, Key::Down);
        press(&mut g, Key::Ok);
        assert!(g.options().night_mode);
        press(&mut g, Key::Down);
        press(&mut g, Key::Ok);
        assert_eq!(g.state().difficulty, Difficulty::Hard);
        press(&mut g, Key::Ok);
        assert_eq!(g.state().difficulty, Difficulty::Easy);
        assert_eq!(g.mode(), GameMode::Menu);

        // Back to START and play on Easy
        press(&mut g, Key::Down);
        let out = press(&mut g, Key::Ok);
        assert_eq!(
            out,
            vec![Effect::Timer(TimerCommand::Start { interval_ms: 140 })]
        );
    }

    #[test]
    fn test_steering_is_bounded() {
        let mut g = game();
        press(&mut g, Key::Ok);
        assert_eq!(
            press(&mut g, Key::Left),
            vec![Effect::Sound(SoundEffect::LaneChange)]
        );
        assert_eq!(g.state().player_lane, 0);
        assert!(press(&mut g, Key::Left).is_empty());
        assert_eq!(g.state().player_lane, 0);
        press(&mut g, Key::Right);
        press(&mut g, Key::Right);
        assert!(press(&mut g, Key::Right).is_empty());
        assert_eq!(g.state().player_lane, LANE_COUNT - 1);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut g = game();
        let out = g.handle_input(InputEvent {
            key: Key::Ok,
            kind: InputKind::Release,
        });
        assert!(out.is_empty());
        assert_eq!(g.mode(), GameMode::Menu);
        g.handle_input(InputEvent {
            key: Key::Ok,
            kind: InputKind::Repeat,
        });
        assert_eq!(g.mode(), GameMode::Playing);
    }

    #[test]
    fn test_steering_ignored_on_menu() {
        let mut g = game();
        assert!(press(&mut g, Key::Left).is_empty());
        assert_eq!(g.state().player_lane, START_LANE);
    }

    #[test]
    fn test_pause_returns_to_menu_and_stops_timer() {
        let mut g = game();
        press(&mut g, Key::Ok);
        g.handle_tick();
        let out = press(&mut g, Key::Back);
        assert_eq!(out, vec![Effect::Timer(TimerCommand::Stop)]);
        assert_eq!(g.mode(), GameMode::Menu);

        // A tick that was already queued does nothing
        let ticks = g.state().tick_count;
        assert!(g.handle_tick().is_empty());
        assert_eq!(g.state().tick_count, ticks);

        // Back on the menu asks to quit without changing mode
        assert_eq!(press(&mut g, Key::Back), vec![Effect::Quit]);
        assert_eq!(g.mode(), GameMode::Menu);
    }

    #[test]
    fn test_game_over_then_confirm_returns_to_menu() {
        let mut g = game();
        press(&mut g, Key::Ok);
        g.state_mut().lives = 1;
        g.state_mut().obstacles.spawn(Obstacle {
            lane: START_LANE,
            y: PLAYER_Y,
            kind: ObstacleKind::Sedan,
        });
        let out = g.handle_tick();
        assert_eq!(g.mode(), GameMode::GameOver);
        assert!(out.contains(&Effect::Timer(TimerCommand::Stop)));

        // Steering and ticks are dead on the game-over screen
        assert!(press(&mut g, Key::Left).is_empty());
        assert!(g.handle_tick().is_empty());

        press(&mut g, Key::Ok);
        assert_eq!(g.mode(), GameMode::Menu);
    }

    #[test]
    fn test_sound_off_mutes_cues_only() {
        let mut g = game();
        press(&mut g, Key::Down);
        press(&mut g, Key::Ok);
        press(&mut g, Key::Up);
        press(&mut g, Key::Ok);
        assert!(press(&mut g, Key::Left).is_empty());

        g.state_mut().lives = 1;
        g.state_mut().obstacles.spawn(Obstacle {
            lane: 0,
            y: PLAYER_Y,
            kind: ObstacleKind::Sedan,
        });
        let out = g.handle_tick();
        assert!(!out.iter().any(|e| matches!(e, Effect::Sound(_))));
        assert!(out.contains(&Effect::Vibrate { ms: 200 }));
    }
}
