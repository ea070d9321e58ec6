//! Event loop
//!
//! Single consumer of the event queue. Each event is handed to the game,
//! the resulting effects are carried out, then a frame is drawn. Nothing
//! else mutates game state.

use crossbeam_channel::Receiver;

use crate::audio::{AudioSink, Haptics, tone_for};
use crate::game::Game;
use crate::highscores::HighScoreStore;
use crate::platform::{Event, TickSource};
use crate::renderer::Renderer;
use crate::sim::{Effect, SimRng, TimerCommand};

/// Whether the loop keeps going after a batch of effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<R: SimRng, T: TickSource, A: AudioSink, H: Haptics, D: Renderer> {
    game: Game<R>,
    timer: T,
    store: HighScoreStore,
    audio: A,
    haptics: H,
    renderer: D,
}

impl<R: SimRng, T: TickSource, A: AudioSink, H: Haptics, D: Renderer> App<R, T, A, H, D> {
    pub fn new(
        game: Game<R>,
        timer: T,
        store: HighScoreStore,
        audio: A,
        haptics: H,
        renderer: D,
    ) -> Self {
        Self {
            game,
            timer,
            store,
            audio,
            haptics,
            renderer,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    /// Run until a quit request or until every producer has hung up
    pub fn run(&mut self, events: &Receiver<Event>) {
        self.renderer.draw(&self.game.frame());

        while let Ok(event) = events.recv() {
            if self.handle(event) == Flow::Quit {
                log::info!("quit requested");
                break;
            }
        }

        self.timer.apply(TimerCommand::Stop);
    }

    /// Process one event: update, carry out effects, redraw
    pub fn handle(&mut self, event: Event) -> Flow {
        let effects = match event {
            Event::Tick => self.game.handle_tick(),
            Event::Input(input) => self.game.handle_input(input),
        };
        let flow = self.dispatch(effects);
        if flow == Flow::Continue {
            self.renderer.draw(&self.game.frame());
        }
        flow
    }

    pub fn dispatch(&mut self, effects: Vec<Effect>) -> Flow {
        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::Sound(cue) => self.audio.play(tone_for(cue)),
                Effect::Vibrate { ms } => self.haptics.vibrate(ms),
                Effect::Timer(cmd) => self.timer.apply(cmd),
                Effect::SaveHighScore(score) => self.store.save(score),
                Effect::Quit => flow = Flow::Quit,
            }
        }
        flow
    }
}
