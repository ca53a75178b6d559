use crate::{Context, Game, Renderer};
use anyhow::{anyhow, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io::stdout;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, info};

/// Where the engine pulls raw input from
pub trait EventSource {
    /// Wait up to `timeout` for an event to become available
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    fn read(&mut self) -> Result<Event>;
}

/// Live terminal input
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Keeps mouse reporting on while alive
pub struct MouseCapture;

impl MouseCapture {
    pub fn enable() -> Result<Self> {
        crossterm::execute!(stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let _ = crossterm::execute!(stdout(), DisableMouseCapture);
    }
}

pub struct Engine<G: Game, R: Renderer<G::State>, E: EventSource = CrosstermEvents> {
    game: G,
    events: E,
    _renderer: PhantomData<R>,
}

impl<G: Game, R: Renderer<G::State>> Engine<G, R, CrosstermEvents> {
    pub fn new(game: G) -> Self {
        Self::with_events(game, CrosstermEvents)
    }
}

impl<G: Game, R: Renderer<G::State>, E: EventSource> Engine<G, R, E> {
    pub fn with_events(game: G, events: E) -> Self {
        Self {
            game,
            events,
            _renderer: PhantomData,
        }
    }

    /// Run until the game asks to quit, then hand the game back
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<G> {
        let mut ctx = Context::default();

        while !ctx.should_quit() {
            // DRAW: full redraw every iteration
            let area = terminal
                .draw(|f| R::render(f, self.game.state()))
                .map_err(|e| anyhow!("failed to draw frame: {e}"))?
                .area;

            // INPUT: wait for the first event, then drain everything pending
            if !self.events.poll(self.game.tick_rate())? {
                continue;
            }
            loop {
                let event = self.events.read()?;
                if let Some(command) = self.game.map_event(&event, area) {
                    debug!(?command, "applying command");
                    self.game.apply(command, &mut ctx);
                    if ctx.should_quit() {
                        break;
                    }
                }
                if !self.events.poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        info!("game loop finished");
        Ok(self.game)
    }
}
