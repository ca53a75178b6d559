/// Core game interface for the cyber-munchers loop
use crossterm::event::Event;
use ratatui::layout::Rect;
use std::time::Duration;

/// Handle the engine gives a game while it applies a command
#[derive(Debug, Default)]
pub struct Context {
    quit: bool,
}

impl Context {
    /// Ask the engine to leave the loop after the current event
    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

/// Main game trait driven by [`crate::core::engine::Engine`]
pub trait Game {
    /// Discrete command produced from raw input
    type Command: std::fmt::Debug;

    /// Read-only view handed to the renderer
    type State;

    /// How long the loop waits for input before redrawing anyway
    fn tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Map a raw terminal event to a command. `area` is the size of the last drawn frame.
    fn map_event(&self, event: &Event, area: Rect) -> Option<Self::Command>;

    /// Apply one command to the game state
    fn apply(&mut self, command: Self::Command, ctx: &mut Context);

    fn state(&self) -> &Self::State;
}

/// Renderer trait for drawing game state using Ratatui
pub trait Renderer<S> {
    /// Render the current state into the Ratatui Frame. Must not mutate anything.
    fn render(frame: &mut ratatui::Frame, state: &S);
}
