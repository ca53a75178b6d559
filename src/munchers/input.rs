use super::layout::{hit, ScreenLayout};
use super::player::Direction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Eat,
    Restart,
    ToggleHelp,
    CloseHelp,
    Quit,
}

pub fn map_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::Eat),
        KeyCode::Char('r' | 'R') => Some(Command::Restart),
        KeyCode::Char('?' | 'c' | 'C') | KeyCode::F(1) => Some(Command::ToggleHelp),
        KeyCode::Esc => Some(Command::CloseHelp),
        KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Left clicks on the Controls button open help; while help is open only its close button reacts
pub fn map_mouse(mouse: &MouseEvent, layout: &ScreenLayout, help_open: bool) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if help_open {
        hit(layout.help_close, mouse.column, mouse.row).then_some(Command::CloseHelp)
    } else {
        hit(layout.help_button, mouse.column, mouse.row).then_some(Command::ToggleHelp)
    }
}

pub fn map_event(event: &Event, area: Rect, grid_size: usize, help_open: bool) -> Option<Command> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, &ScreenLayout::compute(area, grid_size), help_open),
        _ => None,
    }
}
