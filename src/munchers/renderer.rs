use super::game::{MunchersState, Round, Status};
use super::layout::{ScreenLayout, HELP_BUTTON_LABEL, HELP_CLOSE_LABEL};
use super::player::MAX_LIVES;
use crate::core::game::Renderer;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const WIN_TEXT: &str = "YOU WIN! All sensitive data eaten!";
pub const LOSS_TEXT: &str = "GAME OVER! You lost all lives!";
pub const RESTART_HINT: &str = "Press R to restart";

const HELP_LINES: &[&str] = &[
    "Arrow keys: Move player",
    "Space: Eat word",
    "R: Restart game",
    "?, C or F1: Toggle this help",
    "Esc: Close help",
    "Q or Ctrl+C: Quit",
    "",
    "Goal: eat every sensitive (PII) word",
    "and avoid the ordinary ones",
];

#[derive(Debug)]
pub struct MunchersRenderer;

impl Renderer<MunchersState> for MunchersRenderer {
    fn render(frame: &mut Frame, state: &MunchersState) {
        let round = &state.round;
        let layout = ScreenLayout::compute(frame.area(), round.grid().size());

        Self::render_status(frame, &layout, round);
        Self::render_board(frame, &layout, round);

        match round.status() {
            Status::Won => Self::render_banner(frame, layout.banner, WIN_TEXT, Color::Green),
            Status::Lost => Self::render_banner(frame, layout.banner, LOSS_TEXT, Color::Red),
            Status::Playing => {}
        }

        if state.help_open {
            Self::render_help(frame, &layout);
        }
    }
}

impl MunchersRenderer {
    fn render_status(frame: &mut Frame, layout: &ScreenLayout, round: &Round) {
        frame.render_widget(Block::default().borders(Borders::BOTTOM), layout.status);

        let mut lives = vec![Span::raw("Lives: ")];
        lives.extend(lives_indicator(round.player().lives));
        frame.render_widget(Paragraph::new(Line::from(lives)), layout.lives);

        frame.render_widget(
            Paragraph::new(counter_text(round)).alignment(Alignment::Center),
            layout.counter,
        );

        frame.render_widget(
            Paragraph::new(HELP_BUTTON_LABEL)
                .style(Style::default().fg(Color::Black).bg(Color::Gray)),
            layout.help_button,
        );

        if round.status().is_terminal() {
            frame.render_widget(
                Paragraph::new(RESTART_HINT)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow)),
                layout.hint,
            );
        }
    }

    fn render_board(frame: &mut Frame, layout: &ScreenLayout, round: &Round) {
        let player = round.player().position();
        for ((row, col), word) in round.grid().cells() {
            let Some(area) = layout.cell(row, col) else {
                continue;
            };
            let style = if (row, col) == player {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            let inner_height = block.inner(area).height as usize;
            let text = word.map(|w| wrap_word(w.text)).unwrap_or_default();

            let mut lines: Vec<Line> = vec![Line::raw(""); inner_height.saturating_sub(text.len()) / 2];
            lines.extend(text.into_iter().map(Line::raw));

            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(block),
                area,
            );
        }
    }

    fn render_banner(frame: &mut Frame, area: Rect, text: &str, color: Color) {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color))),
            area,
        );
    }

    fn render_help(frame: &mut Frame, layout: &ScreenLayout) {
        frame.render_widget(Clear, layout.help_popup);
        frame.render_widget(
            Paragraph::new(HELP_LINES.iter().map(|l| Line::raw(*l)).collect::<Vec<_>>())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Game Controls ")),
            layout.help_popup,
        );
        frame.render_widget(
            Paragraph::new(HELP_CLOSE_LABEL).style(Style::default().fg(Color::Black).bg(Color::Gray)),
            layout.help_close,
        );
    }
}

/// Multi-word terms go one word per line
pub fn wrap_word(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// One slot per life, filled while the life remains
pub fn lives_indicator(lives: u8) -> Vec<Span<'static>> {
    (0..MAX_LIVES)
        .map(|slot| {
            if slot < lives {
                Span::styled("■ ", Style::default().fg(Color::Blue))
            } else {
                Span::styled("□ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect()
}

pub fn counter_text(round: &Round) -> String {
    format!(
        "Sensitive words: {}/{}",
        round.grid().remaining_sensitive(),
        round.grid().total_sensitive()
    )
}
