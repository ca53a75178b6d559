//! Screen regions shared by the renderer and the mouse hit-testing, so what is drawn and what
//! is clickable always come from the same computation.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

pub const STATUS_HEIGHT: u16 = 4;
pub const HELP_BUTTON_LABEL: &str = "[Controls]";
pub const HELP_CLOSE_LABEL: &str = "[ Close ]";
const LIVES_WIDTH: u16 = 18;
const BANNER_SIZE: (u16, u16) = (44, 3);
const HELP_POPUP_SIZE: (u16, u16) = (56, 13);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub status: Rect,
    pub lives: Rect,
    pub counter: Rect,
    pub hint: Rect,
    pub help_button: Rect,
    pub board: Rect,
    /// One rect per grid cell, row-major
    pub cells: Vec<Rect>,
    pub grid_size: usize,
    pub banner: Rect,
    pub help_popup: Rect,
    pub help_close: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, grid_size: usize) -> Self {
        let status_height = STATUS_HEIGHT.min(area.height);
        let status = Rect::new(area.x, area.y, area.width, status_height);
        let board = Rect::new(
            area.x,
            area.y + status_height,
            area.width,
            area.height - status_height,
        );

        let inner = status.inner(Margin::new(1, 1));
        let top_row = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
        let hint = Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(1).min(1),
        );
        let [lives, counter, help_button] = Layout::horizontal([
            Constraint::Length(LIVES_WIDTH),
            Constraint::Min(0),
            Constraint::Length(HELP_BUTTON_LABEL.len() as u16),
        ])
        .areas(top_row);

        let help_popup = centered(area, HELP_POPUP_SIZE.0, HELP_POPUP_SIZE.1);
        let close_width = (HELP_CLOSE_LABEL.len() as u16).min(help_popup.width);
        let help_close = if help_popup.height >= 3 {
            Rect::new(
                help_popup.x + (help_popup.width - close_width) / 2,
                help_popup.bottom() - 2,
                close_width,
                1,
            )
        } else {
            Rect::default()
        };

        Self {
            status,
            lives,
            counter,
            hint,
            help_button,
            cells: split_cells(board, grid_size),
            board,
            grid_size,
            banner: centered(board, BANNER_SIZE.0, BANNER_SIZE.1),
            help_popup,
            help_close,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Rect> {
        (row < self.grid_size && col < self.grid_size)
            .then(|| self.cells.get(row * self.grid_size + col).copied())
            .flatten()
    }
}

fn split_cells(board: Rect, grid_size: usize) -> Vec<Rect> {
    let Ok(n) = u32::try_from(grid_size) else {
        return Vec::new();
    };
    let rows = Layout::vertical(vec![Constraint::Ratio(1, n); grid_size]).split(board);
    rows.iter()
        .flat_map(|row| Layout::horizontal(vec![Constraint::Ratio(1, n); grid_size]).split(*row).to_vec())
        .collect()
}

/// Rect of at most `width`×`height` centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn hit(region: Rect, column: u16, row: u16) -> bool {
    region.contains(Position::new(column, row))
}
