//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level screen regions
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title + tab bar
    pub header: Rect,
    /// Active view
    pub body: Rect,
    /// Key hints + backend URL
    pub footer: Rect,
}

/// Split the terminal into header, body, and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Centered rectangle for modal prompts
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
