//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use parceltrack_core::DeliveryStatus;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn error_text() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Color-coded style for a delivery status badge.
pub fn status(status: DeliveryStatus) -> Style {
    match status {
        DeliveryStatus::Pending => Style::default().fg(palette::TEXT_SECONDARY),
        DeliveryStatus::InTransit => Style::default().fg(palette::STATUS_YELLOW),
        DeliveryStatus::Delivered => Style::default().fg(palette::STATUS_GREEN),
    }
}

// --- Selection / focus ---
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_row() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

// --- Blocks ---
/// Rounded-border panel; the border brightens when focused.
pub fn panel_block(focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}
