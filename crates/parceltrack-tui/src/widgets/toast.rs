//! Toast overlay: transient notifications stacked top-right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use parceltrack_app::toast::{ToastKind, ToastState};

use crate::theme::palette;

/// At most this many toasts are shown at once; older ones wait their turn
/// out of sight until expiry frees a slot.
const MAX_VISIBLE: usize = 4;

pub struct ToastOverlay<'a> {
    toasts: &'a ToastState,
}

impl<'a> ToastOverlay<'a> {
    pub fn new(toasts: &'a ToastState) -> Self {
        Self { toasts }
    }
}

impl Widget for ToastOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, toast) in self.toasts.iter().take(MAX_VISIBLE).enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let text = format!(" {} ", toast.text);
            let width = (text.width() as u16).min(area.width);
            let rect = Rect {
                x: area.right().saturating_sub(width),
                y,
                width,
                height: 1,
            };
            let style = match toast.kind {
                ToastKind::Info => Style::default()
                    .bg(palette::TOAST_INFO_BG)
                    .fg(palette::TOAST_INFO_FG),
                ToastKind::Error => Style::default()
                    .bg(palette::TOAST_ERROR_BG)
                    .fg(palette::TOAST_ERROR_FG),
            };
            Clear.render(rect, buf);
            Paragraph::new(Line::from(Span::styled(text, style))).render(rect, buf);
        }
    }
}
