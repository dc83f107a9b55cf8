//! Footer: context-sensitive key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use parceltrack_app::{ActiveTab, AppState};

use crate::theme::styles;

pub struct FooterBar<'a> {
    state: &'a AppState,
}

impl<'a> FooterBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.active_tab {
            ActiveTab::Create => {
                "tab/↓ next field · ↑ prev · enter submit · ctrl+y copy code · F1-F4 tabs · ctrl+c quit"
            }
            ActiveTab::Deliveries => {
                if self.state.deliveries.date_prompt.is_some() {
                    "type timestamp · enter confirm · esc cancel"
                } else if self.state.deliveries.editing_filter {
                    "type to filter customers · enter/esc done"
                } else {
                    "↑/↓ select · r refresh · f status · / customer · p/t/d set status · c copy · 1-4 tabs · q quit"
                }
            }
            ActiveTab::Summary | ActiveTab::Monitor => "r refresh · 1-4 tabs · q quit",
        }
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(Line::from(Span::styled(self.hints(), styles::text_muted())))
            .render(area, buf);
    }
}
