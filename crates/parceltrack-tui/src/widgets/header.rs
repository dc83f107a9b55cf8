//! Header bar: app title and view tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use parceltrack_app::ActiveTab;

use crate::theme::styles;

/// Main header showing the app title and the tab bar
pub struct HeaderBar<'a> {
    active: ActiveTab,
    base_url: &'a str,
}

impl<'a> HeaderBar<'a> {
    pub fn new(active: ActiveTab, base_url: &'a str) -> Self {
        Self { active, base_url }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        ActiveTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), styles::text_muted()),
                    Span::raw(tab.label()),
                ])
            })
            .collect()
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Title row with the backend URL on the right
        let title_area = Rect { height: 1, ..inner };
        let title = Line::from(vec![
            Span::styled("📦 Parcel Track", styles::accent_bold()),
            Span::raw("  "),
            Span::styled(self.base_url, styles::text_muted()),
        ]);
        Paragraph::new(title).render(title_area, buf);

        // Tab row
        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            Tabs::new(Self::tab_titles())
                .select(self.active.index())
                .highlight_style(styles::focused_selected())
                .divider("│")
                .render(tabs_area, buf);
        }
    }
}
