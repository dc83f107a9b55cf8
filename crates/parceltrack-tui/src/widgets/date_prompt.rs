//! Delivered-date prompt modal
//!
//! Opens before a DELIVERED status update. Blank input omits the timestamp;
//! whatever is typed is passed through verbatim -- the server validates.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use parceltrack_app::state::DatePrompt;

use crate::theme::{palette, styles};

pub struct DatePromptView<'a> {
    prompt: &'a DatePrompt,
}

impl<'a> DatePromptView<'a> {
    pub fn new(prompt: &'a DatePrompt) -> Self {
        Self { prompt }
    }
}

impl Widget for DatePromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::panel_block(true)
            .title(" Delivered timestamp ")
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} → DELIVERED  ", self.prompt.tracking_code),
                    styles::text_secondary(),
                ),
                Span::styled(self.prompt.buffer.clone(), styles::text_primary()),
                Span::styled("▏", styles::accent()),
            ]),
            Line::from(Span::styled(
                "e.g. 2025-08-04T12:10:00Z · blank to omit · enter confirm · esc cancel",
                styles::text_muted(),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::render_to_string;
    use parceltrack_core::DeliveryStatus;

    #[test]
    fn test_prompt_shows_code_and_buffer() {
        let prompt = DatePrompt {
            tracking_code: "TRK-1".to_string(),
            target: DeliveryStatus::Delivered,
            buffer: "2025-08".to_string(),
        };
        let rendered = render_to_string(DatePromptView::new(&prompt), 70, 4);
        assert!(rendered.contains("TRK-1"));
        assert!(rendered.contains("2025-08"));
        assert!(rendered.contains("blank to omit"));
    }
}
