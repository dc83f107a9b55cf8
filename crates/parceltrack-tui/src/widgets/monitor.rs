//! Carrier-monitor feed view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use parceltrack_app::state::MonitorViewState;
use parceltrack_core::TrackingEvent;

use crate::theme::styles;

use super::pad;

const TRACKING_WIDTH: usize = 18;
const CARRIER_WIDTH: usize = 14;
const LOCATION_WIDTH: usize = 22;
const TIMESTAMP_WIDTH: usize = 22;

/// Read-only feed of carrier tracking events, in server order
pub struct MonitorView<'a> {
    state: &'a MonitorViewState,
}

impl<'a> MonitorView<'a> {
    pub fn new(state: &'a MonitorViewState) -> Self {
        Self { state }
    }

    fn header_line() -> Line<'static> {
        Line::from(Span::styled(
            format!(
                "{}{}{}{}{}",
                pad("TRACKING", TRACKING_WIDTH),
                pad("CARRIER", CARRIER_WIDTH),
                pad("LOCATION", LOCATION_WIDTH),
                pad("TIMESTAMP", TIMESTAMP_WIDTH),
                "STATUS",
            ),
            styles::text_muted(),
        ))
    }

    fn event_line(event: &TrackingEvent) -> Line<'static> {
        Line::from(vec![
            Span::styled(pad(&event.tracking_code, TRACKING_WIDTH), styles::text_primary()),
            Span::styled(pad(&event.carrier, CARRIER_WIDTH), styles::accent()),
            Span::styled(pad(&event.location, LOCATION_WIDTH), styles::text_secondary()),
            Span::styled(pad(&event.timestamp, TIMESTAMP_WIDTH), styles::text_muted()),
            Span::styled(event.status.clone(), styles::text_secondary()),
        ])
    }
}

impl Widget for MonitorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.loading {
            " Carrier Monitor — Loading… "
        } else {
            " Carrier Monitor "
        };
        let block = styles::panel_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![Self::header_line()];
        let visible = (inner.height as usize).saturating_sub(1);
        for event in self.state.events.iter().take(visible) {
            lines.push(Self::event_line(event));
        }

        if let Some(error) = &self.state.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                styles::error_text(),
            )));
        } else if self.state.events.is_empty() && !self.state.loading {
            lines.push(Line::from(Span::styled(
                "No tracking items yet — feeds will appear here when available.",
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
