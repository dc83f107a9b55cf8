//! Summary dashboard: KPI tiles

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use parceltrack_app::state::SummaryViewState;

use crate::theme::styles;

/// Aggregate dashboard fetched from `/summary`
pub struct SummaryView<'a> {
    state: &'a SummaryViewState,
}

impl<'a> SummaryView<'a> {
    pub fn new(state: &'a SummaryViewState) -> Self {
        Self { state }
    }
}

fn kpi_tile(title: &str, value: String, area: Rect, buf: &mut Buffer) {
    let block = styles::panel_block(false);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }
    let lines = vec![
        Line::from(Span::styled(title.to_string(), styles::text_secondary())),
        Line::from(Span::styled(value, styles::accent_bold())),
    ];
    Paragraph::new(lines).render(inner, buf);
}

impl Widget for SummaryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.loading {
            " Summary — Loading… "
        } else {
            " Summary "
        };
        let block = styles::panel_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(error) = &self.state.error {
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                styles::error_text(),
            )))
            .render(inner, buf);
            return;
        }

        let Some(summary) = &self.state.summary else {
            if !self.state.loading {
                Paragraph::new(Line::from(Span::styled(
                    "No data yet — press r to refresh.",
                    styles::text_muted(),
                )))
                .render(inner, buf);
            }
            return;
        };

        let tiles_area = Rect {
            height: inner.height.min(4),
            ..inner
        };
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
            ])
            .split(tiles_area);

        kpi_tile(
            "Total Deliveries",
            summary.total_deliveries.to_string(),
            tiles[0],
            buf,
        );
        // Rounded for display only; the raw value is never mutated.
        kpi_tile(
            "Average Cost",
            format!("{:.2}", summary.average_cost),
            tiles[1],
            buf,
        );
        kpi_tile(
            "Pending",
            summary.status_breakdown.pending.to_string(),
            tiles[2],
            buf,
        );
        kpi_tile(
            "In Transit",
            summary.status_breakdown.in_transit.to_string(),
            tiles[3],
            buf,
        );
        kpi_tile(
            "Delivered",
            summary.status_breakdown.delivered.to_string(),
            tiles[4],
            buf,
        );
    }
}
