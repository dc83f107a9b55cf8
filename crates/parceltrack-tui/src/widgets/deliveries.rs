//! Deliveries list view: filter bar, rows, selection

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use parceltrack_app::state::DeliveriesViewState;
use parceltrack_core::{short_timestamp, Delivery};

use crate::theme::styles;

use super::pad;

const TRACKING_WIDTH: usize = 18;
const CUSTOMER_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 12;
const WEIGHT_WIDTH: usize = 9;
const COST_WIDTH: usize = 9;
const CREATED_WIDTH: usize = 21;

/// The filterable delivery list
pub struct DeliveriesView<'a> {
    state: &'a DeliveriesViewState,
}

impl<'a> DeliveriesView<'a> {
    pub fn new(state: &'a DeliveriesViewState) -> Self {
        Self { state }
    }

    fn filter_line(&self) -> Line<'static> {
        let status_label = self
            .state
            .filter
            .status
            .map(|s| s.label())
            .unwrap_or("(any)");
        let mut spans = vec![
            Span::styled("Status: ", styles::text_secondary()),
            Span::styled(status_label.to_string(), styles::accent()),
            Span::styled("   Customer: ", styles::text_secondary()),
            Span::styled(self.state.filter.customer_id.clone(), styles::text_primary()),
        ];
        if self.state.editing_filter {
            spans.push(Span::styled("▏", styles::accent()));
        }
        spans.push(Span::styled(
            "   (f cycles status, / edits customer)",
            styles::text_muted(),
        ));
        Line::from(spans)
    }

    fn header_line() -> Line<'static> {
        Line::from(Span::styled(
            format!(
                "{}{}{}{}{}{}{}",
                pad("TRACKING", TRACKING_WIDTH),
                pad("CUSTOMER", CUSTOMER_WIDTH),
                pad("STATUS", STATUS_WIDTH),
                pad("KG", WEIGHT_WIDTH),
                pad("COST", COST_WIDTH),
                pad("CREATED", CREATED_WIDTH),
                "DELIVERED",
            ),
            styles::text_muted(),
        ))
    }

    fn row_line(&self, delivery: &Delivery, selected: bool) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                pad(&delivery.tracking_code, TRACKING_WIDTH),
                styles::text_primary(),
            ),
            Span::styled(
                pad(&delivery.customer_id, CUSTOMER_WIDTH),
                styles::text_secondary(),
            ),
            Span::styled(
                pad(delivery.status.label(), STATUS_WIDTH),
                styles::status(delivery.status),
            ),
            Span::styled(
                pad(&format!("{}", delivery.weight_kg), WEIGHT_WIDTH),
                styles::text_secondary(),
            ),
            Span::styled(
                pad(&format!("{}", delivery.cost), COST_WIDTH),
                styles::text_primary(),
            ),
            Span::styled(
                pad(&short_timestamp(&delivery.created_date), CREATED_WIDTH),
                styles::text_muted(),
            ),
            Span::styled(
                delivery
                    .delivered_date
                    .as_deref()
                    .map(short_timestamp)
                    .unwrap_or_else(|| "—".to_string()),
                styles::text_muted(),
            ),
        ];
        if selected {
            spans = spans
                .into_iter()
                .map(|span| {
                    let style = span.style.patch(styles::selected_row());
                    Span::styled(span.content, style)
                })
                .collect();
        }
        Line::from(spans)
    }
}

impl Widget for DeliveriesView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.loading {
            " Deliveries — Loading… "
        } else {
            " Deliveries "
        };
        let block = styles::panel_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = vec![self.filter_line(), Self::header_line()];

        // Window the rows around the selection
        let visible = (inner.height as usize).saturating_sub(lines.len());
        let start = if visible == 0 {
            0
        } else {
            self.state.selected.saturating_sub(visible - 1)
        };
        for (i, delivery) in self.state.rows.iter().enumerate().skip(start).take(visible) {
            lines.push(self.row_line(delivery, i == self.state.selected));
        }

        if let Some(error) = &self.state.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                styles::error_text(),
            )));
        } else if self.state.rows.is_empty() && !self.state.loading {
            lines.push(Line::from(Span::styled(
                "No deliveries found — adjust filters or create a new delivery.",
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
