//! Create-delivery form view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use parceltrack_app::state::{CreateField, CreateViewState};

use crate::theme::styles;

const LABEL_WIDTH: usize = 16;

/// Text fields in render order (Submit handled separately).
const TEXT_FIELDS: [CreateField; 6] = [
    CreateField::CustomerId,
    CreateField::CustomerEmail,
    CreateField::WeightKg,
    CreateField::Origin,
    CreateField::Destination,
    CreateField::Description,
];

/// The create form with its result panel
pub struct CreateFormView<'a> {
    state: &'a CreateViewState,
}

impl<'a> CreateFormView<'a> {
    pub fn new(state: &'a CreateViewState) -> Self {
        Self { state }
    }

    fn field_line(&self, field: CreateField) -> Line<'static> {
        let focused = self.state.focus == field;
        let marker = if field.is_required() { "*" } else { " " };
        let label = format!("{marker}{:<width$}", field.label(), width = LABEL_WIDTH);
        let value = self.state.form.field(field).unwrap_or_default().to_string();

        let mut spans = vec![
            Span::styled(
                if focused { "› " } else { "  " }.to_string(),
                styles::accent(),
            ),
            Span::styled(
                label,
                if focused {
                    styles::accent()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(value, styles::text_primary()),
        ];
        if focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn submit_line(&self) -> Line<'static> {
        let focused = self.state.focus == CreateField::Submit;
        let label = if self.state.submitting {
            "[ Creating… ]"
        } else {
            "[ Create Delivery ]"
        };
        let style = if focused {
            styles::selected_row().patch(styles::accent())
        } else {
            styles::accent()
        };
        Line::from(vec![
            Span::raw("  ".to_string()),
            Span::styled(label.to_string(), style),
        ])
    }
}

impl Widget for CreateFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(true).title(" Create a Delivery ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for field in TEXT_FIELDS {
            lines.push(self.field_line(field));
        }
        lines.push(Line::default());
        lines.push(self.submit_line());

        if let Some(error) = &self.state.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                error.clone(),
                styles::error_text(),
            )));
        }

        if let Some(result) = &self.state.result {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Created", styles::accent_bold())));
            lines.push(Line::from(vec![
                Span::styled("Tracking Code: ", styles::text_secondary()),
                Span::styled(result.tracking_code.clone(), styles::text_primary()),
                Span::raw("   "),
                Span::styled("Cost: ", styles::text_secondary()),
                Span::styled(format!("{}", result.cost), styles::text_primary()),
                Span::raw("   "),
                Span::styled(result.status.label().to_string(), styles::status(result.status)),
            ]));
            lines.push(Line::from(Span::styled(
                "ctrl+y to copy the tracking code",
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
