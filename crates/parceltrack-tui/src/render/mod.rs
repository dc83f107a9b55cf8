//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use parceltrack_app::{ActiveTab, AppState};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    CreateFormView, DatePromptView, DeliveriesView, FooterBar, HeaderBar, MonitorView,
    SummaryView, ToastOverlay,
};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to state: rendering never mutates the model.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the base background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(HeaderBar::new(state.active_tab, &state.base_url), areas.header);

    match state.active_tab {
        ActiveTab::Create => {
            frame.render_widget(CreateFormView::new(&state.create), areas.body);
        }
        ActiveTab::Deliveries => {
            frame.render_widget(DeliveriesView::new(&state.deliveries), areas.body);
            if let Some(prompt) = &state.deliveries.date_prompt {
                let modal = layout::centered_rect(70, 4, areas.body);
                frame.render_widget(DatePromptView::new(prompt), modal);
            }
        }
        ActiveTab::Summary => {
            frame.render_widget(SummaryView::new(&state.summary), areas.body);
        }
        ActiveTab::Monitor => {
            frame.render_widget(MonitorView::new(&state.monitor), areas.body);
        }
    }

    frame.render_widget(FooterBar::new(state), areas.footer);

    // Toasts float over whatever view is active
    if !state.toasts.is_empty() {
        let overlay = Rect {
            y: areas.body.y,
            height: areas.body.height.min(4),
            ..areas.body
        };
        frame.render_widget(ToastOverlay::new(&state.toasts), overlay);
    }
}
