//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::{ActiveTab, AppState};

use super::{create, deliveries, keys, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.expire();
            UpdateResult::none()
        }

        Message::SwitchTab(tab) => switch_tab(state, tab),

        Message::Refresh => refresh_active(state),

        // ─────────────────────────────────────────────────────────
        // Create view
        // ─────────────────────────────────────────────────────────
        Message::SubmitCreate => create::handle_submit(state),
        Message::DeliveryCreated(delivery) => create::handle_created(state, *delivery),
        Message::DeliveryCreateFailed { error } => create::handle_create_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Deliveries list view
        // ─────────────────────────────────────────────────────────
        Message::CustomerFilterEdited => deliveries::reload(state),
        Message::CycleStatusFilter => {
            state.deliveries.filter.cycle_status();
            deliveries::reload(state)
        }
        Message::SetStatus(target) => deliveries::handle_set_status(state, target),
        Message::ConfirmDatePrompt => deliveries::handle_confirm_date_prompt(state),
        Message::CancelDatePrompt => {
            state.deliveries.date_prompt = None;
            UpdateResult::none()
        }
        Message::DeliveriesLoaded {
            generation,
            deliveries,
        } => deliveries::handle_loaded(state, generation, deliveries),
        Message::DeliveriesLoadFailed { generation, error } => {
            deliveries::handle_load_failed(state, generation, error)
        }
        Message::StatusUpdated(delivery) => deliveries::handle_status_updated(state, *delivery),
        Message::StatusUpdateFailed { error } => {
            deliveries::handle_status_update_failed(state, error)
        }

        // ─────────────────────────────────────────────────────────
        // Summary view
        // ─────────────────────────────────────────────────────────
        Message::SummaryLoaded(summary) => {
            state.summary.loading = false;
            state.summary.error = None;
            state.summary.summary = Some(*summary);
            UpdateResult::none()
        }
        Message::SummaryLoadFailed { error } => {
            state.summary.loading = false;
            state.summary.error = Some(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Monitor view
        // ─────────────────────────────────────────────────────────
        Message::MonitorLoaded(events) => {
            state.monitor.loading = false;
            state.monitor.error = None;
            state.monitor.events = events;
            UpdateResult::none()
        }
        Message::MonitorLoadFailed { error } => {
            state.monitor.loading = false;
            state.monitor.error = Some(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Clipboard
        // ─────────────────────────────────────────────────────────
        Message::CopyTrackingCode => copy_tracking_code(state),
        Message::ClipboardCopied => {
            state.toasts.info("Copied");
            UpdateResult::none()
        }
        Message::ClipboardCopyFailed { error } => {
            debug!("clipboard copy failed: {error}");
            state.toasts.error("Copy failed");
            UpdateResult::none()
        }
    }
}

/// Activate a tab. The target view is reset and re-fetches, so its contents
/// always reflect a fresh server round-trip.
fn switch_tab(state: &mut AppState, tab: ActiveTab) -> UpdateResult {
    if state.active_tab == tab {
        return UpdateResult::none();
    }
    state.active_tab = tab;
    match tab {
        ActiveTab::Create => {
            state.create.reset();
            UpdateResult::none()
        }
        ActiveTab::Deliveries => {
            state.deliveries.reset();
            deliveries::reload(state)
        }
        ActiveTab::Summary => {
            state.summary.reset();
            state.summary.loading = true;
            UpdateResult::action(UpdateAction::FetchSummary)
        }
        ActiveTab::Monitor => {
            state.monitor.reset();
            state.monitor.loading = true;
            UpdateResult::action(UpdateAction::FetchMonitor)
        }
    }
}

/// Manual refresh re-issues the active view's fetch with its current inputs.
fn refresh_active(state: &mut AppState) -> UpdateResult {
    match state.active_tab {
        ActiveTab::Create => UpdateResult::none(),
        ActiveTab::Deliveries => deliveries::reload(state),
        ActiveTab::Summary => {
            state.summary.loading = true;
            state.summary.error = None;
            UpdateResult::action(UpdateAction::FetchSummary)
        }
        ActiveTab::Monitor => {
            state.monitor.loading = true;
            state.monitor.error = None;
            UpdateResult::action(UpdateAction::FetchMonitor)
        }
    }
}

/// Copy the tracking code the user is looking at: the create result on the
/// create tab, the selected row on the list tab.
fn copy_tracking_code(state: &mut AppState) -> UpdateResult {
    let code = match state.active_tab {
        ActiveTab::Create => state
            .create
            .result
            .as_ref()
            .map(|delivery| delivery.tracking_code.clone()),
        ActiveTab::Deliveries => state
            .deliveries
            .selected_delivery()
            .map(|delivery| delivery.tracking_code.clone()),
        _ => None,
    };
    match code {
        Some(text) => UpdateResult::action(UpdateAction::CopyToClipboard { text }),
        None => UpdateResult::none(),
    }
}
