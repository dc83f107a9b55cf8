//! Deliveries list handlers: filtering, loading, status updates
//!
//! The displayed list always reflects the last successful server round-trip:
//! loads replace the rows wholesale and a successful status update triggers
//! a reload instead of mutating locally.

use tracing::debug;

use parceltrack_api::StatusUpdate;
use parceltrack_core::{Delivery, DeliveryStatus};

use crate::state::{AppState, DatePrompt};

use super::{UpdateAction, UpdateResult};

/// Issue a fetch with the current filter under a fresh generation.
///
/// Older in-flight fetches keep running (no cancellation) but their
/// responses arrive stamped with a stale generation and are dropped.
pub(crate) fn reload(state: &mut AppState) -> UpdateResult {
    let generation = state.deliveries.next_generation();
    state.deliveries.loading = true;
    state.deliveries.error = None;
    UpdateResult::action(UpdateAction::FetchDeliveries {
        generation,
        filter: state.deliveries.filter.clone(),
    })
}

pub(crate) fn handle_loaded(
    state: &mut AppState,
    generation: u64,
    deliveries: Vec<Delivery>,
) -> UpdateResult {
    if !state.deliveries.is_current(generation) {
        debug!("dropping stale delivery list (generation {generation})");
        return UpdateResult::none();
    }
    state.deliveries.loading = false;
    state.deliveries.error = None;
    state.deliveries.rows = deliveries;
    state.deliveries.clamp_selection();
    UpdateResult::none()
}

pub(crate) fn handle_load_failed(
    state: &mut AppState,
    generation: u64,
    error: String,
) -> UpdateResult {
    if !state.deliveries.is_current(generation) {
        debug!("dropping stale delivery list failure (generation {generation})");
        return UpdateResult::none();
    }
    state.deliveries.loading = false;
    state.deliveries.error = Some(error);
    UpdateResult::none()
}

/// Request a status change for the selected row.
///
/// DELIVERED first opens the delivered-date prompt; other targets PATCH
/// immediately with no date.
pub(crate) fn handle_set_status(state: &mut AppState, target: DeliveryStatus) -> UpdateResult {
    let Some(delivery) = state.deliveries.selected_delivery() else {
        return UpdateResult::none();
    };
    let tracking_code = delivery.tracking_code.clone();

    if target == DeliveryStatus::Delivered {
        state.deliveries.date_prompt = Some(DatePrompt {
            tracking_code,
            target,
            buffer: String::new(),
        });
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::UpdateStatus {
        tracking_code,
        update: StatusUpdate {
            status: target,
            delivered_date: None,
        },
    })
}

/// Confirm the delivered-date prompt. A blank buffer omits the date; the
/// text is otherwise passed through verbatim -- the server owns validation.
pub(crate) fn handle_confirm_date_prompt(state: &mut AppState) -> UpdateResult {
    let Some(prompt) = state.deliveries.date_prompt.take() else {
        return UpdateResult::none();
    };
    let delivered_date = {
        let trimmed = prompt.buffer.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };
    UpdateResult::action(UpdateAction::UpdateStatus {
        tracking_code: prompt.tracking_code,
        update: StatusUpdate {
            status: prompt.target,
            delivered_date,
        },
    })
}

/// Status update succeeded: toast, then reload so the list matches the
/// server exactly. No optimistic local mutation.
pub(crate) fn handle_status_updated(state: &mut AppState, delivery: Delivery) -> UpdateResult {
    debug!(
        "status of {} now {}",
        delivery.tracking_code, delivery.status
    );
    state.toasts.info("Status updated.");
    reload(state)
}

/// Status update failed: toast only, displayed list untouched.
pub(crate) fn handle_status_update_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.toasts.error(error);
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use parceltrack_core::DeliveryFilter;

    fn test_state() -> AppState {
        AppState::new(&Settings::default())
    }

    fn test_delivery(code: &str, status: DeliveryStatus) -> Delivery {
        Delivery {
            tracking_code: code.to_string(),
            customer_id: "cust-001".to_string(),
            customer_email: "jo@example.com".to_string(),
            weight_kg: 1.0,
            origin: None,
            destination: None,
            description: None,
            status,
            created_date: "2025-08-04T10:00:00Z".to_string(),
            delivered_date: None,
            cost: 5.0,
        }
    }

    fn fetch_generation(result: &UpdateResult) -> u64 {
        match &result.action {
            Some(UpdateAction::FetchDeliveries { generation, .. }) => *generation,
            other => panic!("expected FetchDeliveries, got {other:?}"),
        }
    }

    #[test]
    fn test_reload_carries_current_filter() {
        let mut state = test_state();
        state.deliveries.filter = DeliveryFilter {
            status: Some(DeliveryStatus::Delivered),
            customer_id: "cust-001".to_string(),
        };
        let result = reload(&mut state);
        assert!(state.deliveries.loading);
        match result.action {
            Some(UpdateAction::FetchDeliveries { filter, .. }) => {
                assert_eq!(filter.status, Some(DeliveryStatus::Delivered));
                assert_eq!(filter.customer_id, "cust-001");
            }
            other => panic!("expected FetchDeliveries, got {other:?}"),
        }
    }

    #[test]
    fn test_loaded_replaces_rows_wholesale() {
        let mut state = test_state();
        state.deliveries.rows = vec![test_delivery("OLD", DeliveryStatus::Pending)];
        let generation = fetch_generation(&reload(&mut state));

        handle_loaded(
            &mut state,
            generation,
            vec![
                test_delivery("NEW-1", DeliveryStatus::Pending),
                test_delivery("NEW-2", DeliveryStatus::InTransit),
            ],
        );
        assert!(!state.deliveries.loading);
        let codes: Vec<&str> = state
            .deliveries
            .rows
            .iter()
            .map(|d| d.tracking_code.as_str())
            .collect();
        assert_eq!(codes, vec!["NEW-1", "NEW-2"]);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut state = test_state();
        let first = fetch_generation(&reload(&mut state));
        let second = fetch_generation(&reload(&mut state));

        // The older fetch resolves after the newer one was issued.
        handle_loaded(
            &mut state,
            first,
            vec![test_delivery("STALE", DeliveryStatus::Pending)],
        );
        assert!(state.deliveries.rows.is_empty());
        assert!(state.deliveries.loading, "newer fetch still in flight");

        handle_loaded(
            &mut state,
            second,
            vec![test_delivery("FRESH", DeliveryStatus::Pending)],
        );
        assert_eq!(state.deliveries.rows[0].tracking_code, "FRESH");
        assert!(!state.deliveries.loading);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut state = test_state();
        let first = fetch_generation(&reload(&mut state));
        let _second = reload(&mut state);

        handle_load_failed(&mut state, first, "HTTP 500".to_string());
        assert!(state.deliveries.error.is_none());
        assert!(state.deliveries.loading);
    }

    #[test]
    fn test_load_failure_keeps_rows() {
        let mut state = test_state();
        state.deliveries.rows = vec![test_delivery("KEPT", DeliveryStatus::Pending)];
        let generation = fetch_generation(&reload(&mut state));

        handle_load_failed(&mut state, generation, "HTTP 503".to_string());
        assert_eq!(state.deliveries.error.as_deref(), Some("HTTP 503"));
        assert_eq!(state.deliveries.rows.len(), 1);
    }

    #[test]
    fn test_set_status_in_transit_patches_immediately() {
        let mut state = test_state();
        state.deliveries.rows = vec![test_delivery("TRK-1", DeliveryStatus::Pending)];
        let result = handle_set_status(&mut state, DeliveryStatus::InTransit);
        match result.action {
            Some(UpdateAction::UpdateStatus {
                tracking_code,
                update,
            }) => {
                assert_eq!(tracking_code, "TRK-1");
                assert_eq!(update.status, DeliveryStatus::InTransit);
                assert!(update.delivered_date.is_none());
            }
            other => panic!("expected UpdateStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_set_status_delivered_opens_prompt() {
        let mut state = test_state();
        state.deliveries.rows = vec![test_delivery("TRK-1", DeliveryStatus::InTransit)];
        let result = handle_set_status(&mut state, DeliveryStatus::Delivered);
        assert!(result.action.is_none());
        let prompt = state.deliveries.date_prompt.as_ref().unwrap();
        assert_eq!(prompt.tracking_code, "TRK-1");
        assert_eq!(prompt.target, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_set_status_without_rows_is_noop() {
        let mut state = test_state();
        let result = handle_set_status(&mut state, DeliveryStatus::InTransit);
        assert!(result.action.is_none());
    }

    #[test]
    fn test_confirm_prompt_with_blank_buffer_omits_date() {
        let mut state = test_state();
        state.deliveries.date_prompt = Some(DatePrompt {
            tracking_code: "TRK-1".to_string(),
            target: DeliveryStatus::Delivered,
            buffer: "   ".to_string(),
        });
        let result = handle_confirm_date_prompt(&mut state);
        assert!(state.deliveries.date_prompt.is_none());
        match result.action {
            Some(UpdateAction::UpdateStatus { update, .. }) => {
                assert!(update.delivered_date.is_none());
            }
            other => panic!("expected UpdateStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_confirm_prompt_passes_timestamp_verbatim() {
        let mut state = test_state();
        state.deliveries.date_prompt = Some(DatePrompt {
            tracking_code: "TRK-1".to_string(),
            target: DeliveryStatus::Delivered,
            buffer: "2025-08-04T12:10:00Z".to_string(),
        });
        let result = handle_confirm_date_prompt(&mut state);
        match result.action {
            Some(UpdateAction::UpdateStatus { update, .. }) => {
                assert_eq!(
                    update.delivered_date.as_deref(),
                    Some("2025-08-04T12:10:00Z")
                );
            }
            other => panic!("expected UpdateStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_status_updated_reloads_with_current_filter() {
        let mut state = test_state();
        state.deliveries.filter.customer_id = "cust-001".to_string();
        state.deliveries.rows = vec![test_delivery("TRK-1", DeliveryStatus::Pending)];

        let result =
            handle_status_updated(&mut state, test_delivery("TRK-1", DeliveryStatus::InTransit));
        // No optimistic mutation: the displayed rows are untouched until the
        // reload lands.
        assert_eq!(state.deliveries.rows[0].status, DeliveryStatus::Pending);
        match result.action {
            Some(UpdateAction::FetchDeliveries { filter, .. }) => {
                assert_eq!(filter.customer_id, "cust-001");
            }
            other => panic!("expected FetchDeliveries, got {other:?}"),
        }
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_status_update_failure_leaves_list() {
        let mut state = test_state();
        state.deliveries.rows = vec![test_delivery("TRK-1", DeliveryStatus::Pending)];
        let result = handle_status_update_failed(&mut state, "HTTP 409".to_string());
        assert!(result.action.is_none());
        assert_eq!(state.deliveries.rows.len(), 1);
        assert_eq!(state.toasts.len(), 1);
    }
}
