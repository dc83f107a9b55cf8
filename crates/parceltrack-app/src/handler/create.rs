//! Create-delivery view handlers
//!
//! State machine: idle → submitting → {result | error} → idle. Validation
//! failures never reach the network; request failures keep the form intact
//! for retry.

use parceltrack_core::Delivery;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Validate the form and dispatch the creation request.
///
/// Exactly one request is issued per accepted submit; a submit while one is
/// already in flight is ignored (the original form disables its button).
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.create.submitting {
        return UpdateResult::none();
    }

    match state.create.form.validate() {
        Ok(request) => {
            state.create.submitting = true;
            state.create.error = None;
            state.create.result = None;
            UpdateResult::action(UpdateAction::CreateDelivery { request })
        }
        Err(message) => {
            state.create.error = Some(message.clone());
            state.toasts.error(message);
            UpdateResult::none()
        }
    }
}

/// Creation succeeded: show the result panel, reset the form.
pub(crate) fn handle_created(state: &mut AppState, delivery: Delivery) -> UpdateResult {
    state.create.submitting = false;
    state.create.error = None;
    state.create.result = Some(delivery);
    state.create.form.reset();
    state.toasts.info("Delivery created.");
    UpdateResult::none()
}

/// Creation failed: inline error + toast, form preserved.
pub(crate) fn handle_create_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.create.submitting = false;
    state.create.error = Some(error.clone());
    state.toasts.error(error);
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::CreateForm;
    use parceltrack_core::DeliveryStatus;

    fn state_with_valid_form() -> AppState {
        let mut state = AppState::new(&Settings::default());
        state.create.form = CreateForm {
            customer_id: "cust-001".to_string(),
            customer_email: "jo@example.com".to_string(),
            weight_kg: "2.5".to_string(),
            origin: "Warehouse A".to_string(),
            ..CreateForm::default()
        };
        state
    }

    fn created_delivery() -> Delivery {
        Delivery {
            tracking_code: "TRK-2025-0042".to_string(),
            customer_id: "cust-001".to_string(),
            customer_email: "jo@example.com".to_string(),
            weight_kg: 2.5,
            origin: Some("Warehouse A".to_string()),
            destination: None,
            description: None,
            status: DeliveryStatus::Pending,
            created_date: "2025-08-04T10:00:00Z".to_string(),
            delivered_date: None,
            cost: 18.5,
        }
    }

    #[test]
    fn test_valid_submit_dispatches_exactly_one_request() {
        let mut state = state_with_valid_form();
        let result = handle_submit(&mut state);
        assert!(state.create.submitting);
        match result.action {
            Some(UpdateAction::CreateDelivery { request }) => {
                assert_eq!(request.customer_id, "cust-001");
                assert_eq!(request.weight_kg, 2.5);
            }
            other => panic!("expected CreateDelivery, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut state = state_with_valid_form();
        let first = handle_submit(&mut state);
        assert!(first.action.is_some());
        let second = handle_submit(&mut state);
        assert!(second.action.is_none());
    }

    #[test]
    fn test_invalid_customer_id_issues_no_request() {
        let mut state = state_with_valid_form();
        state.create.form.customer_id = "x".repeat(11);
        let result = handle_submit(&mut state);
        assert!(result.action.is_none());
        assert!(!state.create.submitting);
        assert!(state.create.error.as_deref().unwrap().contains("1-10"));
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_success_resets_form_and_shows_result_verbatim() {
        let mut state = state_with_valid_form();
        handle_submit(&mut state);
        handle_created(&mut state, created_delivery());

        assert!(!state.create.submitting);
        assert_eq!(state.create.form, CreateForm::default());
        let result = state.create.result.as_ref().unwrap();
        assert_eq!(result.tracking_code, "TRK-2025-0042");
        assert_eq!(result.cost, 18.5);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_failure_preserves_form_for_retry() {
        let mut state = state_with_valid_form();
        let form_before = state.create.form.clone();
        handle_submit(&mut state);
        handle_create_failed(&mut state, "HTTP 400 - invalid weight".to_string());

        assert!(!state.create.submitting);
        assert_eq!(state.create.form, form_before);
        assert_eq!(
            state.create.error.as_deref(),
            Some("HTTP 400 - invalid weight")
        );
        assert!(state.create.result.is_none());
    }

    #[test]
    fn test_resubmit_after_failure_sends_again() {
        // No client-side idempotency: every accepted submit is a new request.
        let mut state = state_with_valid_form();
        handle_submit(&mut state);
        handle_create_failed(&mut state, "HTTP 502".to_string());
        let retry = handle_submit(&mut state);
        assert!(matches!(
            retry.action,
            Some(UpdateAction::CreateDelivery { .. })
        ));
    }
}
