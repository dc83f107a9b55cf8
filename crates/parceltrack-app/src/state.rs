//! Application state (Model in TEA pattern)
//!
//! One struct per view. No state crosses view boundaries; switching tabs
//! resets the target view so returning to a tab always re-fetches, matching
//! the mount/unmount semantics of the service's other front ends.

use std::time::Duration;

use parceltrack_api::NewDelivery;
use parceltrack_core::{Delivery, DeliveryFilter, DeliveryStatus, Summary, TrackingEvent};

use crate::config::Settings;
use crate::toast::ToastState;

/// The four top-level views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Create,
    Deliveries,
    Summary,
    Monitor,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Create,
        ActiveTab::Deliveries,
        ActiveTab::Summary,
        ActiveTab::Monitor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Create => "Create",
            ActiveTab::Deliveries => "Deliveries",
            ActiveTab::Summary => "Summary",
            ActiveTab::Monitor => "Monitor",
        }
    }

    /// 0-based position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            ActiveTab::Create => 0,
            ActiveTab::Deliveries => 1,
            ActiveTab::Summary => 2,
            ActiveTab::Monitor => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ActiveTab::Create => ActiveTab::Deliveries,
            ActiveTab::Deliveries => ActiveTab::Summary,
            ActiveTab::Summary => ActiveTab::Monitor,
            ActiveTab::Monitor => ActiveTab::Create,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveTab::Create => ActiveTab::Monitor,
            ActiveTab::Deliveries => ActiveTab::Create,
            ActiveTab::Summary => ActiveTab::Deliveries,
            ActiveTab::Monitor => ActiveTab::Summary,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Create view
// ─────────────────────────────────────────────────────────────────────────────

/// Focusable items in the create form, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    CustomerId,
    CustomerEmail,
    WeightKg,
    Origin,
    Destination,
    Description,
    Submit,
}

impl CreateField {
    pub fn next(self) -> Self {
        match self {
            Self::CustomerId => Self::CustomerEmail,
            Self::CustomerEmail => Self::WeightKg,
            Self::WeightKg => Self::Origin,
            Self::Origin => Self::Destination,
            Self::Destination => Self::Description,
            Self::Description => Self::Submit,
            Self::Submit => Self::CustomerId,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::CustomerId => Self::Submit,
            Self::CustomerEmail => Self::CustomerId,
            Self::WeightKg => Self::CustomerEmail,
            Self::Origin => Self::WeightKg,
            Self::Destination => Self::Origin,
            Self::Description => Self::Destination,
            Self::Submit => Self::Description,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CustomerId => "Customer ID",
            Self::CustomerEmail => "Customer Email",
            Self::WeightKg => "Weight (kg)",
            Self::Origin => "Origin",
            Self::Destination => "Destination",
            Self::Description => "Description",
            Self::Submit => "Create Delivery",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::CustomerId | Self::CustomerEmail | Self::WeightKg
        )
    }
}

/// Text buffers backing the create form. Weight stays a string until submit
/// so partial input ("2.") never fights the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    pub customer_id: String,
    pub customer_email: String,
    pub weight_kg: String,
    pub origin: String,
    pub destination: String,
    pub description: String,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            customer_email: String::new(),
            weight_kg: "1".to_string(),
            origin: String::new(),
            destination: String::new(),
            description: String::new(),
        }
    }
}

impl CreateForm {
    /// Back to empty defaults (after a successful creation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mutable access to the text buffer behind a field. `None` for Submit.
    pub fn field_mut(&mut self, field: CreateField) -> Option<&mut String> {
        match field {
            CreateField::CustomerId => Some(&mut self.customer_id),
            CreateField::CustomerEmail => Some(&mut self.customer_email),
            CreateField::WeightKg => Some(&mut self.weight_kg),
            CreateField::Origin => Some(&mut self.origin),
            CreateField::Destination => Some(&mut self.destination),
            CreateField::Description => Some(&mut self.description),
            CreateField::Submit => None,
        }
    }

    pub fn field(&self, field: CreateField) -> Option<&str> {
        match field {
            CreateField::CustomerId => Some(&self.customer_id),
            CreateField::CustomerEmail => Some(&self.customer_email),
            CreateField::WeightKg => Some(&self.weight_kg),
            CreateField::Origin => Some(&self.origin),
            CreateField::Destination => Some(&self.destination),
            CreateField::Description => Some(&self.description),
            CreateField::Submit => None,
        }
    }

    /// Validate client-owned invariants and build the creation request.
    ///
    /// Everything else (tracking-code uniqueness, status rules, cost) is the
    /// server's problem. Validation failures never reach the network.
    pub fn validate(&self) -> std::result::Result<NewDelivery, String> {
        let customer_id = self.customer_id.trim();
        if customer_id.is_empty() || customer_id.chars().count() > 10 {
            return Err("Customer ID must be 1-10 characters".to_string());
        }

        let customer_email = self.customer_email.trim();
        if customer_email.is_empty() {
            return Err("Customer email is required".to_string());
        }

        let weight_kg: f64 = self
            .weight_kg
            .trim()
            .parse()
            .map_err(|_| "Weight must be a number".to_string())?;
        if weight_kg <= 0.0 {
            return Err("Weight must be a positive number".to_string());
        }

        Ok(NewDelivery {
            customer_id: customer_id.to_string(),
            customer_email: customer_email.to_string(),
            weight_kg,
            origin: non_empty(&self.origin),
            destination: non_empty(&self.destination),
            description: non_empty(&self.description),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// State for the create-delivery view.
///
/// `idle → submitting → {result | error}` and back to idle; the form is
/// preserved on failure so the user can retry.
#[derive(Debug, Default)]
pub struct CreateViewState {
    pub form: CreateForm,
    pub focus: CreateField,
    pub submitting: bool,
    pub error: Option<String>,
    /// The created delivery, shown in the result panel until the next submit
    /// or tab change.
    pub result: Option<Delivery>,
}

impl CreateViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Deliveries list view
// ─────────────────────────────────────────────────────────────────────────────

/// Modal prompting for an optional delivered timestamp before a
/// DELIVERED status update. Blank input omits the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePrompt {
    pub tracking_code: String,
    pub target: DeliveryStatus,
    pub buffer: String,
}

/// State for the deliveries list view.
#[derive(Debug, Default)]
pub struct DeliveriesViewState {
    pub filter: DeliveryFilter,
    pub rows: Vec<Delivery>,
    pub loading: bool,
    pub error: Option<String>,
    /// Row cursor, clamped into `rows` after every load.
    pub selected: usize,
    /// True while keystrokes edit the customer-id filter.
    pub editing_filter: bool,
    pub date_prompt: Option<DatePrompt>,
    /// Fetch generation. Responses stamped with an older generation are
    /// stale (a newer fetch is in flight or already landed) and dropped.
    generation: u64,
}

impl DeliveriesViewState {
    /// Reset for tab entry. The generation is deliberately preserved so
    /// responses from a previous mount are still recognized as stale.
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::default();
        self.generation = generation;
    }

    /// Bump and return the generation for a new fetch.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True when `generation` identifies the most recent fetch.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn selected_delivery(&self) -> Option<&Delivery> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1) % self.rows.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.rows.is_empty() {
            self.selected = if self.selected == 0 {
                self.rows.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Keep the cursor inside the row list after a wholesale replace.
    pub fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Summary / Monitor views
// ─────────────────────────────────────────────────────────────────────────────

/// State for the summary dashboard.
#[derive(Debug, Default)]
pub struct SummaryViewState {
    pub summary: Option<Summary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SummaryViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State for the carrier-monitor feed.
#[derive(Debug, Default)]
pub struct MonitorViewState {
    /// Events in server order; never sorted or deduplicated client-side.
    pub events: Vec<TrackingEvent>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MonitorViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub active_tab: ActiveTab,
    pub create: CreateViewState,
    pub deliveries: DeliveriesViewState,
    pub summary: SummaryViewState,
    pub monitor: MonitorViewState,
    pub toasts: ToastState,
    pub base_url: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            active_tab: ActiveTab::Create,
            create: CreateViewState::default(),
            deliveries: DeliveriesViewState::default(),
            summary: SummaryViewState::default(),
            monitor: MonitorViewState::default(),
            toasts: ToastState::new(Duration::from_millis(settings.ui.toast_duration_ms)),
            base_url: settings.api.base_url.clone(),
            should_quit: false,
        }
    }

    /// True while any text input owns the keyboard (digits must not switch
    /// tabs mid-word).
    pub fn text_input_active(&self) -> bool {
        match self.active_tab {
            ActiveTab::Create => self.create.focus != CreateField::Submit,
            ActiveTab::Deliveries => {
                self.deliveries.editing_filter || self.deliveries.date_prompt.is_some()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(&Settings::default())
    }

    fn test_delivery(code: &str) -> Delivery {
        Delivery {
            tracking_code: code.to_string(),
            customer_id: "cust-001".to_string(),
            customer_email: "jo@example.com".to_string(),
            weight_kg: 1.0,
            origin: None,
            destination: None,
            description: None,
            status: DeliveryStatus::Pending,
            created_date: "2025-08-04T10:00:00Z".to_string(),
            delivered_date: None,
            cost: 5.0,
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(ActiveTab::Monitor.next(), ActiveTab::Create);
        assert_eq!(ActiveTab::Create.prev(), ActiveTab::Monitor);
        for tab in ActiveTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_create_field_order_round_trips() {
        let mut field = CreateField::CustomerId;
        for _ in 0..7 {
            field = field.next();
        }
        assert_eq!(field, CreateField::CustomerId);
    }

    #[test]
    fn test_form_validate_accepts_minimal_input() {
        let form = CreateForm {
            customer_id: "cust-001".to_string(),
            customer_email: "jo@example.com".to_string(),
            weight_kg: "2.5".to_string(),
            ..CreateForm::default()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.customer_id, "cust-001");
        assert_eq!(request.weight_kg, 2.5);
        assert!(request.origin.is_none());
    }

    #[test]
    fn test_form_validate_rejects_empty_customer_id() {
        let form = CreateForm {
            customer_email: "jo@example.com".to_string(),
            ..CreateForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_validate_rejects_long_customer_id() {
        let form = CreateForm {
            customer_id: "x".repeat(11),
            customer_email: "jo@example.com".to_string(),
            ..CreateForm::default()
        };
        let err = form.validate().unwrap_err();
        assert!(err.contains("1-10"));
    }

    #[test]
    fn test_form_validate_accepts_boundary_customer_ids() {
        for len in [1, 10] {
            let form = CreateForm {
                customer_id: "x".repeat(len),
                customer_email: "jo@example.com".to_string(),
                ..CreateForm::default()
            };
            assert!(form.validate().is_ok(), "length {len} should be valid");
        }
    }

    #[test]
    fn test_form_validate_rejects_bad_weight() {
        let mut form = CreateForm {
            customer_id: "cust-001".to_string(),
            customer_email: "jo@example.com".to_string(),
            weight_kg: "abc".to_string(),
            ..CreateForm::default()
        };
        assert!(form.validate().is_err());

        form.weight_kg = "-2".to_string();
        assert!(form.validate().is_err());

        form.weight_kg = "0".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_empty_optionals_become_none() {
        let form = CreateForm {
            customer_id: "c1".to_string(),
            customer_email: "jo@example.com".to_string(),
            origin: "  ".to_string(),
            destination: "City B".to_string(),
            ..CreateForm::default()
        };
        let request = form.validate().unwrap();
        assert!(request.origin.is_none());
        assert_eq!(request.destination.as_deref(), Some("City B"));
    }

    #[test]
    fn test_deliveries_generation_staleness() {
        let mut view = DeliveriesViewState::default();
        let first = view.next_generation();
        let second = view.next_generation();
        assert!(!view.is_current(first));
        assert!(view.is_current(second));
    }

    #[test]
    fn test_deliveries_reset_preserves_generation() {
        let mut view = DeliveriesViewState::default();
        let generation = view.next_generation();
        view.rows.push(test_delivery("TRK-1"));
        view.reset();
        assert!(view.rows.is_empty());
        assert!(view.is_current(generation));
    }

    #[test]
    fn test_selection_wraps_and_clamps() {
        let mut view = DeliveriesViewState::default();
        view.rows = vec![test_delivery("A"), test_delivery("B")];
        view.select_next();
        assert_eq!(view.selected, 1);
        view.select_next();
        assert_eq!(view.selected, 0);
        view.select_previous();
        assert_eq!(view.selected, 1);

        view.selected = 5;
        view.clamp_selection();
        assert_eq!(view.selected, 1);

        view.rows.clear();
        view.clamp_selection();
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_text_input_active_per_tab() {
        let mut state = test_state();
        // Create tab starts focused on a text field.
        assert!(state.text_input_active());
        state.create.focus = CreateField::Submit;
        assert!(!state.text_input_active());

        state.active_tab = ActiveTab::Deliveries;
        assert!(!state.text_input_active());
        state.deliveries.editing_filter = true;
        assert!(state.text_input_active());

        state.active_tab = ActiveTab::Summary;
        assert!(!state.text_input_active());
    }
}
