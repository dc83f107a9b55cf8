//! Message types for the application (TEA pattern)

use parceltrack_core::{Delivery, DeliveryStatus, Summary, TrackingEvent};

use crate::input_key::InputKey;
use crate::state::ActiveTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Quit the application
    Quit,

    /// Switch the active view
    SwitchTab(ActiveTab),

    /// Refresh whatever the active view shows
    Refresh,

    // ─────────────────────────────────────────────────────────
    // Create view
    // ─────────────────────────────────────────────────────────
    /// Submit the create form (validation happens in the handler)
    SubmitCreate,
    /// Creation request succeeded
    DeliveryCreated(Box<Delivery>),
    /// Creation request failed
    DeliveryCreateFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Deliveries list view
    // ─────────────────────────────────────────────────────────
    /// The customer-id filter text was edited (keys already mutated it)
    CustomerFilterEdited,
    /// Cycle the status filter: (any) → PENDING → IN_TRANSIT → DELIVERED → (any)
    CycleStatusFilter,
    /// Request a status change for the selected row. DELIVERED opens the
    /// delivered-date prompt first.
    SetStatus(DeliveryStatus),
    /// Confirm the delivered-date prompt (blank buffer omits the date)
    ConfirmDatePrompt,
    /// Dismiss the delivered-date prompt without sending anything
    CancelDatePrompt,
    /// List fetch completed. Stamped with the generation it was issued
    /// under; stale generations are discarded.
    DeliveriesLoaded {
        generation: u64,
        deliveries: Vec<Delivery>,
    },
    /// List fetch failed
    DeliveriesLoadFailed { generation: u64, error: String },
    /// Status update succeeded (triggers a reload with the current filter)
    StatusUpdated(Box<Delivery>),
    /// Status update failed (list untouched)
    StatusUpdateFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Summary view
    // ─────────────────────────────────────────────────────────
    SummaryLoaded(Box<Summary>),
    SummaryLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Monitor view
    // ─────────────────────────────────────────────────────────
    MonitorLoaded(Vec<TrackingEvent>),
    MonitorLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────
    /// Copy the relevant tracking code (create result or selected row)
    CopyTrackingCode,
    ClipboardCopied,
    ClipboardCopyFailed { error: String },
}
