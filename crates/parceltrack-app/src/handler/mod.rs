//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `create`: Create-form submit/completion handlers
//! - `deliveries`: List filter, load, and status-update handlers

pub(crate) mod create;
pub(crate) mod deliveries;
pub(crate) mod keys;
pub(crate) mod update;

use parceltrack_api::{NewDelivery, StatusUpdate};
use parceltrack_core::DeliveryFilter;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// POST the validated creation request
    CreateDelivery { request: NewDelivery },

    /// GET the delivery list. The generation is echoed back in the
    /// completion message so stale responses can be dropped.
    FetchDeliveries {
        generation: u64,
        filter: DeliveryFilter,
    },

    /// PATCH a status change
    UpdateStatus {
        tracking_code: String,
        update: StatusUpdate,
    },

    /// GET the summary aggregate
    FetchSummary,

    /// GET the carrier monitor feed
    FetchMonitor,

    /// Put text on the system clipboard
    CopyToClipboard { text: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
