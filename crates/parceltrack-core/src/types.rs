//! Delivery domain types mirrored from the backend's JSON contract
//!
//! All wire structs use camelCase field names. Timestamps stay as the
//! ISO-8601 strings the backend sends; this client formats, never parses.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a delivery.
///
/// Transitions are validated server-side; the client only picks a target
/// status and trusts the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
}

impl DeliveryStatus {
    /// All statuses, in lifecycle order. Used for filter cycling and the
    /// status chips in the list view.
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::Pending,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
    ];

    /// Wire representation, also used verbatim in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::InTransit => "IN_TRANSIT",
            DeliveryStatus::Delivered => "DELIVERED",
        }
    }

    /// Human-readable label for display ("IN TRANSIT" instead of "IN_TRANSIT").
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::InTransit => "IN TRANSIT",
            DeliveryStatus::Delivered => "DELIVERED",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked delivery as returned by the backend.
///
/// `tracking_code` is server-assigned and unique; `cost` is server-computed.
/// `delivered_date` is present only once the status is DELIVERED.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub tracking_code: String,
    pub customer_id: String,
    pub customer_email: String,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: DeliveryStatus,
    pub created_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_date: Option<String>,
    pub cost: f64,
}

/// Per-status counts inside [`Summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub pending: u64,
    pub in_transit: u64,
    pub delivered: u64,
}

/// Server-computed aggregate over all deliveries.
///
/// Read-only; replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_deliveries: u64,
    pub average_cost: f64,
    #[serde(default)]
    pub status_breakdown: StatusBreakdown,
}

/// A carrier tracking event from the monitor feed.
///
/// The backend aggregates heterogeneous upstream feeds into this uniform
/// shape. Fields are defaulted so a partially-populated item renders as
/// blanks instead of failing the whole feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    #[serde(default)]
    pub tracking_code: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub status: String,
}

/// Compact display form of a backend timestamp.
///
/// The backend sends ISO-8601 strings; anything that does not parse is shown
/// verbatim rather than dropped.
pub fn short_timestamp(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// List-view filter. Only non-empty fields become query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryFilter {
    /// `None` means "(any)".
    pub status: Option<DeliveryStatus>,
    /// Empty string means unset.
    pub customer_id: String,
}

impl DeliveryFilter {
    /// True when no query parameters would be sent.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.customer_id.is_empty()
    }

    /// Cycle the status filter: (any) → PENDING → IN_TRANSIT → DELIVERED → (any).
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(DeliveryStatus::Pending),
            Some(DeliveryStatus::Pending) => Some(DeliveryStatus::InTransit),
            Some(DeliveryStatus::InTransit) => Some(DeliveryStatus::Delivered),
            Some(DeliveryStatus::Delivered) => None,
        };
    }
}
