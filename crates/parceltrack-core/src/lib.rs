//! # parceltrack-core - Core Domain Types
//!
//! Foundation crate for parceltrack. Provides the delivery domain types, the
//! application error enum, and logging initialization.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Delivery`] - A tracked delivery as returned by the backend
//! - [`DeliveryStatus`] - Lifecycle status (Pending, InTransit, Delivered)
//! - [`DeliveryFilter`] - Optional status/customer-id list filter
//! - [`Summary`] - Server-computed aggregate counts and average cost
//! - [`TrackingEvent`] - A single carrier-monitor feed item
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with recoverable classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use parceltrack_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all parceltrack crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    short_timestamp, Delivery, DeliveryFilter, DeliveryStatus, StatusBreakdown, Summary,
    TrackingEvent,
};
