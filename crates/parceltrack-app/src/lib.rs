//! parceltrack-app - Application state and orchestration for parceltrack
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the event vocabulary,
//! and [`handler::update`] the pure transition function. Network side effects
//! are described by [`UpdateAction`] values and executed by [`actions`] on
//! spawned tokio tasks, whose completions flow back as messages.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;
pub mod toast;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{ActiveTab, AppState};
