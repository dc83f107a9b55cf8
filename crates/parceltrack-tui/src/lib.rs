//! parceltrack-tui - Terminal UI for parceltrack
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the draw/update loop, and the widgets for the four views.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
