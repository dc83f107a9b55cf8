//! Color palette
//!
//! Named terminal colors only, so the theme follows the user's terminal
//! scheme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::DarkGray; // Modal/prompt backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Delivered / success
pub const STATUS_RED: Color = Color::Red; // Errors
pub const STATUS_YELLOW: Color = Color::Yellow; // In transit / warnings

// --- Toasts ---
pub const TOAST_INFO_BG: Color = Color::White;
pub const TOAST_INFO_FG: Color = Color::Black;
pub const TOAST_ERROR_BG: Color = Color::Red;
pub const TOAST_ERROR_FG: Color = Color::White;
