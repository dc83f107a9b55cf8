//! Backend-agnostic key representation
//!
//! The TUI converts crossterm key events into this enum so that key handling
//! (and its tests) never touch terminal types.

/// A single key press, normalized for the update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}
