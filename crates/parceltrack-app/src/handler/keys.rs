//! Key event handlers per view
//!
//! Keys either mutate pure UI state directly (focus moves, text editing) or
//! map to a semantic [`Message`] that the update function handles. F1-F4
//! always switch tabs; number keys and `q` only work while no text input
//! owns the keyboard.

use parceltrack_core::DeliveryStatus;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ActiveTab, AppState, CreateField};

/// Route a key press. Returns a follow-up message when the key maps to a
/// semantic action.
pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Global shortcuts, valid in every context
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(1) => return Some(Message::SwitchTab(ActiveTab::Create)),
        InputKey::F(2) => return Some(Message::SwitchTab(ActiveTab::Deliveries)),
        InputKey::F(3) => return Some(Message::SwitchTab(ActiveTab::Summary)),
        InputKey::F(4) => return Some(Message::SwitchTab(ActiveTab::Monitor)),
        _ => {}
    }

    // Number keys and quit, only when no text field is capturing input
    if !state.text_input_active() {
        match key {
            InputKey::Char('1') => return Some(Message::SwitchTab(ActiveTab::Create)),
            InputKey::Char('2') => return Some(Message::SwitchTab(ActiveTab::Deliveries)),
            InputKey::Char('3') => return Some(Message::SwitchTab(ActiveTab::Summary)),
            InputKey::Char('4') => return Some(Message::SwitchTab(ActiveTab::Monitor)),
            InputKey::Char('q') => return Some(Message::Quit),
            _ => {}
        }
        // Tab cycling everywhere except the create form, where Tab moves
        // between fields
        if state.active_tab != ActiveTab::Create {
            match key {
                InputKey::Tab => return Some(Message::SwitchTab(state.active_tab.next())),
                InputKey::BackTab => return Some(Message::SwitchTab(state.active_tab.prev())),
                _ => {}
            }
        }
    }

    match state.active_tab {
        ActiveTab::Create => handle_create_key(state, key),
        ActiveTab::Deliveries => handle_deliveries_key(state, key),
        ActiveTab::Summary | ActiveTab::Monitor => handle_readonly_key(key),
    }
}

fn handle_create_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => {
            state.create.focus_next();
            None
        }
        InputKey::BackTab | InputKey::Up => {
            state.create.focus_prev();
            None
        }
        InputKey::Enter => {
            if state.create.focus == CreateField::Submit {
                Some(Message::SubmitCreate)
            } else {
                state.create.focus_next();
                None
            }
        }
        InputKey::Esc => {
            state.create.error = None;
            None
        }
        // Yank the created tracking code from the result panel
        InputKey::CharCtrl('y') => Some(Message::CopyTrackingCode),
        InputKey::Backspace => {
            if let Some(buffer) = state.create.form.field_mut(state.create.focus) {
                buffer.pop();
            }
            None
        }
        InputKey::Char(c) => {
            if let Some(buffer) = state.create.form.field_mut(state.create.focus) {
                buffer.push(c);
            }
            None
        }
        _ => None,
    }
}

fn handle_deliveries_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // The delivered-date prompt owns the keyboard while open
    if state.deliveries.date_prompt.is_some() {
        return match key {
            InputKey::Enter => Some(Message::ConfirmDatePrompt),
            InputKey::Esc => Some(Message::CancelDatePrompt),
            InputKey::Backspace => {
                if let Some(prompt) = state.deliveries.date_prompt.as_mut() {
                    prompt.buffer.pop();
                }
                None
            }
            InputKey::Char(c) => {
                if let Some(prompt) = state.deliveries.date_prompt.as_mut() {
                    prompt.buffer.push(c);
                }
                None
            }
            _ => None,
        };
    }

    // Customer-id filter editing: every change re-issues the fetch
    if state.deliveries.editing_filter {
        return match key {
            InputKey::Enter | InputKey::Esc => {
                state.deliveries.editing_filter = false;
                None
            }
            InputKey::Backspace => {
                if state.deliveries.filter.customer_id.pop().is_some() {
                    Some(Message::CustomerFilterEdited)
                } else {
                    None
                }
            }
            InputKey::Char(c) => {
                state.deliveries.filter.customer_id.push(c);
                Some(Message::CustomerFilterEdited)
            }
            _ => None,
        };
    }

    match key {
        InputKey::Up => {
            state.deliveries.select_previous();
            None
        }
        InputKey::Down => {
            state.deliveries.select_next();
            None
        }
        InputKey::Char('r') => Some(Message::Refresh),
        InputKey::Char('f') => Some(Message::CycleStatusFilter),
        InputKey::Char('/') => {
            state.deliveries.editing_filter = true;
            None
        }
        InputKey::Char('p') => Some(Message::SetStatus(DeliveryStatus::Pending)),
        InputKey::Char('t') => Some(Message::SetStatus(DeliveryStatus::InTransit)),
        InputKey::Char('d') => Some(Message::SetStatus(DeliveryStatus::Delivered)),
        InputKey::Char('c') => Some(Message::CopyTrackingCode),
        _ => None,
    }
}

fn handle_readonly_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::Refresh),
        _ => None,
    }
}
