//! Message processing (TEA pump)
//!
//! Runs each message through the update function, dispatches any resulting
//! action, and keeps going while updates produce follow-up messages.

use std::sync::Arc;

use tokio::sync::mpsc;

use parceltrack_api::ApiClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    api: &Arc<ApiClient>,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, Arc::clone(api), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
