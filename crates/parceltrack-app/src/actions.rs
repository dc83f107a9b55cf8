//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every network action spawns a tokio task that calls the API client and
//! always sends a completion message back -- success or failure -- so a
//! view's loading flag can never get stuck.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use parceltrack_api::ApiClient;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, api: Arc<ApiClient>, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::CreateDelivery { request } => {
            tokio::spawn(async move {
                let message = match api.create_delivery(&request).await {
                    Ok(delivery) => Message::DeliveryCreated(Box::new(delivery)),
                    Err(e) => Message::DeliveryCreateFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::FetchDeliveries { generation, filter } => {
            tokio::spawn(async move {
                let message = match api.list_deliveries(&filter).await {
                    Ok(deliveries) => Message::DeliveriesLoaded {
                        generation,
                        deliveries,
                    },
                    Err(e) => Message::DeliveriesLoadFailed {
                        generation,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::UpdateStatus {
            tracking_code,
            update,
        } => {
            tokio::spawn(async move {
                let message = match api.update_status(&tracking_code, &update).await {
                    Ok(delivery) => Message::StatusUpdated(Box::new(delivery)),
                    Err(e) => Message::StatusUpdateFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::FetchSummary => {
            tokio::spawn(async move {
                let message = match api.summary().await {
                    Ok(summary) => Message::SummaryLoaded(Box::new(summary)),
                    Err(e) => Message::SummaryLoadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::FetchMonitor => {
            tokio::spawn(async move {
                let message = match api.monitor().await {
                    Ok(events) => Message::MonitorLoaded(events),
                    Err(e) => Message::MonitorLoadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::CopyToClipboard { text } => {
            // arboard is blocking; keep it off the async workers
            tokio::task::spawn_blocking(move || {
                let result = arboard::Clipboard::new().and_then(|mut clipboard| {
                    clipboard.set_text(text)
                });
                let message = match result {
                    Ok(()) => Message::ClipboardCopied,
                    Err(e) => Message::ClipboardCopyFailed {
                        error: e.to_string(),
                    },
                };
                if msg_tx.blocking_send(message).is_err() {
                    warn!("message channel closed, dropping clipboard result");
                }
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        warn!("message channel closed, dropping completion message");
    }
}
