use tracing::{info, warn};

use crate::app::ports::{CloseNotifier, Notification, Notifier};

/// Delivers notifications as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            title, description, ..
        } = &notification;
        if notification.is_destructive() {
            warn!(target: "conndeck::notify", %title, %description);
        } else {
            info!(target: "conndeck::notify", %title, %description);
        }
    }
}

impl CloseNotifier for TracingNotifier {
    fn dialog_closed(&self) {
        info!(target: "conndeck::notify", "dialog closed");
    }
}
