use {
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
    tokio::sync::broadcast,
    tracing::debug,
};

/// Severity of a transient popup notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupSeverity {
    Error,
    Success,
    Warning,
}

/// A transient popup shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popup {
    pub message: String,
    pub severity: PopupSeverity,
}

impl Popup {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: PopupSeverity::Error,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: PopupSeverity::Success,
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: PopupSeverity::Warning,
        }
    }
}

/// Sink for popup notifications — the UI transport provides the concrete
/// implementation.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Emit a popup for connected operator UIs.
    async fn notify(&self, popup: Popup);
}

/// Fan-out sink backed by a tokio broadcast channel. Popups are dropped
/// when no subscriber is connected; they are transient by contract.
pub struct BroadcastNotifier {
    tx: broadcast::Sender<Popup>,
}

impl BroadcastNotifier {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all popups emitted after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Popup> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl NotificationSink for BroadcastNotifier {
    async fn notify(&self, popup: Popup) {
        debug!(severity = ?popup.severity, message = %popup.message, "popup");
        let _ = self.tx.send(popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_popups_in_order() {
        let notifier = BroadcastNotifier::default();
        let mut rx = notifier.subscribe();

        notifier.notify(Popup::warning("first")).await;
        notifier.notify(Popup::success("second")).await;

        assert_eq!(rx.recv().await.unwrap(), Popup::warning("first"));
        assert_eq!(rx.recv().await.unwrap(), Popup::success("second"));
    }

    #[tokio::test]
    async fn notify_without_subscribers_is_a_noop() {
        let notifier = BroadcastNotifier::default();
        notifier.notify(Popup::error("nobody listening")).await;
    }
}
