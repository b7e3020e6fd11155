//! # Notifications
//!
//! User-visible, fire-and-forget messages raised when a cart operation is rejected.

use std::fmt::Display;
use tokio::sync::mpsc;
use tracing::warn;

/// The four categories of cart notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The requested quantity exceeds the available stock (add or update).
    OutOfStock,
    /// Adding a product failed.
    AddFailed,
    /// Removing a product failed.
    RemoveFailed,
    /// Changing a product's quantity failed.
    UpdateFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::OutOfStock => "Requested quantity is out of stock",
            Notice::AddFailed => "Failed to add product",
            Notice::RemoveFailed => "Failed to remove product",
            Notice::UpdateFailed => "Failed to change product quantity",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Delivers notices to the shopper. Never blocks and never fails.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        warn!(?notice, "{notice}");
    }
}

/// Forwards notices to a receiver, typically a UI toast queue.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.sender.send(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier.notify(Notice::OutOfStock);
        notifier.notify(Notice::RemoveFailed);

        assert_eq!(receiver.try_recv().unwrap(), Notice::OutOfStock);
        assert_eq!(receiver.try_recv().unwrap(), Notice::RemoveFailed);
        assert!(receiver.try_recv().is_err());

        drop(receiver);
        notifier.notify(Notice::AddFailed);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Notice::UpdateFailed.to_string(), "Failed to change product quantity");
        assert_eq!(Notice::AddFailed.message(), "Failed to add product");
    }
}
