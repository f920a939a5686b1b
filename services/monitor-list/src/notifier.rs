//! User-visible notifications (toasts)

/// Fire-and-forget sink for short user-facing messages
pub trait Notifier: Send + Sync + std::fmt::Debug {
    fn notify(&self, message: &str);
}

/// Prints notifications to stdout
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        tracing::debug!("Notification: {}", message);
        println!("{}", message);
    }
}
