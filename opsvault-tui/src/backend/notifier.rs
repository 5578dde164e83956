//! Notifier bridging client notices onto the status bar.

use std::sync::Mutex;

use opsvault_client::{NoticeLevel, Notifier};

/// Collects notices emitted during backend calls; the main loop drains
/// them into the status line after each update.
#[derive(Default)]
pub struct StatusNotifier {
    pending: Mutex<Vec<(NoticeLevel, String)>>,
}

impl StatusNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything collected since the last drain.
    pub fn drain(&self) -> Vec<(NoticeLevel, String)> {
        self.pending.lock().map(|mut p| std::mem::take(&mut *p)).unwrap_or_default()
    }
}

impl Notifier for StatusNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let notifier = StatusNotifier::new();
        notifier.notify(NoticeLevel::Success, "saved");
        notifier.notify(NoticeLevel::Error, "boom");
        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], (NoticeLevel::Success, "saved".to_string()));
        assert!(notifier.drain().is_empty());
    }
}
