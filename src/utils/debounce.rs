//! Trailing debounce for search input
//!
//! Each new value cancels the pending one; a value is only delivered once
//! input has been quiet for the full delay.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay between the last keystroke and the search firing
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Handle to a scheduled action
#[derive(Debug)]
pub struct DebounceHandle {
    task: JoinHandle<()>,
}

impl DebounceHandle {
    /// Cancel the action if it has not fired yet
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the action fired or was cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Run `action` after `delay` unless the returned handle is cancelled first.
///
/// Must be called from within a tokio runtime.
pub fn schedule<F>(delay: Duration, action: F) -> DebounceHandle
where
    F: FnOnce() + Send + 'static,
{
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    });
    DebounceHandle { task }
}

/// Debouncer delivering the last value of each burst on a channel
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<DebounceHandle>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its values arrive on
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            tx,
            pending: None,
        };
        (debouncer, rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Submit a value, superseding any value still waiting
    pub fn push(&mut self, value: T) -> &DebounceHandle {
        self.cancel();

        let tx = self.tx.clone();
        let handle = schedule(self.delay, move || {
            // Ignore send errors - the receiver was dropped
            let _ = tx.send(value);
        });
        self.pending.insert(handle)
    }

    /// Drop the waiting value, if any. Returns true if one was still pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.cancel();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}
