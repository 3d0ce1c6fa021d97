use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A token that signals that a running request should stop.
///
/// The engine checks the token before every call into the lexicon or the backend. Cancelling a
/// request does not undo writes that the backend already committed.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token and every clone of it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
