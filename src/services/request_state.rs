use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// View-side flags for one kind of request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFlags {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

/// Tracks idle → loading → success | error for one consumer.
///
/// An error message stays until the next `begin`. A timed success clears
/// itself unless a later transition supersedes it first.
#[derive(Debug, Default)]
pub struct RequestState {
    flags: Arc<Mutex<RequestFlags>>,
    clear_timer: Option<JoinHandle<()>>,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RequestFlags {
        self.flags.lock().unwrap().clone()
    }

    pub fn begin(&mut self) {
        self.cancel_timer();
        let mut flags = self.flags.lock().unwrap();
        flags.loading = true;
        flags.error = None;
        flags.success = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.cancel_timer();
        let mut flags = self.flags.lock().unwrap();
        flags.loading = false;
        flags.error = Some(message.into());
        flags.success = false;
    }

    pub fn succeed(&mut self) {
        self.cancel_timer();
        let mut flags = self.flags.lock().unwrap();
        flags.loading = false;
        flags.error = None;
        flags.success = true;
    }

    /// Mark success and clear the flag again after `after`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn succeed_for(&mut self, after: Duration) {
        self.succeed();
        let flags = Arc::clone(&self.flags);
        self.clear_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            flags.lock().unwrap().success = false;
            tracing::debug!("success flag cleared");
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.clear_timer.take() {
            handle.abort();
        }
    }
}

impl Drop for RequestState {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
