use std::time::Duration;

/// Suspend for at least `ms` milliseconds.
///
/// Only pads perceived latency; nothing depends on it for correctness.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
