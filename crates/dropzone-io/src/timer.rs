//! Browser timers and the timer-backed processor.

use std::time::Duration;

use dropzone_core::{Processor, UploadCandidate};
use gloo_timers::future::TimeoutFuture;

/// Resolve after `duration` on the browser event loop.
///
/// Durations beyond `u32::MAX` milliseconds are clamped.
#[allow(clippy::future_not_send)] // WASM is single-threaded; TimeoutFuture is !Send
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
}

/// Stand-in for a processing backend: waits a fixed delay and succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    /// A processor that takes `delay` per file.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Processor for SimulatedProcessor {
    async fn process(&self, _candidate: UploadCandidate) {
        sleep(self.delay).await;
    }
}
