//! The processing step between "finish" and completion.
//!
//! The browser build waits on a timer; a real upload or parsing backend
//! can be dropped in by implementing [`Processor`]. Either way the work
//! runs as an abortable task so the host can cancel it.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

use crate::candidate::UploadCandidate;
use crate::types::ProcessingTicket;

/// Work performed on a finished upload.
pub trait Processor {
    /// Process `candidate`. Resolves when processing is over.
    fn process(&self, candidate: UploadCandidate) -> impl Future<Output = ()>;
}

/// Cancellation token for a task built by [`processing_task`].
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    /// Abort the task. A task that has not finished yet resolves to `None`.
    pub fn cancel(&self) {
        self.0.abort();
    }

    /// Whether [`cancel`](Self::cancel) was called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Wrap `processor.process(candidate)` in an abortable task.
///
/// The task resolves to `Some(ticket)` when processing finishes, ready to
/// be fed back as a completion, or to `None` when it was cancelled first.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub fn processing_task<P>(
    processor: P,
    ticket: ProcessingTicket,
    candidate: UploadCandidate,
) -> (impl Future<Output = Option<ProcessingTicket>>, CancelHandle)
where
    P: Processor,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = async move {
        let work = processor.process(candidate);
        Abortable::new(work, registration).await.ok().map(|()| ticket)
    };
    (task, CancelHandle(handle))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    struct Instant;

    impl Processor for Instant {
        async fn process(&self, _candidate: UploadCandidate) {}
    }

    struct Never;

    impl Processor for Never {
        fn process(&self, _candidate: UploadCandidate) -> impl Future<Output = ()> {
            futures::future::pending()
        }
    }

    fn candidate() -> UploadCandidate {
        UploadCandidate::new("resume.pdf", 500_000)
    }

    #[test]
    fn finished_task_yields_its_ticket() {
        let ticket = ProcessingTicket(4);
        let (task, handle) = processing_task(Instant, ticket, candidate());
        assert_eq!(block_on(task), Some(ticket));
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn cancelled_task_yields_nothing() {
        let (task, handle) = processing_task(Never, ProcessingTicket(1), candidate());
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(block_on(task), None);
    }

    #[test]
    fn cloned_handle_cancels_the_same_task() {
        let (task, handle) = processing_task(Never, ProcessingTicket(1), candidate());
        let clone = handle.clone();
        clone.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(block_on(task), None);
    }
}
