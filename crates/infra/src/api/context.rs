//! Cancellable, deadline-scoped execution context
//!
//! Every engine call runs inside an [`ExecutionContext`]. Deriving a context
//! with a timeout never extends the parent's deadline, and cancelling a parent
//! cancels every context derived from it.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a context stopped a future before it completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupted {
    /// The context, or one of its ancestors, was cancelled.
    Cancelled,
    /// The deadline passed first.
    DeadlineExceeded,
}

/// Cancellation token plus optional absolute deadline
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl ExecutionContext {
    /// Context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context that expires `timeout` from now, or at the parent's
    /// deadline if that is earlier.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a context that expires at `deadline`, or at the parent's
    /// deadline if that is earlier.
    #[must_use]
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = self.deadline.map_or(deadline, |current| current.min(deadline));
        Self { token: self.token.child_token(), deadline: Some(deadline) }
    }

    /// Cancel this context and everything derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drive `future` to completion unless the context is cancelled or its
    /// deadline elapses first.
    ///
    /// Cancellation wins over an elapsed deadline when both are ready. The
    /// future is dropped on interruption, aborting any in-flight I/O.
    ///
    /// # Errors
    /// Returns [`Interrupted`] when the future did not complete.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Interrupted> {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(Interrupted::Cancelled),
            () = deadline => Err(Interrupted::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}
