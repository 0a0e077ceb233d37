//! Future wrapper catching panics raised while polling.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::CapturedFailure;

pin_project! {
    /// Polls `future`, turning a panic inside `poll` into a [`CapturedFailure`].
    ///
    /// This is the asynchronous side of the attempt boundary; the
    /// `attempt_async` constructors on the outcome types build on it.
    ///
    /// ```rust
    /// use reason_rail::async_ext::AttemptFuture;
    ///
    /// # async fn demo() {
    /// let caught = AttemptFuture::new(async { panic!("lost connection") }).await;
    /// assert_eq!(caught.unwrap_err().message(), "lost connection");
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct AttemptFuture<Fut> {
        #[pin]
        future: Fut,
        done: bool,
    }
}

impl<Fut> AttemptFuture<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, done: false }
    }
}

impl<Fut> Future for AttemptFuture<Fut>
where
    Fut: Future,
{
    type Output = Result<Fut::Output, CapturedFailure>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.done, "`AttemptFuture` polled after completion");

        let future = this.future;
        let polled = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(output)) => Ok(output),
            Err(payload) => {
                let failure = CapturedFailure::from_panic(payload);
                #[cfg(feature = "tracing")]
                tracing::debug!(panic = failure.message(), "async attempt captured a panic");
                Err(failure)
            },
        };
        *this.done = true;
        Poll::Ready(polled)
    }
}

impl<Fut> FusedFuture for AttemptFuture<Fut>
where
    Fut: Future,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
