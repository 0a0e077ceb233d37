//! Future driving the asynchronous on-error hook.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

pin_project! {
    /// Future returned by `on_error_async` and `on_error_with_async`.
    ///
    /// Holds the callback future only when the outcome was failed. For a
    /// successful outcome there is nothing to wait on and the first poll
    /// returns the outcome.
    #[must_use = "futures do nothing unless polled"]
    pub struct OnErrorFuture<Fut, O> {
        #[pin]
        callback: Option<Fut>,
        outcome: Option<O>,
    }
}

impl<Fut, O> OnErrorFuture<Fut, O> {
    #[inline]
    pub(crate) fn new(outcome: O, callback: Option<Fut>) -> Self {
        Self { callback, outcome: Some(outcome) }
    }
}

impl<Fut, O> Future for OnErrorFuture<Fut, O>
where
    Fut: Future<Output = ()>,
{
    type Output = O;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(callback) = this.callback.as_mut().as_pin_mut() {
            ready!(callback.poll(cx));
            this.callback.set(None);
        }

        Poll::Ready(this.outcome.take().expect("`OnErrorFuture` polled after completion"))
    }
}

impl<Fut, O> FusedFuture for OnErrorFuture<Fut, O>
where
    Fut: Future<Output = ()>,
{
    fn is_terminated(&self) -> bool {
        self.outcome.is_none()
    }
}
