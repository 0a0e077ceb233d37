//! Futures driving asynchronous bind.
//!
//! [`BindFuture`] is returned by `bind_async` on both outcome types. It is
//! created already short-circuited when the receiver is failed, so it
//! resolves on the first poll without the bind function ever running.
//! Otherwise it waits for the user future and places the receiver's reasons
//! in front of the produced ones.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::traits::BindTarget;
use crate::types::{Outcome, ReasonVec, ValueOutcome};

pin_project! {
    /// Future returned by `bind_async`.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `BindFuture` drops the user future with it; no reasons are
    /// recorded for a bind that never completed.
    #[must_use = "futures do nothing unless polled"]
    pub struct BindFuture<Fut, O> {
        #[pin]
        pending: Option<Fut>,
        prior: Option<ReasonVec>,
        short_circuit: Option<O>,
    }
}

impl<Fut, O> BindFuture<Fut, O> {
    /// A bind that already knows its result; the bind function was skipped.
    #[inline]
    pub(crate) fn short_circuit(outcome: O) -> Self {
        Self { pending: None, prior: None, short_circuit: Some(outcome) }
    }

    /// A bind waiting on `future`, whose result gets `prior` prepended.
    #[inline]
    pub(crate) fn pending(future: Fut, prior: ReasonVec) -> Self {
        Self { pending: Some(future), prior: Some(prior), short_circuit: None }
    }
}

impl<Fut, O> Future for BindFuture<Fut, O>
where
    Fut: Future<Output = O>,
    O: BindTarget,
{
    type Output = O;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(outcome) = this.short_circuit.take() {
            return Poll::Ready(outcome);
        }

        let produced = match this.pending.as_mut().as_pin_mut() {
            Some(future) => ready!(future.poll(cx)),
            None => panic!("`BindFuture` polled after completion"),
        };
        this.pending.set(None);

        let prior = this.prior.take().unwrap_or_default();
        Poll::Ready(produced.prepend_reasons(prior))
    }
}

impl<Fut, O> FusedFuture for BindFuture<Fut, O>
where
    Fut: Future<Output = O>,
    O: BindTarget,
{
    fn is_terminated(&self) -> bool {
        self.short_circuit.is_none() && self.pending.is_none()
    }
}

pin_project! {
    /// Future returned by `ValueOutcome::bind_and_keep_value_async`.
    ///
    /// Resolves to the merged trail of the bind with the receiver's value
    /// reattached.
    #[must_use = "futures do nothing unless polled"]
    pub struct KeepValueFuture<Fut, T> {
        #[pin]
        inner: BindFuture<Fut, Outcome>,
        value: Option<T>,
    }
}

impl<Fut, T> KeepValueFuture<Fut, T> {
    #[inline]
    pub(crate) fn new(inner: BindFuture<Fut, Outcome>, value: Option<T>) -> Self {
        Self { inner, value }
    }
}

impl<Fut, T> Future for KeepValueFuture<Fut, T>
where
    Fut: Future<Output = Outcome>,
{
    type Output = ValueOutcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let outcome = ready!(this.inner.poll(cx));
        Poll::Ready(ValueOutcome::from_parts(outcome.into_reasons(), this.value.take()))
    }
}

impl<Fut, T> FusedFuture for KeepValueFuture<Fut, T>
where
    Fut: Future<Output = Outcome>,
{
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}
