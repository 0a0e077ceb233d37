//! Asynchronous bind, on-error and attempt for [`Outcome`] and [`ValueOutcome`].
//!
//! Rust has a single future abstraction, so there is one asynchronous overload
//! set: anything implementing `Future` works, whether it is a lazily-started
//! `async` block or a handle to work that is already running.

use core::future::Future;

use crate::async_ext::{BindFuture, KeepValueFuture, OnErrorFuture};
use crate::traits::{BindTarget, ReasonTrail};
use crate::types::alloc_type::Vec;
use crate::types::{ErrorReason, Outcome, ValueOutcome};

impl Outcome {
    /// Asynchronous [`bind`](Outcome::bind).
    ///
    /// On a failed outcome `bind` is not called and the returned future
    /// resolves immediately with the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_rail::{Outcome, ReasonTrail};
    ///
    /// # async fn demo() {
    /// let outcome = Outcome::ok()
    ///     .with_success("Initial Result Success")
    ///     .bind_async(|| async { Outcome::fail("Binding Result Error") })
    ///     .await;
    ///
    /// assert!(outcome.is_failed());
    /// assert_eq!(outcome.reasons().len(), 2);
    /// # }
    /// ```
    #[inline]
    pub fn bind_async<O, F, Fut>(self, bind: F) -> BindFuture<Fut, O>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = O>,
        O: BindTarget,
    {
        if self.is_failed() {
            return BindFuture::short_circuit(O::from_failed_reasons(self.reasons));
        }
        BindFuture::pending(bind(), self.reasons)
    }

    /// Awaits `action` if the outcome is failed, then yields the outcome unchanged.
    #[inline]
    pub fn on_error_async<F, Fut>(self, action: F) -> OnErrorFuture<Fut, Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let callback = self.is_failed().then(action);
        OnErrorFuture::new(self, callback)
    }

    /// Awaits `action` with a copy of the error reasons if the outcome is
    /// failed, then yields the outcome unchanged.
    #[inline]
    pub fn on_error_with_async<F, Fut>(self, action: F) -> OnErrorFuture<Fut, Self>
    where
        F: FnOnce(Vec<ErrorReason>) -> Fut,
        Fut: Future<Output = ()>,
    {
        let callback = self.is_failed().then(|| action(self.errors().cloned().collect()));
        OnErrorFuture::new(self, callback)
    }

    /// Awaits `work` and passes its outcome through, or fails if polling it panics.
    #[cfg(feature = "std")]
    pub async fn attempt_async<Fut>(work: Fut) -> Self
    where
        Fut: Future<Output = Outcome>,
    {
        Self::attempt_async_with(work, ErrorReason::exceptional).await
    }

    #[cfg(feature = "std")]
    pub async fn attempt_async_with<Fut, H>(work: Fut, handler: H) -> Self
    where
        Fut: Future<Output = Outcome>,
        H: FnOnce(crate::types::CapturedFailure) -> ErrorReason,
    {
        match crate::async_ext::AttemptFuture::new(work).await {
            Ok(outcome) => outcome,
            Err(failure) => Self::fail(handler(failure)),
        }
    }
}

impl<T> ValueOutcome<T> {
    /// Asynchronous [`bind`](ValueOutcome::bind).
    ///
    /// # Panics
    ///
    /// Panics if `self` is successful but carries no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_rail::ValueOutcome;
    ///
    /// # async fn demo() {
    /// let label = ValueOutcome::ok(7)
    ///     .bind_async(|n| async move { ValueOutcome::ok(format!("#{n}")) })
    ///     .await;
    ///
    /// assert_eq!(label.value().map(String::as_str), Some("#7"));
    /// # }
    /// ```
    #[track_caller]
    pub fn bind_async<O, F, Fut>(self, bind: F) -> BindFuture<Fut, O>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = O>,
        O: BindTarget,
    {
        let failed = self.is_failed();
        let (reasons, value) = self.into_parts();
        if failed {
            return BindFuture::short_circuit(O::from_failed_reasons(reasons));
        }
        BindFuture::pending(bind(Self::take_bound_value(value)), reasons)
    }

    /// Asynchronous [`bind_and_keep_value`](ValueOutcome::bind_and_keep_value).
    ///
    /// `bind` receives a clone of the value; the original is reattached to
    /// the merged outcome.
    #[track_caller]
    pub fn bind_and_keep_value_async<F, Fut>(self, bind: F) -> KeepValueFuture<Fut, T>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        let failed = self.is_failed();
        let (reasons, value) = self.into_parts();
        if failed {
            let inner = BindFuture::short_circuit(Outcome::from_failed_reasons(reasons));
            return KeepValueFuture::new(inner, value);
        }
        let value = Self::take_bound_value(value);
        let inner = BindFuture::pending(bind(value.clone()), reasons);
        KeepValueFuture::new(inner, Some(value))
    }

    /// Awaits `action` if the outcome is failed, then yields the outcome unchanged.
    #[inline]
    pub fn on_error_async<F, Fut>(self, action: F) -> OnErrorFuture<Fut, Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let callback = self.is_failed().then(action);
        OnErrorFuture::new(self, callback)
    }

    /// Awaits `action` with a copy of the error reasons if the outcome is
    /// failed, then yields the outcome unchanged.
    #[inline]
    pub fn on_error_with_async<F, Fut>(self, action: F) -> OnErrorFuture<Fut, Self>
    where
        F: FnOnce(Vec<ErrorReason>) -> Fut,
        Fut: Future<Output = ()>,
    {
        let callback = self.is_failed().then(|| action(self.errors().cloned().collect()));
        OnErrorFuture::new(self, callback)
    }

    /// Awaits `work` and wraps its output, or fails if polling it panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reason_rail::{ReasonTrail, ValueOutcome};
    ///
    /// # async fn demo() {
    /// let ok = ValueOutcome::attempt_async(async { 42 }).await;
    /// assert_eq!(ok.value(), Some(&42));
    ///
    /// let failed = ValueOutcome::<u8>::attempt_async(async { panic!("boom") }).await;
    /// assert_eq!(failed.errors().next().map(|e| e.message()), Some("boom"));
    /// # }
    /// ```
    #[cfg(feature = "std")]
    pub async fn attempt_async<Fut>(work: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        Self::attempt_async_with(work, ErrorReason::exceptional).await
    }

    #[cfg(feature = "std")]
    pub async fn attempt_async_with<Fut, H>(work: Fut, handler: H) -> Self
    where
        Fut: Future<Output = T>,
        H: FnOnce(crate::types::CapturedFailure) -> ErrorReason,
    {
        match crate::async_ext::AttemptFuture::new(work).await {
            Ok(value) => Self::ok(value),
            Err(failure) => Self::fail(handler(failure)),
        }
    }

    /// Awaits `work` and passes its outcome through, or fails if polling it panics.
    #[cfg(feature = "std")]
    pub async fn attempt_outcome_async<Fut>(work: Fut) -> Self
    where
        Fut: Future<Output = ValueOutcome<T>>,
    {
        match crate::async_ext::AttemptFuture::new(work).await {
            Ok(outcome) => outcome,
            Err(failure) => Self::fail(ErrorReason::exceptional(failure)),
        }
    }
}
