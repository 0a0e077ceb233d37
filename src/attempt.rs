//! The attempt boundary: runs work that may panic and turns the panic into data.
//!
//! Every `attempt*` constructor runs its work under
//! [`std::panic::catch_unwind`]. A panic is captured as a [`CapturedFailure`],
//! handed to the exception handler (by default [`ErrorReason::exceptional`]),
//! and the resulting error becomes the only reason of a failed outcome. The
//! panic never leaves the boundary.
//!
//! `ValueOutcome::attempt_fallible` treats an `Err` returned by the work the
//! same way, so `?`-style code can be brought into an outcome pipeline with its
//! error chain intact.
//!
//! The process-wide panic hook still runs before the panic is caught, and
//! nothing is caught when the crate is built with `panic = "abort"`.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{ReasonTrail, ValueOutcome};
//!
//! let answer = ValueOutcome::attempt(|| 42);
//! assert_eq!(answer.value(), Some(&42));
//!
//! let boom = ValueOutcome::<i32>::attempt(|| panic!("boom"));
//! let errors: Vec<_> = boom.errors().collect();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message(), "boom");
//! assert!(errors[0].is_exceptional());
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::types::{CapturedFailure, ErrorReason, Outcome, ValueOutcome};

/// Runs `work`, capturing a panic instead of unwinding past the caller.
///
/// The work is wrapped in `AssertUnwindSafe`: state it shares with the caller
/// may be left half-updated by a panic, exactly as with a thread that panicked.
pub(crate) fn capture<R, F>(work: F) -> Result<R, CapturedFailure>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(work)).map_err(|payload| {
        let failure = CapturedFailure::from_panic(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(panic = failure.message(), "attempt captured a panic");
        failure
    })
}

impl Outcome {
    /// Runs `work` and succeeds unless it panics.
    #[inline]
    pub fn attempt<F>(work: F) -> Self
    where
        F: FnOnce(),
    {
        Self::attempt_with(work, ErrorReason::exceptional)
    }

    /// Like [`attempt`](Self::attempt), with `handler` turning the captured
    /// panic into the error reason.
    pub fn attempt_with<F, H>(work: F, handler: H) -> Self
    where
        F: FnOnce(),
        H: FnOnce(CapturedFailure) -> ErrorReason,
    {
        match capture(work) {
            Ok(()) => Self::ok(),
            Err(failure) => Self::fail(handler(failure)),
        }
    }

    /// Runs `work` and passes its outcome through, or fails if it panics.
    #[inline]
    pub fn attempt_outcome<F>(work: F) -> Self
    where
        F: FnOnce() -> Outcome,
    {
        Self::attempt_outcome_with(work, ErrorReason::exceptional)
    }

    pub fn attempt_outcome_with<F, H>(work: F, handler: H) -> Self
    where
        F: FnOnce() -> Outcome,
        H: FnOnce(CapturedFailure) -> ErrorReason,
    {
        capture(work).unwrap_or_else(|failure| Self::fail(handler(failure)))
    }
}

impl<T> ValueOutcome<T> {
    /// Runs `work` and wraps its return value, or fails if it panics.
    #[inline]
    pub fn attempt<F>(work: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::attempt_with(work, ErrorReason::exceptional)
    }

    /// Like [`attempt`](Self::attempt), with a custom exception handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{ErrorReason, ReasonTrail, ValueOutcome};
    ///
    /// let parsed = ValueOutcome::<u8>::attempt_with(
    ///     || panic!("bad digit"),
    ///     |failure| ErrorReason::new("parse failed").with_metadata("panic", failure.message()),
    /// );
    ///
    /// let error = parsed.errors().next().unwrap();
    /// assert_eq!(error.message(), "parse failed");
    /// assert!(!error.is_exceptional());
    /// ```
    pub fn attempt_with<F, H>(work: F, handler: H) -> Self
    where
        F: FnOnce() -> T,
        H: FnOnce(CapturedFailure) -> ErrorReason,
    {
        match capture(work) {
            Ok(value) => Self::ok(value),
            Err(failure) => Self::fail(handler(failure)),
        }
    }

    /// Runs `work` and passes its outcome through unchanged, or fails if it panics.
    #[inline]
    pub fn attempt_outcome<F>(work: F) -> Self
    where
        F: FnOnce() -> ValueOutcome<T>,
    {
        Self::attempt_outcome_with(work, ErrorReason::exceptional)
    }

    pub fn attempt_outcome_with<F, H>(work: F, handler: H) -> Self
    where
        F: FnOnce() -> ValueOutcome<T>,
        H: FnOnce(CapturedFailure) -> ErrorReason,
    {
        capture(work).unwrap_or_else(|failure| Self::fail(handler(failure)))
    }

    /// Runs fallible `work`; both an `Err` and a panic become the single error
    /// of a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{FailureKind, ReasonTrail, ValueOutcome};
    ///
    /// let port = ValueOutcome::attempt_fallible(|| "80x".parse::<u16>());
    /// let error = port.errors().next().unwrap();
    /// assert_eq!(error.captured().map(|c| c.kind()), Some(FailureKind::Error));
    /// ```
    #[inline]
    pub fn attempt_fallible<F, E>(work: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: core::error::Error,
    {
        Self::attempt_fallible_with(work, ErrorReason::exceptional)
    }

    pub fn attempt_fallible_with<F, E, H>(work: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: core::error::Error,
        H: FnOnce(CapturedFailure) -> ErrorReason,
    {
        let failure = match capture(work) {
            Ok(Ok(value)) => return Self::ok(value),
            Ok(Err(error)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %error, "attempt captured an error");
                CapturedFailure::from_error(&error)
            },
            Err(failure) => failure,
        };
        Self::fail(handler(failure))
    }
}
