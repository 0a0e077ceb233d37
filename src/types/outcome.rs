//! Untyped outcome: success or failure plus an ordered reason trail.
//!
//! This module provides [`Outcome`], the value every pipeline stage produces
//! when it has nothing to return but its verdict. The valued counterpart lives
//! in [`value_outcome`](crate::types::value_outcome).

use core::fmt;

use crate::traits::reason_trail::sealed::Sealed;
use crate::traits::{BindTarget, Errors, IntoErrorReason, IntoSuccessReason, ReasonTrail};
use crate::types::{ErrorReason, Reason, ReasonVec, ValueOutcome};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Success or failure with an ordered trail of reasons.
///
/// An outcome is failed exactly when it holds at least one [`ErrorReason`];
/// success reasons are informational and can sit next to errors. Appenders take
/// `self` by value and return the extended outcome, so a trail is never shared
/// between pipelines.
///
/// # Examples
///
/// ```
/// use reason_rail::{Outcome, ReasonTrail};
///
/// let outcome = Outcome::ok()
///     .with_success("Initial")
///     .bind(|| Outcome::ok().with_success("Chained"));
///
/// assert!(outcome.is_success());
/// let successes: Vec<&str> = outcome.successes().map(|s| s.message()).collect();
/// assert_eq!(successes, ["Initial", "Chained"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub(crate) reasons: ReasonVec,
}

impl Outcome {
    /// A successful outcome with no reasons.
    #[inline]
    pub fn ok() -> Self {
        Self { reasons: ReasonVec::new() }
    }

    /// A successful valued outcome with no reasons; shorthand for [`ValueOutcome::ok`].
    #[inline]
    pub fn ok_with<T>(value: T) -> ValueOutcome<T> {
        ValueOutcome::ok(value)
    }

    /// A failed outcome holding exactly `error`.
    #[inline]
    pub fn fail<E: IntoErrorReason>(error: E) -> Self {
        Self { reasons: smallvec![Reason::Error(error.into_error_reason())] }
    }

    /// An outcome holding every error in `errors`, in order.
    ///
    /// Failure is derived from the trail, so an empty iterator yields a
    /// successful outcome.
    #[inline]
    pub fn fail_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ErrorReason>,
    {
        Self { reasons: errors.into_iter().map(Reason::Error).collect() }
    }

    /// Builds an outcome from a pre-assembled trail.
    #[inline]
    pub fn from_reasons<I>(reasons: I) -> Self
    where
        I: IntoIterator<Item = Reason>,
    {
        Self { reasons: reasons.into_iter().collect() }
    }

    /// Concatenates the trails of several outcomes, in iteration order.
    ///
    /// The merged outcome is failed if any input was.
    #[inline]
    pub fn merge<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        outcomes.into_iter().collect()
    }

    /// Appends a success reason. Does not change the failure state.
    #[inline]
    pub fn with_success<S: IntoSuccessReason>(mut self, success: S) -> Self {
        self.reasons.push(Reason::Success(success.into_success_reason()));
        self
    }

    /// Appends an error reason, which marks the outcome as failed.
    #[inline]
    pub fn with_error<E: IntoErrorReason>(mut self, error: E) -> Self {
        self.reasons.push(Reason::Error(error.into_error_reason()));
        self
    }

    /// Appends several reasons, preserving their order.
    #[inline]
    pub fn with_reasons<I, R>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Reason>,
    {
        self.reasons.extend(reasons.into_iter().map(Into::into));
        self
    }

    /// Widens into a valued outcome with the same trail.
    #[inline]
    pub fn with_value<T>(self, value: T) -> ValueOutcome<T> {
        ValueOutcome::from_parts(self.reasons, Some(value))
    }

    /// Consumes the outcome, returning its trail.
    #[inline]
    pub fn into_reasons(self) -> ReasonVec {
        self.reasons
    }

    /// Chains `bind` onto a successful outcome.
    ///
    /// `bind` runs only if `self` is successful. Its result is returned with
    /// `self`'s reasons placed before its own. If `self` is failed, `bind` is
    /// never called and `self`'s reasons come back unchanged, as an `Outcome` or
    /// as a value-less failed `ValueOutcome<U>` depending on what `bind` would
    /// have produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{Outcome, ReasonTrail, ValueOutcome};
    ///
    /// let mut called = false;
    /// let failed = Outcome::fail("E1").bind(|| {
    ///     called = true;
    ///     Outcome::ok().with_success("X")
    /// });
    /// assert!(!called);
    /// assert_eq!(failed.errors().map(|e| e.message()).collect::<Vec<_>>(), ["E1"]);
    ///
    /// let valued: ValueOutcome<i32> = Outcome::ok().bind(|| ValueOutcome::ok(420));
    /// assert_eq!(valued.value(), Some(&420));
    /// ```
    ///
    /// There is no way to pass an absent function:
    ///
    /// ```compile_fail
    /// use reason_rail::Outcome;
    ///
    /// let absent: Option<fn() -> Outcome> = None;
    /// let _ = Outcome::ok().bind(absent);
    /// ```
    #[inline]
    pub fn bind<O, F>(self, bind: F) -> O
    where
        F: FnOnce() -> O,
        O: BindTarget,
    {
        if self.is_failed() {
            return O::from_failed_reasons(self.reasons);
        }
        bind().prepend_reasons(self.reasons)
    }

    /// Runs `action` if the outcome is failed, then returns the outcome unchanged.
    #[inline]
    pub fn on_error<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_failed() {
            action();
        }
        self
    }

    /// Runs `action` with the error reasons if the outcome is failed, then
    /// returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// let mut logged = Vec::new();
    /// let outcome = Outcome::fail("timeout")
    ///     .on_error_with(|errors| logged.extend(errors.map(|e| e.message().to_owned())));
    ///
    /// assert_eq!(logged, ["timeout"]);
    /// assert_eq!(outcome, Outcome::fail("timeout"));
    /// ```
    #[inline]
    pub fn on_error_with<F>(self, action: F) -> Self
    where
        F: FnOnce(Errors<'_>),
    {
        if self.is_failed() {
            action(self.errors());
        }
        self
    }
}

impl ReasonTrail for Outcome {
    #[inline]
    fn reasons(&self) -> &[Reason] {
        &self.reasons
    }
}

impl Sealed for Outcome {}

impl BindTarget for Outcome {
    #[inline]
    fn from_failed_reasons(reasons: ReasonVec) -> Self {
        Self { reasons }
    }

    #[inline]
    fn prepend_reasons(mut self, mut prior: ReasonVec) -> Self {
        prior.append(&mut self.reasons);
        self.reasons = prior;
        self
    }
}

impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut reasons = ReasonVec::new();
        for outcome in iter {
            reasons.extend(outcome.reasons);
        }
        Self { reasons }
    }
}

impl Extend<Reason> for Outcome {
    #[inline]
    fn extend<I: IntoIterator<Item = Reason>>(&mut self, iter: I) {
        self.reasons.extend(iter);
    }
}

/// Writes the verdict and, if present, the trail.
///
/// `{}` is a single line (`failed: a; b`); `{:#}` lists every reason on its own line.
pub(crate) fn fmt_trail(
    f: &mut fmt::Formatter<'_>,
    failed: bool,
    reasons: &[Reason],
) -> fmt::Result {
    let verdict = if failed { "failed" } else { "success" };
    if f.alternate() {
        writeln!(f, "Outcome: {verdict}")?;
        if !reasons.is_empty() {
            writeln!(f, "Reasons:")?;
            for reason in reasons {
                writeln!(f, "  - {reason:#}")?;
            }
        }
        return Ok(());
    }

    f.write_str(verdict)?;
    let mut shown = reasons.iter().filter(|r| r.is_error() == failed).peekable();
    if shown.peek().is_some() {
        f.write_str(": ")?;
        for (i, reason) in shown.enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(reason.message())?;
        }
    }
    Ok(())
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_trail(f, self.is_failed(), &self.reasons)
    }
}
