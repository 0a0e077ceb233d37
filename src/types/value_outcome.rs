//! Valued outcome: an [`Outcome`] plus a payload that is meaningful only on success.

use core::fmt;

use crate::traits::reason_trail::sealed::Sealed;
use crate::traits::{BindTarget, Errors, IntoErrorReason, IntoSuccessReason, ReasonTrail};
use crate::types::alloc_type::Vec;
use crate::types::outcome::fmt_trail;
use crate::types::{ErrorReason, Outcome, Reason, ReasonVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// An outcome carrying a value of type `T`.
///
/// The value is only observable while the outcome is successful: [`value`],
/// [`into_value`] and equality all treat a failed outcome as value-less, even
/// if a payload was attached with [`with_value`]. [`unwrap_value`] panics on
/// a failed outcome instead of handing out a placeholder.
///
/// [`value`]: ValueOutcome::value
/// [`into_value`]: ValueOutcome::into_value
/// [`with_value`]: ValueOutcome::with_value
/// [`unwrap_value`]: ValueOutcome::unwrap_value
///
/// # Examples
///
/// ```
/// use reason_rail::{ReasonTrail, ValueOutcome};
///
/// let doubled = ValueOutcome::ok(5).bind(|x| ValueOutcome::ok(x * 2));
/// assert_eq!(doubled.value(), Some(&10));
///
/// let mut called = false;
/// let failed = ValueOutcome::<i32>::fail("E1").bind(|x| {
///     called = true;
///     ValueOutcome::ok(x * 2)
/// });
/// assert!(!called);
/// assert!(failed.is_failed());
/// assert_eq!(failed.value(), None);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ValueOutcome<T> {
    reasons: ReasonVec,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    value: Option<T>,
}

impl<T> ValueOutcome<T> {
    #[inline]
    pub(crate) fn from_parts(reasons: ReasonVec, value: Option<T>) -> Self {
        Self { reasons, value }
    }

    /// A successful outcome with no reasons holding `value`.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { reasons: ReasonVec::new(), value: Some(value) }
    }

    /// A failed outcome holding exactly `error` and no value.
    #[inline]
    pub fn fail<E: IntoErrorReason>(error: E) -> Self {
        Self { reasons: smallvec![Reason::Error(error.into_error_reason())], value: None }
    }

    /// An outcome holding every error in `errors` and no value.
    ///
    /// As with [`Outcome::fail_many`], an empty iterator is not a failure.
    #[inline]
    pub fn fail_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ErrorReason>,
    {
        Self { reasons: errors.into_iter().map(Reason::Error).collect(), value: None }
    }

    #[inline]
    pub fn with_success<S: IntoSuccessReason>(mut self, success: S) -> Self {
        self.reasons.push(Reason::Success(success.into_success_reason()));
        self
    }

    #[inline]
    pub fn with_error<E: IntoErrorReason>(mut self, error: E) -> Self {
        self.reasons.push(Reason::Error(error.into_error_reason()));
        self
    }

    #[inline]
    pub fn with_reasons<I, R>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Reason>,
    {
        self.reasons.extend(reasons.into_iter().map(Into::into));
        self
    }

    /// Replaces the payload. The trail and the failure state are untouched.
    #[inline]
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// The value, if the outcome is successful.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        if self.is_failed() {
            return None;
        }
        self.value.as_ref()
    }

    /// Consumes the outcome, returning the value if it is successful.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        if self.is_failed() {
            return None;
        }
        self.value
    }

    /// The value if successful, `default` otherwise.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.into_value().unwrap_or(default)
    }

    /// Returns the value of a successful outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is failed (the message lists the errors) or if a
    /// successful outcome carries no value.
    #[track_caller]
    pub fn unwrap_value(self) -> T {
        if self.is_failed() {
            let messages: Vec<&str> = self.errors().map(ErrorReason::message).collect();
            panic!("called `ValueOutcome::unwrap_value()` on a failed outcome: {messages:?}");
        }
        match self.value {
            Some(value) => value,
            None => panic!("called `ValueOutcome::unwrap_value()` on an outcome without a value"),
        }
    }

    /// Drops the value, keeping the trail.
    #[inline]
    pub fn to_outcome(self) -> Outcome {
        Outcome { reasons: self.reasons }
    }

    /// Re-types the outcome without running anything: the trail is kept and the
    /// value dropped.
    ///
    /// Meant for carrying a failure across a change of value type. On a
    /// successful outcome the result has no value; binding it panics.
    #[inline]
    pub fn to_outcome_of<U>(self) -> ValueOutcome<U> {
        ValueOutcome { reasons: self.reasons, value: None }
    }

    /// Maps the value of a successful outcome; a failed outcome is re-typed as is.
    #[inline]
    pub fn map_value<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        if self.is_failed() {
            return self.to_outcome_of();
        }
        ValueOutcome { value: self.value.map(f), reasons: self.reasons }
    }

    /// Splits into the trail and the raw payload slot.
    #[inline]
    pub fn into_parts(self) -> (ReasonVec, Option<T>) {
        (self.reasons, self.value)
    }

    /// Takes the value out of a successful outcome for binding.
    #[track_caller]
    pub(crate) fn take_bound_value(value: Option<T>) -> T {
        match value {
            Some(value) => value,
            None => panic!("cannot bind a successful `ValueOutcome` that carries no value"),
        }
    }

    /// Chains `bind` onto the value of a successful outcome.
    ///
    /// `bind` receives the value and runs only if `self` is successful; its result
    /// comes back with `self`'s reasons in front of its own. A failed `self` is
    /// returned with its trail unchanged and `bind` is not called.
    ///
    /// # Panics
    ///
    /// Panics if `self` is successful but carries no value, which only happens
    /// after [`to_outcome_of`](Self::to_outcome_of) on a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{Outcome, ReasonTrail, ValueOutcome};
    ///
    /// let checked: Outcome = ValueOutcome::ok(17)
    ///     .with_success("loaded")
    ///     .bind(|n| if n % 2 == 0 { Outcome::ok() } else { Outcome::fail("odd") });
    ///
    /// assert!(checked.is_failed());
    /// assert_eq!(checked.reasons().len(), 2);
    /// ```
    #[track_caller]
    pub fn bind<O, F>(self, bind: F) -> O
    where
        F: FnOnce(T) -> O,
        O: BindTarget,
    {
        if self.is_failed() {
            return O::from_failed_reasons(self.reasons);
        }
        let value = Self::take_bound_value(self.value);
        bind(value).prepend_reasons(self.reasons)
    }

    /// Runs a validation-style `bind` and keeps the original value.
    ///
    /// The outcome of `bind` is merged after `self`'s reasons, as with
    /// [`bind`](Self::bind), and the original value is reattached.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::{Outcome, ReasonTrail, ValueOutcome};
    ///
    /// let order = ValueOutcome::ok(250u32)
    ///     .bind_and_keep_value(|amount| {
    ///         if *amount > 100 { Outcome::ok().with_success("limit checked") } else { Outcome::ok() }
    ///     });
    ///
    /// assert_eq!(order.value(), Some(&250));
    /// assert_eq!(order.successes().count(), 1);
    /// ```
    pub fn bind_and_keep_value<F>(self, bind: F) -> Self
    where
        F: FnOnce(&T) -> Outcome,
    {
        if self.is_failed() {
            return self;
        }
        let produced = self.value.as_ref().map(bind).unwrap_or_default();
        let mut reasons = self.reasons;
        reasons.extend(produced.reasons);
        Self { reasons, value: self.value }
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

impl<T> ReasonTrail for ValueOutcome<T> {
    #[inline]
    fn reasons(&self) -> &[Reason] {
        &self.reasons
    }
}

impl<T> Sealed for ValueOutcome<T> {}

impl<T> BindTarget for ValueOutcome<T> {
    #[inline]
    fn from_failed_reasons(reasons: ReasonVec) -> Self {
        Self { reasons, value: None }
    }

    #[inline]
    fn prepend_reasons(mut self, mut prior: ReasonVec) -> Self {
        prior.append(&mut self.reasons);
        self.reasons = prior;
        self
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    #[inline]
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.to_outcome()
    }
}

/// Equal when the trails are equal and the observable values are equal.
impl<T: PartialEq> PartialEq for ValueOutcome<T> {
    fn eq(&self, other: &Self) -> bool {
        self.reasons == other.reasons && self.value() == other.value()
    }
}

/// Collects every trail in order; the values are gathered only if every
/// input succeeded with a value.
impl<T> FromIterator<ValueOutcome<T>> for ValueOutcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = ValueOutcome<T>>>(iter: I) -> Self {
        let mut reasons = ReasonVec::new();
        let mut values = Some(Vec::new());
        for outcome in iter {
            let succeeded = outcome.is_success();
            reasons.extend(outcome.reasons);
            match (succeeded, outcome.value) {
                (true, Some(value)) => {
                    if let Some(collected) = values.as_mut() {
                        collected.push(value);
                    }
                },
                _ => values = None,
            }
        }
        Self { reasons, value: values }
    }
}

impl<T: fmt::Display> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_trail(f, self.is_failed(), &self.reasons)?;
        if let Some(value) = self.value() {
            if f.alternate() {
                writeln!(f, "Value: {value}")?;
            } else {
                write!(f, " ({value})")?;
            }
        }
        Ok(())
    }
}
