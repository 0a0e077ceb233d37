//! Read access to an outcome's reason trail.
//!
//! [`ReasonTrail`] is the surface shared by [`Outcome`](crate::Outcome) and
//! [`ValueOutcome`](crate::ValueOutcome): the ordered reasons, the error and
//! success subsequences, and the failure flag derived from them.
//!
//! [`BindTarget`] marks the types a bind function may produce. It is sealed;
//! the bind engine relies on being able to rebuild and extend its outputs.

use core::iter::FusedIterator;

use crate::types::{ErrorReason, Reason, ReasonVec, SuccessReason};

/// Shared read surface of outcomes.
///
/// Failure is derived, never stored: an outcome is failed exactly when at
/// least one of its reasons is an error.
///
/// # Examples
///
/// ```
/// use reason_rail::{Outcome, ReasonTrail};
///
/// let outcome = Outcome::ok()
///     .with_success("parsed header")
///     .with_error("checksum mismatch")
///     .with_success("parsed body");
///
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.reasons().len(), 3);
/// assert_eq!(outcome.errors().count(), 1);
/// let successes: Vec<&str> = outcome.successes().map(|s| s.message()).collect();
/// assert_eq!(successes, ["parsed header", "parsed body"]);
/// ```
pub trait ReasonTrail {
    /// All reasons, in the order they were added.
    fn reasons(&self) -> &[Reason];

    /// The error reasons, in order.
    #[inline]
    fn errors(&self) -> Errors<'_> {
        Errors { inner: self.reasons().iter() }
    }

    /// The success reasons, in order.
    #[inline]
    fn successes(&self) -> Successes<'_> {
        Successes { inner: self.reasons().iter() }
    }

    #[inline]
    fn is_failed(&self) -> bool {
        self.reasons().iter().any(Reason::is_error)
    }

    #[inline]
    fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Returns `true` if any error reason matches `predicate`.
    #[inline]
    fn has_error<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&ErrorReason) -> bool,
    {
        self.errors().any(predicate)
    }

    /// Returns `true` if any success reason matches `predicate`.
    #[inline]
    fn has_success<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&SuccessReason) -> bool,
    {
        self.successes().any(predicate)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Types a bind function may return.
///
/// Implemented by [`Outcome`](crate::Outcome) and every
/// [`ValueOutcome<U>`](crate::ValueOutcome), which lets one `bind` method
/// serve transitions to untyped, same-typed and newly-typed outcomes.
pub trait BindTarget: ReasonTrail + sealed::Sealed + Sized {
    /// Rebuilds a failed outcome of this type from a failed receiver's reasons.
    #[doc(hidden)]
    fn from_failed_reasons(reasons: ReasonVec) -> Self;

    /// Places `prior` in front of this outcome's own reasons.
    #[doc(hidden)]
    fn prepend_reasons(self, prior: ReasonVec) -> Self;
}

/// Iterator over the error reasons of a trail. Created by [`ReasonTrail::errors`].
#[derive(Debug, Clone)]
pub struct Errors<'a> {
    inner: core::slice::Iter<'a, Reason>,
}

impl<'a> Iterator for Errors<'a> {
    type Item = &'a ErrorReason;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(Reason::as_error)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl DoubleEndedIterator for Errors<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(Reason::as_error)
    }
}

impl FusedIterator for Errors<'_> {}

/// Iterator over the success reasons of a trail. Created by [`ReasonTrail::successes`].
#[derive(Debug, Clone)]
pub struct Successes<'a> {
    inner: core::slice::Iter<'a, Reason>,
}

impl<'a> Iterator for Successes<'a> {
    type Item = &'a SuccessReason;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(Reason::as_success)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl DoubleEndedIterator for Successes<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(Reason::as_success)
    }
}

impl FusedIterator for Successes<'_> {}
