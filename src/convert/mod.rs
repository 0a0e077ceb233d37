//! Conversions between outcomes and `core::result::Result`.
//!
//! Outcomes meet ordinary Rust code at two edges: results coming in (turned
//! into outcomes, optionally keeping an error's `source()` chain) and
//! outcomes going out (turned into `Result<T, Failure>` so `?` works again).
//!
//! # Examples
//!
//! ```
//! use reason_rail::{Failure, Outcome, ReasonTrail, ValueOutcome};
//!
//! fn port(raw: &str) -> Result<u16, Failure> {
//!     ValueOutcome::from_std_result(raw.parse::<u16>())
//!         .with_success("port parsed")
//!         .into_result()
//! }
//!
//! assert_eq!(port("8080").unwrap(), 8080);
//! assert!(port("http").is_err());
//!
//! let outcome: Outcome = Err::<(), _>("disk full").into();
//! assert!(outcome.is_failed());
//! ```

use core::fmt;

use crate::traits::{IntoErrorReason, ReasonTrail};
use crate::types::alloc_type::Vec;
use crate::types::{ErrorReason, Outcome, ValueOutcome};

/// The error reasons of a failed outcome, as a `core::error::Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    errors: Vec<ErrorReason>,
}

impl Failure {
    #[inline]
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ErrorReason>,
    {
        Self { errors: errors.into_iter().collect() }
    }

    #[inline]
    pub fn errors(&self) -> &[ErrorReason] {
        &self.errors
    }

    #[inline]
    pub fn into_errors(self) -> Vec<ErrorReason> {
        self.errors
    }

    fn from_trail<R: ReasonTrail>(trail: &R) -> Self {
        Self { errors: trail.errors().cloned().collect() }
    }
}

/// `{}` joins the messages with `; `; `{:#}` prints each error's cause tree.
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if f.alternate() {
                if i > 0 {
                    f.write_str("\n")?;
                }
                write!(f, "{error:#}")?;
            } else {
                if i > 0 {
                    f.write_str("; ")?;
                }
                f.write_str(error.message())?;
            }
        }
        Ok(())
    }
}

impl core::error::Error for Failure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.errors.first().map(|e| e as &(dyn core::error::Error + 'static))
    }
}

impl From<Failure> for Outcome {
    #[inline]
    fn from(failure: Failure) -> Self {
        Outcome::fail_many(failure.errors)
    }
}

impl Outcome {
    /// `Ok(())` if successful, otherwise the error reasons.
    ///
    /// Success reasons are dropped.
    #[inline]
    pub fn into_result(self) -> Result<(), Failure> {
        if self.is_failed() {
            return Err(Failure::from_trail(&self));
        }
        Ok(())
    }
}

impl<T> ValueOutcome<T> {
    /// The value if successful, otherwise the error reasons.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is successful but carries no value.
    #[track_caller]
    pub fn into_result(self) -> Result<T, Failure> {
        if self.is_failed() {
            return Err(Failure::from_trail(&self));
        }
        let (_, value) = self.into_parts();
        Ok(Self::take_bound_value(value))
    }

    /// Builds an outcome from a `Result` whose error is a `core::error::Error`.
    ///
    /// The error becomes an exceptional [`ErrorReason`] whose causes follow
    /// its `source()` chain.
    #[inline]
    pub fn from_std_result<E>(result: Result<T, E>) -> Self
    where
        E: core::error::Error,
    {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(ErrorReason::from_std_error(&error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for ValueOutcome<T>
where
    E: IntoErrorReason,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<E> From<Result<(), E>> for Outcome
where
    E: IntoErrorReason,
{
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(error) => Self::fail(error),
        }
    }
}
