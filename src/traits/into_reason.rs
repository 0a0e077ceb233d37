//! Conversion traits for building reasons from messages.
//!
//! # Implementations
//!
//! Both traits are implemented for:
//! - `&str`, `String` and `Cow<str>` - become a reason with that message
//! - the reason type itself - identity conversion
//!
//! # Examples
//!
//! ```
//! use reason_rail::{ErrorReason, IntoErrorReason, IntoSuccessReason};
//!
//! let e1 = "disk full".into_error_reason();
//! let e2 = ErrorReason::new("disk full").into_error_reason();
//! assert_eq!(e1, e2);
//!
//! let s = String::from("cache warmed").into_success_reason();
//! assert_eq!(s.message(), "cache warmed");
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::{ErrorReason, SuccessReason};

/// Converts a type into an [`ErrorReason`].
///
/// Accepted wherever the crate takes "a message or an error", such as
/// [`Outcome::fail`](crate::Outcome::fail) and
/// [`Outcome::with_error`](crate::Outcome::with_error).
///
/// # Implementing for Custom Types
///
/// ```
/// use reason_rail::{ErrorReason, IntoErrorReason, Outcome, ReasonTrail};
///
/// enum LedgerError { Overdrawn { account: u64 } }
///
/// impl IntoErrorReason for LedgerError {
///     fn into_error_reason(self) -> ErrorReason {
///         match self {
///             LedgerError::Overdrawn { account } => {
///                 ErrorReason::new("account overdrawn").with_metadata("account", account)
///             },
///         }
///     }
/// }
///
/// let outcome = Outcome::fail(LedgerError::Overdrawn { account: 7 });
/// assert!(outcome.is_failed());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error reason",
    label = "this type does not implement `IntoErrorReason`",
    note = "implement `IntoErrorReason` for `{Self}` or pass a message string"
)]
pub trait IntoErrorReason {
    fn into_error_reason(self) -> ErrorReason;
}

/// Converts a type into a [`SuccessReason`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a success reason",
    label = "this type does not implement `IntoSuccessReason`"
)]
pub trait IntoSuccessReason {
    fn into_success_reason(self) -> SuccessReason;
}

impl IntoErrorReason for ErrorReason {
    #[inline]
    fn into_error_reason(self) -> ErrorReason {
        self
    }
}

impl IntoErrorReason for &str {
    #[inline]
    fn into_error_reason(self) -> ErrorReason {
        ErrorReason::new(self)
    }
}

impl IntoErrorReason for String {
    #[inline]
    fn into_error_reason(self) -> ErrorReason {
        ErrorReason::new(self)
    }
}

impl IntoErrorReason for Cow<'_, str> {
    #[inline]
    fn into_error_reason(self) -> ErrorReason {
        ErrorReason::new(self.into_owned())
    }
}

impl IntoSuccessReason for SuccessReason {
    #[inline]
    fn into_success_reason(self) -> SuccessReason {
        self
    }
}

impl IntoSuccessReason for &str {
    #[inline]
    fn into_success_reason(self) -> SuccessReason {
        SuccessReason::new(self)
    }
}

impl IntoSuccessReason for String {
    #[inline]
    fn into_success_reason(self) -> SuccessReason {
        SuccessReason::new(self)
    }
}

impl IntoSuccessReason for Cow<'_, str> {
    #[inline]
    fn into_success_reason(self) -> SuccessReason {
        SuccessReason::new(self.into_owned())
    }
}
