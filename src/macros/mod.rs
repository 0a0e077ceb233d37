//! Ergonomic macros for building outcomes.
//!
//! - [`macro@crate::fail`] - A failed [`Outcome`](crate::Outcome) with a formatted message.
//! - [`macro@crate::ensure`] - `Outcome::ok()` when a condition holds, a formatted failure otherwise.
//! - [`macro@crate::impl_error_reason`] - Implements
//!   [`IntoErrorReason`](crate::traits::IntoErrorReason) for types that implement `Display`.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{ensure, fail, Outcome, ReasonTrail};
//!
//! let quota = 3;
//! let checked = ensure!(quota > 0, "quota exhausted for tenant {}", 42);
//! assert!(checked.is_success());
//!
//! let failed: Outcome = fail!("tenant {} not found", 42);
//! assert_eq!(failed.errors().next().unwrap().message(), "tenant 42 not found");
//! ```

/// Creates a failed [`Outcome`](crate::Outcome) whose single error message is
/// built with `format!` syntax.
///
/// # Examples
///
/// ```
/// use reason_rail::{fail, ReasonTrail};
///
/// let outcome = fail!("row {} is locked", 7);
/// assert!(outcome.is_failed());
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail(format!($($arg)*))
    };
}

/// Evaluates a condition into an [`Outcome`](crate::Outcome).
///
/// The message is only formatted when the condition is false.
///
/// # Examples
///
/// ```
/// use reason_rail::{ensure, ReasonTrail};
///
/// let balance = 10;
/// let outcome = ensure!(balance >= 25, "balance {} below minimum", balance);
/// assert!(outcome.is_failed());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::Outcome::ok()
        } else {
            $crate::fail!($($arg)+)
        }
    };
}

/// Implements [`IntoErrorReason`](crate::traits::IntoErrorReason) for types
/// that implement `Display`, using the rendered text as the message.
///
/// # Examples
///
/// ```
/// use reason_rail::{impl_error_reason, Outcome, ReasonTrail};
///
/// struct QuotaExceeded { used: u32 }
///
/// impl std::fmt::Display for QuotaExceeded {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "quota exceeded ({} used)", self.used)
///     }
/// }
///
/// impl_error_reason!(QuotaExceeded);
///
/// let outcome = Outcome::fail(QuotaExceeded { used: 12 });
/// assert_eq!(outcome.errors().next().unwrap().message(), "quota exceeded (12 used)");
/// ```
#[macro_export]
macro_rules! impl_error_reason {
    ($type:ty) => {
        impl $crate::traits::IntoErrorReason for $type {
            fn into_error_reason(self) -> $crate::types::ErrorReason {
                $crate::types::ErrorReason::new(self.to_string())
            }
        }
    };
}
