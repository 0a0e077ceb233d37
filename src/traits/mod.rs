//! Core traits for reading and building outcomes.
//!
//! - [`ReasonTrail`]: read access shared by [`Outcome`](crate::Outcome) and
//!   [`ValueOutcome`](crate::ValueOutcome)
//! - [`BindTarget`]: the sealed set of types a bind function may return
//! - [`IntoErrorReason`] / [`IntoSuccessReason`]: flexible reason arguments
//!
//! # Examples
//!
//! ```
//! use reason_rail::traits::{IntoErrorReason, ReasonTrail};
//! use reason_rail::Outcome;
//!
//! let reason = "stale cache entry".into_error_reason();
//! let outcome = Outcome::ok().with_error(reason);
//! assert!(outcome.has_error(|e| e.message().starts_with("stale")));
//! ```

pub mod into_reason;
pub mod reason_trail;

pub use into_reason::{IntoErrorReason, IntoSuccessReason};
pub use reason_trail::{BindTarget, Errors, ReasonTrail, Successes};
