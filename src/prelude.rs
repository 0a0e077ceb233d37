//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use reason_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`ensure!`]
//! - **Types**: [`Outcome`], [`ValueOutcome`], [`ErrorReason`], [`SuccessReason`], [`Reason`], [`Failure`]
//! - **Traits**: [`ReasonTrail`], [`IntoErrorReason`], [`IntoSuccessReason`]
//!
//! # Examples
//!
//! ```
//! use reason_rail::prelude::*;
//!
//! fn reserve(seats: u32) -> ValueOutcome<u32> {
//!     ensure!(seats <= 4, "cannot reserve {} seats", seats)
//!         .with_success("party size accepted")
//!         .bind(|| ValueOutcome::ok(seats))
//! }
//!
//! assert_eq!(reserve(2).value(), Some(&2));
//! assert!(reserve(9).is_failed());
//! ```

pub use crate::{ensure, fail};

pub use crate::convert::Failure;
pub use crate::types::{ErrorReason, Outcome, Reason, SuccessReason, ValueOutcome};

pub use crate::traits::{IntoErrorReason, IntoSuccessReason, ReasonTrail};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceOutcomeExt;
