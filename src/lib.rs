//! Outcome values with an ordered trail of reasons, and the combinators to
//! chain them without unwinding.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `reason_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining with Bind
//!
//! ```
//! use reason_rail::{Outcome, ReasonTrail, ValueOutcome};
//!
//! let total = Outcome::ok()
//!     .with_success("cart loaded")
//!     .bind(|| ValueOutcome::ok(5))
//!     .bind(|items| ValueOutcome::ok(items * 2).with_success("prices applied"));
//!
//! assert_eq!(total.value(), Some(&10));
//! let milestones: Vec<&str> = total.successes().map(|s| s.message()).collect();
//! assert_eq!(milestones, ["cart loaded", "prices applied"]);
//! ```
//!
//! ## Failure Short-Circuits
//!
//! ```
//! use reason_rail::{Outcome, ReasonTrail};
//!
//! let mut reached = false;
//! let outcome = Outcome::fail("E1").bind(|| {
//!     reached = true;
//!     Outcome::ok()
//! });
//!
//! assert!(!reached);
//! assert_eq!(outcome, Outcome::fail("E1"));
//! ```
//!
//! ## Capturing Panics
//!
//! ```
//! use reason_rail::{ReasonTrail, ValueOutcome};
//!
//! let outcome = ValueOutcome::<i32>::attempt(|| panic!("boom"))
//!     .on_error(|| eprintln!("attempt failed"));
//!
//! assert_eq!(outcome.errors().count(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between outcomes and `Result`
pub mod convert;
/// Outcome-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for reading and building outcomes
pub mod traits;
/// Reason and outcome types
pub mod types;

/// Attempt boundary capturing panics (requires `std` feature)
#[cfg(feature = "std")]
pub mod attempt;

/// Async bind, on-error and attempt (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::Failure;
pub use traits::*;
pub use types::{
    CapturedFailure, ErrorReason, FailureKind, Metadata, MetadataValue, Outcome, Reason,
    ReasonVec, SuccessReason, ValueOutcome,
};
