//! Reason and outcome types.
//!
//! # Examples
//!
//! ```
//! use reason_rail::{ErrorReason, Outcome, ReasonTrail, ValueOutcome};
//!
//! let checked = Outcome::ok().with_success("schema checked");
//! let loaded: ValueOutcome<u32> = checked.bind(|| ValueOutcome::ok(42));
//!
//! assert_eq!(loaded.value(), Some(&42));
//! assert_eq!(loaded.successes().count(), 1);
//!
//! let failed = ValueOutcome::<u32>::fail(ErrorReason::new("row missing").with_metadata("id", 9));
//! assert_eq!(failed.value(), None);
//! ```
use smallvec::SmallVec;

pub(crate) mod alloc_type;
pub mod metadata;
pub mod outcome;
pub mod reason;
pub mod value_outcome;

pub use metadata::{Metadata, MetadataValue};
pub use outcome::Outcome;
pub use reason::{CapturedFailure, ErrorReason, FailureKind, Reason, SuccessReason};
pub use value_outcome::ValueOutcome;

/// SmallVec-backed reason trail.
///
/// One reason is stored inline, which covers the common `fail("...")` and
/// single-`with_success` outcomes without a heap allocation for the trail.
pub type ReasonVec = SmallVec<[Reason; 1]>;
