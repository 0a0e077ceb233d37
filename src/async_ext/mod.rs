//! Async extensions for reason-rail.
//!
//! Asynchronous bind, on-error and attempt keep the sync semantics exactly:
//! a failed outcome never calls the bind function, on-error only runs its
//! callback on failure, and the only suspension point is the user's own
//! future.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! reason-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use reason_rail::prelude_async::*;
//!
//! async fn register(email: String) -> ValueOutcome<UserId> {
//!     validate_email(&email)
//!         .bind_async(|| store.insert_user(email))
//!         .await
//!         .on_error_async(|| metrics.count("register.failed"))
//!         .await
//! }
//! ```

#[cfg(feature = "std")]
mod attempt_future;
mod bind_future;
mod on_error_future;
mod outcome_async;

#[cfg(feature = "std")]
pub use attempt_future::AttemptFuture;
pub use bind_future::{BindFuture, KeepValueFuture};
pub use on_error_future::OnErrorFuture;
