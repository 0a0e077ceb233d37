//! Async prelude - the sync [`prelude`](crate::prelude) plus the async futures.
//!
//! # Usage
//!
//! ```ignore
//! use reason_rail::prelude_async::*;
//!
//! async fn publish(draft: Draft) -> ValueOutcome<PostId> {
//!     review(&draft)
//!         .bind_async(|| storage.save(draft))
//!         .await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{BindFuture, KeepValueFuture, OnErrorFuture};

#[cfg(feature = "std")]
pub use crate::async_ext::AttemptFuture;
