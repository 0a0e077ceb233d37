//! Tracing integration for reason-rail.
//!
//! Emits the reasons of an outcome as `tracing` events without changing the
//! outcome, so logging can be attached anywhere in a pipeline.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! reason-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::traits::ReasonTrail;

/// Extension trait that logs an outcome's trail through `tracing`.
///
/// # Example
///
/// ```rust,ignore
/// use reason_rail::tracing_ext::TraceOutcomeExt;
///
/// let saved = save_invoice(&invoice).trace_errors("billing.save_invoice");
/// ```
pub trait TraceOutcomeExt: ReasonTrail + Sized {
    /// On-error hook emitting one `WARN` event per error reason.
    ///
    /// Each event records `label`, the error message, its metadata and, for
    /// captured panics or errors, the diagnostic text. Successful outcomes emit
    /// nothing.
    fn trace_errors(self, label: &str) -> Self {
        if self.is_failed() {
            for error in self.errors() {
                tracing::warn!(
                    label,
                    error = error.message(),
                    metadata = %error.metadata(),
                    causes = error.causes().len(),
                    captured = error.captured().map(|c| c.diagnostic()),
                    "outcome failed"
                );
            }
        }
        self
    }

    /// Emits the whole trail at `DEBUG`, one event per reason, in order.
    fn trace_reasons(self, label: &str) -> Self {
        for (index, reason) in self.reasons().iter().enumerate() {
            tracing::debug!(
                label,
                index,
                is_error = reason.is_error(),
                reason = reason.message(),
                metadata = %reason.metadata(),
                "outcome reason"
            );
        }
        self
    }
}

impl<R> TraceOutcomeExt for R where R: ReasonTrail {}
