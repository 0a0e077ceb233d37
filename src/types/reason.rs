//! Reason model: the annotations an outcome carries.
//!
//! A [`Reason`] is either an [`ErrorReason`] or a [`SuccessReason`]. Both carry
//! a message and [`Metadata`]; errors may additionally nest causes and hold a
//! [`CapturedFailure`] when they were produced from a panic or a propagated
//! `std` error at the attempt boundary.

use core::fmt;

use crate::types::alloc_type::{format, Box, String, ToString, Vec};
use crate::types::{Metadata, MetadataValue};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a [`CapturedFailure`] came from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The work panicked and the panic was caught.
    Panic,
    /// The work returned an `Err` carrying a `core::error::Error`.
    Error,
}

/// A runtime failure intercepted at the attempt boundary.
///
/// `message` is the short text (panic payload or the error's `Display`);
/// `diagnostic` is the longer rendering kept for later inspection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFailure {
    kind: FailureKind,
    message: String,
    diagnostic: String,
}

impl CapturedFailure {
    #[inline]
    pub fn new<M, D>(kind: FailureKind, message: M, diagnostic: D) -> Self
    where
        M: Into<String>,
        D: Into<String>,
    {
        Self { kind, message: message.into(), diagnostic: diagnostic.into() }
    }

    /// Captures a propagated error, rendering its `Debug` form and its `source()` chain.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        let mut diagnostic = format!("{error:?}");
        let mut source = error.source();
        let mut depth = 0usize;
        while let Some(cause) = source {
            if depth == 0 {
                diagnostic.push_str("\n\nCaused by:");
            }
            diagnostic.push_str(&format!("\n  {depth}: {cause}"));
            depth += 1;
            source = cause.source();
        }
        Self { kind: FailureKind::Error, message: error.to_string(), diagnostic }
    }

    /// Captures a panic payload as returned by `std::panic::catch_unwind`.
    ///
    /// Payloads that are neither `&str` nor `String` are reported by type only.
    #[cfg(feature = "std")]
    pub fn from_panic(payload: Box<dyn core::any::Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(s) => (*s).to_string(),
                Err(_) => String::from("Box<dyn Any>"),
            },
        };
        let thread = std::thread::current();
        let diagnostic =
            format!("panic in thread '{}': {}", thread.name().unwrap_or("<unnamed>"), message);
        Self { kind: FailureKind::Panic, message, diagnostic }
    }

    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }
}

impl fmt::Display for CapturedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.diagnostic)
        } else {
            f.write_str(&self.message)
        }
    }
}

/// An error reason: marks the outcome carrying it as failed.
///
/// # Examples
///
/// ```
/// use reason_rail::ErrorReason;
///
/// let err = ErrorReason::new("payment declined")
///     .with_metadata("code", 402)
///     .caused_by(ErrorReason::new("card expired"));
///
/// assert_eq!(err.message(), "payment declined");
/// assert_eq!(err.causes().len(), 1);
/// assert!(!err.is_exceptional());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReason {
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: Metadata,
    #[cfg_attr(feature = "serde", serde(default))]
    causes: Vec<ErrorReason>,
    #[cfg_attr(feature = "serde", serde(default))]
    captured: Option<Box<CapturedFailure>>,
}

impl ErrorReason {
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self { message: message.into(), metadata: Metadata::new(), causes: Vec::new(), captured: None }
    }

    /// Builds the exceptional error for a captured failure.
    ///
    /// This is the default handler used by the attempt boundary: the message is
    /// the failure's message and the full failure stays reachable through
    /// [`captured`](Self::captured).
    #[inline]
    pub fn exceptional(failure: CapturedFailure) -> Self {
        Self {
            message: failure.message.clone(),
            metadata: Metadata::new(),
            causes: Vec::new(),
            captured: Some(Box::new(failure)),
        }
    }

    /// Converts a `core::error::Error` into an exceptional error whose causes
    /// mirror the `source()` chain.
    pub fn from_std_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        let mut reason = Self::exceptional(CapturedFailure::from_error(error));
        if let Some(source) = error.source() {
            reason.causes.push(Self::from_source_chain(source));
        }
        reason
    }

    fn from_source_chain(error: &(dyn core::error::Error + 'static)) -> Self {
        let mut reason = Self::new(error.to_string());
        if let Some(source) = error.source() {
            reason.causes.push(Self::from_source_chain(source));
        }
        reason
    }

    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Appends a cause to the causal chain.
    #[inline]
    pub fn caused_by(mut self, cause: ErrorReason) -> Self {
        self.causes.push(cause);
        self
    }

    #[inline]
    pub fn with_causes<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = ErrorReason>,
    {
        self.causes.extend(causes);
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[inline]
    pub fn causes(&self) -> &[ErrorReason] {
        &self.causes
    }

    /// The captured panic or error, for exceptional errors.
    #[inline]
    pub fn captured(&self) -> Option<&CapturedFailure> {
        self.captured.as_deref()
    }

    #[inline]
    pub fn is_exceptional(&self) -> bool {
        self.captured.is_some()
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        f.write_str(&self.message)?;
        if !self.metadata.is_empty() {
            write!(f, " {}", self.metadata)?;
        }
        for cause in &self.causes {
            f.write_str("\n")?;
            cause.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// `{}` prints the message; `{:#}` prints metadata and the indented cause tree.
impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.fmt_tree(f, 0)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl core::error::Error for ErrorReason {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.causes.first().map(|c| c as &(dyn core::error::Error + 'static))
    }
}

/// A success reason: an informational milestone that never affects failure state.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessReason {
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: Metadata,
}

impl SuccessReason {
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self { message: message.into(), metadata: Metadata::new() }
    }

    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl fmt::Display for SuccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() && !self.metadata.is_empty() {
            write!(f, " {}", self.metadata)?;
        }
        Ok(())
    }
}

/// One entry of an outcome's reason trail.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    Error(ErrorReason),
    Success(SuccessReason),
}

impl Reason {
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Error(e) => e.message(),
            Self::Success(s) => s.message(),
        }
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Error(e) => e.metadata(),
            Self::Success(s) => s.metadata(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn as_error(&self) -> Option<&ErrorReason> {
        match self {
            Self::Error(e) => Some(e),
            Self::Success(_) => None,
        }
    }

    #[inline]
    pub fn as_success(&self) -> Option<&SuccessReason> {
        match self {
            Self::Success(s) => Some(s),
            Self::Error(_) => None,
        }
    }
}

impl From<ErrorReason> for Reason {
    #[inline]
    fn from(error: ErrorReason) -> Self {
        Self::Error(error)
    }
}

impl From<SuccessReason> for Reason {
    #[inline]
    fn from(success: SuccessReason) -> Self {
        Self::Success(success)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(e) => {
                f.write_str("error: ")?;
                fmt::Display::fmt(e, f)
            },
            Self::Success(s) => {
                f.write_str("success: ")?;
                fmt::Display::fmt(s, f)
            },
        }
    }
}
