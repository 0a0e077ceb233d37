//! Heap types resolved against `std` or `alloc` depending on the `std` feature.
//!
//! Everything in the crate that allocates imports from here, so the `no_std`
//! build only has to swap this one module.

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{
    borrow::Cow,
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(feature = "std")]
pub(crate) use std::{
    borrow::Cow,
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};
