//! Public API for the mono-bitmap crate.
//!
//! This module provides the high-level API: the [`Converter`] builder and
//! the [`ConvertError`] unified error type.

mod builder;
pub(crate) mod error;

pub use builder::{Conversion, Converter};
pub use error::ConvertError;
