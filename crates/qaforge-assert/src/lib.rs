//! Flat assertion helpers for QA suites.
//!
//! Every helper takes the value(s) under test plus a caller-supplied
//! message and returns `Ok(())` or an [`AssertionError`] whose message is
//! the caller prefix followed by a computed detail. The first failing
//! check returns immediately; there is no grouping or collect-all mode.

pub mod collections;
pub mod equality;
pub mod error;
pub mod functions;
pub mod json;
pub mod numeric;
pub mod strings;

pub use collections::*;
pub use equality::*;
pub use error::{AssertResult, AssertionError};
pub use functions::*;
pub use json::*;
pub use numeric::*;
pub use strings::*;
