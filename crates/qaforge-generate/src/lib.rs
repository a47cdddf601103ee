//! Randomized test-data generation for QA suites.
//!
//! Every generator takes its random source as an explicit `&mut impl Rng`
//! argument so suites can inject a seeded generator; production callers
//! pass `rand::rng()`.

pub mod complex;
pub mod constants;
pub mod country;
pub mod errors;
pub mod formats;
pub mod generators;
pub mod schema;

pub use complex::ComplexNumber;
pub use errors::{GenerationError, Result};
pub use formats::{DateFormat, MONTH_ABBREVIATIONS};
pub use schema::{FieldSchema, FieldType, validate_field_schema};
