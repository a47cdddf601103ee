//! Generator families, grouped by the kind of value they produce.

pub mod datetime;
pub mod identifiers;
pub mod network;
pub mod numeric;
pub mod phone;
pub mod strings;
