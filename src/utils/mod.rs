//! Shared helpers: extension handling, limits and numeric conversions.

pub mod validation;
