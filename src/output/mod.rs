//! Output table serialization.

pub mod tsv;
