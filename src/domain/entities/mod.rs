//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a target URL, with click counters

pub mod link;

pub use link::Link;
