//! Input validation helpers used by the link service.
//!
//! - [`code_format`] - Short code format check
//! - [`target_url`] - Absolute URL check

pub mod code_format;
pub mod target_url;
