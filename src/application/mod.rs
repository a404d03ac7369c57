//! Application layer services implementing business logic.
//!
//! Services validate input, drive repository calls and translate store
//! failures into [`crate::error::AppError`]. HTTP handlers and the admin CLI
//! both go through this layer.
//!
//! - [`services::link_service::LinkService`] - Link management and redirect resolution

pub mod services;
