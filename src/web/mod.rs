//! Web dashboard layer for browser-based UI.
//!
//! Server-rendered Askama pages; the dynamic parts talk to the JSON API from
//! `public/script.js`.
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
