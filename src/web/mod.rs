//! Web layer for the browser-facing UI.
//!
//! Serves the shortening form page. Uses Askama templates for server-side
//! rendering; the page's state transitions happen client-side in
//! `static/app.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
