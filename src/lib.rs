//! # Shortener Web
//!
//! Web front-end for a URL-shortening service built with Axum.
//!
//! The actual shortening is performed by an external backend; this crate is
//! the browser-facing half. It serves the form page with its assets and
//! exposes a proxy route that forwards shorten requests to the backend and
//! relays whatever comes back.
//!
//! ## Architecture
//!
//! - **API Layer** ([`api`]) - The `/api/shorten` proxy route, health check,
//!   DTOs, and middleware
//! - **Web Layer** ([`web`]) - The server-rendered form page
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the
//!   shortener backend
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the front-end at a running shortener backend
//! export BACKEND_API_URL="http://localhost:8000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
