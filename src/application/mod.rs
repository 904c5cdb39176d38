//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls and serving rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Slug resolution and
//!   the availability gate for the redirect path

pub mod services;
