//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! prepared statements over a shared connection pool.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Slug lookup
//! - [`PgClickRepository`] - Click event appends

pub mod pg_click_repository;
pub mod pg_link_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
