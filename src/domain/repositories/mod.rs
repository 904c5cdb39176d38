//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! The redirect path consumes exactly two store operations: a slug lookup
//! ([`LinkRepository`]) and a click-event append ([`ClickRepository`]).

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
