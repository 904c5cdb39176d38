//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A short link mapping a slug to its redirect target
//! - [`Click`] - An attribution record for a served redirect
//!
//! Creation inputs use separate structs (`NewClick`) from the persisted
//! records they become.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::Link;
