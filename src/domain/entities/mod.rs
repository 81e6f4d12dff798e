//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`LinkMapping`] - A persisted slug-to-URL association
//! - [`GenerationResult`] - The per-request artifact, variant over mode
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! [`NewMapping`] carries the two caller-supplied columns; the database
//! assigns the rest.

pub mod generation;
pub mod mapping;

pub use generation::GenerationResult;
pub use mapping::{LinkMapping, NewMapping};
