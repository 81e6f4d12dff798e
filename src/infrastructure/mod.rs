//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound text
//! generation.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`provider`] - Text-generation provider abstraction and OpenAI client

pub mod persistence;
pub mod provider;
