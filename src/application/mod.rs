//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating validation,
//! technique selection, outbound generation, and repository calls. Services
//! consume repository and provider traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation orchestration
//! - [`services::generation_service::GenerationService`] - Prompt construction and output parsing
//! - [`services::redirect_service::RedirectService`] - Slug resolution with fail-open fallback

pub mod services;
