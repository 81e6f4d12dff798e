//! Business logic services for the application layer.

pub mod generation_service;
pub mod link_service;
pub mod redirect_service;
pub mod validation;

pub use generation_service::GenerationService;
pub use link_service::LinkService;
pub use redirect_service::RedirectService;
pub use validation::{ValidatedRequest, validate_create_link};
