//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the infrastructure or web layers.
//! Service logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
