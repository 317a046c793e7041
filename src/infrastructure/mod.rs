//! Infrastructure layer for storage integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
