//! Domain layer for the squaring service.
//!
//! This crate provides:
//! - `NumberRequest`, the single-field record decoded from the request body
//! - the schema-validating decode step (parse, then type-check, then reject)
//! - `ValidationError`, the taxonomy of request rejections

pub mod error;
pub mod number;

pub use error::ValidationError;
pub use number::NumberRequest;
