//! Validation of tool answers against the full (unstripped) tool schema.
//!
//! Mismatches are expected outcomes and are returned as
//! [`ValidationResult`] values rather than [`crate::Error`]s.

pub mod error;
pub mod validator;

pub use error::{ValidationError, ValidationResult};
pub use validator::{SchemaValidator, DEFAULT_DRAFT};
