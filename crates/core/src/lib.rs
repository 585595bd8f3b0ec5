//! Core types and traits for offsetgen
//!
//! This crate provides the record and declaration types, the error type and
//! the generator configuration shared by the rest of the workspace.

pub mod error;
pub mod types;
pub mod config;

pub use error::{Error, Result};
pub use types::*;
pub use config::{DeclarationStyle, GeneratorConfig, HeaderGuard, OffsetRadix};
